//! Sentence-trailing punctuation removal.

/// Trims surrounding whitespace, then repeatedly strips trailing `,` `.` `;` `!`
/// and any `)` / `]` that has no opening partner inside the string.
pub fn strip_trailing_punctuation(raw: &str) -> &str {
    let mut s = raw.trim();
    loop {
        let Some(last) = s.chars().last() else {
            return s;
        };
        let strip = match last {
            ',' | '.' | ';' | '!' => true,
            ')' => unbalanced(s, '(', ')'),
            ']' => unbalanced(s, '[', ']'),
            _ => false,
        };
        if !strip {
            return s;
        }
        s = s[..s.len() - last.len_utf8()].trim_end();
    }
}

fn unbalanced(s: &str, open: char, close: char) -> bool {
    let opens = s.chars().filter(|c| *c == open).count();
    let closes = s.chars().filter(|c| *c == close).count();
    closes > opens
}
