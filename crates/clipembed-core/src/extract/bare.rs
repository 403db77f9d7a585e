//! Bare `http(s)://` runs, ending at whitespace, a quote or an angle/square/curly bracket.
//!
//! Parentheses are allowed inside a run; a closing `)` with no partner and
//! sentence punctuation at the end are trimmed off.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::strip_trailing_punctuation;

static BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>"'`\[\]{}]+"#).expect("bare url regex")
});

/// Returns every bare URL run in `text`, in order of appearance.
pub fn bare_candidates(text: &str) -> Vec<String> {
    bare_matches(text).into_iter().map(|(_, url)| url).collect()
}

/// Start offset of each run, paired with the trimmed run.
pub(super) fn bare_matches(text: &str) -> Vec<(usize, String)> {
    BARE_URL_RE
        .find_iter(text)
        .map(|m| (m.start(), strip_trailing_punctuation(m.as_str()).to_string()))
        .filter(|(_, url)| !url.is_empty())
        .collect()
}
