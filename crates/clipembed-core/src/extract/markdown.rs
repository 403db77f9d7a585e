//! Markdown link targets: `[label](url)`.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Targets may contain one level of balanced parentheses (`/wiki/Rust_(language)`).
static MD_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]]*\]\(((?i:https?)://(?:[^()\s]|\([^()\s]*\))+)\)")
        .expect("markdown link regex")
});

/// Returns the URL portion of every markdown link in `text`, in order.
pub fn markdown_link_targets(text: &str) -> Vec<String> {
    markdown_links(text).into_iter().map(|(_, url)| url).collect()
}

/// Byte range of each whole `[label](url)` match, paired with its target.
pub(super) fn markdown_links(text: &str) -> Vec<(Range<usize>, String)> {
    MD_LINK_RE
        .captures_iter(text)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let target = cap.get(1)?;
            Some((whole.range(), target.as_str().to_string()))
        })
        .collect()
}
