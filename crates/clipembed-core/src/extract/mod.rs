//! URL extraction from arbitrary clipboard text.
//!
//! Two passes run in order: markdown links `[label](url)` first, then bare
//! `http(s)://` runs. Results are concatenated, deduplicated in first-seen
//! order, and kept only if they parse as absolute http/https URLs.

mod bare;
mod markdown;

use std::collections::HashSet;

pub use bare::bare_candidates;
pub use markdown::markdown_link_targets;

/// Returns the ordered, deduplicated absolute HTTP(S) URLs found in `text`.
///
/// Empty input yields an empty vector.
pub fn extract_urls(text: &str) -> Vec<String> {
    let markdown = markdown::markdown_links(text);
    let inside_markdown =
        |start: usize| markdown.iter().any(|(range, _)| range.contains(&start));
    let bare = bare::bare_matches(text)
        .into_iter()
        .filter(|(start, _)| !inside_markdown(*start))
        .map(|(_, url)| url);

    let mut seen = HashSet::new();
    markdown
        .iter()
        .map(|(_, url)| url.clone())
        .chain(bare)
        .filter(|candidate| is_http_url(candidate))
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}

/// True if `s` parses as an absolute URL with scheme `http` or `https` and a host.
pub fn is_http_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.host_str().is_some(),
        Err(_) => false,
    }
}
