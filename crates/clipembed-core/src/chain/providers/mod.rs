//! Pure provider matchers: `fn(&Url) -> Option<Embed>`.
//!
//! Each matcher recognizes one provider's URL shapes and builds its embed.
//! None of them touch the network.

pub mod dev;
pub mod files;
pub mod office;
pub mod video;
pub mod web;

use url::Url;

/// True if the host is `domain` or a subdomain of it.
pub(crate) fn host_matches(url: &Url, domain: &str) -> bool {
    match url.host_str() {
        Some(host) => {
            host == domain
                || (host.len() > domain.len()
                    && host.ends_with(domain)
                    && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
        }
        None => false,
    }
}

/// Non-empty path segments (still percent-encoded).
pub(crate) fn segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default()
}

/// First non-empty value for `key` in the query string.
pub(crate) fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// URL-safe identifier: ASCII alphanumerics, `-` and `_`.
pub(crate) fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Turns a URL slug into a title: `my-first-post-1a2b3c4d5e6f` → `My First Post`.
///
/// A trailing hex id (as appended by blogging platforms) is dropped.
pub(crate) fn title_from_slug(slug: &str) -> Option<String> {
    let decoded = urlencoding::decode(slug).ok()?;
    let mut words: Vec<&str> = decoded
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .collect();
    if words.len() > 1 {
        if let Some(last) = words.last() {
            if last.len() >= 8 && last.chars().all(|c| c.is_ascii_hexdigit()) {
                words.pop();
            }
        }
    }

    let title = words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ");

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
