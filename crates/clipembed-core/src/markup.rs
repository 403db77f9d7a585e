//! Outline markup grammar produced by the resolver.
//!
//! `{{provider: url}}` for named embeds, `{{iframe: url}}` for generic frames,
//! `![](url)` for images and `[text](url)` for plain links.

/// `{{name: url}}`
pub fn named(provider: &str, url: &str) -> String {
    format!("{{{{{}: {}}}}}", provider, url)
}

/// `{{iframe: url}}`
pub fn iframe(url: &str) -> String {
    named("iframe", url)
}

/// `{{[[video]]: url}}`
pub fn video(url: &str) -> String {
    named("[[video]]", url)
}

/// `{{[[audio]]: url}}`
pub fn audio(url: &str) -> String {
    named("[[audio]]", url)
}

/// `![](url)`
pub fn image(url: &str) -> String {
    format!("![]({})", url)
}

/// `[text](url)`. Brackets in `text` would end the label early, so they are dropped.
pub fn link(text: &str, url: &str) -> String {
    let label: String = text.chars().filter(|c| *c != '[' && *c != ']').collect();
    let label = label.trim();
    if label.is_empty() {
        format!("[{}]({})", url, url)
    } else {
        format!("[{}]({})", label, url)
    }
}

/// Collapses line breaks so the markup stays on one outline line.
pub fn single_line(s: &str) -> String {
    if !s.contains(['\n', '\r']) {
        return s.to_string();
    }
    s.split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
