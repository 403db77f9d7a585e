//! Code sandboxes, source hosting, whiteboards and design tools.

use url::Url;

use super::{host_matches, is_token, segments};
use crate::chain::Embed;
use crate::markup;

/// `codesandbox.io/s/<id>`, `/p/sandbox/<id>`, `/p/devbox/<id>`, `/embed/<id>`
pub fn codesandbox(url: &Url) -> Option<Embed> {
    if !host_matches(url, "codesandbox.io") {
        return None;
    }
    let id = match segments(url).as_slice() {
        ["s", id, ..] | ["embed", id, ..] => id.to_string(),
        ["p", "sandbox" | "devbox", id, ..] => id.to_string(),
        _ => return None,
    };
    if !is_token(&id) {
        return None;
    }
    Some(Embed::new(
        markup::iframe(&format!("https://codesandbox.io/embed/{}", id)),
        "CodeSandbox",
    ))
}

/// `codepen.io/<user>/pen/<id>`
pub fn codepen(url: &Url) -> Option<Embed> {
    if !host_matches(url, "codepen.io") {
        return None;
    }
    match segments(url).as_slice() {
        [user, "pen" | "full" | "details", id, ..] if is_token(user) && is_token(id) => {
            Some(Embed::new(
                markup::iframe(&format!(
                    "https://codepen.io/{}/embed/{}?default-tab=result",
                    user, id
                )),
                "CodePen",
            ))
        }
        _ => None,
    }
}

/// Shared scenes (`#json=`) and live rooms (`#room=`) on the drawing tool's site.
pub fn excalidraw(url: &Url) -> Option<Embed> {
    if !host_matches(url, "excalidraw.com") {
        return None;
    }
    let fragment = url.fragment()?;
    if !(fragment.starts_with("json=") || fragment.starts_with("room=")) {
        return None;
    }
    Some(Embed::new(markup::iframe(url.as_str()), "Excalidraw drawing"))
}

/// First path segments on github.com that are site pages, not owners.
const GITHUB_RESERVED: &[&str] = &[
    "settings",
    "marketplace",
    "explore",
    "notifications",
    "login",
    "features",
    "pricing",
    "topics",
    "sponsors",
];

/// Gists become embeddable `.pibb` frames; repositories and profiles become links.
pub fn github(url: &Url) -> Option<Embed> {
    let host = url.host_str()?;
    let segs = segments(url);
    if host == "gist.github.com" {
        return match segs.as_slice() {
            [user, id, ..] if is_token(user) && is_token(id) => Some(Embed::new(
                markup::iframe(&format!("https://gist.github.com/{}/{}.pibb", user, id)),
                "GitHub gist",
            )),
            _ => None,
        };
    }
    if host != "github.com" && host != "www.github.com" {
        return None;
    }
    match segs.as_slice() {
        [owner, ..] if GITHUB_RESERVED.contains(owner) => None,
        [owner, repo, ..] => Some(Embed::new(
            markup::link(&format!("{}/{}", owner, repo), url.as_str()),
            "GitHub repository link",
        )),
        [owner] => Some(Embed::new(
            markup::link(&format!("GitHub: {}", owner), url.as_str()),
            "GitHub profile link",
        )),
        [] => None,
    }
}

/// `miro.com/app/board/<id>` → live-embed frame.
pub fn miro(url: &Url) -> Option<Embed> {
    if !host_matches(url, "miro.com") {
        return None;
    }
    match segments(url).as_slice() {
        ["app", "board", id, ..] => Some(Embed::new(
            markup::iframe(&format!("https://miro.com/app/live-embed/{}/", id)),
            "Miro board",
        )),
        _ => None,
    }
}

/// `figma.com/(file|proto|design|board)/<key>` with a 22–128 character key.
pub fn figma(url: &Url) -> Option<Embed> {
    if !host_matches(url, "figma.com") {
        return None;
    }
    match segments(url).as_slice() {
        ["file" | "proto" | "design" | "board", key, ..]
            if (22..=128).contains(&key.len()) && key.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            Some(Embed::new(markup::named("figma", url.as_str()), "Figma file"))
        }
        _ => None,
    }
}
