//! Discussion threads, reference articles, social posts and blogs.

use url::Url;

use super::{host_matches, is_token, segments, title_from_slug};
use crate::chain::Embed;
use crate::markup;

/// `reddit.com/r/<sub>/comments/<id>[/<slug>]`
pub fn reddit_thread(url: &Url) -> Option<Embed> {
    if !host_matches(url, "reddit.com") {
        return None;
    }
    let segs = segments(url);
    match segs.as_slice() {
        ["r", sub, "comments", id, rest @ ..] if is_token(sub) && is_token(id) => {
            let mut embed = format!("https://embed.reddit.com/r/{}/comments/{}/", sub, id);
            if let Some(slug) = rest.first() {
                embed.push_str(slug);
                embed.push('/');
            }
            Some(Embed::new(markup::iframe(&embed), "Reddit thread"))
        }
        _ => None,
    }
}

/// `<lang>.wikipedia.org/...` → `<lang>.m.wikipedia.org/...`
pub fn wikipedia(url: &Url) -> Option<Embed> {
    let host = url.host_str()?;
    let labels: Vec<&str> = host.split('.').collect();
    match labels.as_slice() {
        [lang, "wikipedia", "org"] if *lang != "www" && *lang != "m" => {
            let mut mobile = url.clone();
            mobile
                .set_host(Some(&format!("{}.m.wikipedia.org", lang)))
                .ok()?;
            Some(Embed::new(
                markup::iframe(mobile.as_str()),
                "Wikipedia article (mobile view)",
            ))
        }
        [_, "m", "wikipedia", "org"] => Some(Embed::new(
            markup::iframe(url.as_str()),
            "Wikipedia article (mobile view)",
        )),
        _ => None,
    }
}

/// `instagram.com/p/<id>`, `/reel/<id>`, `/tv/<id>`
pub fn instagram(url: &Url) -> Option<Embed> {
    if !host_matches(url, "instagram.com") {
        return None;
    }
    match segments(url).as_slice() {
        [kind @ ("p" | "reel" | "tv"), id, ..] if is_token(id) => Some(Embed::new(
            markup::iframe(&format!("https://www.instagram.com/{}/{}/embed", kind, id)),
            "Instagram post",
        )),
        _ => None,
    }
}

/// `pinterest.<tld>/pin/<digits>`
pub fn pinterest(url: &Url) -> Option<Embed> {
    let host = url.host_str()?;
    if !host.split('.').any(|label| label == "pinterest") {
        return None;
    }
    match segments(url).as_slice() {
        ["pin", id, ..] if id.chars().all(|c| c.is_ascii_digit()) => Some(Embed::new(
            markup::iframe(&format!(
                "https://assets.pinterest.com/ext/embed.html?id={}",
                id
            )),
            "Pinterest pin",
        )),
        _ => None,
    }
}

/// `medium.com/@user/<slug>` and `<pub>.medium.com/<slug>`
pub fn medium(url: &Url) -> Option<Embed> {
    if !host_matches(url, "medium.com") {
        return None;
    }
    let segs = segments(url);
    let slug = match (url.host_str()?, segs.as_slice()) {
        ("medium.com" | "www.medium.com", [author, slug, ..]) if author.starts_with('@') => *slug,
        ("medium.com" | "www.medium.com", _) => return None,
        (_, [slug, ..]) => *slug,
        _ => return None,
    };
    let title = title_from_slug(slug)?;
    Some(Embed::new(markup::link(&title, url.as_str()), "Medium article link"))
}

/// `<pub>.substack.com/p/<slug>`
pub fn substack(url: &Url) -> Option<Embed> {
    let host = url.host_str()?;
    if !host.ends_with(".substack.com") {
        return None;
    }
    match segments(url).as_slice() {
        ["p", slug, ..] => {
            let title = title_from_slug(slug)?;
            Some(Embed::new(markup::link(&title, url.as_str()), "Substack post link"))
        }
        _ => None,
    }
}
