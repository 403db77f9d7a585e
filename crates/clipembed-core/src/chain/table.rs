//! The ordered provider table.
//!
//! Order is significant: specific providers come before file-extension
//! matchers, and the two generic fallbacks close the list. The first entry
//! that produces an embed wins.

use url::Url;

use super::providers::{dev, files, host_matches, office, segments, video, web};
use super::Embed;

/// How one table entry decides whether it applies.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Pure pattern match, no network.
    Pattern(fn(&Url) -> Option<Embed>),
    /// Audio host: player URL from its oEmbed endpoint, or a static fallback.
    SoundCloud,
    /// Map links; short links are expanded through a redirect lookup first.
    MapLink,
    /// Multi-provider oEmbed lookup, only when third-party lookups are allowed.
    Oembed,
    /// Wraps any URL in an iframe. Never fails to match.
    Iframe,
}

#[derive(Debug, Clone, Copy)]
pub struct Handler {
    pub name: &'static str,
    pub rule: Rule,
}

const fn pattern(name: &'static str, matcher: fn(&Url) -> Option<Embed>) -> Handler {
    Handler {
        name,
        rule: Rule::Pattern(matcher),
    }
}

pub static HANDLERS: &[Handler] = &[
    pattern("youtube-playlist", video::youtube_playlist),
    pattern("youtube-video", video::youtube_video),
    pattern("vimeo", video::vimeo),
    pattern("reddit-thread", web::reddit_thread),
    pattern("wikipedia", web::wikipedia),
    pattern("google-doc", office::google_doc),
    pattern("google-sheet", office::google_sheet),
    pattern("google-slides", office::google_slides),
    pattern("google-drive", office::google_drive),
    pattern("loom", video::loom),
    pattern("video-call", video::video_call),
    pattern("tiktok", video::tiktok),
    pattern("instagram", web::instagram),
    pattern("pinterest", web::pinterest),
    Handler {
        name: "soundcloud",
        rule: Rule::SoundCloud,
    },
    Handler {
        name: "google-maps",
        rule: Rule::MapLink,
    },
    pattern("twitch", video::twitch),
    pattern("codesandbox", dev::codesandbox),
    pattern("codepen", dev::codepen),
    pattern("excalidraw", dev::excalidraw),
    pattern("github", dev::github),
    pattern("medium", web::medium),
    pattern("substack", web::substack),
    pattern("canva", office::canva),
    pattern("miro", dev::miro),
    pattern("figma", dev::figma),
    pattern("audio-file", files::audio_file),
    pattern("video-file", files::video_file),
    pattern("image-file", files::image_file),
    pattern("document-file", files::document_file),
    Handler {
        name: "oembed",
        rule: Rule::Oembed,
    },
    Handler {
        name: "iframe",
        rule: Rule::Iframe,
    },
];

/// Track, set and profile pages on the audio host (not its player or API hosts).
pub fn is_soundcloud(url: &Url) -> bool {
    if !host_matches(url, "soundcloud.com") {
        return false;
    }
    let host = url.host_str().unwrap_or("");
    if host.starts_with("w.") || host.starts_with("api.") {
        return false;
    }
    !segments(url).is_empty()
}
