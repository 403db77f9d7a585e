//! Video platforms, screen recordings, calls and livestream clips.

use url::Url;

use super::{host_matches, query_value, segments};
use crate::chain::Embed;
use crate::markup;
use crate::normalize::is_video_host;

/// Parent domain the livestream player requires for framing.
pub const TWITCH_PARENT: &str = "roamresearch.com";

fn is_youtube(url: &Url) -> bool {
    host_matches(url, "youtube.com") || host_matches(url, "youtube-nocookie.com")
}

/// `youtube.com/playlist?list=<id>`
pub fn youtube_playlist(url: &Url) -> Option<Embed> {
    if !is_youtube(url) || segments(url) != ["playlist"] {
        return None;
    }
    let list = query_value(url, "list").filter(|l| super::is_token(l))?;
    Some(Embed::new(
        markup::iframe(&format!(
            "https://www.youtube.com/embed/videoseries?list={}",
            list
        )),
        "YouTube playlist",
    ))
}

/// Single videos and shorts on any YouTube shape, canonicalized to `watch?v=`.
pub fn youtube_video(url: &Url) -> Option<Embed> {
    if !url.host_str().map(is_video_host).unwrap_or(false) && !is_youtube(url) {
        return None;
    }
    let (id, note) = youtube_video_id(url)?;

    let mut canonical = Url::parse("https://www.youtube.com/watch").ok()?;
    {
        let mut query = canonical.query_pairs_mut();
        query.append_pair("v", &id);
        if let Some(list) = query_value(url, "list") {
            query.append_pair("list", &list);
        }
        if let Some(t) = query_value(url, "t").or_else(|| query_value(url, "start")) {
            query.append_pair("t", &t);
        }
    }
    Some(Embed::new(markup::named("youtube", canonical.as_str()), note))
}

fn youtube_video_id(url: &Url) -> Option<(String, &'static str)> {
    let segs = segments(url);
    let (id, note) = if url.host_str() == Some("youtu.be") {
        (segs.first()?.to_string(), "YouTube video")
    } else {
        match segs.as_slice() {
            ["watch"] => (query_value(url, "v")?, "YouTube video"),
            ["shorts", id, ..] => (id.to_string(), "YouTube short"),
            ["live", id, ..] => (id.to_string(), "YouTube live video"),
            ["embed", id, ..] | ["v", id, ..] => (id.to_string(), "YouTube video"),
            _ => return None,
        }
    };
    if id == "videoseries" || !super::is_token(&id) {
        return None;
    }
    Some((id, note))
}

/// Any Vimeo page with a path.
pub fn vimeo(url: &Url) -> Option<Embed> {
    if !host_matches(url, "vimeo.com") || segments(url).is_empty() {
        return None;
    }
    Some(Embed::new(markup::video(url.as_str()), "Vimeo video"))
}

/// `loom.com/share/<id>`
pub fn loom(url: &Url) -> Option<Embed> {
    if !host_matches(url, "loom.com") {
        return None;
    }
    match segments(url).as_slice() {
        ["share", id, ..] if super::is_token(id) => Some(Embed::new(
            markup::iframe(&format!("https://www.loom.com/embed/{}", id)),
            "Loom recording",
        )),
        _ => None,
    }
}

/// Meeting links cannot be framed; they become plain links.
pub fn video_call(url: &Url) -> Option<Embed> {
    if host_matches(url, "zoom.us") {
        return match segments(url).first().copied() {
            Some("j") | Some("my") | Some("s") | Some("w") => Some(Embed::new(
                markup::link("Zoom meeting", url.as_str()),
                "Zoom meeting link",
            )),
            Some("rec") => Some(Embed::new(
                markup::link("Zoom recording", url.as_str()),
                "Zoom recording link",
            )),
            _ => None,
        };
    }
    if url.host_str() == Some("meet.google.com") && segments(url).len() == 1 {
        return Some(Embed::new(
            markup::link("Google Meet", url.as_str()),
            "Google Meet link",
        ));
    }
    None
}

/// `tiktok.com/@user/video/<digits>`
pub fn tiktok(url: &Url) -> Option<Embed> {
    if !host_matches(url, "tiktok.com") {
        return None;
    }
    let segs = segments(url);
    let pos = segs.iter().position(|s| *s == "video")?;
    let id = segs.get(pos + 1)?;
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(Embed::new(
        markup::iframe(&format!(
            "https://www.tiktok.com/player/v1/{}?autoplay=0",
            id
        )),
        "TikTok video",
    ))
}

/// Clips and past broadcasts.
pub fn twitch(url: &Url) -> Option<Embed> {
    let segs = segments(url);
    if url.host_str() == Some("clips.twitch.tv") {
        let slug = segs.first().filter(|s| super::is_token(s))?;
        return Some(twitch_clip(slug));
    }
    if !host_matches(url, "twitch.tv") {
        return None;
    }
    match segs.as_slice() {
        [_, "clip", slug, ..] if super::is_token(slug) => Some(twitch_clip(slug)),
        ["videos", id, ..] if id.chars().all(|c| c.is_ascii_digit()) => Some(Embed::new(
            markup::iframe(&format!(
                "https://player.twitch.tv/?video={}&parent={}&autoplay=false",
                id, TWITCH_PARENT
            )),
            "Twitch video",
        )),
        _ => None,
    }
}

fn twitch_clip(slug: &str) -> Embed {
    Embed::new(
        markup::iframe(&format!(
            "https://clips.twitch.tv/embed?clip={}&parent={}",
            slug, TWITCH_PARENT
        )),
        "Twitch clip",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn markup_of(e: Option<Embed>) -> Option<String> {
        e.map(|e| e.markup)
    }

    #[test]
    fn playlist() {
        assert_eq!(
            markup_of(youtube_playlist(&u("https://www.youtube.com/playlist?list=PLx_1"))).as_deref(),
            Some("{{iframe: https://www.youtube.com/embed/videoseries?list=PLx_1}}")
        );
        assert!(youtube_playlist(&u("https://www.youtube.com/watch?v=a&list=PL1")).is_none());
    }

    #[test]
    fn video_shapes_canonicalize() {
        let want = "{{youtube: https://www.youtube.com/watch?v=abc123}}";
        for s in [
            "https://www.youtube.com/watch?v=abc123",
            "https://m.youtube.com/watch?v=abc123",
            "https://youtu.be/abc123",
            "https://www.youtube.com/embed/abc123",
            "https://www.youtube-nocookie.com/embed/abc123",
        ] {
            assert_eq!(markup_of(youtube_video(&u(s))).as_deref(), Some(want), "{}", s);
        }
    }

    #[test]
    fn shorts_and_params_carried() {
        let e = youtube_video(&u("https://youtube.com/shorts/Sh0rt_1")).unwrap();
        assert_eq!(e.markup, "{{youtube: https://www.youtube.com/watch?v=Sh0rt_1}}");
        assert_eq!(e.note, "YouTube short");

        let e = youtube_video(&u("https://youtu.be/abc?list=PL2&t=90")).unwrap();
        assert_eq!(
            e.markup,
            "{{youtube: https://www.youtube.com/watch?v=abc&list=PL2&t=90}}"
        );
    }

    #[test]
    fn non_video_youtube_pages() {
        assert!(youtube_video(&u("https://www.youtube.com/@channel")).is_none());
        assert!(youtube_video(&u("https://www.youtube.com/watch")).is_none());
        assert!(youtube_video(&u("https://www.youtube.com/embed/videoseries?list=PL")).is_none());
        assert!(youtube_video(&u("https://example.com/watch?v=abc")).is_none());
    }

    #[test]
    fn vimeo_and_loom() {
        assert_eq!(
            markup_of(vimeo(&u("https://vimeo.com/76979871"))).as_deref(),
            Some("{{[[video]]: https://vimeo.com/76979871}}")
        );
        assert!(vimeo(&u("https://vimeo.com/")).is_none());
        assert_eq!(
            markup_of(loom(&u("https://www.loom.com/share/0281766fa2d04bb788eaf19e65135184"))).as_deref(),
            Some("{{iframe: https://www.loom.com/embed/0281766fa2d04bb788eaf19e65135184}}")
        );
    }

    #[test]
    fn calls_become_links() {
        let e = video_call(&u("https://us02web.zoom.us/j/123456789?pwd=abc")).unwrap();
        assert_eq!(
            e.markup,
            "[Zoom meeting](https://us02web.zoom.us/j/123456789?pwd=abc)"
        );
        assert_eq!(
            markup_of(video_call(&u("https://meet.google.com/abc-defg-hij"))).as_deref(),
            Some("[Google Meet](https://meet.google.com/abc-defg-hij)")
        );
        assert!(video_call(&u("https://zoom.us/pricing")).is_none());
    }

    #[test]
    fn tiktok_player() {
        assert_eq!(
            markup_of(tiktok(&u("https://www.tiktok.com/@scout2015/video/6718335390845095173"))).as_deref(),
            Some("{{iframe: https://www.tiktok.com/player/v1/6718335390845095173?autoplay=0}}")
        );
        assert!(tiktok(&u("https://www.tiktok.com/@scout2015")).is_none());
    }

    #[test]
    fn twitch_shapes() {
        assert_eq!(
            markup_of(twitch(&u("https://clips.twitch.tv/FunnyClipSlug"))).as_deref(),
            Some("{{iframe: https://clips.twitch.tv/embed?clip=FunnyClipSlug&parent=roamresearch.com}}")
        );
        assert_eq!(
            markup_of(twitch(&u("https://www.twitch.tv/streamer/clip/Other-Slug"))).as_deref(),
            Some("{{iframe: https://clips.twitch.tv/embed?clip=Other-Slug&parent=roamresearch.com}}")
        );
        assert_eq!(
            markup_of(twitch(&u("https://www.twitch.tv/videos/123456"))).as_deref(),
            Some("{{iframe: https://player.twitch.tv/?video=123456&parent=roamresearch.com&autoplay=false}}")
        );
        assert!(twitch(&u("https://www.twitch.tv/streamer")).is_none());
    }
}
