//! Direct links to media and document files, matched by path extension.
//!
//! The extension is read from the URL path only, so a trailing query string
//! or fragment does not hide it.

use url::Url;

use crate::chain::Embed;
use crate::markup;

pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "aiff", "aac", "ogg", "oga", "wma", "flac", "alac", "m4a", "opus",
];
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "avi", "mpg", "mpeg", "mov", "mkv", "mp4", "m4v", "wmv", "webm",
];
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "bmp", "gif", "png", "tiff", "tif", "webp", "svg", "avif",
];
/// Opened through the Office web viewer.
pub const OFFICE_EXTENSIONS: &[&str] = &["doc", "docx", "xls", "xlsx", "ppt", "pptx"];

/// Lower-cased extension of the last path segment, if any.
pub fn path_extension(url: &Url) -> Option<String> {
    let last = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let (stem, ext) = last.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn has_extension(url: &Url, list: &[&str]) -> bool {
    path_extension(url)
        .map(|ext| list.contains(&ext.as_str()))
        .unwrap_or(false)
}

pub fn audio_file(url: &Url) -> Option<Embed> {
    has_extension(url, AUDIO_EXTENSIONS)
        .then(|| Embed::new(markup::audio(url.as_str()), "audio file"))
}

pub fn video_file(url: &Url) -> Option<Embed> {
    has_extension(url, VIDEO_EXTENSIONS)
        .then(|| Embed::new(markup::video(url.as_str()), "video file"))
}

pub fn image_file(url: &Url) -> Option<Embed> {
    has_extension(url, IMAGE_EXTENSIONS)
        .then(|| Embed::new(markup::image(url.as_str()), "image"))
}

/// PDFs get the native viewer; Office formats go through the web viewer.
pub fn document_file(url: &Url) -> Option<Embed> {
    let ext = path_extension(url)?;
    if ext == "pdf" {
        return Some(Embed::new(markup::named("pdf", url.as_str()), "PDF document"));
    }
    if OFFICE_EXTENSIONS.contains(&ext.as_str()) {
        let src: String = url::form_urlencoded::byte_serialize(url.as_str().as_bytes()).collect();
        return Some(Embed::new(
            markup::iframe(&format!(
                "https://view.officeapps.live.com/op/embed.aspx?src={}",
                src
            )),
            "Office document",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn extension_parsing() {
        assert_eq!(path_extension(&u("https://a.b/x/clip.MP4")).as_deref(), Some("mp4"));
        assert_eq!(path_extension(&u("https://a.b/x/clip.mp4?dl=1#t=3")).as_deref(), Some("mp4"));
        assert_eq!(path_extension(&u("https://a.b/x.tar.gz")).as_deref(), Some("gz"));
        assert_eq!(path_extension(&u("https://a.b/x/")).as_deref(), None);
        assert_eq!(path_extension(&u("https://a.b/.hidden")), None);
        assert_eq!(path_extension(&u("https://a.b/")), None);
    }

    #[test]
    fn media_shapes() {
        assert_eq!(
            video_file(&u("https://example.com/clip.mp4")).unwrap().markup,
            "{{[[video]]: https://example.com/clip.mp4}}"
        );
        assert_eq!(
            audio_file(&u("https://example.com/a/song.flac?x=1")).unwrap().markup,
            "{{[[audio]]: https://example.com/a/song.flac?x=1}}"
        );
        assert_eq!(
            image_file(&u("https://example.com/p.PNG")).unwrap().markup,
            "![](https://example.com/p.PNG)"
        );
        assert!(image_file(&u("https://example.com/png")).is_none());
        assert!(video_file(&u("https://example.com/clip.mp3")).is_none());
    }

    #[test]
    fn documents() {
        assert_eq!(
            document_file(&u("https://example.com/paper.pdf")).unwrap().markup,
            "{{pdf: https://example.com/paper.pdf}}"
        );
        assert_eq!(
            document_file(&u("https://example.com/q3.xlsx")).unwrap().markup,
            "{{iframe: https://view.officeapps.live.com/op/embed.aspx?src=https%3A%2F%2Fexample.com%2Fq3.xlsx}}"
        );
        assert!(document_file(&u("https://example.com/notes.txt")).is_none());
    }
}
