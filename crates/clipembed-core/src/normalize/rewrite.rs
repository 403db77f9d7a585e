//! Structural rewrites of known URL shapes into canonical equivalents.

use url::Url;

/// Applies every canonical rewrite to `url` in place.
pub fn rewrite_known_shapes(url: &mut Url) {
    if let Some(rewritten) = rewrite_youtu_be(url) {
        *url = rewritten;
    }
    if let Some(rewritten) = rewrite_source_blob(url) {
        *url = rewritten;
    }
}

/// `https://youtu.be/<id>?list=..&t=..` → `https://www.youtube.com/watch?v=<id>&list=..&t=..`
pub fn rewrite_youtu_be(url: &Url) -> Option<Url> {
    if url.host_str()? != "youtu.be" {
        return None;
    }
    let id = url.path_segments()?.find(|s| !s.is_empty())?;
    if !is_video_id(id) {
        return None;
    }

    let mut out = Url::parse("https://www.youtube.com/watch").ok()?;
    {
        let mut query = out.query_pairs_mut();
        query.append_pair("v", id);
        for (k, v) in url.query_pairs() {
            if k != "v" {
                query.append_pair(&k, &v);
            }
        }
    }
    out.set_fragment(url.fragment());
    Some(out)
}

/// `https://github.com/<user>/<repo>/blob/<branch>/<path..>` →
/// `https://raw.githubusercontent.com/<user>/<repo>/<branch>/<path..>`
pub fn rewrite_source_blob(url: &Url) -> Option<Url> {
    let host = url.host_str()?;
    if host != "github.com" && host != "www.github.com" {
        return None;
    }
    let segments: Vec<&str> = url.path_segments()?.collect();
    if segments.len() < 5 || segments[2] != "blob" || segments[4..].iter().all(|s| s.is_empty()) {
        return None;
    }

    let mut raw = format!(
        "https://raw.githubusercontent.com/{}/{}/{}",
        segments[0], segments[1], segments[3]
    );
    for segment in &segments[4..] {
        raw.push('/');
        raw.push_str(segment);
    }
    Url::parse(&raw).ok()
}

/// Video ids are URL-safe base64-ish tokens.
pub(crate) fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
