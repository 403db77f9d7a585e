//! Tracking and share-parameter removal.

use url::Url;

/// Exact-match tracking keys (compared case-insensitively).
const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid", "mc_cid", "mc_eid", "igshid"];

/// Share-sheet keys dropped on video hosts only. Timestamps (`t`, `start`) are kept.
const VIDEO_SHARE_PARAMS: &[&str] = &["si", "feature"];

const VIDEO_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtu.be",
    "www.youtube-nocookie.com",
];

/// True for `utm_*` (any case) and the fixed denylist.
pub fn is_tracking_param(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key.as_str())
}

pub fn is_video_host(host: &str) -> bool {
    VIDEO_HOSTS.contains(&host.to_ascii_lowercase().as_str())
}

/// Removes tracking parameters (and share parameters on video hosts) in place.
///
/// The query is only re-serialized when something was removed, so URLs without
/// tracking noise keep their original encoding.
pub fn strip_params(url: &mut Url) {
    if url.query().is_none() {
        return;
    }
    let video = url.host_str().map(is_video_host).unwrap_or(false);

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let kept: Vec<(String, String)> = pairs
        .iter()
        .filter(|(k, _)| !is_tracking_param(k))
        .filter(|(k, _)| !(video && VIDEO_SHARE_PARAMS.contains(&k.as_str())))
        .cloned()
        .collect();

    if kept.len() == pairs.len() {
        return;
    }
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept.iter());
    }
}
