//! oEmbed lookups: the audio host's own endpoint and a multi-provider endpoint.
//!
//! Both pull an iframe `src` out of the returned `html` fragment. The audio
//! resolver always yields a player URL (falling back to a statically built
//! one); the generic resolver yields `None` on any failure.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Duration;
use url::form_urlencoded;

use super::{bounded_call, RemoteError, RemoteRequest, Transport};

static IFRAME_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<iframe\b[^>]*?\bsrc\s*=\s*["']([^"']+)["']"#).expect("iframe src regex")
});

/// Fields of an oEmbed JSON response that we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OembedResponse {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Set by multi-provider endpoints for URLs they do not support.
    #[serde(default)]
    pub error: Option<String>,
}

/// Returns the `src` of the first `<iframe>` in `html`, entity-decoded.
pub fn extract_iframe_src(html: &str) -> Option<String> {
    let src = IFRAME_SRC_RE.captures(html)?.get(1)?.as_str().trim();
    if src.is_empty() {
        return None;
    }
    let decoded = decode_entities(src);
    if let Some(rest) = decoded.strip_prefix("//") {
        return Some(format!("https://{}", rest));
    }
    Some(decoded)
}

fn decode_entities(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#x2F;", "/")
        .replace("&#47;", "/")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Deterministic audio-host player URL for `track_url`.
pub fn soundcloud_fallback(track_url: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(track_url.as_bytes()).collect();
    format!(
        "https://w.soundcloud.com/player/?url={}&auto_play=false",
        encoded
    )
}

/// Player iframe URL for an audio-host track: from its oEmbed endpoint, else the fallback.
pub async fn soundcloud_player_src(
    transport: &dyn Transport,
    endpoint: &str,
    track_url: &str,
    timeout: Duration,
) -> String {
    match lookup_iframe_src(transport, endpoint, track_url, timeout).await {
        Ok(src) => src,
        Err(e) => {
            tracing::warn!(url = %track_url, "audio oEmbed lookup failed, using player fallback: {}", e);
            soundcloud_fallback(track_url)
        }
    }
}

/// Iframe URL from the multi-provider endpoint, or `None` so the chain moves on.
pub async fn generic_oembed(
    transport: &dyn Transport,
    endpoint: &str,
    url: &str,
    timeout: Duration,
) -> Option<String> {
    match lookup_iframe_src(transport, endpoint, url, timeout).await {
        Ok(src) => Some(src),
        Err(e) => {
            tracing::debug!(url = %url, "generic oEmbed lookup gave nothing: {}", e);
            None
        }
    }
}

async fn lookup_iframe_src(
    transport: &dyn Transport,
    endpoint: &str,
    url: &str,
    timeout: Duration,
) -> Result<String, RemoteError> {
    let response = fetch_oembed(transport, endpoint, url, timeout).await?;
    if let Some(err) = response.error.as_deref() {
        return Err(RemoteError::Transport(format!("endpoint error: {}", err)));
    }
    let html = response.html.as_deref().ok_or(RemoteError::MissingField("html"))?;
    extract_iframe_src(html).ok_or(RemoteError::MissingField("iframe src"))
}

async fn fetch_oembed(
    transport: &dyn Transport,
    endpoint: &str,
    url: &str,
    timeout: Duration,
) -> Result<OembedResponse, RemoteError> {
    let request_url = url::Url::parse_with_params(endpoint, &[("format", "json"), ("url", url)])
        .map_err(|e| RemoteError::Transport(format!("bad endpoint {}: {}", endpoint, e)))?;
    let response = bounded_call(transport, &RemoteRequest::get(request_url), timeout).await?;
    Ok(serde_json::from_slice(&response.body)?)
}
