//! libcurl-backed [`Transport`].
//!
//! Each request runs on a blocking worker with curl's own connect/total
//! timeouts set, so the worker always finishes even after the async side
//! has given up on it.

use async_trait::async_trait;
use std::str;
use std::time::Duration;

use super::{Method, RemoteError, RemoteRequest, RemoteResponse, Transport};

/// Bodies larger than this are not metadata; the transfer is aborted.
const MAX_BODY_BYTES: usize = 256 * 1024;

const MAX_REDIRECTS: u32 = 10;

const USER_AGENT: &str = concat!("clipembed/", env!("CARGO_PKG_VERSION"));

/// Production transport: HEAD/GET with redirect following.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport;

impl CurlTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for CurlTransport {
    async fn send(
        &self,
        request: &RemoteRequest,
        timeout: Duration,
    ) -> Result<RemoteResponse, RemoteError> {
        let request = request.clone();
        tokio::task::spawn_blocking(move || perform(&request, timeout))
            .await
            .map_err(|e| RemoteError::TaskJoin(e.to_string()))?
    }
}

/// Performs the request on the current thread.
fn perform(request: &RemoteRequest, timeout: Duration) -> Result<RemoteResponse, RemoteError> {
    let mut body: Vec<u8> = Vec::new();
    let mut oversized = false;
    let mut stopped_at_body = false;
    let read_body = request.read_body;

    let mut easy = curl::easy::Easy::new();
    easy.url(&request.url)?;
    if request.method == Method::Head {
        easy.nobody(true)?;
    }
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.useragent(USER_AGENT)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                tracing::trace!(header = line.trim_end(), "remote header");
            }
            true
        })?;
        transfer.write_function(|data| {
            if !read_body {
                stopped_at_body = true;
                return Ok(0); // headers are in; status and final URL are known
            }
            if body.len() + data.len() > MAX_BODY_BYTES {
                oversized = true;
                return Ok(0); // abort transfer
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };
    if let Err(e) = performed {
        if stopped_at_body && e.is_write_error() {
            tracing::trace!(url = %request.url, "body skipped after headers");
        } else if oversized {
            return Err(RemoteError::Transport(format!(
                "response body exceeds {} bytes",
                MAX_BODY_BYTES
            )));
        } else {
            return Err(e.into());
        }
    }

    let status = easy.response_code()?;
    let effective_url = easy
        .effective_url()?
        .map(str::to_string)
        .unwrap_or_else(|| request.url.clone());

    tracing::debug!(
        method = ?request.method,
        url = %request.url,
        status,
        effective_url = %effective_url,
        "remote call finished"
    );

    Ok(RemoteResponse {
        status,
        effective_url,
        body,
    })
}
