//! Bounded remote calls and the resolvers built on them.
//!
//! Every network access goes through [`bounded_call`]: one request, one
//! response, a hard timeout, no retries. Non-2xx responses are failures.
//! Resolvers turn any failure into a fallback value or `None`.

mod error;
mod oembed;
mod redirect;
mod transport;

use async_trait::async_trait;
use std::time::Duration;

pub use error::RemoteError;
pub use oembed::{
    extract_iframe_src, generic_oembed, soundcloud_fallback, soundcloud_player_src, OembedResponse,
};
pub use redirect::expand_short_link;
pub use transport::CurlTransport;

/// HTTP method for a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
}

/// A single remote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub method: Method,
    pub url: String,
    /// When false only the status and final URL matter; the body is not read.
    pub read_body: bool,
}

impl RemoteRequest {
    pub fn head(url: impl Into<String>) -> Self {
        Self {
            method: Method::Head,
            url: url.into(),
            read_body: false,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            read_body: true,
        }
    }

    /// GET that follows redirects and stops at the first body byte.
    pub fn get_destination(url: impl Into<String>) -> Self {
        Self {
            read_body: false,
            ..Self::get(url)
        }
    }
}

/// What came back: final status, the URL after redirects, and the body (GET only).
#[derive(Debug, Clone, Default)]
pub struct RemoteResponse {
    pub status: u32,
    pub effective_url: String,
    pub body: Vec<u8>,
}

/// Performs one request. Implementations follow redirects and must honor
/// `timeout` themselves where they can; [`bounded_call`] enforces it regardless.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: &RemoteRequest,
        timeout: Duration,
    ) -> Result<RemoteResponse, RemoteError>;
}

/// Runs `request` once within `timeout`. Elapsed time and non-2xx status are errors.
pub async fn bounded_call(
    transport: &dyn Transport,
    request: &RemoteRequest,
    timeout: Duration,
) -> Result<RemoteResponse, RemoteError> {
    let response = match tokio::time::timeout(timeout, transport.send(request, timeout)).await {
        Ok(result) => result?,
        Err(_) => return Err(RemoteError::Timeout),
    };
    if !(200..300).contains(&response.status) {
        return Err(RemoteError::Status(response.status));
    }
    Ok(response)
}
