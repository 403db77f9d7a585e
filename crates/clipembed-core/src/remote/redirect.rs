//! Short-link expansion: follow redirects once and report where they end.

use std::time::Duration;

use super::{bounded_call, RemoteError, RemoteRequest, RemoteResponse, Transport};
use crate::extract::is_http_url;

/// Returns the final destination of `url`, or `url` unchanged on any failure.
///
/// Sends one redirect-following HEAD. If the server rejects HEAD with a
/// non-2xx status, sends one GET instead. Timeouts and transport errors are
/// not followed by a GET.
pub async fn expand_short_link(transport: &dyn Transport, url: &str, timeout: Duration) -> String {
    let response = match bounded_call(transport, &RemoteRequest::head(url), timeout).await {
        Ok(response) => Ok(response),
        Err(RemoteError::Status(code)) => {
            tracing::debug!(url = %url, "HEAD rejected with HTTP {}, trying GET", code);
            bounded_call(transport, &RemoteRequest::get_destination(url), timeout).await
        }
        Err(e) => Err(e),
    };

    match response {
        Ok(response) => destination(url, &response),
        Err(e) => {
            tracing::warn!(url = %url, "short-link expansion failed: {}", e);
            url.to_string()
        }
    }
}

fn destination(original: &str, response: &RemoteResponse) -> String {
    if is_http_url(&response.effective_url) {
        response.effective_url.clone()
    } else {
        original.to_string()
    }
}
