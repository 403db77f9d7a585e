//! Integration test: remote resolvers over the curl transport against a local server.

mod common;

use std::sync::Arc;
use std::time::Duration;

use clipembed_core::chain::{EmbedMode, ResolutionOptions, Resolver, Session};
use clipembed_core::config::{EndpointConfig, TimeoutConfig};
use clipembed_core::remote::{
    bounded_call, expand_short_link, generic_oembed, soundcloud_player_src, CurlTransport,
    RemoteError, RemoteRequest,
};

const BOUND: Duration = Duration::from_millis(1500);

#[tokio::test]
async fn bounded_call_returns_body() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let response = bounded_call(
        &transport,
        &RemoteRequest::get(format!("{}landing", base)),
        BOUND,
    )
    .await
    .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"landed");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let err = bounded_call(
        &transport,
        &RemoteRequest::get(format!("{}missing", base)),
        BOUND,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RemoteError::Status(404)), "got {:?}", err);
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let started = std::time::Instant::now();
    let err = bounded_call(
        &transport,
        &RemoteRequest::get(format!("{}slow", base)),
        Duration::from_millis(300),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RemoteError::Timeout), "got {:?}", err);
    assert!(started.elapsed() < Duration::from_millis(1800));
}

#[tokio::test]
async fn short_link_expands_to_final_destination() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let expanded = expand_short_link(&transport, &format!("{}short/abc", base), BOUND).await;
    assert_eq!(expanded, format!("{}landing", base));
}

#[tokio::test]
async fn head_rejection_falls_back_to_get() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let expanded =
        expand_short_link(&transport, &format!("{}head-blocked/abc", base), BOUND).await;
    assert_eq!(expanded, format!("{}landing", base));
}

#[tokio::test]
async fn get_fallback_ignores_large_landing_page() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let expanded =
        expand_short_link(&transport, &format!("{}large-head-blocked/abc", base), BOUND).await;
    assert_eq!(expanded, format!("{}large", base));
}

#[tokio::test]
async fn destination_get_skips_body() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let response = bounded_call(
        &transport,
        &RemoteRequest::get_destination(format!("{}large", base)),
        BOUND,
    )
    .await
    .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.effective_url, format!("{}large", base));
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn oversized_body_is_rejected_when_read() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let err = bounded_call(&transport, &RemoteRequest::get(format!("{}large", base)), BOUND)
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_short_link_is_returned_unchanged() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let url = format!("{}slow/short", base);
    let expanded = expand_short_link(&transport, &url, Duration::from_millis(300)).await;
    assert_eq!(expanded, url);
}

#[tokio::test]
async fn generic_oembed_extracts_iframe_src() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let src = generic_oembed(
        &transport,
        &format!("{}oembed", base),
        "https://example.com/video/1",
        BOUND,
    )
    .await;
    assert_eq!(src, Some(format!("{}player/1?visual=true", base)));
}

#[tokio::test]
async fn generic_oembed_rejects_malformed_body() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let src = generic_oembed(
        &transport,
        &format!("{}oembed-broken", base),
        "https://example.com/video/1",
        BOUND,
    )
    .await;
    assert_eq!(src, None);
}

#[tokio::test]
async fn audio_player_falls_back_on_timeout() {
    let base = common::oembed_server::start();
    let transport = CurlTransport::new();
    let src = soundcloud_player_src(
        &transport,
        &format!("{}slow", base),
        "https://soundcloud.com/artist/track",
        Duration::from_millis(300),
    )
    .await;
    assert!(src.starts_with("https://w.soundcloud.com/player/?url=https%3A%2F%2Fsoundcloud.com"));
}

#[tokio::test]
async fn resolver_uses_configured_endpoints() {
    let base = common::oembed_server::start();
    let resolver = Resolver::new(
        Arc::new(CurlTransport::new()),
        TimeoutConfig {
            oembed_ms: 1500,
            redirect_ms: 1500,
        },
        EndpointConfig {
            soundcloud_oembed: format!("{}oembed", base),
            generic_oembed: format!("{}oembed-broken", base),
        },
    );
    let options = ResolutionOptions {
        allow_third_party_oembed: true,
        is_batch: false,
    };
    let mut session = Session::new();

    let audio = resolver
        .resolve(
            "https://soundcloud.com/artist/track",
            EmbedMode::Auto,
            &options,
            &mut session,
        )
        .await
        .unwrap();
    assert_eq!(
        audio.markup,
        format!("{{{{iframe: {}player/1?visual=true}}}}", base)
    );

    let page = resolver
        .resolve("https://example.com/page", EmbedMode::Auto, &options, &mut session)
        .await
        .unwrap();
    assert_eq!(page.markup, "{{iframe: https://example.com/page}}");
    assert!(session.take_notices().is_empty());
}
