//! `clipembed resolve <URL>` – normalize, resolve, print markup and note.

use anyhow::{bail, Result};
use clipembed_core::chain::{EmbedMode, ResolutionOptions, Resolver, Session};
use clipembed_core::config::ClipembedConfig;
use clipembed_core::normalize::normalize_url;

pub async fn run_resolve(
    cfg: &ClipembedConfig,
    url: &str,
    mode: EmbedMode,
    allow_oembed: bool,
) -> Result<()> {
    let normalized = normalize_url(url);
    let resolver = Resolver::from_config(cfg);
    let options = ResolutionOptions {
        allow_third_party_oembed: allow_oembed || cfg.allow_oembed.unwrap_or(false),
        is_batch: false,
    };
    let mut session = Session::new();

    let Some(embed) = resolver
        .resolve(&normalized, mode, &options, &mut session)
        .await
    else {
        bail!("not an http(s) URL: {}", url);
    };

    println!("{}", embed.markup);
    eprintln!("embedded {}", embed.note);
    for notice in session.take_notices() {
        eprintln!("note: {}", notice);
    }
    Ok(())
}
