//! `clipembed extract` – list URLs found in stdin.

use anyhow::{Context, Result};
use clipembed_core::extract::extract_urls;
use std::io::Read;

pub fn run_extract() -> Result<()> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("read stdin")?;
    let urls = extract_urls(&text);
    tracing::debug!(count = urls.len(), "extracted URLs");
    for url in urls {
        println!("{}", url);
    }
    Ok(())
}
