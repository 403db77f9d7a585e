//! `clipembed paste` – run stdin through the paste orchestrator and print the outline.

use anyhow::{Context, Result};
use clipembed_core::chain::{EmbedMode, Resolver, Session};
use clipembed_core::config::ClipembedConfig;
use clipembed_core::paste::{paste_clipboard, MemoryOutline, PasteRequest, SettingKey};
use std::io::Read;

#[derive(Debug, Clone)]
pub struct PasteArgs {
    pub mode: EmbedMode,
    pub existing: Option<String>,
    pub no_preserve: bool,
}

pub async fn run_paste(cfg: &ClipembedConfig, args: PasteArgs) -> Result<()> {
    let mut clipboard = String::new();
    std::io::stdin()
        .read_to_string(&mut clipboard)
        .context("read stdin")?;

    let mut outline = MemoryOutline::with_config(cfg);
    if args.no_preserve {
        outline.set_setting(SettingKey::PreserveOriginal, false);
    }
    let target = outline.add_root(args.existing.as_deref().unwrap_or(""));
    let request = PasteRequest {
        target: Some(target),
        clipboard,
        mode: args.mode,
    };

    let resolver = Resolver::from_config(cfg);
    let mut session = Session::new();
    let result = paste_clipboard(&outline, &mut session, &resolver, &request).await;

    print!("{}", outline.render());
    for message in outline.notifications() {
        eprintln!("» {}", message);
    }
    let outcome = result?;
    tracing::debug!(?outcome, "paste complete");
    Ok(())
}
