//! CLI for the clipembed resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clipembed_core::chain::EmbedMode;
use clipembed_core::config::{self, ClipembedConfig};
use std::path::{Path, PathBuf};

use commands::{run_extract, run_normalize, run_paste, run_resolve, PasteArgs};

/// Top-level CLI for clipembed.
#[derive(Debug, Parser)]
#[command(name = "clipembed")]
#[command(about = "clipembed: turn clipboard text into outline embed markup", long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of the XDG config path.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize and resolve one URL; print its markup and what was detected.
    Resolve {
        /// HTTP/HTTPS URL to resolve.
        url: String,
        /// auto, link or iframe.
        #[arg(long, default_value = "auto", value_name = "MODE")]
        mode: EmbedMode,
        /// Allow third-party oEmbed lookups for this call.
        #[arg(long)]
        allow_oembed: bool,
    },

    /// Read text on stdin and print the URLs found in it, one per line.
    Extract,

    /// Print the canonical form of a URL.
    Normalize {
        url: String,
    },

    /// Treat stdin as the clipboard and paste it into an in-memory outline.
    Paste {
        /// auto, link or iframe.
        #[arg(long, default_value = "auto", value_name = "MODE")]
        mode: EmbedMode,
        /// Text already in the target block.
        #[arg(long, value_name = "TEXT")]
        existing: Option<String>,
        /// Overwrite existing content instead of keeping it as a child block.
        #[arg(long)]
        no_preserve: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<ClipembedConfig> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                url,
                mode,
                allow_oembed,
            } => run_resolve(&cfg, &url, mode, allow_oembed).await?,
            CliCommand::Extract => run_extract()?,
            CliCommand::Normalize { url } => run_normalize(&url),
            CliCommand::Paste {
                mode,
                existing,
                no_preserve,
            } => {
                let args = PasteArgs {
                    mode,
                    existing,
                    no_preserve,
                };
                run_paste(&cfg, args).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
