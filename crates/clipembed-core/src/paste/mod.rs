//! Paste orchestration: one clipboard payload, one target block.
//!
//! Branches, first match wins:
//! 1. diagram text → `{{mermaid}}` container with one child per line
//! 2. drawing export → `{{excalidraw}}` with the export attached as block data
//! 3. no URL → the text is written unchanged
//! 4. one URL → its resolved embed replaces the block
//! 5. several URLs → `Pasted links (N)` container with one resolved child each
//!
//! With the preserve policy on, non-empty existing content is moved into a
//! new first child before the first write. If that fails nothing is written.

mod host;
mod memory;
mod settings;

use std::collections::HashSet;
use thiserror::Error;

use crate::chain::{Embed, EmbedMode, ResolutionOptions, Resolver, Session, PLAIN_LINK_NOTE};
use crate::classify::{classify, Classified};
use crate::extract::extract_urls;
use crate::markup;
use crate::normalize::normalize_url;

pub use host::{BlockHost, BlockId, ChildPosition, HostError};
pub use memory::MemoryOutline;
pub use settings::{setting_or_default, SettingKey};

/// Most URLs resolved from one paste; the rest are dropped with a notice.
pub const MAX_BATCH_URLS: usize = 20;

pub const DIAGRAM_MARKER: &str = "{{mermaid}}";
pub const DRAWING_MARKER: &str = "{{excalidraw}}";

const EMPTY_CLIPBOARD_NOTICE: &str = "Clipboard is empty";

/// One paste event.
#[derive(Debug, Clone)]
pub struct PasteRequest {
    /// Block under the cursor; `None` when nothing is selected.
    pub target: Option<BlockId>,
    pub clipboard: String,
    pub mode: EmbedMode,
}

/// Which branch ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Clipboard was empty; nothing changed.
    Empty,
    Diagram { lines: usize },
    Drawing { elements: usize },
    Passthrough,
    Single { url: String, embed: Embed },
    Batch { embedded: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum PasteError {
    #[error("No block selected")]
    NoTarget,
    #[error("Could not preserve existing content: {0}")]
    Preserve(#[source] HostError),
    #[error("Could not write block: {0}")]
    Write(#[source] HostError),
    #[error("Could not create child block: {0}")]
    CreateChild(#[source] HostError),
}

/// Runs one paste against `host`.
///
/// Errors are also sent to the user through [`BlockHost::notify`], as are any
/// notices queued on `session` while resolving.
pub async fn paste_clipboard(
    host: &dyn BlockHost,
    session: &mut Session,
    resolver: &Resolver,
    request: &PasteRequest,
) -> Result<PasteOutcome, PasteError> {
    let result = run(host, session, resolver, request).await;
    for notice in session.take_notices() {
        host.notify(&notice);
    }
    match &result {
        Ok(outcome) => tracing::debug!(?outcome, "paste finished"),
        Err(e) => {
            tracing::warn!("paste aborted: {}", e);
            host.notify(&e.to_string());
        }
    }
    result
}

async fn run(
    host: &dyn BlockHost,
    session: &mut Session,
    resolver: &Resolver,
    request: &PasteRequest,
) -> Result<PasteOutcome, PasteError> {
    let target = request.target.as_ref().ok_or(PasteError::NoTarget)?;
    let text = request.clipboard.trim();
    if text.is_empty() {
        host.notify(EMPTY_CLIPBOARD_NOTICE);
        return Ok(PasteOutcome::Empty);
    }
    let preserve = setting_or_default(host, SettingKey::PreserveOriginal);

    match classify(text) {
        Some(Classified::Diagram(diagram)) => {
            preserve_existing(host, target, preserve).await?;
            host.write_block(target, DIAGRAM_MARKER)
                .await
                .map_err(PasteError::Write)?;
            for line in &diagram.lines {
                host.create_child_block(target, line, ChildPosition::Last)
                    .await
                    .map_err(PasteError::CreateChild)?;
            }
            host.notify(&format!("Imported diagram ({} lines)", diagram.lines.len()));
            return Ok(PasteOutcome::Diagram {
                lines: diagram.lines.len(),
            });
        }
        Some(Classified::Drawing(drawing)) => {
            preserve_existing(host, target, preserve).await?;
            host.write_block_data(target, DRAWING_MARKER, &drawing.to_value())
                .await
                .map_err(PasteError::Write)?;
            host.notify(&format!(
                "Imported drawing ({} elements)",
                drawing.elements.len()
            ));
            return Ok(PasteOutcome::Drawing {
                elements: drawing.elements.len(),
            });
        }
        None => {}
    }

    let urls = extract_urls(text);
    match urls.as_slice() {
        [] => {
            preserve_existing(host, target, preserve).await?;
            host.write_block(target, text)
                .await
                .map_err(PasteError::Write)?;
            Ok(PasteOutcome::Passthrough)
        }
        [url] => {
            let url = normalize_url(url);
            let options = ResolutionOptions {
                allow_third_party_oembed: setting_or_default(host, SettingKey::AllowOembed),
                is_batch: false,
            };
            let embed = resolve_or_link(resolver, &url, request.mode, &options, session).await;

            preserve_existing(host, target, preserve).await?;
            host.write_block(target, &embed.markup)
                .await
                .map_err(PasteError::Write)?;
            host.notify(&format!("Embedded {}", embed.note));
            Ok(PasteOutcome::Single { url, embed })
        }
        _ => paste_batch(host, session, resolver, request.mode, target, preserve, &urls).await,
    }
}

async fn paste_batch(
    host: &dyn BlockHost,
    session: &mut Session,
    resolver: &Resolver,
    mode: EmbedMode,
    target: &BlockId,
    preserve: bool,
    urls: &[String],
) -> Result<PasteOutcome, PasteError> {
    let mut seen = HashSet::new();
    let normalized: Vec<String> = urls
        .iter()
        .map(|u| normalize_url(u))
        .filter(|u| seen.insert(u.clone()))
        .collect();
    let found = normalized.len();
    if found > MAX_BATCH_URLS {
        host.notify(&format!(
            "Found {} links; embedding the first {}",
            found, MAX_BATCH_URLS
        ));
    }

    let options = ResolutionOptions {
        allow_third_party_oembed: setting_or_default(host, SettingKey::AllowOembed)
            && setting_or_default(host, SettingKey::AllowOembedInBatch),
        is_batch: true,
    };
    let mut embeds = Vec::with_capacity(found.min(MAX_BATCH_URLS));
    for url in normalized.iter().take(MAX_BATCH_URLS) {
        embeds.push(resolve_or_link(resolver, url, mode, &options, session).await);
    }

    preserve_existing(host, target, preserve).await?;
    host.write_block(target, &format!("Pasted links ({})", embeds.len()))
        .await
        .map_err(PasteError::Write)?;
    for embed in &embeds {
        host.create_child_block(target, &embed.markup, ChildPosition::Last)
            .await
            .map_err(PasteError::CreateChild)?;
    }
    host.notify(&format!("Embedded {} links", embeds.len()));
    Ok(PasteOutcome::Batch {
        embedded: embeds.len(),
        found,
    })
}

async fn resolve_or_link(
    resolver: &Resolver,
    url: &str,
    mode: EmbedMode,
    options: &ResolutionOptions,
    session: &mut Session,
) -> Embed {
    match resolver.resolve(url, mode, options, session).await {
        Some(embed) => embed,
        None => Embed::new(markup::link(url, url), PLAIN_LINK_NOTE),
    }
}

/// Moves non-empty existing content of `target` into a new first child.
async fn preserve_existing(
    host: &dyn BlockHost,
    target: &BlockId,
    enabled: bool,
) -> Result<(), PasteError> {
    if !enabled {
        return Ok(());
    }
    let existing = host
        .read_block_text(target)
        .await
        .map_err(PasteError::Preserve)?;
    if existing.trim().is_empty() {
        return Ok(());
    }
    host.create_child_block(target, &existing, ChildPosition::Index(0))
        .await
        .map_err(PasteError::Preserve)?;
    tracing::debug!(block = %target, "preserved existing content as first child");
    Ok(())
}
