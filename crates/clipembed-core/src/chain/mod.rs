//! Embed resolution: one URL in, one outline markup string out.
//!
//! In `auto` mode the URL is run through [`HANDLERS`] in order and the first
//! entry that produces an embed wins. The table ends with an unconditional
//! iframe entry, so `auto` always yields something for a parseable URL.

mod maps;
pub mod providers;
mod table;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use url::Url;

use crate::config::{ClipembedConfig, EndpointConfig, TimeoutConfig};
use crate::markup;
use crate::remote::{
    expand_short_link, generic_oembed, soundcloud_fallback, soundcloud_player_src, CurlTransport,
    Transport,
};

pub use maps::{is_google_maps, is_map_link, is_short_map_link, map_embed};
pub use table::{is_soundcloud, Handler, Rule, HANDLERS};

/// Notice shown once per session when the chain skips a third-party lookup.
pub const OEMBED_DISABLED_NOTICE: &str =
    "Third-party oEmbed lookups are disabled; embedding as a plain iframe";

/// Note for URLs written as a plain markdown link.
pub const PLAIN_LINK_NOTE: &str = "as a plain link";

/// A resolved embed: outline markup plus a short description of what was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub markup: String,
    pub note: String,
}

impl Embed {
    pub fn new(markup: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            markup: markup::single_line(&markup.into()),
            note: note.into(),
        }
    }
}

/// How a URL should be turned into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedMode {
    #[default]
    Auto,
    Link,
    Iframe,
}

impl FromStr for EmbedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(EmbedMode::Auto),
            "link" => Ok(EmbedMode::Link),
            "iframe" => Ok(EmbedMode::Iframe),
            other => Err(format!(
                "unknown embed mode '{}' (expected auto, link or iframe)",
                other
            )),
        }
    }
}

impl fmt::Display for EmbedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmbedMode::Auto => "auto",
            EmbedMode::Link => "link",
            EmbedMode::Iframe => "iframe",
        };
        f.write_str(s)
    }
}

/// Per-call policy for one resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionOptions {
    pub allow_third_party_oembed: bool,
    pub is_batch: bool,
}

/// State that lives across resolutions: the one-shot "lookups disabled"
/// warning and notices waiting to be shown. A fresh session resets both.
#[derive(Debug, Default)]
pub struct Session {
    oembed_warning_shown: bool,
    notices: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the disabled-lookups notice the first time it is called.
    pub fn warn_oembed_disabled(&mut self) {
        if !self.oembed_warning_shown {
            self.oembed_warning_shown = true;
            self.notices.push(OEMBED_DISABLED_NOTICE.to_string());
        }
    }

    pub fn oembed_warning_shown(&self) -> bool {
        self.oembed_warning_shown
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

/// Runs URLs through the provider table. Remote entries use `transport`.
pub struct Resolver {
    transport: Arc<dyn Transport>,
    timeouts: TimeoutConfig,
    endpoints: EndpointConfig,
}

impl Resolver {
    pub fn new(
        transport: Arc<dyn Transport>,
        timeouts: TimeoutConfig,
        endpoints: EndpointConfig,
    ) -> Self {
        Self {
            transport,
            timeouts,
            endpoints,
        }
    }

    /// Production resolver: curl transport with timeouts and endpoints from config.
    pub fn from_config(cfg: &ClipembedConfig) -> Self {
        Self::new(
            Arc::new(CurlTransport::new()),
            cfg.timeouts.clone(),
            cfg.endpoints.clone(),
        )
    }

    /// Resolves one (already normalized) URL.
    ///
    /// Returns `None` only in `auto` mode for input that does not parse as an
    /// absolute http(s) URL.
    pub async fn resolve(
        &self,
        url: &str,
        mode: EmbedMode,
        options: &ResolutionOptions,
        session: &mut Session,
    ) -> Option<Embed> {
        match mode {
            EmbedMode::Link => return Some(Embed::new(markup::link(url, url), PLAIN_LINK_NOTE)),
            EmbedMode::Iframe => return Some(Embed::new(markup::iframe(url), "as an iframe")),
            EmbedMode::Auto => {}
        }

        let parsed = match Url::parse(url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => u,
            _ => {
                tracing::debug!(url = %url, "not an http(s) URL, nothing to resolve");
                return None;
            }
        };

        for handler in HANDLERS {
            if let Some(embed) = self.apply(handler, &parsed, options, session).await {
                tracing::debug!(handler = handler.name, url = %parsed, note = %embed.note, "embed handler matched");
                return Some(embed);
            }
        }
        None
    }

    async fn apply(
        &self,
        handler: &Handler,
        url: &Url,
        options: &ResolutionOptions,
        session: &mut Session,
    ) -> Option<Embed> {
        match handler.rule {
            Rule::Pattern(matcher) => matcher(url),
            Rule::SoundCloud => {
                if !is_soundcloud(url) {
                    return None;
                }
                let src = if options.allow_third_party_oembed {
                    soundcloud_player_src(
                        self.transport.as_ref(),
                        &self.endpoints.soundcloud_oembed,
                        url.as_str(),
                        self.timeouts.oembed(),
                    )
                    .await
                } else {
                    soundcloud_fallback(url.as_str())
                };
                Some(Embed::new(markup::iframe(&src), "SoundCloud audio"))
            }
            Rule::MapLink => {
                if !is_map_link(url) {
                    return None;
                }
                if !is_short_map_link(url) {
                    return map_embed(url);
                }
                let expanded = expand_short_link(
                    self.transport.as_ref(),
                    url.as_str(),
                    self.timeouts.redirect(),
                )
                .await;
                Url::parse(&expanded)
                    .ok()
                    .filter(is_google_maps)
                    .and_then(|long| map_embed(&long))
                    .or_else(|| map_embed(url))
            }
            Rule::Oembed => {
                if !options.allow_third_party_oembed {
                    if !options.is_batch {
                        session.warn_oembed_disabled();
                    }
                    return None;
                }
                generic_oembed(
                    self.transport.as_ref(),
                    &self.endpoints.generic_oembed,
                    url.as_str(),
                    self.timeouts.oembed(),
                )
                .await
                .map(|src| Embed::new(markup::iframe(&src), "oEmbed player"))
            }
            Rule::Iframe => Some(Embed::new(markup::iframe(url.as_str()), "web page")),
        }
    }
}
