//! Three-valued policy flags read through the host.

use std::fmt;

use super::host::BlockHost;
use crate::config::ClipembedConfig;

/// Policy flags consulted by the paste orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Move existing block content into a child before overwriting.
    PreserveOriginal,
    /// Allow third-party oEmbed lookups.
    AllowOembed,
    /// Allow those lookups while resolving a multi-URL batch.
    AllowOembedInBatch,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::PreserveOriginal,
        SettingKey::AllowOembed,
        SettingKey::AllowOembedInBatch,
    ];

    /// Value used when the host has no explicit setting.
    pub fn default_value(self) -> bool {
        match self {
            SettingKey::PreserveOriginal => true,
            SettingKey::AllowOembed | SettingKey::AllowOembedInBatch => false,
        }
    }

    /// Key name as it appears in config.toml.
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::PreserveOriginal => "preserve_original",
            SettingKey::AllowOembed => "allow_oembed",
            SettingKey::AllowOembedInBatch => "allow_oembed_in_batch",
        }
    }

    /// Explicit value for this key in `cfg`, if any.
    pub fn from_config(self, cfg: &ClipembedConfig) -> Option<bool> {
        match self {
            SettingKey::PreserveOriginal => cfg.preserve_original,
            SettingKey::AllowOembed => cfg.allow_oembed,
            SettingKey::AllowOembedInBatch => cfg.allow_oembed_in_batch,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host value for `key`, or its default when absent.
pub fn setting_or_default(host: &dyn BlockHost, key: SettingKey) -> bool {
    host.setting(key).unwrap_or_else(|| key.default_value())
}
