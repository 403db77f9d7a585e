//! The outline host the orchestrator writes into.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use super::settings::SettingKey;

/// Opaque identifier of one outline block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a new child block goes among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildPosition {
    Index(usize),
    Last,
}

/// A host call that was rejected.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("block {0} not found")]
    NotFound(BlockId),
    #[error("host rejected {op}: {reason}")]
    Rejected { op: &'static str, reason: String },
}

/// Block reads and writes plus user-facing notifications.
///
/// Calls are awaited one at a time; no two mutations are in flight together.
#[async_trait]
pub trait BlockHost: Send + Sync {
    async fn read_block_text(&self, id: &BlockId) -> Result<String, HostError>;

    /// Replaces the text of `id`.
    async fn write_block(&self, id: &BlockId, text: &str) -> Result<(), HostError>;

    /// Replaces the text of `id` and attaches structured data to it.
    async fn write_block_data(
        &self,
        id: &BlockId,
        text: &str,
        data: &Value,
    ) -> Result<(), HostError>;

    async fn create_child_block(
        &self,
        parent: &BlockId,
        text: &str,
        position: ChildPosition,
    ) -> Result<BlockId, HostError>;

    /// Transient message to the user. Never fails.
    fn notify(&self, message: &str);

    /// Explicit value of a policy flag, `None` when unset.
    fn setting(&self, key: SettingKey) -> Option<bool>;
}
