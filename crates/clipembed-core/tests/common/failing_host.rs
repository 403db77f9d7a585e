//! [`BlockHost`] wrapper that rejects one kind of call.

use async_trait::async_trait;
use clipembed_core::paste::{
    BlockHost, BlockId, ChildPosition, HostError, MemoryOutline, SettingKey,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Read,
    Write,
    /// Child creation at an explicit index (the preserve step).
    CreateAtIndex,
    /// Child creation appended last (diagram lines, batch items).
    CreateLast,
}

pub struct FailingHost {
    pub inner: MemoryOutline,
    pub fail_on: FailOn,
}

impl FailingHost {
    pub fn new(inner: MemoryOutline, fail_on: FailOn) -> Self {
        Self { inner, fail_on }
    }

    fn reject(&self, op: &'static str) -> HostError {
        HostError::Rejected {
            op,
            reason: "simulated failure".to_string(),
        }
    }
}

#[async_trait]
impl BlockHost for FailingHost {
    async fn read_block_text(&self, id: &BlockId) -> Result<String, HostError> {
        if self.fail_on == FailOn::Read {
            return Err(self.reject("read"));
        }
        self.inner.read_block_text(id).await
    }

    async fn write_block(&self, id: &BlockId, text: &str) -> Result<(), HostError> {
        if self.fail_on == FailOn::Write {
            return Err(self.reject("write"));
        }
        self.inner.write_block(id, text).await
    }

    async fn write_block_data(
        &self,
        id: &BlockId,
        text: &str,
        data: &Value,
    ) -> Result<(), HostError> {
        if self.fail_on == FailOn::Write {
            return Err(self.reject("write"));
        }
        self.inner.write_block_data(id, text, data).await
    }

    async fn create_child_block(
        &self,
        parent: &BlockId,
        text: &str,
        position: ChildPosition,
    ) -> Result<BlockId, HostError> {
        let fail = match position {
            ChildPosition::Index(_) => self.fail_on == FailOn::CreateAtIndex,
            ChildPosition::Last => self.fail_on == FailOn::CreateLast,
        };
        if fail {
            return Err(self.reject("create"));
        }
        self.inner.create_child_block(parent, text, position).await
    }

    fn notify(&self, message: &str) {
        self.inner.notify(message)
    }

    fn setting(&self, key: SettingKey) -> Option<bool> {
        self.inner.setting(key)
    }
}
