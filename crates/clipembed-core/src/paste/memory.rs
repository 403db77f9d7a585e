//! In-memory outline used by the CLI and tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::host::{BlockHost, BlockId, ChildPosition, HostError};
use super::settings::SettingKey;
use crate::config::ClipembedConfig;

#[derive(Debug, Clone, Default)]
struct Node {
    text: String,
    data: Option<Value>,
    children: Vec<BlockId>,
}

#[derive(Debug, Default)]
struct State {
    nodes: HashMap<BlockId, Node>,
    roots: Vec<BlockId>,
    next_id: u64,
    notifications: Vec<String>,
}

impl State {
    fn allocate(&mut self, text: &str) -> BlockId {
        self.next_id += 1;
        let id = BlockId(format!("b{}", self.next_id));
        self.nodes.insert(
            id.clone(),
            Node {
                text: text.to_string(),
                ..Node::default()
            },
        );
        id
    }

    fn node_mut(&mut self, id: &BlockId) -> Result<&mut Node, HostError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| HostError::NotFound(id.clone()))
    }
}

/// A tree of blocks behind a mutex, with settings and a notification log.
#[derive(Debug, Default)]
pub struct MemoryOutline {
    state: Mutex<State>,
    settings: HashMap<SettingKey, bool>,
}

impl MemoryOutline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline whose settings are the explicit values in `cfg`.
    pub fn with_config(cfg: &ClipembedConfig) -> Self {
        let mut outline = Self::new();
        for key in SettingKey::ALL {
            if let Some(value) = key.from_config(cfg) {
                outline.settings.insert(key, value);
            }
        }
        outline
    }

    pub fn set_setting(&mut self, key: SettingKey, value: bool) {
        self.settings.insert(key, value);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Adds a top-level block.
    pub fn add_root(&self, text: &str) -> BlockId {
        let mut state = self.lock();
        let id = state.allocate(text);
        state.roots.push(id.clone());
        id
    }

    pub fn text(&self, id: &BlockId) -> Option<String> {
        self.lock().nodes.get(id).map(|n| n.text.clone())
    }

    pub fn data(&self, id: &BlockId) -> Option<Value> {
        self.lock().nodes.get(id).and_then(|n| n.data.clone())
    }

    pub fn children(&self, id: &BlockId) -> Vec<BlockId> {
        self.lock()
            .nodes
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Texts of the direct children of `id`, in order.
    pub fn child_texts(&self, id: &BlockId) -> Vec<String> {
        let state = self.lock();
        state
            .nodes
            .get(id)
            .map(|n| {
                n.children
                    .iter()
                    .filter_map(|c| state.nodes.get(c).map(|c| c.text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.lock().notifications.clone()
    }

    /// Whole outline as an indented bullet list.
    pub fn render(&self) -> String {
        let state = self.lock();
        let mut out = String::new();
        for root in &state.roots {
            render_node(&state, root, 0, &mut out);
        }
        out
    }
}

fn render_node(state: &State, id: &BlockId, depth: usize, out: &mut String) {
    let Some(node) = state.nodes.get(id) else {
        return;
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str("- ");
    out.push_str(&node.text);
    out.push('\n');
    for child in &node.children {
        render_node(state, child, depth + 1, out);
    }
}

#[async_trait]
impl BlockHost for MemoryOutline {
    async fn read_block_text(&self, id: &BlockId) -> Result<String, HostError> {
        self.text(id).ok_or_else(|| HostError::NotFound(id.clone()))
    }

    async fn write_block(&self, id: &BlockId, text: &str) -> Result<(), HostError> {
        let mut state = self.lock();
        state.node_mut(id)?.text = text.to_string();
        Ok(())
    }

    async fn write_block_data(
        &self,
        id: &BlockId,
        text: &str,
        data: &Value,
    ) -> Result<(), HostError> {
        let mut state = self.lock();
        let node = state.node_mut(id)?;
        node.text = text.to_string();
        node.data = Some(data.clone());
        Ok(())
    }

    async fn create_child_block(
        &self,
        parent: &BlockId,
        text: &str,
        position: ChildPosition,
    ) -> Result<BlockId, HostError> {
        let mut state = self.lock();
        state.node_mut(parent)?;
        let id = state.allocate(text);
        let siblings = &mut state.node_mut(parent)?.children;
        match position {
            ChildPosition::Index(i) => {
                let at = i.min(siblings.len());
                siblings.insert(at, id.clone());
            }
            ChildPosition::Last => siblings.push(id.clone()),
        }
        Ok(id)
    }

    fn notify(&self, message: &str) {
        tracing::info!(target: "clipembed::notify", "{}", message);
        self.lock().notifications.push(message.to_string());
    }

    fn setting(&self, key: SettingKey) -> Option<bool> {
        self.settings.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn children_insert_at_index_and_last() {
        let outline = MemoryOutline::new();
        let root = outline.add_root("root");
        outline
            .create_child_block(&root, "b", ChildPosition::Last)
            .await
            .unwrap();
        outline
            .create_child_block(&root, "a", ChildPosition::Index(0))
            .await
            .unwrap();
        outline
            .create_child_block(&root, "z", ChildPosition::Index(99))
            .await
            .unwrap();
        assert_eq!(outline.child_texts(&root), vec!["a", "b", "z"]);
        assert_eq!(outline.render(), "- root\n  - a\n  - b\n  - z\n");
    }

    #[tokio::test]
    async fn unknown_block_is_an_error() {
        let outline = MemoryOutline::new();
        let missing = BlockId::new("nope");
        assert!(matches!(
            outline.write_block(&missing, "x").await,
            Err(HostError::NotFound(_))
        ));
        assert!(outline.read_block_text(&missing).await.is_err());
    }

    #[tokio::test]
    async fn block_data_is_stored() {
        let outline = MemoryOutline::new();
        let root = outline.add_root("");
        let data = serde_json::json!({"type": "excalidraw"});
        outline.write_block_data(&root, "{{excalidraw}}", &data).await.unwrap();
        assert_eq!(outline.text(&root).as_deref(), Some("{{excalidraw}}"));
        assert_eq!(outline.data(&root), Some(data));
    }

    #[test]
    fn settings_come_from_config() {
        let cfg = ClipembedConfig {
            preserve_original: Some(false),
            ..ClipembedConfig::default()
        };
        let outline = MemoryOutline::with_config(&cfg);
        assert_eq!(outline.setting(SettingKey::PreserveOriginal), Some(false));
        assert_eq!(outline.setting(SettingKey::AllowOembed), None);
    }
}
