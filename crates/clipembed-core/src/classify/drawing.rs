//! Excalidraw clipboard/export detection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value of the top-level `type` field that marks a drawing export.
pub const DRAWING_TYPE_TAG: &str = "excalidraw";

/// A parsed drawing export, carried as block data by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingImport {
    #[serde(rename = "type")]
    pub kind: String,
    pub elements: Vec<Value>,
    #[serde(rename = "appState")]
    pub app_state: Map<String, Value>,
    #[serde(default)]
    pub files: Map<String, Value>,
}

impl DrawingImport {
    /// The export as a JSON object (`type`, `elements`, `appState`, `files`).
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Parses `text` as a drawing export. Any parse or shape failure is `None`.
pub fn detect_drawing(text: &str) -> Option<DrawingImport> {
    let trimmed = text.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    let drawing: DrawingImport = match serde_json::from_str(trimmed) {
        Ok(d) => d,
        Err(e) => {
            tracing::trace!("not a drawing export: {}", e);
            return None;
        }
    };
    if drawing.kind != DRAWING_TYPE_TAG {
        return None;
    }
    Some(drawing)
}
