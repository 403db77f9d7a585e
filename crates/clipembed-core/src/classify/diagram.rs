//! Mermaid diagram text detection.

use regex::Regex;
use std::sync::LazyLock;

/// Diagram-type keywords that may open an unfenced diagram.
pub const DIAGRAM_KEYWORDS: &[&str] = &[
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "stateDiagram-v2",
    "erDiagram",
    "journey",
    "gantt",
    "pie",
    "quadrantChart",
    "requirementDiagram",
    "gitGraph",
    "mindmap",
    "timeline",
    "C4Context",
    "sankey-beta",
    "xychart-beta",
    "block-beta",
];

/// ```` ```mermaid ```` fence, body up to the closing fence or end of input.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[ \t]*mermaid[^\n]*\n(.*?)(?:```|\z)").expect("mermaid fence regex")
});

/// A diagram ready to import: one outline item per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramImport {
    pub lines: Vec<String>,
}

/// Recognizes fenced Mermaid blocks or text opening with a diagram keyword.
pub fn detect_diagram(text: &str) -> Option<DiagramImport> {
    let body = if let Some(cap) = FENCE_RE.captures(text) {
        cap.get(1)?.as_str()
    } else if starts_with_keyword(text) {
        text
    } else {
        return None;
    };

    let lines: Vec<String> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(DiagramImport { lines })
}

fn starts_with_keyword(text: &str) -> bool {
    let first_word = text
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == ':' || c == ';')
        .next()
        .unwrap_or("");
    DIAGRAM_KEYWORDS.contains(&first_word)
}
