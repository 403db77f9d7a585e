//! Pre-URL content classifiers.
//!
//! Diagram text is checked first, then drawing exports. Both return `None` for
//! anything they do not recognize; neither ever reports an error.

mod diagram;
mod drawing;

pub use diagram::{detect_diagram, DiagramImport, DIAGRAM_KEYWORDS};
pub use drawing::{detect_drawing, DrawingImport, DRAWING_TYPE_TAG};

/// What the classifiers made of a clipboard payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Diagram(DiagramImport),
    Drawing(DrawingImport),
}

/// Runs the classifiers in priority order.
pub fn classify(text: &str) -> Option<Classified> {
    if let Some(diagram) = detect_diagram(text) {
        return Some(Classified::Diagram(diagram));
    }
    detect_drawing(text).map(Classified::Drawing)
}
