//! URL canonicalization.
//!
//! Trims sentence punctuation, drops tracking parameters, cleans video-host
//! share parameters, then rewrites a few known shapes into their canonical
//! equivalents. The whole pipeline is idempotent.

mod punctuation;
mod rewrite;
mod tracking;

pub use punctuation::strip_trailing_punctuation;
pub use rewrite::{rewrite_known_shapes, rewrite_source_blob, rewrite_youtu_be};
pub use tracking::{is_tracking_param, is_video_host, strip_params};

/// Passes are repeated until the output stops changing; this bounds the loop.
const MAX_PASSES: usize = 8;

/// Returns the canonical form of `raw`.
///
/// If the punctuation-stripped string does not parse as a URL it is returned as-is.
/// The result is a fixed point: normalizing it again returns it unchanged.
pub fn normalize_url(raw: &str) -> String {
    let mut current = normalize_pass(raw);
    for _ in 1..MAX_PASSES {
        let next = normalize_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn normalize_pass(raw: &str) -> String {
    let stripped = strip_trailing_punctuation(raw);
    let mut parsed = match url::Url::parse(stripped) {
        Ok(u) => u,
        Err(_) => return stripped.to_string(),
    };

    strip_params(&mut parsed);
    rewrite_known_shapes(&mut parsed);
    strip_trailing_punctuation(parsed.as_str()).to_string()
}
