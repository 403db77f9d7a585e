//! CLI command handlers, one file per command.

mod extract;
mod normalize;
mod paste;
mod resolve;

pub use extract::run_extract;
pub use normalize::run_normalize;
pub use paste::{run_paste, PasteArgs};
pub use resolve::run_resolve;
