pub mod config;
pub mod logging;

pub mod chain;
pub mod classify;
pub mod extract;
pub mod markup;
pub mod normalize;
pub mod paste;
pub mod remote;
