#![allow(dead_code)]

pub mod failing_host;
pub mod oembed_server;
