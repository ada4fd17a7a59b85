//! CLI command handlers

pub mod commands;

pub use commands::{build, init, inspect, script, summary};
