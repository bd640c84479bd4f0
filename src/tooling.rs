//! Tooling Layer
//!
//! CLI commands and their text/JSON rendering.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
