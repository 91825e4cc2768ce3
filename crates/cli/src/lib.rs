//! Command line front-end for the continuum.
//!
//! Provides commands for:
//! - Resolving keys to servers
//! - Inspecting ring ownership
//! - Dumping the dot layout

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::{CliConfig, FileConfig, ServerSpec};
