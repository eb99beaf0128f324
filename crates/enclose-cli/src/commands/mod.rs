//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on `enclose-core` services
//! and report results through the [`crate::output::OutputManager`].

pub mod completions;
pub mod config;
pub mod demo;
pub mod dialects;
pub mod init;
pub mod render;
