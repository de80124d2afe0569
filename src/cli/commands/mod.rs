//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`badgeserv render`, `badgeserv colors`)
//! - Settings loaded once and shared by every command
//! - Output written to injected streams so commands are testable

pub mod assets;
pub mod colors;
pub mod completions;
pub mod dispatcher;
pub mod predefined;
pub mod render;

pub use dispatcher::{Command, CommandDispatcher, CommandIo, CommandResult};
