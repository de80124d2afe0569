//! Command-line interface for badgeserv.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AssetsAction, AssetsArgs, BadgeTemplateArgs, Cli, ColorsArgs, Commands, CompletionsArgs,
    PredefinedAction, PredefinedArgs, RenderArgs, RenderBadge,
};
pub use commands::{Command, CommandDispatcher, CommandIo, CommandResult};
