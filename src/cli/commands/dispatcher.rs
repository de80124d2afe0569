//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_optional_settings, Settings};
use crate::error::Result;

/// Output streams a command writes to.
///
/// Badge documents and listings go to `out`; diagnostics such as the
/// ETag go to `err`.
pub struct CommandIo<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> CommandIo<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }
}

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a dispatcher with resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load the settings file named on the command line and apply the
    /// global flag overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = load_optional_settings(cli.config.as_deref())?;
        cli.overrides().apply(&mut settings);
        Ok(Self::new(settings))
    }

    /// The settings commands run with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        match &cli.command {
            Commands::Render(args) => {
                let cmd = super::render::RenderCommand::new(&self.settings, args.clone());
                cmd.execute(io)
            }
            Commands::Colors(args) => {
                let cmd = super::colors::ColorsCommand::new(&self.settings, args.clone());
                cmd.execute(io)
            }
            Commands::Predefined(args) => {
                let cmd = super::predefined::PredefinedCommand::new(&self.settings, args.clone());
                cmd.execute(io)
            }
            Commands::Assets(args) => {
                let cmd = super::assets::AssetsCommand::new(&self.settings, args.clone());
                cmd.execute(io)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(io)
            }
        }
    }
}
