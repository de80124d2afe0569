//! Colors command implementation.
//!
//! The `badgeserv colors` command lists the named color palette.

use crate::badge::list_colors;
use crate::cli::args::ColorsArgs;
use crate::config::Settings;
use crate::error::{BadgeError, Result};

use super::dispatcher::{Command, CommandIo, CommandResult};

/// The colors command implementation.
pub struct ColorsCommand {
    settings: Settings,
    args: ColorsArgs,
}

impl ColorsCommand {
    /// Create a new colors command.
    pub fn new(settings: &Settings, args: ColorsArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for ColorsCommand {
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let colors = list_colors(&self.settings.badges);

        if self.args.json {
            let json = serde_json::to_string_pretty(&colors).map_err(|e| BadgeError::Other(e.into()))?;
            writeln!(io.out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        let width = colors.iter().map(|c| c.name.len()).max().unwrap_or(0);
        for mapping in &colors {
            writeln!(io.out, "{:width$}  {}", mapping.name, mapping.color, width = width)?;
        }
        Ok(CommandResult::success())
    }
}
