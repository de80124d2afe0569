//! Predefined command implementation.
//!
//! `badgeserv predefined list` shows what callers can request;
//! `badgeserv predefined check` validates a badge directory the way an
//! operator would before deploying it.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::args::{PredefinedAction, PredefinedArgs};
use crate::config::{load_registry, Settings};
use crate::error::{BadgeError, Result};
use crate::predefined::{load_dir, PredefinedRegistry};

use super::dispatcher::{Command, CommandIo, CommandResult};

/// One badge as shown by `predefined list`.
#[derive(Debug, Serialize)]
struct BadgeSummary<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a BTreeMap<String, String>,
    examples: Vec<String>,
}

/// The predefined command implementation.
pub struct PredefinedCommand {
    settings: Settings,
    args: PredefinedArgs,
}

impl PredefinedCommand {
    /// Create a new predefined command.
    pub fn new(settings: &Settings, args: PredefinedArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }

    fn list(&self, json: bool, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let registry = load_registry(&self.settings)?;
        write_listing(&registry, json, io)?;
        Ok(CommandResult::success())
    }

    fn check(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let Some(dir) = &self.settings.predefined.dir else {
            writeln!(io.err, "No predefined badge directory configured (use --predefined-dir)")?;
            return Ok(CommandResult::failure(2));
        };

        let outcome = load_dir(dir)?;
        for failure in &outcome.failures {
            writeln!(io.out, "FAIL {}", failure)?;
        }
        writeln!(
            io.out,
            "{} badge(s) loaded, {} file(s) failed",
            outcome.config.len(),
            outcome.failures.len()
        )?;

        if outcome.has_errors() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl Command for PredefinedCommand {
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        match &self.args.action {
            PredefinedAction::List { json } => self.list(*json, io),
            PredefinedAction::Check => self.check(io),
        }
    }
}

fn write_listing(registry: &PredefinedRegistry, json: bool, io: &mut CommandIo<'_>) -> Result<()> {
    let summaries: Vec<BadgeSummary<'_>> = registry
        .definitions()
        .map(|(name, def)| BadgeSummary {
            name,
            description: &def.description,
            parameters: &def.parameters,
            examples: registry.example_urls(name),
        })
        .collect();

    if json {
        let json = serde_json::to_string_pretty(&summaries).map_err(|e| BadgeError::Other(e.into()))?;
        writeln!(io.out, "{}", json)?;
        return Ok(());
    }

    if summaries.is_empty() {
        writeln!(io.out, "No predefined badges")?;
        return Ok(());
    }

    for summary in &summaries {
        if summary.description.is_empty() {
            writeln!(io.out, "{}", summary.name)?;
        } else {
            writeln!(io.out, "{} - {}", summary.name, summary.description)?;
        }
        for (param, help) in summary.parameters {
            writeln!(io.out, "    {}: {}", param, help)?;
        }
        for url in &summary.examples {
            writeln!(io.out, "    e.g. {}", url)?;
        }
    }
    Ok(())
}
