//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;

/// badgeserv - Render SVG status badges.
#[derive(Debug, Parser)]
#[command(name = "badgeserv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long, global = true, env = "BADGESERV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Font file to measure badge text with
    #[arg(long, global = true, env = "BADGESERV_FONT")]
    pub font: Option<PathBuf>,

    /// Directory of predefined badge files
    #[arg(long, global = true, env = "BADGESERV_PREDEFINED_DIR")]
    pub predefined_dir: Option<PathBuf>,

    /// Read assets from this directory instead of the embedded copy
    #[arg(long, global = true, env = "BADGESERV_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Timeout for dynamic badge fetches, in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings values given on the command line.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            font: self.font.clone(),
            predefined_dir: self.predefined_dir.clone(),
            assets_dir: self.assets_dir.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a badge to stdout
    Render(RenderArgs),

    /// List the named color palette
    Colors(ColorsArgs),

    /// Inspect predefined badges
    Predefined(PredefinedArgs),

    /// Inspect badge assets
    Assets(AssetsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Print the ETag to stderr
    #[arg(long, global = true)]
    pub etag: bool,

    #[command(subcommand)]
    pub badge: RenderBadge,
}

/// Badge request shapes.
#[derive(Debug, Clone, Subcommand)]
pub enum RenderBadge {
    /// Badge from literal (or template) label, message and color
    Static(BadgeTemplateArgs),

    /// Badge from a JSON document fetched from a URL
    Dynamic {
        /// URL returning a JSON document, bound to `r` in templates
        #[arg(long)]
        target: String,

        #[command(flatten)]
        templates: BadgeTemplateArgs,
    },

    /// Badge from a named predefined definition
    Predefined {
        /// Predefined badge name
        name: String,

        /// Badge parameter as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
}

/// Label, message and color templates.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BadgeTemplateArgs {
    /// Label (left side) template
    #[arg(long, default_value = "")]
    pub label: String,

    /// Message (right side) template
    #[arg(long, default_value = "")]
    pub message: String,

    /// Color template; palette name or any SVG color
    #[arg(long, default_value = "")]
    pub color: String,
}

/// Arguments for the `colors` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ColorsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `predefined` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PredefinedArgs {
    #[command(subcommand)]
    pub action: PredefinedAction,
}

/// Predefined badge actions.
#[derive(Debug, Clone, Subcommand)]
pub enum PredefinedAction {
    /// List loaded badges with parameters and example URLs
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load every file and report failures
    Check,
}

/// Arguments for the `assets` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AssetsArgs {
    #[command(subcommand)]
    pub action: AssetsAction,
}

/// Asset actions.
#[derive(Debug, Clone, Subcommand)]
pub enum AssetsAction {
    /// List asset paths
    List,

    /// Write an asset to stdout
    Cat {
        /// Relative asset path
        path: String,
    },
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse a `key=value` pair. The value may be empty or contain `=`.
pub fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing parameter name in '{}'", raw)),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
