//! Process configuration.
//!
//! - Schema definitions in [`settings`]
//! - File loading and command-line overrides in [`loader`]
//! - Building the engine from settings in [`startup`]
//!
//! # Example
//!
//! ```
//! use badgeserv::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("badgeserv.yml");
//! fs::write(&path, "badges:\n  x_spacing: 6\n").unwrap();
//!
//! let settings = load_settings(&path).unwrap();
//! assert_eq!(settings.badges.x_spacing, 6);
//! assert_eq!(settings.http.timeout_secs, 3);
//! ```

pub mod loader;
pub mod settings;
pub mod startup;

pub use loader::{load_optional_settings, load_settings, parse_settings, SettingsOverrides};
pub use settings::{AssetSettings, HttpSettings, PredefinedSettings, Settings};
pub use startup::{
    build_badge_service, build_resolver, load_font, load_registry, locate_font, FontLocation,
};
