//! Settings file loading and command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{BadgeError, Result};

/// Parse settings from a YAML string.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| BadgeError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from a file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BadgeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BadgeError::Io(e)
        }
    })?;

    tracing::debug!("Loaded settings from {}", path.display());
    parse_settings(&content, path)
}

/// Load settings from an optional file, defaulting when absent.
pub fn load_optional_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(Settings::default()),
    }
}

/// Values from the command line that win over the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub font: Option<PathBuf>,
    pub predefined_dir: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl SettingsOverrides {
    /// Apply every set override to `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(font) = &self.font {
            settings.badges.font = Some(font.clone());
        }
        if let Some(dir) = &self.predefined_dir {
            settings.predefined.dir = Some(dir.clone());
        }
        if let Some(dir) = &self.assets_dir {
            settings.assets.dir = Some(dir.clone());
        }
        if let Some(secs) = self.timeout_secs {
            settings.http.timeout_secs = secs;
        }
    }
}
