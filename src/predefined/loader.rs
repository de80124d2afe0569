//! Loading predefined badge definitions from a directory.
//!
//! Each file is parsed into a generic value tree, checked by a strict
//! decode that rejects unknown keys (typos such as `labl:`), and then
//! decoded for real by a lenient pass. Files are merged in file-name
//! order with whole-definition overwrite, so the last file wins.
//!
//! A bad file never aborts the directory: its failure is recorded and the
//! remaining files still load. [`LoadPolicy`] decides whether recorded
//! failures are fatal.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::definition::PredefinedConfig;
use crate::error::{BadgeError, FileLoadFailure, Result};

/// What to do when some predefined-badge files fail to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Log failures and continue with the files that loaded.
    #[default]
    BestEffort,
    /// Refuse to start if any file failed.
    FailFast,
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Format for a path, by extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yml" | "yaml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Key-only mirror of the schema for the strict pass.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StrictConfig {
    #[serde(default)]
    #[allow(dead_code)]
    predefined_badges: BTreeMap<String, StrictDefinition>,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(dead_code)]
struct StrictDefinition {
    label: IgnoredAny,
    message: IgnoredAny,
    color: IgnoredAny,
    target: IgnoredAny,
    parameters: IgnoredAny,
    examples: IgnoredAny,
    description: IgnoredAny,
}

/// Result of loading a directory: the merged config and any failures.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub config: PredefinedConfig,
    pub failures: Vec<FileLoadFailure>,
}

impl LoadOutcome {
    /// Whether any file failed.
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The aggregate error, if any file failed.
    pub fn error(&self) -> Option<BadgeError> {
        if self.has_errors() {
            Some(BadgeError::ConfigLoad {
                failures: self.failures.clone(),
            })
        } else {
            None
        }
    }

    /// Apply a policy to the outcome.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoad` under [`LoadPolicy::FailFast`] when any file
    /// failed.
    pub fn into_result(self, policy: LoadPolicy) -> Result<PredefinedConfig> {
        if policy == LoadPolicy::FailFast && self.has_errors() {
            return Err(BadgeError::ConfigLoad {
                failures: self.failures,
            });
        }
        Ok(self.config)
    }
}

/// Parse one config document.
///
/// # Arguments
///
/// * `content` - The file content
/// * `format` - How to parse it
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, format: ConfigFormat, source_path: &Path) -> Result<PredefinedConfig> {
    let parse_error = |message: String| BadgeError::ConfigParse {
        path: source_path.to_path_buf(),
        message,
    };

    let tree: serde_yaml::Value = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
    };

    // An empty document holds no badges.
    let tree = if tree.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        tree
    };

    serde_yaml::from_value::<StrictConfig>(tree.clone())
        .map_err(|e| parse_error(format!("strict decode failed: {}", e)))?;

    serde_yaml::from_value::<PredefinedConfig>(tree)
        .map_err(|e| parse_error(format!("decode failed: {}", e)))
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<PredefinedConfig> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| BadgeError::ConfigParse {
        path: path.to_path_buf(),
        message: "unsupported file extension".to_string(),
    })?;

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BadgeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BadgeError::Io(e)
        }
    })?;

    parse_config(&content, format, path)
}

/// Config files directly inside `dir`, sorted by path.
pub fn config_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BadgeError::ConfigNotFound {
                path: dir.to_path_buf(),
            }
        } else {
            BadgeError::Io(e)
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && ConfigFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every config file in a directory (non-recursive).
///
/// # Errors
///
/// Returns `ConfigNotFound` only if the directory itself cannot be
/// listed. Per-file problems are reported in [`LoadOutcome::failures`].
pub fn load_dir(dir: &Path) -> Result<LoadOutcome> {
    let mut outcome = LoadOutcome::default();

    for path in config_files(dir)? {
        tracing::debug!("Loading predefined badges from {}", path.display());
        match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded {} predefined badge(s) from {}", config.len(), path.display());
                outcome.config.assign(config);
            }
            Err(e) => {
                tracing::warn!("Could not load predefined badges from {}: {}", path.display(), e);
                outcome.failures.push(FileLoadFailure {
                    path: path.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    if outcome.has_errors() {
        tracing::warn!(
            "Predefined badge config loading had errors: {} file(s) failed",
            outcome.failures.len()
        );
    }

    Ok(outcome)
}
