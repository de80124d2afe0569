//! Process settings schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::assets::AssetSource;
use crate::badge::BadgeConfig;
use crate::pipeline::default_user_agent;
use crate::predefined::LoadPolicy;

/// Root settings document.
///
/// Every section is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Badge appearance
    pub badges: BadgeConfig,

    /// Outbound HTTP for dynamic badges
    pub http: HttpSettings,

    /// Predefined badge loading
    pub predefined: PredefinedSettings,

    /// Asset source
    pub assets: AssetSettings,
}

/// Outbound HTTP settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header; defaults to `badgeserv/<version>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 3,
            user_agent: None,
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }
}

/// Predefined badge settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredefinedSettings {
    /// Directory of predefined badge files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// What to do when some files fail to load
    pub on_error: LoadPolicy,
}

/// Asset settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Read assets from this directory instead of the embedded copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl AssetSettings {
    pub fn source(&self) -> AssetSource {
        match &self.dir {
            Some(dir) => AssetSource::Filesystem(dir.clone()),
            None => AssetSource::Embedded,
        }
    }
}
