//! Predefined badge schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller-supplied parameters, one value per name.
pub type Params = BTreeMap<String, String>;

/// An operator-configured badge template.
///
/// `label`, `message` and `color` are executed against the JSON fetched
/// from the resolved `target`. `target` itself only ever sees the caller
/// parameters whose names are declared in `parameters`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeDefinition {
    /// Label template
    pub label: String,

    /// Message template
    pub message: String,

    /// Color template
    pub color: String,

    /// Template for the URL to fetch badge data from
    pub target: String,

    /// Accepted parameter names, with help text
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,

    /// Prefilled parameter sets for example badges
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Params>,

    /// Human-readable description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl BadgeDefinition {
    /// Whether `name` is a declared parameter.
    pub fn accepts(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Keep only the caller parameters this badge declares.
    pub fn allowed_params(&self, caller: &Params) -> Params {
        caller
            .iter()
            .filter(|(name, _)| self.accepts(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

/// Named badge definitions from one or more files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredefinedConfig {
    pub predefined_badges: BTreeMap<String, BadgeDefinition>,
}

impl PredefinedConfig {
    /// Overlay `other` onto this config.
    ///
    /// Definitions are replaced whole by name; fields are never merged.
    pub fn assign(&mut self, other: PredefinedConfig) {
        self.predefined_badges.extend(other.predefined_badges);
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.predefined_badges.len()
    }

    /// Whether there are no definitions.
    pub fn is_empty(&self) -> bool {
        self.predefined_badges.is_empty()
    }
}
