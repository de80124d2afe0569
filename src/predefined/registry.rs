//! Lookup and target resolution for predefined badges.

use serde_json::Value;

use super::definition::{BadgeDefinition, Params, PredefinedConfig};
use crate::error::{BadgeError, Result, TemplateField};
use crate::template::TemplateEngine;

/// A predefined badge with its target resolved for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPredefined {
    pub target: String,
    pub label: String,
    pub message: String,
    pub color: String,
}

/// Read-only registry of predefined badges.
///
/// Built once at startup and shared by every request.
pub struct PredefinedRegistry {
    config: PredefinedConfig,
    engine: TemplateEngine,
}

impl PredefinedRegistry {
    /// Create a registry from loaded definitions.
    pub fn new(config: PredefinedConfig) -> Self {
        Self {
            config,
            engine: TemplateEngine::unescaped(),
        }
    }

    /// A registry with no definitions.
    pub fn empty() -> Self {
        Self::new(PredefinedConfig::default())
    }

    /// Get a definition by name.
    pub fn get(&self, name: &str) -> Option<&BadgeDefinition> {
        self.config.predefined_badges.get(name)
    }

    /// All badge names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.config
            .predefined_badges
            .keys()
            .map(String::as_str)
            .collect()
    }

    /// Iterate definitions in name order.
    pub fn definitions(&self) -> impl Iterator<Item = (&String, &BadgeDefinition)> {
        self.config.predefined_badges.iter()
    }

    /// Number of registered badges.
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Whether no badges are registered.
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    /// Resolve a badge's target URL from caller parameters.
    ///
    /// Only parameters declared by the badge reach the target template;
    /// anything else the caller sent is dropped, and references to
    /// undeclared names render empty.
    ///
    /// # Errors
    ///
    /// Returns `PredefinedNotFound` for an unknown name, and a template
    /// error with field `target` if the target template is broken.
    pub fn resolve(&self, name: &str, params: &Params) -> Result<ResolvedPredefined> {
        let def = self.get(name).ok_or_else(|| BadgeError::PredefinedNotFound {
            name: name.to_string(),
        })?;

        let allowed = def.allowed_params(params);
        let dropped = params.len() - allowed.len();
        if dropped > 0 {
            tracing::debug!("Dropped {} undeclared parameter(s) for predefined badge '{}'", dropped, name);
        }

        let context = Value::Object(
            allowed
                .into_iter()
                .map(|(name, value)| (name, Value::String(value)))
                .collect(),
        );
        let target = self.engine.render(TemplateField::Target, &def.target, &context)?;

        Ok(ResolvedPredefined {
            target,
            label: def.label.clone(),
            message: def.message.clone(),
            color: def.color.clone(),
        })
    }

    /// Request paths for a badge's configured examples.
    ///
    /// Each path has the form `predefined/<name>/?k=v&...`.
    pub fn example_urls(&self, name: &str) -> Vec<String> {
        let Some(def) = self.get(name) else {
            return Vec::new();
        };

        def.examples
            .iter()
            .map(|example| {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(example.iter())
                    .finish();
                if query.is_empty() {
                    format!("predefined/{}/", name)
                } else {
                    format!("predefined/{}/?{}", name, query)
                }
            })
            .collect()
    }
}

impl Default for PredefinedRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build caller parameters from a URL query string.
///
/// When a name repeats, the first value wins.
pub fn params_from_query(query: &str) -> Params {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = Params::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}
