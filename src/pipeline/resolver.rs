//! The three badge request shapes, ending at the compositor.
//!
//! - static: templates run against an empty context
//! - dynamic: one GET to the target, JSON body bound to `r`
//! - predefined: registry lookup resolves the target, then dynamic

use serde_json::{Map, Value};

use super::fetch::Fetcher;
use crate::badge::{BadgeDesc, BadgeService, ColorMapping, RenderedBadge};
use crate::error::{BadgeError, Result, TemplateField};
use crate::predefined::{Params, PredefinedRegistry};
use crate::template::{empty_context, Template, TemplateEngine};

/// Context variable the upstream JSON document is bound to.
pub const RESPONSE_VARIABLE: &str = "r";

/// Parsed label, message and color templates.
struct BadgeTemplates {
    label: Template,
    message: Template,
    color: Template,
}

/// Resolves badge requests into rendered SVG.
///
/// Holds only read-only state after construction, so one resolver can
/// serve concurrent requests.
pub struct BadgeResolver {
    badges: BadgeService,
    registry: PredefinedRegistry,
    fetcher: Box<dyn Fetcher>,
    engine: TemplateEngine,
}

impl BadgeResolver {
    pub fn new(badges: BadgeService, registry: PredefinedRegistry, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            badges,
            registry,
            fetcher,
            engine: TemplateEngine::unescaped(),
        }
    }

    /// The compositor in use.
    pub fn badges(&self) -> &BadgeService {
        &self.badges
    }

    /// The predefined badge registry in use.
    pub fn registry(&self) -> &PredefinedRegistry {
        &self.registry
    }

    /// Palette entries sorted by name.
    pub fn list_colors(&self) -> Vec<ColorMapping> {
        self.badges.colors()
    }

    /// Render a badge whose templates need no outside data.
    ///
    /// # Errors
    ///
    /// Returns the first template error in label, message, color order.
    pub fn render_static(&self, label: &str, message: &str, color: &str) -> Result<RenderedBadge> {
        let templates = self.parse_templates(label, message, color)?;
        let desc = self.execute_templates(&templates, &empty_context())?;
        self.badges.render(&desc)
    }

    /// Render a badge from the JSON document at `target`.
    ///
    /// Templates are parsed before the fetch, so malformed input never
    /// causes an outbound request.
    ///
    /// # Errors
    ///
    /// Returns a template error for malformed or failing templates,
    /// `UpstreamFetch` if the GET fails, and `UpstreamDecode` if the body
    /// is not JSON.
    pub fn render_dynamic(&self, target: &str, label: &str, message: &str, color: &str) -> Result<RenderedBadge> {
        let templates = self.parse_templates(label, message, color)?;
        let context = self.fetch_context(target)?;
        let desc = self.execute_templates(&templates, &context)?;
        self.badges.render(&desc)
    }

    /// Render a named badge from the registry.
    ///
    /// # Errors
    ///
    /// Returns `PredefinedNotFound` for an unknown name, a `target`
    /// template error if the target cannot be resolved, and otherwise
    /// whatever the dynamic path returns.
    pub fn render_predefined(&self, name: &str, params: &Params) -> Result<RenderedBadge> {
        let resolved = self.registry.resolve(name, params)?;
        tracing::debug!("Predefined badge '{}' resolved to {}", name, resolved.target);
        self.render_dynamic(&resolved.target, &resolved.label, &resolved.message, &resolved.color)
    }

    /// Fetch `target` and wrap its JSON body as template context.
    pub fn fetch_context(&self, target: &str) -> Result<Value> {
        let response = self.fetcher.get(target)?;
        let document: Value = serde_json::from_slice(&response.body).map_err(|e| BadgeError::UpstreamDecode {
            url: target.to_string(),
            message: e.to_string(),
        })?;

        let mut context = Map::new();
        context.insert(RESPONSE_VARIABLE.to_string(), document);
        Ok(Value::Object(context))
    }

    fn parse_templates(&self, label: &str, message: &str, color: &str) -> Result<BadgeTemplates> {
        Ok(BadgeTemplates {
            label: self.engine.parse(TemplateField::Label, label)?,
            message: self.engine.parse(TemplateField::Message, message)?,
            color: self.engine.parse(TemplateField::Color, color)?,
        })
    }

    fn execute_templates(&self, templates: &BadgeTemplates, context: &Value) -> Result<BadgeDesc> {
        Ok(BadgeDesc {
            title: self.engine.execute(TemplateField::Label, &templates.label, context)?,
            text: self.engine.execute(TemplateField::Message, &templates.message, context)?,
            color: self.engine.execute(TemplateField::Color, &templates.color, context)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use crate::badge::BadgeConfig;
    use crate::error::ErrorKind;
    use crate::font::metrics::tests::StubMetrics;
    use crate::pipeline::fetch::FetchResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Serves one canned body for every URL and records the calls.
    struct CannedFetcher {
        body: Option<&'static str>,
        calls: Arc<AtomicUsize>,
        last_url: Arc<std::sync::Mutex<String>>,
    }

    impl Fetcher for CannedFetcher {
        fn get(&self, url: &str) -> Result<FetchResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_url.lock().unwrap() = url.to_string();
            match self.body {
                Some(body) => Ok(FetchResponse {
                    status: 200,
                    body: body.as_bytes().to_vec(),
                }),
                None => Err(BadgeError::UpstreamFetch {
                    url: url.to_string(),
                    message: "connection refused".to_string(),
                }),
            }
        }
    }

    struct Harness {
        resolver: BadgeResolver,
        calls: Arc<AtomicUsize>,
        last_url: Arc<std::sync::Mutex<String>>,
    }

    fn harness(body: Option<&'static str>) -> Harness {
        let yaml = r#"
predefined_badges:
  version:
    label: version
    message: "{{r.version}}"
    color: "{{#if r.stable}}green{{else}}orange{{/if}}"
    target: "http://upstream.test/{{project}}/status.json"
    parameters:
      project: Project name
"#;
        let registry = PredefinedRegistry::new(serde_yaml::from_str(yaml).unwrap());
        let badges = BadgeService::new(
            BadgeConfig::default(),
            Arc::new(StubMetrics::new()),
            &Assets::embedded(),
        )
        .unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let last_url = Arc::new(std::sync::Mutex::new(String::new()));
        let fetcher = CannedFetcher {
            body,
            calls: Arc::clone(&calls),
            last_url: Arc::clone(&last_url),
        };
        Harness {
            resolver: BadgeResolver::new(badges, registry, Box::new(fetcher)),
            calls,
            last_url,
        }
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn static_badge_renders_literals() {
        let h = harness(None);
        let badge = h.resolver.render_static("build", "passing", "green").unwrap();
        assert!(badge.svg.contains(">build</text>"));
        assert!(badge.svg.contains(">passing</text>"));
        assert!(badge.svg.contains("#97CA00"));
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn static_badge_with_undefined_variable_renders_empty() {
        let h = harness(None);
        let badge = h.resolver.render_static("a{{x}}", "b", "red").unwrap();
        assert!(badge.svg.contains(">a</text>"));
    }

    #[test]
    fn static_badge_reports_failing_field() {
        let h = harness(None);
        let err = h
            .resolver
            .render_static("ok", "{{#if x}}y{{/each}}", "{{#if x}}y{{/each}}")
            .unwrap_err();
        assert!(matches!(err, BadgeError::TemplateSyntax { .. }));
        assert_eq!(err.field(), Some(TemplateField::Message));
        assert_eq!(err.kind(), ErrorKind::Client);
    }

    #[test]
    fn dynamic_badge_binds_response_to_r() {
        let h = harness(Some(r#"{"version":"1.2.3"}"#));
        let badge = h
            .resolver
            .render_dynamic("http://x/status.json", "v", "{{r.version}}", "blue")
            .unwrap();
        assert!(badge.svg.contains(">1.2.3</text>"));
        assert_eq!(*h.last_url.lock().unwrap(), "http://x/status.json");
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dynamic_badge_rejects_non_json() {
        let h = harness(Some("<html>oops</html>"));
        let err = h
            .resolver
            .render_dynamic("http://x/", "v", "{{r.version}}", "blue")
            .unwrap_err();
        assert!(matches!(err, BadgeError::UpstreamDecode { .. }));
        assert_eq!(err.kind(), ErrorKind::Gateway);
    }

    #[test]
    fn dynamic_badge_propagates_fetch_failure() {
        let h = harness(None);
        let err = h
            .resolver
            .render_dynamic("http://x/", "v", "m", "blue")
            .unwrap_err();
        assert!(matches!(err, BadgeError::UpstreamFetch { .. }));
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn malformed_template_skips_fetch() {
        let h = harness(Some("{}"));
        let err = h
            .resolver
            .render_dynamic("http://x/", "v", "m", "{{#if r.a}}x{{/each}}")
            .unwrap_err();
        assert_eq!(err.field(), Some(TemplateField::Color));
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn execution_error_names_field() {
        let h = harness(Some(r#"{"state":"ok"}"#));
        let err = h
            .resolver
            .render_dynamic("http://x/", "{{shout r.state}}", "m", "blue")
            .unwrap_err();
        assert!(matches!(err, BadgeError::TemplateExecution { .. }));
        assert_eq!(err.field(), Some(TemplateField::Label));
    }

    #[test]
    fn predefined_badge_resolves_target_and_renders() {
        let h = harness(Some(r#"{"version":"2.0.0","stable":true}"#));
        let badge = h
            .resolver
            .render_predefined("version", &params(&[("project", "demo"), ("token", "x")]))
            .unwrap();
        assert_eq!(*h.last_url.lock().unwrap(), "http://upstream.test/demo/status.json");
        assert!(badge.svg.contains(">2.0.0</text>"));
        assert!(badge.svg.contains("#97CA00"));
    }

    #[test]
    fn unknown_predefined_badge_is_not_found() {
        let h = harness(Some("{}"));
        let err = h
            .resolver
            .render_predefined("missing", &Params::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn list_colors_matches_palette() {
        let h = harness(None);
        let colors = h.resolver.list_colors();
        assert_eq!(colors.len(), BadgeConfig::default().colors.len());
        assert!(colors.iter().any(|c| c.name == "red" && c.color == "#e05d44"));
    }
}
