//! Handlebars adapter for badge text fields and predefined targets.

use handlebars::Handlebars;
use serde_json::{Map, Value};

use super::helpers::{lowercase_helper, uppercase_helper, urlencode_helper};
use crate::error::{BadgeError, Result, TemplateField};

/// How rendered values are escaped by an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Values are inserted verbatim.
    None,
    /// Values are escaped for XML text and attributes.
    Xml,
}

/// A template string that is known to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
}

impl Template {
    /// The template text as parsed.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A configured template engine.
///
/// Undefined variables render as empty strings, so templates can test
/// JSON documents of unknown shape. Calling a helper that is not
/// registered is an execution error.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
    escape: EscapePolicy,
}

impl TemplateEngine {
    /// Create an engine with the given escaping and the badge helpers.
    pub fn new(escape: EscapePolicy) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        match escape {
            EscapePolicy::None => registry.register_escape_fn(handlebars::no_escape),
            EscapePolicy::Xml => registry.register_escape_fn(handlebars::html_escape),
        }

        registry.register_helper("uppercase", Box::new(uppercase_helper));
        registry.register_helper("lowercase", Box::new(lowercase_helper));
        registry.register_helper("urlencode", Box::new(urlencode_helper));

        Self { registry, escape }
    }

    /// Engine for caller-supplied and operator-configured templates.
    pub fn unescaped() -> Self {
        Self::new(EscapePolicy::None)
    }

    /// The escaping this engine applies.
    pub fn escape_policy(&self) -> EscapePolicy {
        self.escape
    }

    /// Parse a template string.
    ///
    /// # Errors
    ///
    /// Returns `TemplateSyntax` for the given field on malformed input.
    pub fn parse(&self, field: TemplateField, source: &str) -> Result<Template> {
        handlebars::Template::compile(source).map_err(|e| BadgeError::TemplateSyntax {
            field,
            message: e.to_string(),
        })?;
        Ok(Template {
            source: source.to_string(),
        })
    }

    /// Execute a parsed template against a context object.
    ///
    /// # Errors
    ///
    /// Returns `TemplateExecution` for the given field when rendering fails.
    pub fn execute(&self, field: TemplateField, template: &Template, context: &Value) -> Result<String> {
        self.registry
            .render_template(&template.source, context)
            .map_err(|e| BadgeError::TemplateExecution {
                field,
                message: e.to_string(),
            })
    }

    /// Parse a whole document, such as the badge SVG.
    ///
    /// Documents are not badge fields, so failures are `Render` errors
    /// without a field.
    pub fn parse_document(&self, source: &str) -> Result<Template> {
        handlebars::Template::compile(source).map_err(|e| BadgeError::Render {
            message: format!("document template: {}", e),
        })?;
        Ok(Template {
            source: source.to_string(),
        })
    }

    /// Execute a document parsed with [`parse_document`](Self::parse_document).
    pub fn execute_document(&self, template: &Template, context: &Value) -> Result<String> {
        self.registry
            .render_template(&template.source, context)
            .map_err(|e| BadgeError::Render {
                message: e.to_string(),
            })
    }

    /// Parse then execute in one step.
    pub fn render(&self, field: TemplateField, source: &str, context: &Value) -> Result<String> {
        let template = self.parse(field, source)?;
        self.execute(field, &template, context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::unescaped()
    }
}

/// A context with no variables.
pub fn empty_context() -> Value {
    Value::Object(Map::new())
}
