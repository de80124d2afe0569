//! Badge composition: measure, lay out, and render the SVG document.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use super::layout::BadgeLayout;
use super::output::RenderedBadge;
use crate::assets::{Assets, BADGE_TEMPLATE};
use crate::error::Result;
use crate::font::{text_width, GlyphMetrics};
use crate::template::{EscapePolicy, Template, TemplateEngine};

/// Badge appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// Font size of badge text in points.
    pub font_size: f64,

    /// Horizontal padding around each text, in pixels.
    pub x_spacing: i32,

    /// Color used when a badge resolves to an empty color.
    pub default_color: String,

    /// Named colors. Keys are unique; values are used verbatim.
    pub colors: BTreeMap<String, String>,

    /// Font file to measure text with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            x_spacing: 8,
            default_color: "#4c1".to_string(),
            colors: default_colors(),
            font: None,
        }
    }
}

/// The stock palette.
pub fn default_colors() -> BTreeMap<String, String> {
    [
        ("brightgreen", "#4c1"),
        ("green", "#97CA00"),
        ("yellow", "#dfb317"),
        ("yellowgreen", "#a4a61d"),
        ("orange", "#fe7d37"),
        ("red", "#e05d44"),
        ("blue", "#007ec6"),
        ("grey", "#555"),
        ("gray", "#555"),
        ("lightgrey", "#9f9f9f"),
        ("lightgray", "#9f9f9f"),
    ]
    .into_iter()
    .map(|(name, color)| (name.to_string(), color.to_string()))
    .collect()
}

/// A palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorMapping {
    pub name: String,
    pub color: String,
}

/// Fully resolved badge values, ready to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeDesc {
    pub title: String,
    pub text: String,
    pub color: String,
}

impl BadgeDesc {
    pub fn new(title: impl Into<String>, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            color: color.into(),
        }
    }
}

/// Renders [`BadgeDesc`]s into SVG documents.
///
/// Output depends only on the config, the font and the description, so
/// equal inputs give byte-identical documents and ETags.
pub struct BadgeService {
    config: BadgeConfig,
    metrics: Arc<dyn GlyphMetrics>,
    engine: TemplateEngine,
    document: Template,
}

impl BadgeService {
    /// Create a service using the badge template from `assets`.
    pub fn new(config: BadgeConfig, metrics: Arc<dyn GlyphMetrics>, assets: &Assets) -> Result<Self> {
        let document = assets.read_to_string(BADGE_TEMPLATE)?;
        Self::with_template(config, metrics, &document)
    }

    /// Create a service from an explicit SVG template.
    ///
    /// # Errors
    ///
    /// Returns `Render` if the template does not parse.
    pub fn with_template(
        config: BadgeConfig,
        metrics: Arc<dyn GlyphMetrics>,
        document: &str,
    ) -> Result<Self> {
        let engine = TemplateEngine::new(EscapePolicy::Xml);
        let document = engine.parse_document(document)?;

        Ok(Self {
            config,
            metrics,
            engine,
            document,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// Palette entries sorted by name.
    pub fn colors(&self) -> Vec<ColorMapping> {
        list_colors(&self.config)
    }

    /// Map a palette name to its value; anything else passes through.
    ///
    /// An empty color falls back to the configured default.
    pub fn resolve_color(&self, color: &str) -> String {
        let color = if color.is_empty() {
            self.config.default_color.as_str()
        } else {
            color
        };
        self.config
            .colors
            .get(color)
            .cloned()
            .unwrap_or_else(|| color.to_string())
    }

    /// Measure a string with the badge font.
    pub fn text_width(&self, text: &str) -> i32 {
        text_width(self.metrics.as_ref(), self.config.font_size, text)
    }

    /// Geometry for a badge.
    pub fn layout(&self, desc: &BadgeDesc) -> BadgeLayout {
        BadgeLayout::compute(
            self.text_width(&desc.title),
            self.text_width(&desc.text),
            self.config.x_spacing,
        )
    }

    /// Render the SVG document for a badge.
    ///
    /// # Errors
    ///
    /// Returns `Render` if the document template fails to execute.
    pub fn create_badge(&self, desc: &BadgeDesc) -> Result<String> {
        let layout = self.layout(desc);
        let context = json!({
            "Width": layout.width,
            "TitleWidth": layout.title_width,
            "TextWidth": layout.text_width,
            "Title": desc.title,
            "Text": desc.text,
            "TitleAnchor": layout.title_anchor,
            "TextAnchor": layout.text_anchor,
            "Color": self.resolve_color(&desc.color),
            "FontSize": self.config.font_size.to_string(),
        });

        self.engine.execute_document(&self.document, &context)
    }

    /// Render, hash and minify a badge.
    pub fn render(&self, desc: &BadgeDesc) -> Result<RenderedBadge> {
        let svg = self.create_badge(desc)?;
        Ok(RenderedBadge::from_svg(&svg))
    }
}

/// Palette entries of a config, sorted by name.
pub fn list_colors(config: &BadgeConfig) -> Vec<ColorMapping> {
    config
        .colors
        .iter()
        .map(|(name, color)| ColorMapping {
            name: name.clone(),
            color: color.clone(),
        })
        .collect()
}
