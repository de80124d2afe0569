//! String templating for badge fields.
//!
//! Badge labels, messages, colors and predefined-badge targets are
//! Handlebars templates. Each [`TemplateEngine`] carries its own
//! [`EscapePolicy`]: user-facing templates are rendered verbatim, while the
//! fixed SVG document escapes every inserted value.
//!
//! # Example
//!
//! ```
//! use badgeserv::error::TemplateField;
//! use badgeserv::template::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::unescaped();
//! let ctx = json!({"r": {"version": "1.2.3"}});
//! let out = engine.render(TemplateField::Message, "v{{r.version}}", &ctx).unwrap();
//! assert_eq!(out, "v1.2.3");
//! ```

pub mod engine;
pub mod helpers;

pub use engine::{empty_context, EscapePolicy, Template, TemplateEngine};
