//! badgeserv - SVG status badge rendering.
//!
//! Badges are two-segment SVG images (label, message, color). They can be
//! rendered from literal values, from JSON fetched from a URL, or from a
//! named definition an operator configured ahead of time.
//!
//! # Modules
//!
//! - [`assets`] - Embedded or on-disk badge template and font
//! - [`badge`] - Layout, SVG rendering, ETag and minification
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading and startup wiring
//! - [`error`] - Error types and result aliases
//! - [`font`] - Font parsing and text measurement
//! - [`pipeline`] - Static, dynamic and predefined request resolution
//! - [`predefined`] - Predefined badge files and the parameter allow-list
//! - [`template`] - Handlebars adapter for user templates
//!
//! # Example
//!
//! ```
//! use badgeserv::error::TemplateField;
//! use badgeserv::template::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::unescaped();
//! let message = engine
//!     .render(TemplateField::Message, "v{{r.version}}", &json!({"r": {"version": "1.2.3"}}))
//!     .unwrap();
//! assert_eq!(message, "v1.2.3");
//! ```
//!
//! For end-to-end rendering, see the integration tests.

pub mod assets;
pub mod badge;
pub mod cli;
pub mod config;
pub mod error;
pub mod font;
pub mod pipeline;
pub mod predefined;
pub mod template;

pub use error::{BadgeError, Result};
