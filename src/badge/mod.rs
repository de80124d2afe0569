//! Badge rendering.
//!
//! - [`BadgeService`] measures text, lays out and renders the document
//! - [`BadgeLayout`] holds the pixel geometry
//! - [`RenderedBadge`] is the minified document plus its ETag

pub mod compositor;
pub mod layout;
pub mod output;

pub use compositor::{default_colors, list_colors, BadgeConfig, BadgeDesc, BadgeService, ColorMapping};
pub use layout::BadgeLayout;
pub use output::{etag, minify_svg, RenderedBadge};
