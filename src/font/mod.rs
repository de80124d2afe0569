//! Glyph metrics for laying out badge text.
//!
//! - [`Font`] parses a TrueType/OpenType file once at startup
//! - [`GlyphMetrics`] is the read-only view the layout code measures with
//! - [`text_width`] turns a string into whole pixels at a point size
//!
//! A font is required: badges cannot be laid out without one, so loading
//! failures are fatal to startup rather than retried.

pub mod face;
pub mod metrics;

pub use face::Font;
pub use metrics::{text_width, GlyphMetrics};

use std::path::PathBuf;

/// Relative path of the badge font inside an asset source.
pub const FONT_ASSET: &str = "fonts/DejaVuSans.ttf";

/// Where distributions commonly install DejaVu Sans.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/local/share/fonts/DejaVuSans.ttf",
    "/Library/Fonts/DejaVuSans.ttf",
];

/// First installed system copy of the badge font, if any.
pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONT_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
