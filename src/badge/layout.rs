//! Badge geometry.
//!
//! A badge is two segments side by side. Each segment is its text width
//! padded by `x_spacing` on both sides, and each text is centered in its
//! segment. All values are whole pixels; halving truncates.

use serde::Serialize;

/// Pixel positions for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeLayout {
    /// Total badge width.
    pub width: i32,
    /// Width of the title (left) segment.
    pub title_width: i32,
    /// Width of the text (right) segment.
    pub text_width: i32,
    /// Horizontal center of the title text.
    pub title_anchor: i32,
    /// Horizontal center of the message text.
    pub text_anchor: i32,
}

impl BadgeLayout {
    /// Lay out a badge from measured title and text widths.
    pub fn compute(title_px: i32, text_px: i32, x_spacing: i32) -> Self {
        let width = title_px + text_px + 4 * x_spacing;
        let title_width = title_px + 2 * x_spacing;
        Self {
            width,
            title_width,
            text_width: width - title_width,
            title_anchor: title_px / 2 + x_spacing,
            text_anchor: title_px + text_px / 2 + 3 * x_spacing,
        }
    }
}
