//! Text width measurement.
//!
//! Widths are accumulated in font design units (advances plus pair
//! kerning) and scaled to pixels once at the end, truncating toward zero.

/// Per-glyph horizontal metrics of an outline font.
///
/// Implemented by [`Font`](super::Font) for real font files. Glyph
/// indices are 16-bit as in TrueType; index 0 is `.notdef`.
pub trait GlyphMetrics: Send + Sync {
    /// The font's design grid size.
    fn units_per_em(&self) -> u16;

    /// Glyph used to draw `ch`, or 0 when the font has none.
    fn glyph_index(&self, ch: char) -> u16;

    /// Horizontal advance of a glyph in design units.
    fn advance_width(&self, glyph: u16) -> u16;

    /// Signed adjustment between two adjacent glyphs in design units.
    fn kerning(&self, _left: u16, _right: u16) -> i16 {
        0
    }
}

/// Measure `text` as a single run at `point_size`, in whole pixels.
///
/// Every character is measured, including control characters such as
/// newlines, using whatever glyph the font maps them to.
pub fn text_width(metrics: &dyn GlyphMetrics, point_size: f64, text: &str) -> i32 {
    let units_per_em = metrics.units_per_em();
    if units_per_em == 0 {
        return 0;
    }

    let mut width: i64 = 0;
    let mut prev: Option<u16> = None;
    for ch in text.chars() {
        let glyph = metrics.glyph_index(ch);
        if let Some(prev) = prev {
            width += i64::from(metrics.kerning(prev, glyph));
        }
        width += i64::from(metrics.advance_width(glyph));
        prev = Some(glyph);
    }

    (width as f64 * point_size / f64::from(units_per_em)) as i32
}
