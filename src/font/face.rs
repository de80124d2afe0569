//! Outline font loading.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use read_fonts::tables::cmap::CmapIterLimits;
use read_fonts::tables::kern::SubtableKind;
use read_fonts::types::GlyphId;
use read_fonts::{FontRef, ReadError, TableProvider};

use super::metrics::GlyphMetrics;
use crate::error::{BadgeError, Result};

/// A parsed TrueType/OpenType font.
///
/// Everything the layout code asks for is decoded once at load: the
/// character map, the advance widths and the kerning pairs.
pub struct Font {
    units_per_em: u16,
    charmap: HashMap<u32, u16>,
    advances: Vec<u16>,
    kerning: HashMap<(u16, u16), i16>,
}

impl Font {
    /// Read and parse a font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| BadgeError::FontParse {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_data(&data)
    }

    /// Parse font bytes, failing on anything that is not a usable font.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let font = FontRef::new(data).map_err(font_error)?;

        let units_per_em = font.head().map_err(font_error)?.units_per_em();
        if units_per_em == 0 {
            return Err(BadgeError::FontParse {
                message: "head.unitsPerEm is zero".to_string(),
            });
        }

        let num_glyphs = font.maxp().map_err(font_error)?.num_glyphs();
        let hmtx = font.hmtx().map_err(font_error)?;
        let advances = (0..u32::from(num_glyphs))
            .map(|gid| hmtx.advance(GlyphId::new(gid)).unwrap_or(0))
            .collect::<Vec<_>>();

        let charmap = read_charmap(&font)?;
        let kerning = read_kerning(&font)?;

        tracing::debug!(
            "Loaded font: {} glyphs, {} mapped chars, {} units/em, {} kerning pairs",
            advances.len(),
            charmap.len(),
            units_per_em,
            kerning.len()
        );

        Ok(Self {
            units_per_em,
            charmap,
            advances,
            kerning,
        })
    }

    /// Number of glyphs in the font.
    pub fn glyph_count(&self) -> usize {
        self.advances.len()
    }

    /// Number of kerning pairs decoded from the `kern` table.
    pub fn kerning_pairs(&self) -> usize {
        self.kerning.len()
    }
}

/// Codepoint to glyph mapping from the most complete Unicode subtable.
fn read_charmap(font: &FontRef<'_>) -> Result<HashMap<u32, u16>> {
    let cmap = font.cmap().map_err(font_error)?;
    // Fail now rather than measuring every string as .notdef.
    let (_, _, subtable) = cmap.best_subtable().ok_or_else(|| BadgeError::FontParse {
        message: "cmap has no usable Unicode subtable".to_string(),
    })?;

    let limits = CmapIterLimits::default_for_font(font);
    Ok(subtable
        .iter_with_limits(limits)
        .filter_map(|(codepoint, gid)| Some((codepoint, u16::try_from(gid.to_u32()).ok()?)))
        .collect())
}

/// Horizontal pair adjustments from the legacy `kern` table.
///
/// Only format 0 subtables are read. Cross-stream subtables move glyphs
/// perpendicular to the baseline and do not change the advance. A font
/// without a `kern` table has no kerning.
fn read_kerning(font: &FontRef<'_>) -> Result<HashMap<(u16, u16), i16>> {
    let kern = match font.kern() {
        Ok(kern) => kern,
        Err(ReadError::TableIsMissing(_)) => return Ok(HashMap::new()),
        Err(e) => return Err(font_error(e)),
    };

    let mut pairs = HashMap::new();
    for subtable in kern.subtables() {
        let subtable = subtable.map_err(font_error)?;
        if !subtable.is_horizontal() || subtable.is_cross_stream() {
            continue;
        }
        match subtable.kind() {
            Ok(SubtableKind::Format0(format0)) => {
                for pair in format0.pairs() {
                    pairs.insert((pair.left().to_u16(), pair.right().to_u16()), pair.value());
                }
            }
            Ok(_) => tracing::debug!("Skipping non-pair kern subtable"),
            Err(e) => return Err(font_error(e)),
        }
    }
    Ok(pairs)
}

impl GlyphMetrics for Font {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_index(&self, ch: char) -> u16 {
        self.charmap.get(&u32::from(ch)).copied().unwrap_or(0)
    }

    fn advance_width(&self, glyph: u16) -> u16 {
        self.advances
            .get(usize::from(glyph))
            .copied()
            .unwrap_or(0)
    }

    fn kerning(&self, left: u16, right: u16) -> i16 {
        self.kerning.get(&(left, right)).copied().unwrap_or(0)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("units_per_em", &self.units_per_em)
            .field("glyphs", &self.advances.len())
            .field("mapped_chars", &self.charmap.len())
            .field("kerning_pairs", &self.kerning.len())
            .finish()
    }
}

fn font_error(err: impl std::fmt::Display) -> BadgeError {
    BadgeError::FontParse {
        message: err.to_string(),
    }
}
