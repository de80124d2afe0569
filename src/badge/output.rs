//! Post-processing of rendered badges: ETag and minification.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// XML comments.
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT_REGEX must compile"));

/// Indentation between tags: whitespace runs that contain a line break.
static INDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*\n\s*<").expect("INDENT_REGEX must compile"));

/// A badge ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBadge {
    /// Minified SVG document.
    pub svg: String,
    /// Quoted content hash of the unminified document.
    pub etag: String,
}

impl RenderedBadge {
    /// Hash and minify a freshly rendered document.
    pub fn from_svg(svg: &str) -> Self {
        Self {
            etag: etag(svg),
            svg: minify_svg(svg),
        }
    }

    /// The SVG document as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.svg.as_bytes()
    }
}

/// Strong ETag for a document: quoted hex SHA-256.
pub fn etag(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("\"{}\"", hex::encode(hasher.finalize()))
}

/// Drop comments and indentation between tags.
pub fn minify_svg(svg: &str) -> String {
    let without_comments = COMMENT_REGEX.replace_all(svg, "");
    INDENT_REGEX
        .replace_all(&without_comments, "><")
        .trim()
        .to_string()
}
