//! Static assets: the badge document template and optional font.
//!
//! Assets are embedded at compile time. An [`AssetSource::Filesystem`]
//! directory can be supplied instead, which is useful while editing the
//! badge template; the choice is made once when [`Assets`] is built.

use include_dir::{include_dir, Dir};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{BadgeError, Result};

/// Embedded assets directory.
static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Relative path of the badge document template.
pub const BADGE_TEMPLATE: &str = "badges/badge.svg.hbs";

/// Where assets are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Files compiled into the binary.
    Embedded,
    /// Files under a directory laid out like `assets/`.
    Filesystem(PathBuf),
}

/// Read-only access to the configured asset source.
#[derive(Debug, Clone)]
pub struct Assets {
    source: AssetSource,
}

impl Assets {
    /// Create an asset reader for a source.
    pub fn new(source: AssetSource) -> Self {
        Self { source }
    }

    /// Assets compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(AssetSource::Embedded)
    }

    /// The source this reader uses.
    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    /// Read an asset by relative path.
    ///
    /// # Errors
    ///
    /// Returns `AssetNotFound` if the path does not exist or escapes the
    /// asset root.
    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        let not_found = || BadgeError::AssetNotFound {
            path: path.to_string(),
        };

        if !is_relative_inside(Path::new(path)) {
            return Err(not_found());
        }

        match &self.source {
            AssetSource::Embedded => ASSETS_DIR
                .get_file(path)
                .map(|file| file.contents().to_vec())
                .ok_or_else(not_found),
            AssetSource::Filesystem(root) => fs::read(root.join(path)).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    not_found()
                } else {
                    BadgeError::Io(e)
                }
            }),
        }
    }

    /// Read an asset as UTF-8 text.
    pub fn read_to_string(&self, path: &str) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| {
            BadgeError::Other(anyhow::anyhow!("Asset {} is not valid UTF-8: {}", path, e))
        })
    }

    /// Whether an asset exists.
    pub fn exists(&self, path: &str) -> bool {
        match &self.source {
            AssetSource::Embedded => ASSETS_DIR.get_file(path).is_some(),
            AssetSource::Filesystem(root) => {
                is_relative_inside(Path::new(path)) && root.join(path).is_file()
            }
        }
    }

    /// All asset paths, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        match &self.source {
            AssetSource::Embedded => collect_embedded(&ASSETS_DIR, &mut paths),
            AssetSource::Filesystem(root) => collect_filesystem(root, root, &mut paths)?,
        }
        paths.sort();
        Ok(paths)
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self::embedded()
    }
}

fn is_relative_inside(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_)))
}

fn collect_embedded(dir: &Dir<'_>, paths: &mut Vec<String>) {
    for file in dir.files() {
        paths.push(to_slash(file.path()));
    }
    for sub in dir.dirs() {
        collect_embedded(sub, paths);
    }
}

fn collect_filesystem(root: &Path, dir: &Path, paths: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_filesystem(root, &path, paths)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            paths.push(to_slash(relative));
        }
    }
    Ok(())
}

fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
