//! Building the long-lived engine state from settings.
//!
//! Everything here runs once before the first badge is rendered. Any
//! failure is fatal: the process cannot lay out badges without a font or
//! a badge template.

use std::path::PathBuf;
use std::sync::Arc;

use crate::assets::Assets;
use crate::badge::BadgeService;
use crate::config::settings::Settings;
use crate::error::{BadgeError, Result};
use crate::font::{find_system_font, Font, FONT_ASSET};
use crate::pipeline::{BadgeResolver, HttpFetcher};
use crate::predefined::{load_dir, PredefinedRegistry};

/// Where the badge font was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontLocation {
    /// A path from settings or the command line.
    Configured(PathBuf),
    /// The font asset in the asset source.
    Asset,
    /// An installed system copy.
    System(PathBuf),
}

/// Find the badge font without loading it.
///
/// # Errors
///
/// Returns `AssetNotFound` if no candidate exists.
pub fn locate_font(settings: &Settings, assets: &Assets) -> Result<FontLocation> {
    if let Some(path) = &settings.badges.font {
        return Ok(FontLocation::Configured(path.clone()));
    }
    if assets.exists(FONT_ASSET) {
        return Ok(FontLocation::Asset);
    }
    find_system_font()
        .map(FontLocation::System)
        .ok_or_else(|| BadgeError::AssetNotFound {
            path: FONT_ASSET.to_string(),
        })
}

/// Locate and parse the badge font.
pub fn load_font(settings: &Settings, assets: &Assets) -> Result<Font> {
    let location = locate_font(settings, assets)?;
    tracing::debug!("Using badge font {:?}", location);
    match location {
        FontLocation::Configured(path) | FontLocation::System(path) => Font::from_file(path),
        FontLocation::Asset => Font::from_data(&assets.read(FONT_ASSET)?),
    }
}

/// Load the predefined badge registry according to settings.
pub fn load_registry(settings: &Settings) -> Result<PredefinedRegistry> {
    let Some(dir) = &settings.predefined.dir else {
        tracing::info!("No predefined badge directory configured");
        return Ok(PredefinedRegistry::empty());
    };

    tracing::info!("Loading predefined badges from {}", dir.display());
    let config = load_dir(dir)?.into_result(settings.predefined.on_error)?;
    tracing::info!("Loaded {} predefined badge(s)", config.len());
    Ok(PredefinedRegistry::new(config))
}

/// Build the compositor from settings.
pub fn build_badge_service(settings: &Settings, assets: &Assets) -> Result<BadgeService> {
    let font = load_font(settings, assets)?;
    BadgeService::new(settings.badges.clone(), Arc::new(font), assets)
}

/// Build a fully wired resolver from settings.
pub fn build_resolver(settings: &Settings) -> Result<BadgeResolver> {
    let assets = Assets::new(settings.assets.source());
    let badges = build_badge_service(settings, &assets)?;
    let registry = load_registry(settings)?;
    let fetcher = HttpFetcher::with_options(settings.http.timeout(), settings.http.user_agent())?;
    Ok(BadgeResolver::new(badges, registry, Box::new(fetcher)))
}
