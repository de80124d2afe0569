//! Library integration tests.

use badgeserv::badge::{list_colors, minify_svg, BadgeConfig, BadgeDesc, BadgeService, RenderedBadge};
use badgeserv::error::{ErrorKind, TemplateField};
use badgeserv::font::{text_width, GlyphMetrics};
use badgeserv::BadgeError;
use std::sync::Arc;

/// Every mapped character is 500 units wide; no kerning.
struct HalfEm;

impl GlyphMetrics for HalfEm {
    fn units_per_em(&self) -> u16 {
        1000
    }

    fn glyph_index(&self, ch: char) -> u16 {
        if ch.is_ascii() {
            ch as u16
        } else {
            0
        }
    }

    fn advance_width(&self, glyph: u16) -> u16 {
        if glyph == 0 {
            0
        } else {
            500
        }
    }
}

fn service() -> BadgeService {
    BadgeService::new(
        BadgeConfig::default(),
        Arc::new(HalfEm),
        &badgeserv::assets::Assets::embedded(),
    )
    .unwrap()
}

#[test]
fn error_types_are_public() {
    let err = BadgeError::PredefinedNotFound {
        name: "test".into(),
    };
    assert!(err.to_string().contains("test"));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> badgeserv::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn custom_metrics_drive_text_width() {
    // 4 chars * 500 units at 11pt / 1000 upem = 22px
    assert_eq!(text_width(&HalfEm, 11.0, "abcd"), 22);
    assert_eq!(text_width(&HalfEm, 11.0, ""), 0);
    assert_eq!(text_width(&HalfEm, 11.0, "\u{1F600}"), 0);
}

#[test]
fn width_grows_with_text() {
    let svc = service();
    let short = svc.layout(&BadgeDesc::new("a", "b", "red"));
    let long = svc.layout(&BadgeDesc::new("a", "bbbbbbbb", "red"));
    assert!(long.width > short.width);
    assert_eq!(long.title_width, short.title_width);
}

#[test]
fn rendered_badge_is_minified_with_etag() {
    let svc = service();
    let raw = svc.create_badge(&BadgeDesc::new("build", "passing", "brightgreen")).unwrap();
    let badge = svc.render(&BadgeDesc::new("build", "passing", "brightgreen")).unwrap();

    assert_eq!(badge, RenderedBadge::from_svg(&raw));
    assert_eq!(badge.svg, minify_svg(&raw));
    assert!(!badge.svg.contains("<!--"));
    assert!(badge.etag.starts_with('"') && badge.etag.ends_with('"'));
    assert_eq!(badge.etag.len(), 64 + 2);
}

#[test]
fn different_badges_have_different_etags() {
    let svc = service();
    let a = svc.render(&BadgeDesc::new("build", "passing", "green")).unwrap();
    let b = svc.render(&BadgeDesc::new("build", "failing", "red")).unwrap();
    assert_ne!(a.etag, b.etag);
}

#[test]
fn list_colors_is_public() {
    let colors = list_colors(&BadgeConfig::default());
    assert!(colors.iter().any(|c| c.name == "lightgrey"));
}

#[test]
fn template_field_is_reported() {
    let engine = badgeserv::template::TemplateEngine::unescaped();
    let err = engine.parse(TemplateField::Label, "{{#if a}}x{{/each}}").unwrap_err();
    assert_eq!(err.field(), Some(TemplateField::Label));
    assert_eq!(err.kind(), ErrorKind::Client);
}
