//! Render command implementation.
//!
//! The `badgeserv render` command renders one badge and writes the SVG to
//! stdout.

use crate::badge::RenderedBadge;
use crate::cli::args::{RenderArgs, RenderBadge};
use crate::config::{build_resolver, Settings};
use crate::error::Result;
use crate::pipeline::BadgeResolver;
use crate::predefined::Params;

use super::dispatcher::{Command, CommandIo, CommandResult};

/// The render command implementation.
pub struct RenderCommand {
    settings: Settings,
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(settings: &Settings, args: RenderArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }

    /// Render with an already built resolver.
    pub fn render_with(&self, resolver: &BadgeResolver, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let badge = self.resolve(resolver)?;
        io.out.write_all(badge.as_bytes())?;
        writeln!(io.out)?;
        if self.args.etag {
            writeln!(io.err, "ETag: {}", badge.etag)?;
        }
        Ok(CommandResult::success())
    }

    fn resolve(&self, resolver: &BadgeResolver) -> Result<RenderedBadge> {
        match &self.args.badge {
            RenderBadge::Static(t) => resolver.render_static(&t.label, &t.message, &t.color),
            RenderBadge::Dynamic { target, templates: t } => {
                resolver.render_dynamic(target, &t.label, &t.message, &t.color)
            }
            RenderBadge::Predefined { name, params } => {
                resolver.render_predefined(name, &collect_params(params))
            }
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        let resolver = build_resolver(&self.settings)?;
        self.render_with(&resolver, io)
    }
}

/// Collect `key=value` pairs; the first value for a key wins.
fn collect_params(pairs: &[(String, String)]) -> Params {
    let mut params = Params::new();
    for (key, value) in pairs {
        params.entry(key.clone()).or_insert_with(|| value.clone());
    }
    params
}
