//! Assets command implementation.
//!
//! `badgeserv assets list` and `badgeserv assets cat <path>` show what the
//! configured asset source serves.

use crate::assets::Assets;
use crate::cli::args::{AssetsAction, AssetsArgs};
use crate::config::Settings;
use crate::error::Result;

use super::dispatcher::{Command, CommandIo, CommandResult};

/// The assets command implementation.
pub struct AssetsCommand {
    assets: Assets,
    args: AssetsArgs,
}

impl AssetsCommand {
    /// Create a new assets command.
    pub fn new(settings: &Settings, args: AssetsArgs) -> Self {
        Self {
            assets: Assets::new(settings.assets.source()),
            args,
        }
    }
}

impl Command for AssetsCommand {
    fn execute(&self, io: &mut CommandIo<'_>) -> Result<CommandResult> {
        match &self.args.action {
            AssetsAction::List => {
                for path in self.assets.list()? {
                    writeln!(io.out, "{}", path)?;
                }
            }
            AssetsAction::Cat { path } => {
                let content = self.assets.read(path)?;
                io.out.write_all(&content)?;
            }
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::BADGE_TEMPLATE;
    use crate::error::BadgeError;
    use std::fs;
    use tempfile::TempDir;

    fn run(settings: &Settings, action: AssetsAction) -> Result<String> {
        let cmd = AssetsCommand::new(settings, AssetsArgs { action });
        let mut out = Vec::new();
        let mut err = Vec::new();
        cmd.execute(&mut CommandIo::new(&mut out, &mut err))?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_embedded_template() {
        let out = run(&Settings::default(), AssetsAction::List).unwrap();
        assert!(out.lines().any(|l| l == BADGE_TEMPLATE));
    }

    #[test]
    fn cat_prints_template() {
        let out = run(
            &Settings::default(),
            AssetsAction::Cat {
                path: BADGE_TEMPLATE.to_string(),
            },
        )
        .unwrap();
        assert!(out.contains("{{TitleWidth}}"));
    }

    #[test]
    fn cat_missing_asset_fails() {
        let result = run(
            &Settings::default(),
            AssetsAction::Cat {
                path: "../Cargo.toml".to_string(),
            },
        );
        assert!(matches!(result, Err(BadgeError::AssetNotFound { .. })));
    }

    #[test]
    fn uses_filesystem_override() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("badges")).unwrap();
        fs::write(temp.path().join("badges").join("custom.svg.hbs"), "<svg/>").unwrap();

        let mut settings = Settings::default();
        settings.assets.dir = Some(temp.path().to_path_buf());
        let out = run(&settings, AssetsAction::List).unwrap();
        assert_eq!(out.trim(), "badges/custom.svg.hbs");
    }
}
