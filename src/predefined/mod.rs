//! Predefined badges.
//!
//! Operators describe badges in YAML or JSON files:
//!
//! ```yaml
//! predefined_badges:
//!   github-release:
//!     label: release
//!     message: "{{r.tag_name}}"
//!     color: blue
//!     target: "https://api.github.com/repos/{{owner}}/{{repo}}/releases/latest"
//!     parameters:
//!       owner: Repository owner
//!       repo: Repository name
//! ```
//!
//! Callers then request the badge by name with `owner` and `repo` as
//! parameters. Parameters not listed under `parameters` are discarded.

pub mod definition;
pub mod loader;
pub mod registry;

pub use definition::{BadgeDefinition, Params, PredefinedConfig};
pub use loader::{load_config_file, load_dir, parse_config, ConfigFormat, LoadOutcome, LoadPolicy};
pub use registry::{params_from_query, PredefinedRegistry, ResolvedPredefined};
