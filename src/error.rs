//! Error types for badge rendering.
//!
//! This module defines [`BadgeError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant belongs to one [`ErrorKind`], which is all the routing
//!   layer needs to pick a response status
//! - Template failures carry the [`TemplateField`] that failed
//! - Use `anyhow::Error` (via `BadgeError::Other`) for unexpected errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The templated input a template error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Label,
    Message,
    Color,
    Target,
}

impl TemplateField {
    /// Lowercase field name as used in requests and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateField::Label => "label",
            TemplateField::Message => "message",
            TemplateField::Color => "color",
            TemplateField::Target => "target",
        }
    }
}

impl fmt::Display for TemplateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is at fault for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something unusable.
    Client,
    /// The caller asked for something that does not exist.
    NotFound,
    /// The upstream target misbehaved.
    Gateway,
    /// Internal failure.
    Server,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Client => "client error",
            ErrorKind::NotFound => "not found",
            ErrorKind::Gateway => "gateway error",
            ErrorKind::Server => "server error",
        }
    }

    /// Process exit code used by the CLI for this kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::Server => 1,
            ErrorKind::Client => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::Gateway => 4,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single predefined-badge file that failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct FileLoadFailure {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for FileLoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Core error type for badge operations.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// A template string could not be parsed.
    #[error("Invalid {field} template: {message}")]
    TemplateSyntax {
        field: TemplateField,
        message: String,
    },

    /// A template parsed but could not be executed.
    #[error("Failed to execute {field} template: {message}")]
    TemplateExecution {
        field: TemplateField,
        message: String,
    },

    /// The outbound GET to a dynamic target failed.
    #[error("Failed to fetch {url}: {message}")]
    UpstreamFetch { url: String, message: String },

    /// The dynamic target responded with something other than JSON.
    #[error("Response from {url} is not valid JSON: {message}")]
    UpstreamDecode { url: String, message: String },

    /// No predefined badge is registered under this name.
    #[error("Unknown predefined badge: {name}")]
    PredefinedNotFound { name: String },

    /// One or more predefined-badge files failed to load.
    #[error("Predefined badge config loading had errors ({} file(s) failed)", failures.len())]
    ConfigLoad { failures: Vec<FileLoadFailure> },

    /// The fixed badge document failed to render.
    #[error("Failed to render badge: {message}")]
    Render { message: String },

    /// The font resource could not be parsed.
    #[error("Failed to parse font: {message}")]
    FontParse { message: String },

    /// Settings file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A required asset is missing from the asset source.
    #[error("Asset not found: {path}")]
    AssetNotFound { path: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BadgeError {
    /// Classify this error for the caller.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BadgeError::TemplateSyntax { .. } | BadgeError::TemplateExecution { .. } => {
                ErrorKind::Client
            }
            BadgeError::PredefinedNotFound { .. } => ErrorKind::NotFound,
            BadgeError::UpstreamFetch { .. } | BadgeError::UpstreamDecode { .. } => {
                ErrorKind::Gateway
            }
            BadgeError::ConfigLoad { .. }
            | BadgeError::Render { .. }
            | BadgeError::FontParse { .. }
            | BadgeError::ConfigNotFound { .. }
            | BadgeError::ConfigParse { .. }
            | BadgeError::AssetNotFound { .. }
            | BadgeError::Io(_)
            | BadgeError::Other(_) => ErrorKind::Server,
        }
    }

    /// The template field this error relates to, if any.
    pub fn field(&self) -> Option<TemplateField> {
        match self {
            BadgeError::TemplateSyntax { field, .. }
            | BadgeError::TemplateExecution { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type alias for badge operations.
pub type Result<T> = std::result::Result<T, BadgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_syntax_displays_field_and_message() {
        let err = BadgeError::TemplateSyntax {
            field: TemplateField::Message,
            message: "unclosed block".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("message"));
        assert!(msg.contains("unclosed block"));
    }

    #[test]
    fn template_errors_are_client_faults() {
        let syntax = BadgeError::TemplateSyntax {
            field: TemplateField::Label,
            message: "x".into(),
        };
        let exec = BadgeError::TemplateExecution {
            field: TemplateField::Color,
            message: "x".into(),
        };
        assert_eq!(syntax.kind(), ErrorKind::Client);
        assert_eq!(exec.kind(), ErrorKind::Client);
        assert_eq!(exec.field(), Some(TemplateField::Color));
    }

    #[test]
    fn upstream_errors_are_gateway_faults() {
        let fetch = BadgeError::UpstreamFetch {
            url: "http://x/".into(),
            message: "timed out".into(),
        };
        let decode = BadgeError::UpstreamDecode {
            url: "http://x/".into(),
            message: "expected value".into(),
        };
        assert_eq!(fetch.kind(), ErrorKind::Gateway);
        assert_eq!(decode.kind(), ErrorKind::Gateway);
        assert!(fetch.to_string().contains("http://x/"));
    }

    #[test]
    fn predefined_not_found_is_not_found() {
        let err = BadgeError::PredefinedNotFound {
            name: "github-release".into(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("github-release"));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn config_load_counts_failures() {
        let err = BadgeError::ConfigLoad {
            failures: vec![
                FileLoadFailure {
                    path: PathBuf::from("/etc/badges/a.yml"),
                    message: "bad".into(),
                },
                FileLoadFailure {
                    path: PathBuf::from("/etc/badges/b.yml"),
                    message: "worse".into(),
                },
            ],
        };
        assert!(err.to_string().contains("2 file(s)"));
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn file_load_failure_displays_path() {
        let failure = FileLoadFailure {
            path: PathBuf::from("/etc/badges/a.yml"),
            message: "unknown field `labl`".into(),
        };
        let msg = failure.to_string();
        assert!(msg.contains("/etc/badges/a.yml"));
        assert!(msg.contains("labl"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BadgeError = io_err.into();
        assert!(matches!(err, BadgeError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn error_kinds_have_distinct_exit_codes() {
        let kinds = [
            ErrorKind::Client,
            ErrorKind::NotFound,
            ErrorKind::Gateway,
            ErrorKind::Server,
        ];
        let mut codes: Vec<u8> = kinds.iter().map(|k| k.exit_code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), 4);
        assert!(codes.iter().all(|&c| c != 0));
        assert_eq!(ErrorKind::Gateway.to_string(), "gateway error");
    }

    #[test]
    fn template_field_names() {
        assert_eq!(TemplateField::Label.to_string(), "label");
        assert_eq!(TemplateField::Target.as_str(), "target");
    }
}
