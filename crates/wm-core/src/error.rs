//! Unified error handling for WM Core.
//!
//! Every failure in the resolve → load → render pipeline is one of four
//! kinds: a source was not found, something could not be parsed, a template
//! failed at execution time, or the filesystem refused an operation. Errors
//! are returned to the caller synchronously; the core never logs-and-exits.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for WM Core operations.
#[derive(Debug, Error)]
pub enum WmError {
    /// No candidate location contained the requested template.
    #[error("template '{name}' not found (looked in: {})", attempted.join(", "))]
    TemplateNotFound {
        name: String,
        /// Every location that was probed, in search order.
        attempted: Vec<String>,
    },

    /// An explicit `--from` path was given but does not exist.
    ///
    /// This is deliberately distinct from [`WmError::TemplateNotFound`]:
    /// an explicit path never falls back to the other candidate locations.
    #[error("template path not found: {path} (remote clone is not implemented)")]
    ExplicitPathNotFound { path: PathBuf },

    /// A chosen template source has no `template.json` descriptor.
    #[error("template descriptor not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Malformed descriptor JSON, malformed template syntax, or an invalid
    /// output path inside a template source.
    #[error("failed to parse {subject}: {reason}")]
    Parse { subject: String, reason: String },

    /// A template construct was invalid at execution time.
    #[error("failed to render {subject}: {reason}")]
    Render { subject: String, reason: String },

    /// A filesystem operation failed.
    #[error("failed to {operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WmError {
    /// Get error category for exit-code and display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. }
            | Self::ExplicitPathNotFound { .. }
            | Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
            Self::Parse { .. } => ErrorCategory::Parse,
            Self::Render { .. } => ErrorCategory::Render,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, .. } => vec![
                format!("No template named '{name}' in any search location"),
                "Run 'wm template list' to see available templates".into(),
                "Or pass an explicit directory with --from".into(),
            ],
            Self::ExplicitPathNotFound { path } => vec![
                format!("The path '{}' does not exist", path.display()),
                "Check the --from argument for typos".into(),
            ],
            Self::ManifestNotFound { path } => vec![
                format!("Expected a descriptor at '{}'", path.display()),
                "Every template directory needs a template.json".into(),
            ],
            Self::Parse { .. } => vec![
                "The template source is malformed".into(),
                "Check template.json and any *.tmpl files for syntax errors".into(),
            ],
            Self::Render { .. } => vec![
                "A template file references an invalid construct".into(),
                "Only '{{ Variable }}' substitutions are supported".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }
}

/// Error categories for exit-code mapping and UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Parse,
    Render,
    Io,
}

/// Convenient result type alias.
pub type WmResult<T> = Result<T, WmError>;

/// Build an [`WmError::Io`] from a failed std::fs call.
pub fn io_error(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> WmError {
    WmError::Io {
        operation,
        path: path.into(),
        source,
    }
}
