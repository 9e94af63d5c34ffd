//! Template descriptor model.
//!
//! A template source is a directory (or embedded namespace) containing one
//! `template.json` descriptor plus any number of files carrying the `.tmpl`
//! marker suffix. Loaders parse the descriptor into [`TemplateManifest`] and
//! collect the marked files into a [`ResolvedTemplate`].
//!
//! # `template.json` format
//!
//! ```json
//! {
//!   "name": "go-file",
//!   "description": "Single-file Go program",
//!   "variables": ["ProjectName", "Author"],
//!   "post_init": ["go mod tidy"]
//! }
//! ```
//!
//! `name` is required and must be non-empty; everything else is optional.
//! `variables` documents what the template expects but is never enforced
//! against the substitution context. `post_init` is parsed and carried along
//! but no hook execution exists yet.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{WmError, WmResult};

/// Descriptor file expected at the root of every template source.
pub const MANIFEST_FILE: &str = "template.json";

/// Marker suffix identifying a file as a template to be rendered.
///
/// The suffix is stripped from the output path: `src/main.go.tmpl` renders
/// to `src/main.go`.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Deserialised representation of a `template.json` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateManifest {
    /// Canonical template identifier.
    pub name: String,
    /// Human-readable summary.
    #[serde(default)]
    pub description: String,
    /// Documented substitution variable names (informational only).
    #[serde(default)]
    pub variables: Vec<String>,
    /// Reserved post-generation hook names. Parsed but not executed.
    #[serde(default)]
    pub post_init: Vec<String>,
}

impl TemplateManifest {
    /// Parse a descriptor from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WmError::Parse`] if the JSON is malformed or the required
    /// `name` field is empty. Validating `name` here means a directory with a
    /// junk descriptor is never surfaced as a resolved template.
    pub fn from_json(raw: &str) -> WmResult<Self> {
        let manifest: TemplateManifest =
            serde_json::from_str(raw).map_err(|e| WmError::Parse {
                subject: MANIFEST_FILE.into(),
                reason: e.to_string(),
            })?;

        if manifest.name.trim().is_empty() {
            return Err(WmError::Parse {
                subject: MANIFEST_FILE.into(),
                reason: "descriptor field 'name' must be non-empty".into(),
            });
        }

        Ok(manifest)
    }
}

/// A fully loaded template, ready for rendering.
///
/// Built fresh for every generation call and discarded afterwards. The file
/// map keys are output-relative paths with the marker suffix already stripped
/// and separators normalised to forward slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub manifest: TemplateManifest,
    pub files: BTreeMap<String, String>,
}

impl ResolvedTemplate {
    /// Create a resolved template from a parsed manifest and file map.
    pub fn new(manifest: TemplateManifest, files: BTreeMap<String, String>) -> Self {
        Self { manifest, files }
    }

    pub fn name(&self) -> &str {
        &self.manifest.name
    }
}

/// Derive the output-relative path for one marked template file.
///
/// `rel` is the file's path relative to the template source root. Returns
/// `None` if the file does not carry the marker suffix (such files are
/// ignored entirely, including the descriptor itself).
///
/// # Errors
///
/// Returns [`WmError::Parse`] for paths that are absolute or contain
/// upward-traversal components. A template must never be able to write
/// outside the destination root.
pub fn output_path(rel: &Path) -> WmResult<Option<String>> {
    let normalized = rel.to_string_lossy().replace('\\', "/");

    let Some(stripped) = normalized.strip_suffix(TEMPLATE_SUFFIX) else {
        return Ok(None);
    };

    if stripped.is_empty() {
        return Err(WmError::Parse {
            subject: normalized.clone(),
            reason: "template file has no name besides the marker suffix".into(),
        });
    }

    if rel.is_absolute() || stripped.starts_with('/') {
        return Err(WmError::Parse {
            subject: normalized.clone(),
            reason: "template paths must be relative".into(),
        });
    }

    if stripped.split('/').any(|segment| segment == "..") {
        return Err(WmError::Parse {
            subject: normalized.clone(),
            reason: "template paths must not traverse above the template root".into(),
        });
    }

    Ok(Some(stripped.to_string()))
}
