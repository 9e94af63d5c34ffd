//! Filesystem-backed template loader.
//!
//! # Directory layout expected
//!
//! ```text
//! my-template/
//! ├── template.json        ← descriptor (required)
//! ├── src/
//! │   └── main.go.tmpl     ← rendered to src/main.go
//! └── README.md.tmpl       ← rendered to README.md
//! ```
//!
//! Files without the `.tmpl` marker suffix are ignored entirely, including
//! the descriptor itself.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use wm_core::{
    application::ports::TemplateLoader,
    domain::{MANIFEST_FILE, ResolvedTemplate, TemplateManifest, output_path},
    error::{WmError, WmResult, io_error},
};

/// Loads one template from a directory tree.
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Create a loader bound to `root`.
    ///
    /// The directory is not touched until [`TemplateLoader::load`] is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_manifest(&self) -> WmResult<TemplateManifest> {
        let manifest_path = self.root.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Err(WmError::ManifestNotFound {
                path: manifest_path,
            });
        }

        let raw = fs::read_to_string(&manifest_path)
            .map_err(|e| io_error("read descriptor", &manifest_path, e))?;
        TemplateManifest::from_json(&raw)
    }
}

impl TemplateLoader for DirectoryLoader {
    /// Read the descriptor and every marked file beneath the root,
    /// recursively.
    ///
    /// # Errors
    ///
    /// - [`WmError::ManifestNotFound`] if `template.json` is absent
    /// - [`WmError::Parse`] if the descriptor is malformed or a template
    ///   file's relative path is invalid
    /// - [`WmError::Io`] if any file cannot be read
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn load(&self) -> WmResult<ResolvedTemplate> {
        let manifest = self.read_manifest()?;

        let mut files = std::collections::BTreeMap::new();

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| WmError::Parse {
                subject: self.root.display().to_string(),
                reason: format!("directory walk error: {e}"),
            })?;

            if !entry.file_type().is_file() {
                continue; // Skip directories, symlinks and other special types.
            }

            let abs = entry.path();
            let rel = abs.strip_prefix(&self.root).map_err(|_| WmError::Parse {
                subject: abs.display().to_string(),
                reason: format!("failed to relativise against '{}'", self.root.display()),
            })?;

            let Some(out_path) = output_path(rel)? else {
                continue; // Not a marked template file.
            };

            let content =
                fs::read_to_string(abs).map_err(|e| io_error("read template file", abs, e))?;
            files.insert(out_path, content);
        }

        debug!(
            template = %manifest.name,
            files = files.len(),
            "loaded template from directory"
        );
        Ok(ResolvedTemplate::new(manifest, files))
    }
}
