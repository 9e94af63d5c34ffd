//! Ordered-candidate template resolution.
//!
//! Given a template name (or an explicit filesystem path), the resolver
//! probes a fixed sequence of locations and delegates to the loader for the
//! first one that **exists**:
//!
//! 1. The explicit path, if given. A missing explicit path is an immediate
//!    error; it never falls back to the other candidates.
//! 2. The per-user store: `<home>/.wm/templates/<name>`.
//! 3. The project-local defaults: `<root>/internal/templates/defaults/<name>`.
//! 4. The embedded bundle.
//!
//! Existence, not loadability, picks the source: once a candidate directory
//! exists, a malformed descriptor inside it surfaces as that load's error
//! rather than falling through to the next candidate.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use wm_core::{
    application::ports::TemplateLoader,
    domain::ResolvedTemplate,
    error::{WmError, WmResult},
};

use crate::loader::{DirectoryLoader, EmbeddedLoader};

/// Filesystem locations the resolver searches, in priority order.
///
/// Passed in explicitly rather than read from ambient process state so that
/// resolution stays deterministic and testable.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    /// Per-user template store, conventionally `~/.wm/templates`.
    pub user_templates_dir: PathBuf,
    /// Project-local defaults, conventionally `internal/templates/defaults`
    /// under the execution root.
    pub defaults_dir: PathBuf,
}

impl SearchPaths {
    /// Derive the conventional locations for an execution root.
    ///
    /// When no home directory can be determined (some containers and test
    /// runners) the user store degrades to a path under the execution root,
    /// which simply never exists.
    pub fn discover(execution_root: &Path) -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| execution_root.to_path_buf());
        Self {
            user_templates_dir: home.join(".wm").join("templates"),
            defaults_dir: execution_root
                .join("internal")
                .join("templates")
                .join("defaults"),
        }
    }
}

/// Resolves template names to loaded templates.
pub struct TemplateResolver {
    paths: SearchPaths,
}

impl TemplateResolver {
    pub fn new(paths: SearchPaths) -> Self {
        Self { paths }
    }

    /// Resolve `name` (or the explicit `from` path) to a loaded template.
    ///
    /// # Errors
    ///
    /// - [`WmError::ExplicitPathNotFound`] if `from` is given but missing
    /// - [`WmError::TemplateNotFound`] if no candidate location exists,
    ///   naming every location attempted
    /// - whatever the chosen source's load produces, unchanged
    #[instrument(skip(self))]
    pub fn resolve(&self, name: &str, from: Option<&Path>) -> WmResult<ResolvedTemplate> {
        if let Some(explicit) = from {
            if !explicit.is_dir() {
                return Err(WmError::ExplicitPathNotFound {
                    path: explicit.to_path_buf(),
                });
            }
            debug!(path = %explicit.display(), "using explicit template path");
            return DirectoryLoader::new(explicit).load();
        }

        let mut attempted = Vec::with_capacity(3);

        for dir in [
            self.paths.user_templates_dir.join(name),
            self.paths.defaults_dir.join(name),
        ] {
            if dir.is_dir() {
                debug!(path = %dir.display(), "template source found");
                return DirectoryLoader::new(dir).load();
            }
            debug!(path = %dir.display(), "candidate does not exist, trying next");
            attempted.push(dir.display().to_string());
        }

        if let Some(loader) = EmbeddedLoader::for_name(name) {
            debug!(template = name, "using embedded template");
            return loader.load();
        }
        attempted.push(format!("embedded/{name}"));

        Err(WmError::TemplateNotFound {
            name: name.to_string(),
            attempted,
        })
    }
}
