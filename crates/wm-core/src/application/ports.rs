//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `wm-adapters` crate provides the implementations.

use std::path::Path;

use crate::domain::ResolvedTemplate;
use crate::error::WmResult;

/// Port for loading a template from one concrete source.
///
/// A loader instance is bound to its source at construction time; `load`
/// reads the descriptor and every marked template file beneath it.
///
/// Implemented by:
/// - `wm_adapters::loader::DirectoryLoader` (ordinary directory tree)
/// - `wm_adapters::loader::EmbeddedLoader` (read-only bundled asset set)
///
/// Callers must not be able to tell which implementation produced a
/// [`ResolvedTemplate`]; the resolver depends only on this contract.
pub trait TemplateLoader {
    /// Load the descriptor and all marked files from the bound source.
    fn load(&self) -> WmResult<ResolvedTemplate>;
}

/// Port for filesystem operations on the destination tree.
///
/// Implemented by:
/// - `wm_adapters::filesystem::LocalFilesystem` (production)
/// - `wm_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WmResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> WmResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
