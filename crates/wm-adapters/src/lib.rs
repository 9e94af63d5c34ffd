//! Infrastructure adapters for WM.
//!
//! This crate implements the ports defined in `wm_core::application::ports`.
//! It contains all external dependencies and I/O operations: the two template
//! loaders, the ordered-candidate resolver, and the filesystem adapters.

pub mod filesystem;
pub mod loader;
pub mod resolver;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use loader::{DirectoryLoader, EmbeddedLoader, embedded_template_names};
pub use resolver::{SearchPaths, TemplateResolver};
