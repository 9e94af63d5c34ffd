//! Template loaders.
//!
//! Two interchangeable implementations of the `TemplateLoader` port: one
//! reading an ordinary directory tree, one reading the bundled asset set
//! compiled into the binary. Given identical descriptor and file contents
//! both produce identical `ResolvedTemplate` values.

mod directory;
mod embedded;

pub use directory::DirectoryLoader;
pub use embedded::{EmbeddedLoader, embedded_template_names};
