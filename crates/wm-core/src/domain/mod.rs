//! Domain layer - pure template model and substitution logic.
//!
//! Nothing in this module performs I/O. Loaders hand raw descriptor and file
//! text in; the generation service takes rendered strings out.

pub mod engine;
pub mod manifest;

pub use engine::{CompiledTemplate, SubstitutionContext};
pub use manifest::{
    MANIFEST_FILE, ResolvedTemplate, TEMPLATE_SUFFIX, TemplateManifest, output_path,
};
