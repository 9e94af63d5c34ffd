//! Generate Service - renders a resolved template into a destination tree.
//!
//! For each file of the template: compile the content, create the missing
//! intermediate directories, and write the rendered output to the path the
//! file's stripped relative path dictates under the destination root.
//!
//! # Failure semantics
//!
//! Generation is **not transactional**: the first file that fails aborts the
//! operation and files written before it stay on disk. Re-running against an
//! existing destination silently truncates matching files and leaves
//! unrelated files untouched. Callers wanting stronger guarantees must stage
//! into a fresh directory themselves.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{CompiledTemplate, ResolvedTemplate, SubstitutionContext},
    error::WmResult,
};

/// Renders and writes resolved templates.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render every file of `template` into `dest_root`.
    ///
    /// Returns the number of files written. Declared `variables` in the
    /// descriptor are never validated against `ctx` - missing names render
    /// empty, extra names are ignored.
    ///
    /// # Errors
    ///
    /// - [`crate::error::WmError::Parse`] for malformed template syntax
    /// - [`crate::error::WmError::Render`] for invalid constructs
    /// - [`crate::error::WmError::Io`] for any filesystem failure
    #[instrument(skip_all, fields(template = %template.name(), dest = %dest_root.display()))]
    pub fn generate(
        &self,
        template: &ResolvedTemplate,
        ctx: &SubstitutionContext,
        dest_root: &Path,
    ) -> WmResult<usize> {
        let mut written = 0;

        for (rel_path, raw_content) in &template.files {
            let compiled = CompiledTemplate::parse(rel_path.as_str(), raw_content)?;

            let dest = dest_root.join(rel_path);
            if let Some(parent) = dest.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let rendered = compiled.render(ctx)?;
            self.filesystem.write_file(&dest, &rendered)?;

            debug!(file = %dest.display(), "rendered template file");
            written += 1;
        }

        Ok(written)
    }
}
