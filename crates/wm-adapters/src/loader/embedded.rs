//! Embedded template loader.
//!
//! The templates that ship with the binary live under
//! `crates/wm-adapters/templates/` and are compiled in with [`include_str!`],
//! so the `include_str!` paths are checked at build time. The bundled set is
//! read-only and safely shared by any number of callers.
//!
//! Bundled sources are deliberately **flat**: each template is a descriptor
//! plus top-level files only, no nested directories. The directory loader
//! walks recursively; this asymmetry matches how the bundle is authored.
//!
//! ## Adding a bundled template
//!
//! 1. Create the directory under `templates/` with a `template.json` and the
//!    `*.tmpl` files.
//! 2. Add a [`BundledTemplate`] entry to [`BUNDLED`].

use std::collections::BTreeMap;

use tracing::debug;

use wm_core::{
    application::ports::TemplateLoader,
    domain::{ResolvedTemplate, TEMPLATE_SUFFIX, TemplateManifest, output_path},
    error::WmResult,
};

/// One template compiled into the binary.
struct BundledTemplate {
    name: &'static str,
    /// Raw `template.json` content.
    manifest: &'static str,
    /// `(file name, raw content)` pairs; names carry the marker suffix.
    files: &'static [(&'static str, &'static str)],
}

/// Every template shipped with the binary.
const BUNDLED: &[BundledTemplate] = &[
    BundledTemplate {
        name: "go-file",
        manifest: include_str!("../../templates/go-file/template.json"),
        files: &[(
            "main.go.tmpl",
            include_str!("../../templates/go-file/main.go.tmpl"),
        )],
    },
    BundledTemplate {
        name: "config",
        manifest: include_str!("../../templates/config/template.json"),
        files: &[(
            "config.yaml.tmpl",
            include_str!("../../templates/config/config.yaml.tmpl"),
        )],
    },
];

/// Names of all bundled templates, for `wm template list`.
pub fn embedded_template_names() -> Vec<&'static str> {
    BUNDLED.iter().map(|t| t.name).collect()
}

/// Loads one template from the bundled asset set.
pub struct EmbeddedLoader {
    entry: &'static BundledTemplate,
}

impl EmbeddedLoader {
    /// Look up a bundled template by name.
    ///
    /// Returns `None` if no bundled template has that name; the resolver
    /// turns that into its not-found error with all attempted locations.
    pub fn for_name(name: &str) -> Option<Self> {
        BUNDLED
            .iter()
            .find(|t| t.name == name)
            .map(|entry| Self { entry })
    }
}

impl TemplateLoader for EmbeddedLoader {
    fn load(&self) -> WmResult<ResolvedTemplate> {
        let manifest = TemplateManifest::from_json(self.entry.manifest)?;

        let mut files = BTreeMap::new();
        for (file_name, content) in self.entry.files {
            // Flat listing: entries are top-level file names by construction,
            // but the suffix filter keeps the contract identical to the
            // directory loader.
            if !file_name.ends_with(TEMPLATE_SUFFIX) {
                continue;
            }
            if let Some(out_path) = output_path(std::path::Path::new(file_name))? {
                files.insert(out_path, content.to_string());
            }
        }

        debug!(
            template = %manifest.name,
            files = files.len(),
            "loaded embedded template"
        );
        Ok(ResolvedTemplate::new(manifest, files))
    }
}
