//! `wm template` — generate projects from templates and list what's
//! available.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info, instrument};

use wm_adapters::{LocalFilesystem, SearchPaths, TemplateResolver, embedded_template_names};
use wm_core::{application::GenerateService, domain::SubstitutionContext};

use crate::cli::InitArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

// ── template init ─────────────────────────────────────────────────────────────

/// Generate a project from a template into `./<name>`.
#[instrument(skip_all, fields(template = %args.template, project = %args.name))]
pub fn init(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    validate_project_name(&args.name)?;

    let cwd = std::env::current_dir()?;
    let paths = search_paths(&cwd, &config);
    debug!(
        user = %paths.user_templates_dir.display(),
        defaults = %paths.defaults_dir.display(),
        "search paths resolved"
    );

    let resolver = TemplateResolver::new(paths);
    let template = resolver.resolve(&args.template, args.from.as_deref())?;

    let ctx = SubstitutionContext::new()
        .with("ProjectName", args.name.as_str())
        .with("Author", args.author.as_str());

    let dest = cwd.join(&args.name);
    let written = GenerateService::new(Box::new(LocalFilesystem::new()))
        .generate(&template, &ctx, &dest)?;

    info!(files = written, dest = %dest.display(), "project generated");
    output.success(&format!(
        "Created project '{}' from template '{}' ({} file{})",
        args.name,
        template.name(),
        written,
        if written == 1 { "" } else { "s" },
    ));

    // Post-init commands are declared in the descriptor but not executed;
    // surface them so the user can run them by hand.
    if !template.manifest.post_init.is_empty() {
        output.info("Next steps:");
        for cmd in &template.manifest.post_init {
            output.print(&format!("  {cmd}"));
        }
    }

    Ok(())
}

/// Reject names that would escape or mangle the destination path.
fn validate_project_name(name: &str) -> CliResult<()> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name == "." || name == ".." {
        Some("must not be a relative path component")
    } else if name.contains('/') || name.contains('\\') {
        Some("must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CliError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Conventional search paths, with config file overrides applied.
fn search_paths(cwd: &Path, config: &AppConfig) -> SearchPaths {
    let mut paths = SearchPaths::discover(cwd);
    if let Some(dir) = &config.templates.user_dir {
        paths.user_templates_dir = dir.clone();
    }
    if let Some(dir) = &config.templates.defaults_dir {
        paths.defaults_dir = dir.clone();
    }
    paths
}

// ── template list ─────────────────────────────────────────────────────────────

/// List templates from the user store, the repository defaults, and the
/// embedded bundle, in resolution order.
#[instrument(skip_all)]
pub fn list(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let paths = search_paths(&cwd, &config);

    let sections = [
        ("User templates", template_dirs(&paths.user_templates_dir)),
        ("Project defaults", template_dirs(&paths.defaults_dir)),
        (
            "Built-in",
            embedded_template_names()
                .into_iter()
                .map(String::from)
                .collect(),
        ),
    ];

    for (title, names) in sections {
        if names.is_empty() {
            continue;
        }
        output.header(title);
        for name in names {
            output.print(&format!("  {name}"));
        }
    }

    Ok(())
}

/// Names of subdirectories of `root` that carry a template descriptor.
fn template_dirs(root: &Path) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let Ok(entries) = std::fs::read_dir(root) else {
        return names;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() && path.join(wm_core::domain::MANIFEST_FILE).is_file() {
            if let Some(name) = path.file_name() {
                names.insert(name.to_string_lossy().into_owned());
            }
        }
    }
    names
}
