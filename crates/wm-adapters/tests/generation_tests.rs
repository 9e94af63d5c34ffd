//! End-to-end tests for the resolve → load → render pipeline against a real
//! filesystem.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use wm_adapters::{
    DirectoryLoader, EmbeddedLoader, LocalFilesystem, MemoryFilesystem, SearchPaths,
    TemplateResolver,
};
use wm_core::{
    application::{GenerateService, ports::TemplateLoader},
    domain::SubstitutionContext,
    error::WmError,
};

fn write_template(root: &Path, manifest: &str, files: &[(&str, &str)]) {
    fs::create_dir_all(root).unwrap();
    fs::write(root.join("template.json"), manifest).unwrap();
    for (rel, content) in files {
        let full = root.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
}

fn generate_into(template_dir: &Path, dest: &Path, vars: &[(&str, &str)]) -> Result<usize, WmError> {
    let template = DirectoryLoader::new(template_dir).load()?;
    let ctx: SubstitutionContext = vars.iter().copied().collect();
    GenerateService::new(Box::new(LocalFilesystem::new())).generate(&template, &ctx, dest)
}

/// Collect `(relative path, content)` for every file under `root`, sorted.
fn snapshot_tree(root: &Path) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            entries.push((rel, fs::read_to_string(entry.path()).unwrap()));
        }
    }
    entries.sort();
    entries
}

#[test]
fn generates_project_with_substituted_variables() {
    let source = TempDir::new().unwrap();
    write_template(
        source.path(),
        r#"{"name": "demo", "variables": ["ProjectName", "Author"]}"#,
        &[
            ("src/main.go.tmpl", "// by {{.Author}}\npackage main\n"),
            ("README.md.tmpl", "# {{.ProjectName}}\n"),
        ],
    );
    let dest = TempDir::new().unwrap();

    let written = generate_into(
        source.path(),
        dest.path(),
        &[("ProjectName", "demo"), ("Author", "Ada")],
    )
    .unwrap();

    assert_eq!(written, 2);
    assert_eq!(
        fs::read_to_string(dest.path().join("src/main.go")).unwrap(),
        "// by Ada\npackage main\n"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("README.md")).unwrap(),
        "# demo\n"
    );
    // Marker suffix never reaches the destination.
    assert!(!dest.path().join("src/main.go.tmpl").exists());
}

#[test]
fn abort_on_first_failure_leaves_earlier_files_in_place() {
    let source = TempDir::new().unwrap();
    // Output paths sort a < b < c; b has an unterminated delimiter.
    write_template(
        source.path(),
        r#"{"name": "partial"}"#,
        &[
            ("a.txt.tmpl", "first {{.X}}"),
            ("b.txt.tmpl", "broken {{.X"),
            ("c.txt.tmpl", "third"),
        ],
    );
    let dest = TempDir::new().unwrap();

    let err = generate_into(source.path(), dest.path(), &[("X", "v")]).unwrap_err();

    assert!(matches!(err, WmError::Parse { .. }));
    assert!(dest.path().join("a.txt").exists(), "first file was written");
    assert!(!dest.path().join("b.txt").exists());
    assert!(!dest.path().join("c.txt").exists(), "third file never attempted");
}

#[test]
fn rerun_overwrites_matching_files_and_keeps_unrelated_ones() {
    let source = TempDir::new().unwrap();
    write_template(
        source.path(),
        r#"{"name": "demo"}"#,
        &[("out.txt.tmpl", "value: {{.V}}")],
    );
    let dest = TempDir::new().unwrap();
    fs::write(dest.path().join("unrelated.txt"), "precious").unwrap();

    generate_into(source.path(), dest.path(), &[("V", "one")]).unwrap();
    generate_into(source.path(), dest.path(), &[("V", "two")]).unwrap();

    assert_eq!(
        fs::read_to_string(dest.path().join("out.txt")).unwrap(),
        "value: two"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("unrelated.txt")).unwrap(),
        "precious"
    );
}

#[test]
fn round_trip_produces_byte_identical_trees() {
    let source = TempDir::new().unwrap();
    write_template(
        source.path(),
        r#"{"name": "stable"}"#,
        &[
            ("src/main.go.tmpl", "// {{.Author}}\npackage main\n"),
            ("docs/guide.md.tmpl", "# Guide for {{.ProjectName}}\n"),
            ("plain.txt.tmpl", "no variables\n"),
        ],
    );
    let dest_a = TempDir::new().unwrap();
    let dest_b = TempDir::new().unwrap();
    let vars = [("Author", "Ada"), ("ProjectName", "stable")];

    generate_into(source.path(), dest_a.path(), &vars).unwrap();
    generate_into(source.path(), dest_b.path(), &vars).unwrap();

    assert_eq!(snapshot_tree(dest_a.path()), snapshot_tree(dest_b.path()));
}

#[test]
fn embedded_and_directory_loaders_are_equivalent() {
    // Mirror the bundled "go-file" template on disk and compare the loads.
    let source = TempDir::new().unwrap();
    let embedded = EmbeddedLoader::for_name("go-file").unwrap().load().unwrap();

    let mut files = Vec::new();
    let rebuilt: Vec<(String, String)> = embedded
        .files
        .iter()
        .map(|(path, content)| (format!("{path}.tmpl"), content.clone()))
        .collect();
    for (rel, content) in &rebuilt {
        files.push((rel.as_str(), content.as_str()));
    }
    write_template(
        source.path(),
        r#"{"name": "go-file", "description": "Single-file Go program", "variables": ["ProjectName", "Author"], "post_init": ["go mod tidy"]}"#,
        &files,
    );

    let from_dir = DirectoryLoader::new(source.path()).load().unwrap();

    assert_eq!(from_dir.files, embedded.files);
    assert_eq!(from_dir.manifest, embedded.manifest);
}

#[test]
fn memory_and_local_filesystems_agree() {
    let source = TempDir::new().unwrap();
    write_template(
        source.path(),
        r#"{"name": "demo"}"#,
        &[("src/app.go.tmpl", "package {{.ProjectName}}\n")],
    );
    let template = DirectoryLoader::new(source.path()).load().unwrap();
    let ctx = SubstitutionContext::new().with("ProjectName", "demo");

    let dest = TempDir::new().unwrap();
    GenerateService::new(Box::new(LocalFilesystem::new()))
        .generate(&template, &ctx, dest.path())
        .unwrap();

    let memory = MemoryFilesystem::new();
    GenerateService::new(Box::new(memory.clone()))
        .generate(&template, &ctx, dest.path())
        .unwrap();

    let on_disk = fs::read_to_string(dest.path().join("src/app.go")).unwrap();
    let in_memory = memory.read_file(&dest.path().join("src/app.go")).unwrap();
    assert_eq!(on_disk, in_memory);
}

#[test]
fn resolver_feeds_generation_end_to_end() {
    let user = TempDir::new().unwrap();
    let template_dir = user.path().join("mylib");
    write_template(
        &template_dir,
        r#"{"name": "mylib"}"#,
        &[("lib.go.tmpl", "package {{.ProjectName}}\n")],
    );

    let resolver = TemplateResolver::new(SearchPaths {
        user_templates_dir: user.path().to_path_buf(),
        defaults_dir: user.path().join("no-defaults"),
    });
    let template = resolver.resolve("mylib", None).unwrap();

    let dest = TempDir::new().unwrap();
    let ctx = SubstitutionContext::new().with("ProjectName", "mylib");
    GenerateService::new(Box::new(LocalFilesystem::new()))
        .generate(&template, &ctx, dest.path())
        .unwrap();

    assert_eq!(
        fs::read_to_string(dest.path().join("lib.go")).unwrap(),
        "package mylib\n"
    );
}
