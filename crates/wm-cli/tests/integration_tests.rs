//! Integration tests driving the `wm` binary end to end.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command with a hermetic HOME so the per-user template store on the
/// machine running the tests never leaks into resolution.
fn wm(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wm").unwrap();
    cmd.env("HOME", home.path());
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

// ── surface ───────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    wm(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("template"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_crate_version() {
    let home = TempDir::new().unwrap();
    wm(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    let home = TempDir::new().unwrap();
    wm(&home).assert().failure().code(2);
}

#[test]
fn run_prints_banner() {
    let home = TempDir::new().unwrap();
    wm(&home)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running the WM API"));
}

#[test]
fn completions_emit_bash_script() {
    let home = TempDir::new().unwrap();
    wm(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_wm"));
}

// ── template init ─────────────────────────────────────────────────────────────

#[test]
fn init_from_embedded_template_creates_project() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["template", "init", "-t", "go-file", "-n", "myproj", "-a", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("myproj"));

    let main_go = work.path().join("myproj").join("main.go");
    let content = fs::read_to_string(&main_go).unwrap();
    assert!(content.contains("Ada"), "author substituted: {content}");
    assert!(!content.contains("{{"), "no delimiters survive: {content}");
}

#[test]
fn init_from_explicit_path_uses_that_template() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    fs::write(
        source.path().join("template.json"),
        r#"{"name": "custom"}"#,
    )
    .unwrap();
    fs::write(
        source.path().join("hello.txt.tmpl"),
        "hello {{.ProjectName}}",
    )
    .unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["template", "init", "-n", "demo", "--from"])
        .arg(source.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(work.path().join("demo/hello.txt")).unwrap(),
        "hello demo"
    );
}

#[test]
fn init_missing_explicit_path_fails_without_fallback() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    wm(&home)
        .current_dir(work.path())
        .args([
            "template",
            "init",
            "-t",
            "go-file",
            "-n",
            "demo",
            "--from",
            "/definitely/not/here",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("remote clone is not implemented"));

    assert!(!work.path().join("demo").exists());
}

#[test]
fn init_unknown_template_reports_attempted_locations() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["template", "init", "-t", "ghost", "-n", "demo"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("ghost"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn init_rejects_invalid_project_name() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["template", "init", "-n", "a/b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn init_prefers_user_store_over_embedded() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    // Shadow the bundled "go-file" template from the per-user store.
    let store = home.path().join(".wm/templates/go-file");
    fs::create_dir_all(&store).unwrap();
    fs::write(store.join("template.json"), r#"{"name": "go-file"}"#).unwrap();
    fs::write(store.join("shadow.txt.tmpl"), "shadowed").unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["template", "init", "-t", "go-file", "-n", "demo"])
        .assert()
        .success();

    assert!(work.path().join("demo/shadow.txt").exists());
    assert!(!work.path().join("demo/main.go").exists());
}

// ── template list ─────────────────────────────────────────────────────────────

#[test]
fn list_shows_embedded_templates() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go-file"));
}

#[test]
fn list_includes_user_store_templates() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let store = home.path().join(".wm/templates/mylib");
    fs::create_dir_all(&store).unwrap();
    fs::write(store.join("template.json"), r#"{"name": "mylib"}"#).unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["template", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mylib"));
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn missing_explicit_config_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    wm(&home)
        .args(["--config", "/nonexistent/wm.toml", "template", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_user_dir_override_is_honoured() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let store = TempDir::new().unwrap();

    let template = store.path().join("cfg-template");
    fs::create_dir_all(&template).unwrap();
    fs::write(template.join("template.json"), r#"{"name": "cfg-template"}"#).unwrap();

    let config = work.path().join("wm.toml");
    fs::write(
        &config,
        format!("[templates]\nuser_dir = {:?}\n", store.path()),
    )
    .unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["--config"])
        .arg(&config)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cfg-template"));
}

// ── quiet mode ────────────────────────────────────────────────────────────────

#[test]
fn quiet_suppresses_success_output() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    wm(&home)
        .current_dir(work.path())
        .args(["--quiet", "template", "init", "-t", "go-file", "-n", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(work.path().join("demo/main.go").exists());
}
