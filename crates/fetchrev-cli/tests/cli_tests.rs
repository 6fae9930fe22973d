//! Integration tests for the fetchrev binary.
//!
//! Commands that would reach a VCS run with an empty `PATH`, so every probe
//! fails to spawn and no test touches the network.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config file and `.env`.
fn fetchrev(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("fetchrev");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(temp.path().join("config.toml"));
    cmd
}

/// Same, with no program resolvable on `PATH`.
fn offline(temp: &TempDir) -> Command {
    let bin = temp.path().join("empty-bin");
    std::fs::create_dir_all(&bin).unwrap();
    let mut cmd = fetchrev(temp);
    cmd.env("PATH", &bin);
    cmd
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    fetchrev(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clone"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("backends"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    fetchrev(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn backends_list_in_registry_order() {
    let temp = TempDir::new().unwrap();
    fetchrev(&temp)
        .args(["backends", "--format", "list"])
        .assert()
        .success()
        .stdout("git\nhg\nbzr\nsvn\n");
}

#[test]
fn backends_json_is_machine_readable() {
    let temp = TempDir::new().unwrap();
    let out = fetchrev(&temp)
        .args(["backends", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let backends = value.as_array().unwrap();
    assert_eq!(backends.len(), 4);
    assert_eq!(backends[1]["tag"], "hg");
    assert_eq!(backends[1]["program"], "hg");
    assert_eq!(backends[3]["update_template"], "svn up -r{tag}");
}

#[test]
fn unknown_vcs_is_a_usage_error_naming_the_value() {
    let temp = TempDir::new().unwrap();
    fetchrev(&temp)
        .args(["detect", "example.org/x", "--vcs", "cvs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cvs"));
}

#[test]
fn address_with_scheme_is_rejected() {
    let temp = TempDir::new().unwrap();
    fetchrev(&temp)
        .args(["clone", "https://example.org/x", "--tag", "v1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("scheme"));
}

#[test]
fn unreachable_repository_exits_not_found() {
    let temp = TempDir::new().unwrap();
    offline(&temp)
        .args(["detect", "hg.example.org/lib", "--vcs", "hg"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no transport scheme found"))
        .stderr(predicate::str::contains("https, http, ssh"));
}

#[test]
fn failed_detection_creates_no_root() {
    let temp = TempDir::new().unwrap();
    offline(&temp)
        .args(["clone", "example.org/acme/widget", "--tag", "v1.0", "--root", "deps"])
        .assert()
        .code(3);

    assert!(!temp.path().join("deps").exists());
}

#[test]
fn update_of_missing_working_copy_fails() {
    let temp = TempDir::new().unwrap();
    offline(&temp)
        .args(["update", "nowhere", "--vcs", "git", "--tag", "v2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn config_file_sets_default_vcs() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[defaults]\nvcs = \"bzr\"\n").unwrap();

    fetchrev(&temp)
        .args(["config", "get", "defaults.vcs"])
        .assert()
        .success()
        .stdout("bzr\n");
}

#[test]
fn environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[defaults]\nvcs = \"bzr\"\n").unwrap();

    fetchrev(&temp)
        .env("FETCHREV__DEFAULTS__VCS", "svn")
        .args(["config", "get", "defaults.vcs"])
        .assert()
        .success()
        .stdout("svn\n");
}

#[test]
fn configured_default_vcs_drives_detection() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[defaults]\nvcs = \"svn\"\n").unwrap();

    offline(&temp)
        .args(["detect", "svn.example.org/trunk"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("svn"));
}

#[test]
fn unknown_config_key_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    fetchrev(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("defaults.lang"));
}

#[test]
fn malformed_config_file_exits_4() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[defaults\n").unwrap();

    fetchrev(&temp).arg("backends").assert().code(4);
}

#[test]
fn init_writes_config_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    fetchrev(&temp).arg("init").assert().success();
    assert!(std::fs::read_to_string(&path).unwrap().contains("vcs = \"git\""));

    fetchrev(&temp)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    fetchrev(&temp).args(["init", "--force"]).assert().success();
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    fetchrev(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fetchrev"));
}
