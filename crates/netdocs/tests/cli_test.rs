//! Integration tests for the `netdocs` CLI binary.
//!
//! Every test runs against a temp directory with a copy of the shared
//! network fixture; nothing touches the user's settings.
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

const FIXTURE: &str = include_str!("../../netdocs-core/tests/fixtures/network.json");

/// Build a [`Command`] for the `netdocs` binary with env isolation.
fn netdocs_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("netdocs");
    cmd.env("HOME", "/tmp/netdocs-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/netdocs-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("NETDOCS_SETTINGS")
        .env_remove("NETDOCS_NETWORK")
        .env_remove("NETDOCS_PUBLIC_DIR")
        .env_remove("NETDOCS_PRIVATE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `network` into `dir` and return the paths the CLI is pointed at.
fn workspace(dir: &Path, network: &str) -> (PathBuf, PathBuf, PathBuf) {
    let config = dir.join("network-config.json");
    fs::write(&config, network).unwrap();
    (config, dir.join("docs"), dir.join("private"))
}

fn generate(dir: &Path, network: &str, extra: &[&str]) -> assert_cmd::Command {
    let (config, public, private) = workspace(dir, network);
    let mut cmd = netdocs_cmd();
    cmd.arg("generate")
        .arg("--config")
        .arg(&config)
        .arg("--public-dir")
        .arg(&public)
        .arg("--private-dir")
        .arg(&private)
        .args(extra);
    cmd
}

fn html_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "html")
        })
        .count()
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = netdocs_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_flag() {
    netdocs_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("generate")
            .and(predicate::str::contains("check"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    netdocs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netdocs"));
}

#[test]
fn test_completions_bash() {
    netdocs_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Generate ────────────────────────────────────────────────────────

#[test]
fn test_generate_writes_both_trees() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"));

    let public = dir.path().join("docs");
    let private = dir.path().join("private");
    assert_eq!(html_files(&public), 6);
    assert_eq!(html_files(&private), 9);
    assert!(public.join("css/style.css").is_file());
    assert!(private.join("css/style.css").is_file());
    assert!(private.join("screenshots").is_dir());

    let index = fs::read_to_string(public.join("index.html")).unwrap();
    assert!(!index.contains("X7y!9qZ"));
    assert!(!index.contains("<!-- private:begin -->"));
}

#[test]
fn test_generate_public_only() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &["--public"]).assert().success();

    assert_eq!(html_files(&dir.path().join("docs")), 6);
    assert!(!dir.path().join("private").exists());
}

#[test]
fn test_generate_quiet_prints_no_table() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &["--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_public_and_private_flags_conflict() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &["--public", "--private"])
        .assert()
        .code(2);
}

#[test]
fn test_deploy_with_private_only_and_no_public_tree_warns() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &["--private", "--deploy", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("deploy skipped"));
    assert_eq!(html_files(&dir.path().join("private")), 9);
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_same_output_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (config, public, _) = workspace(dir.path(), FIXTURE);
    netdocs_cmd()
        .arg("generate")
        .arg("--config")
        .arg(&config)
        .arg("--public-dir")
        .arg(&public)
        .arg("--private-dir")
        .arg(&public)
        .assert()
        .code(2);
}

#[test]
fn test_missing_screenshot_command_is_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &["--screenshots"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));
    assert_eq!(html_files(&dir.path().join("private")), 9);
}

#[test]
fn test_screenshots_with_public_only_still_publishes() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &["--public", "--screenshots"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));
    assert_eq!(html_files(&dir.path().join("docs")), 6);
}

#[test]
fn test_private_dir_inside_public_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (config, public, _) = workspace(dir.path(), FIXTURE);
    netdocs_cmd()
        .arg("generate")
        .arg("--config")
        .arg(&config)
        .arg("--public-dir")
        .arg(&public)
        .arg("--private-dir")
        .arg(public.join("internal"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("separate trees"));
    assert!(!public.exists());
}

// ── Failures ────────────────────────────────────────────────────────

#[test]
fn test_missing_network_document_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    netdocs_cmd()
        .arg("generate")
        .arg("--config")
        .arg(dir.path().join("absent.json"))
        .arg("--public-dir")
        .arg(dir.path().join("docs"))
        .arg("--private-dir")
        .arg(dir.path().join("private"))
        .assert()
        .code(3);
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_missing_settings_file_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    generate(dir.path(), FIXTURE, &[])
        .arg("--settings")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(3);
}

#[test]
fn test_dangling_reference_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    let broken = FIXTURE.replace("\"uplink\": \"usg\"", "\"uplink\": \"nowhere\"");
    generate(dir.path(), &broken, &[]).assert().code(3);
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_leak_exits_with_leak_code_and_writes_nothing_public() {
    let dir = tempfile::tempdir().unwrap();
    let leaking = FIXTURE.replace("\"USG 3P\"", "\"kpw12\"").replace(
        "{ \"label\": \"UniFi Cloud\", \"value\": \"owner@mailbox.example\", \"kind\": \"email\" },\n    { \"label\": \"2FA Recovery\", \"value\": \"ABCD-EFGH-IJKL-MNOP\", \"kind\": \"recovery_code\" }",
        "{ \"label\": \"long\", \"value\": \"k••••••••\" },\n    { \"label\": \"short\", \"value\": \"pw12\" }",
    );
    assert_ne!(leaking, FIXTURE);

    generate(dir.path(), &leaking, &["--public"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("index.html"));
    assert!(!dir.path().join("docs").exists());
}

// ── Check ───────────────────────────────────────────────────────────

#[test]
fn test_check_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (config, public, private) = workspace(dir.path(), FIXTURE);
    netdocs_cmd()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .arg("--public-dir")
        .arg(&public)
        .arg("--private-dir")
        .arg(&private)
        .assert()
        .success()
        .stdout(predicate::str::contains("mongodb-commands.html"));
    assert!(!public.exists());
    assert!(!private.exists());
}
