//! Test helper utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A dashkit command isolated from the user's config, with color off.
pub fn dashkit(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dashkit").unwrap();
    cmd.arg("--config")
        .arg(config_path(temp))
        .arg("--color")
        .arg("never")
        .env_remove("RUST_LOG");
    cmd
}

/// Like [`dashkit`] but with color codes forced on.
pub fn dashkit_colored(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dashkit").unwrap();
    cmd.arg("--config")
        .arg(config_path(temp))
        .arg("--color")
        .arg("always")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// Where the isolated config lives (not created until written).
pub fn config_path(temp: &TempDir) -> PathBuf {
    temp.path().join("config.toml")
}

/// Write `contents` as the isolated config file.
pub fn write_config(temp: &TempDir, contents: &str) -> PathBuf {
    let path = config_path(temp);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

/// Run and return stdout, asserting success.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}
