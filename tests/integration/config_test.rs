//! Config subcommand tests

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use dashkit::Config;

use super::helpers::{config_path, dashkit, stdout_of, write_config};

#[test]
fn config_path_prints_the_flag_value() {
    let temp = TempDir::new().unwrap();
    let out = stdout_of(dashkit(&temp).args(["config", "path"]));
    assert_eq!(out.trim_end(), config_path(&temp).display().to_string());
}

#[test]
fn config_init_creates_default_file() {
    let temp = TempDir::new().unwrap();
    dashkit(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let loaded = Config::load_from(&config_path(&temp)).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn config_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "[box]\nstyle = \"double\"\n");

    dashkit(&temp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    let contents = fs::read_to_string(config_path(&temp)).unwrap();
    assert!(contents.contains("double"));
}

#[test]
fn config_init_force_repairs_a_broken_file() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "[spark]\ncolor = \"sparkly\"\n");

    dashkit(&temp)
        .args(["spark", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spark.color"));

    dashkit(&temp)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    dashkit(&temp).args(["spark", "1", "2"]).assert().success();
}

#[test]
fn config_show_reflects_file_values() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "[table]\nseparator = \" | \"\n");

    let out = stdout_of(dashkit(&temp).args(["config", "show"]));
    assert!(out.starts_with(&format!("# {}\n", config_path(&temp).display())));
    assert!(out.contains("[table]"));
    assert!(out.contains("separator = \" | \""));
    assert!(out.contains("[box]"));
    assert!(out.contains("style = \"rounded\""));
}
