//! Inline snapshots of rendered widgets
//!
//! Runs the binary with color disabled so the snapshots show layout only.

use tempfile::TempDir;

use super::helpers::{dashkit, stdout_of};

#[test]
fn snapshot_box_with_title() {
    let temp = TempDir::new().unwrap();
    let out = stdout_of(
        dashkit(&temp).args(["box", "--title", "Disk", "--width", "20", "/ 41%", "/home 93%"]),
    );
    insta::assert_snapshot!(out, @r"
    ╭─ Disk ───────────╮
    │/ 41%             │
    │/home 93%         │
    ╰──────────────────╯
    ");
}

#[test]
fn snapshot_bars_at_several_levels() {
    let temp = TempDir::new().unwrap();
    let out: String = ["0", "73", "100"]
        .iter()
        .map(|&p| {
            stdout_of(dashkit(&temp).args([
                "bar", p, "--width", "24", "--label", "mem", "--style", "block",
            ]))
        })
        .collect();
    insta::assert_snapshot!(out, @r"
    mem ░░░░░░░░░░░░░░░░░░░░░░░░   0%
    mem █████████████████▌░░░░░░  73%
    mem ████████████████████████ 100%
    ");
}

#[test]
fn snapshot_table_from_stdin() {
    let temp = TempDir::new().unwrap();
    let out = stdout_of(
        dashkit(&temp)
            .args(["table", "-c", "NAME:flex:min=4", "-c", "CPU:right", "--width", "20"])
            .write_stdin("nginx\t2.5%\npostgres\t41.0%\n"),
    );
    insta::assert_snapshot!(out, @r"
    NAME             CPU
    ─────────────  ─────
    nginx           2.5%
    postgres       41.0%
    ");
}
