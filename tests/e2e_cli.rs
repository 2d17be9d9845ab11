//! CLI end-to-end tests
//!
//! Tests for the gifforge command-line interface.

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the gifforge binary
#[allow(deprecated)]
fn gifforge_cmd() -> Command {
    Command::cargo_bin("gifforge").unwrap()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = gifforge_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = gifforge_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gifforge"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = gifforge_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_check_tools_command() {
    let mut cmd = gifforge_cmd();
    cmd.arg("check-tools").assert().success().stdout(
        predicate::str::contains("ffmpeg").and(predicate::str::contains("convert")),
    );
}

#[test]
fn test_cli_convert_help() {
    let mut cmd = gifforge_cmd();
    cmd.args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert an animated GIF"))
        .stdout(predicate::str::contains("--strategy"));
}

#[test]
fn test_cli_probe_prints_dimensions() {
    let dir = tempdir().unwrap();
    let gif = common::write_gif(dir.path(), "anim.gif", 24, 12, 2);

    let mut cmd = gifforge_cmd();
    cmd.arg("probe")
        .arg(&gif)
        .assert()
        .success()
        .stdout(predicate::str::contains("24x12"));
}

#[test]
fn test_cli_probe_json() {
    let dir = tempdir().unwrap();
    let gif = common::write_gif(dir.path(), "anim.gif", 10, 20, 1);

    let output = gifforge_cmd().arg("probe").arg(&gif).arg("--json").output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["width"], 10);
    assert_eq!(json["height"], 20);
}

#[test]
fn test_cli_probe_garbage_exits_with_decode_code() {
    let dir = tempdir().unwrap();
    let bogus = dir.path().join("bogus.gif");
    fs::write(&bogus, b"definitely not a gif").unwrap();

    let mut cmd = gifforge_cmd();
    cmd.arg("probe").arg(&bogus).assert().code(3);
}

#[test]
fn test_cli_probe_nonexistent_file() {
    let mut cmd = gifforge_cmd();
    cmd.args(["probe", "/nonexistent/file.gif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_convert_rejects_oversized_input() {
    let dir = tempdir().unwrap();
    let gif = common::write_gif(dir.path(), "big.gif", 64, 8, 2);
    let out = dir.path().join("big.mp4");

    let mut cmd = gifforge_cmd();
    cmd.arg("convert")
        .arg(&gif)
        .args(["--max-width", "32", "-o"])
        .arg(&out)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("width too large"));
    assert!(!out.exists());
}

#[test]
fn test_cli_convert_unknown_strategy() {
    let dir = tempdir().unwrap();
    let gif = common::write_gif(dir.path(), "anim.gif", 8, 8, 1);

    let mut cmd = gifforge_cmd();
    cmd.arg("convert")
        .arg(&gif)
        .args(["--strategy", "webm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn test_cli_convert_missing_tool_exits_with_tool_code() {
    let dir = tempdir().unwrap();
    let gif = common::write_gif(dir.path(), "anim.gif", 8, 8, 2);

    // An empty PATH guarantees neither ffmpeg nor convert is found.
    let mut cmd = gifforge_cmd();
    cmd.env("PATH", "")
        .current_dir(dir.path())
        .arg("convert")
        .arg(&gif)
        .args(["--strategy", "ogv"])
        .assert()
        .code(5);
    assert!(!dir.path().join("anim.ogv").exists());
}

#[test]
fn test_cli_validate_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("gifforge.toml");
    fs::write(&config, "[limits]\nmax_width = 320\nmax_height = 240\n").unwrap();

    let mut cmd = gifforge_cmd();
    cmd.arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("320x240"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("gifforge.toml");
    fs::write(&config, "[staging]\nprefix = \"\"\n").unwrap();

    let mut cmd = gifforge_cmd();
    cmd.arg("validate").arg(&config).assert().failure();
}

#[test]
fn test_cli_convert_with_real_tools() {
    if !common::tools_available() {
        eprintln!("skipping: ffmpeg or convert not installed");
        return;
    }

    let dir = tempdir().unwrap();
    let gif = common::write_gif(dir.path(), "anim.gif", 31, 17, 4);

    let mut cmd = gifforge_cmd();
    cmd.arg("convert")
        .arg(&gif)
        .args(["--strategy", "frames-mp4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anim.mp4"));

    assert!(fs::metadata(dir.path().join("anim.mp4")).unwrap().len() > 0);
}
