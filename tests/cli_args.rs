//! Tests for command-line handling of the built binary.

mod common;

use std::process::Command;
use tempfile::TempDir;

fn ventured_cmd() -> (Command, TempDir) {
    // Point at an absent file so the user's own config never leaks in.
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ventured"));
    cmd.arg("--config").arg(temp_dir.path().join("config.toml"));
    (cmd, temp_dir)
}

#[test]
fn help_lists_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_ventured"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for flag in ["--config", "--light", "--no-rain", "--fps", "--print-config", "--print-links"] {
        assert!(stdout.contains(flag), "missing {flag}");
    }
}

#[test]
fn print_links_shows_targets() {
    let (mut cmd, _dir) = ventured_cmd();
    let output = cmd.arg("--print-links").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("apply: https://apply.venturedglobal.org"));
    assert!(stdout.contains("contact: mailto:contact@venturedglobal.org"));
    assert!(stdout.contains("partnership: mailto:partnerships@venturedglobal.org?cc="));
    assert!(stdout.contains("subject=%5BYOUR%20COMPANY%20NAME%5D%20X%20VenturEd"));
}

#[test]
fn print_config_applies_overrides() {
    let (mut cmd, _dir) = ventured_cmd();
    let output = cmd
        .args(["--print-config", "--light", "--no-rain", "--fps", "12"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fps = 12"));
    assert!(stdout.contains("color_mode = \"light\""));
    assert!(stdout.contains("rain = false"));
}

#[test]
fn zero_fps_exits_with_error() {
    let (mut cmd, _dir) = ventured_cmd();
    let output = cmd
        .args(["--print-config", "--fps", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"));
}
