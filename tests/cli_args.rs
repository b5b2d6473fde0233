//! Tests for the binary's argument handling and exit codes.

use std::process::Command;

fn sassbatch_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sassbatch"))
}

#[test]
fn test_help_lists_task_options() {
    let output = sassbatch_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--bundle-exec"));
    assert!(stdout.contains("--banner"));
    assert!(stdout.contains("SRC:DEST"));
}

#[test]
fn test_mapping_without_destination_is_rejected() {
    let output = sassbatch_cmd()
        .arg("style.scss")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected SRC:DEST"));
}

#[test]
fn test_explicit_missing_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = sassbatch_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Could not load configuration"));
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_missing_sass_exits_before_compiling() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.scss"), "a { b: c }").unwrap();

    let output = sassbatch_cmd()
        .current_dir(dir.path())
        .env("PATH", "")
        .arg("a.scss:out/a.css")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("You need to have Ruby and Sass installed"));
    assert!(!dir.path().join("out").exists());
}

#[cfg(unix)]
#[test]
fn test_failing_sass_is_reported_once() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("bin");
    std::fs::create_dir(&bin).unwrap();
    let sass = bin.join("sass");
    std::fs::write(&sass, "#!/bin/sh\nexit 3\n").unwrap();
    std::fs::set_permissions(&sass, std::fs::Permissions::from_mode(0o755)).unwrap();
    std::fs::write(dir.path().join("a.scss"), "a { b: c }").unwrap();

    let output = sassbatch_cmd()
        .current_dir(dir.path())
        .env("PATH", &bin)
        .env_remove("RUST_LOG")
        .arg("a.scss:out/a.css")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Exited with error code 3").count(), 1, "stderr: {stderr}");
}
