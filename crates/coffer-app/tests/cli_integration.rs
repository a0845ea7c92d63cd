//! Integration tests for the coffer CLI binary.
//!
//! Each test gets its own temp profile via a generated config file.

use std::path::PathBuf;
use std::process::{Command, Stdio};

fn temp_root(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("coffer-test-{label}-{}", std::process::id()))
}

fn write_fixture(root: &PathBuf) -> (PathBuf, PathBuf) {
    std::fs::create_dir_all(root).unwrap();
    let config_path = root.join("config.toml");
    let config_content = format!(
        "[storage]\ndata_dir = \"{}\"\n",
        root.join("profile").display()
    );
    std::fs::write(&config_path, config_content).unwrap();
    let password_path = root.join("pw.txt");
    std::fs::write(&password_path, "hunter2\n").unwrap();
    (config_path, password_path)
}

fn coffer_cmd(config: &PathBuf) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coffer"));
    cmd.arg("--config").arg(config);
    cmd
}

fn run(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if !output.status.success() {
        panic!(
            "Command failed with status {:?}\nstdout: {stdout}\nstderr: {stderr}",
            output.status
        );
    }
    stdout
}

#[test]
fn init_status_reset_round_trip() {
    let root = temp_root("roundtrip");
    let (config, pw) = write_fixture(&root);

    let out = run(coffer_cmd(&config)
        .arg("init")
        .arg("--password-file")
        .arg(&pw));
    assert!(out.contains("Credentials written"), "Got: {out}");

    let out = run(coffer_cmd(&config).arg("status"));
    assert!(out.contains("credentials: present"), "Got: {out}");

    let out = run(coffer_cmd(&config).arg("reset").arg("--yes"));
    assert!(out.contains("Profile reset"), "Got: {out}");

    let out = run(coffer_cmd(&config).arg("status"));
    assert!(out.contains("credentials: none"), "Got: {out}");

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn second_init_requires_reset() {
    let root = temp_root("reinit");
    let (config, pw) = write_fixture(&root);

    run(coffer_cmd(&config)
        .arg("init")
        .arg("--password-file")
        .arg(&pw));

    let output = coffer_cmd(&config)
        .arg("init")
        .arg("--password-file")
        .arg(&pw)
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exist"), "Got: {stderr}");

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn unconfirmed_reset_keeps_the_record() {
    let root = temp_root("unconfirmed");
    let (config, pw) = write_fixture(&root);
    run(coffer_cmd(&config)
        .arg("init")
        .arg("--password-file")
        .arg(&pw));

    // Closed stdin reads as an empty answer, which does not confirm.
    let output = coffer_cmd(&config)
        .arg("reset")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());

    let out = run(coffer_cmd(&config).arg("status"));
    assert!(out.contains("credentials: present"), "Got: {out}");

    let _ = std::fs::remove_dir_all(root);
}
