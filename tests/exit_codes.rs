//! Tests for process exit status and diagnostics.

use std::process::Command;

#[test]
fn test_unknown_output_exits_non_zero_without_output() {
    // Mode validation happens before any DNS traffic, so this runs offline
    let output = Command::new(env!("CARGO_BIN_EXE_txt2route"))
        .args(["--output", "bogus-mode", "--domain", "a.invalid"])
        .output()
        .expect("failed to run txt2route");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no output should be rendered");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown output type: bogus-mode"),
        "stderr should name the mode: {stderr}"
    );
}

#[test]
fn test_help_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_txt2route"))
        .arg("--help")
        .output()
        .expect("failed to run txt2route");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--route-instance-zone"));
}
