// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::ProcessError;

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("python2.7")
        .arg("-c")
        .arg("import sys")
        .args(["a.py", "b.pyc"]);
    assert_eq!(
        builder.command_line(),
        "python2.7 -c \"import sys\" a.py b.pyc"
    );
}

#[test]
fn test_display_name_is_program_stem() {
    assert_eq!(ProcessBuilder::new("/opt/py27/bin/python").display_name(), "python");
    assert_eq!(ProcessBuilder::new("python2.7").display_name(), "python2");
}

#[test]
fn test_which_missing_executable() {
    let err = ProcessBuilder::which("definitely-not-a-real-program-wotmod").unwrap_err();
    assert!(matches!(err, ProcessError::ExecutableNotFound { ref name } if name == "definitely-not-a-real-program-wotmod"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_captures_stdout() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo hello"])
        .capture_output()
        .run()
        .await
        .unwrap();
    assert!(output.success());
    assert_eq!(output.stdout().trim(), "hello");
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_nonzero_exit_is_error() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .quiet()
        .run()
        .await
        .unwrap_err();
    let process_err = err.downcast_ref::<ProcessError>().unwrap();
    assert!(matches!(process_err, ProcessError::NonZeroExit { code: 3, .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_allow_failure() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo oops >&2; exit 2"])
        .capture_stderr()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .unwrap();
    assert_eq!(output.exit_code(), 2);
    assert_eq!(output.stderr().trim(), "oops");
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_in_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker"), b"x").unwrap();
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "ls"])
        .cwd(dir.path())
        .capture_stdout()
        .run()
        .await
        .unwrap();
    assert!(output.stdout().contains("marker"));
}

#[tokio::test]
async fn test_spawn_failure() {
    let err = ProcessBuilder::new("/nonexistent/wotmod/interpreter")
        .run()
        .await
        .unwrap_err();
    let process_err = err.downcast_ref::<ProcessError>().unwrap();
    assert!(matches!(process_err, ProcessError::SpawnFailed { .. }));
}
