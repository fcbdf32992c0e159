#[path = "../test_support/mod.rs"]
mod util;

use std::fs;

use tempfile::tempdir;

#[test]
fn missing_input_fails_with_stderr_and_no_output() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("out.txt");

    let (ok, _out, err) = util::convert(&input, &output, &[]);
    assert!(!ok, "a missing input should fail the process");
    assert!(
        err.contains("absent.txt"),
        "stderr should name the input: {err}"
    );
    assert!(
        !output.exists(),
        "a failed conversion must not create the output file"
    );
}

#[test]
fn no_fail_reports_but_exits_zero() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("out.txt");

    let (ok, _out, err) = util::convert(&input, &output, &["--no-fail"]);
    assert!(ok, "--no-fail should keep the exit status at zero");
    assert!(
        err.contains("conversion failed"),
        "the failure must still be reported: {err}"
    );
    assert!(!output.exists());
}

#[test]
fn unreadable_input_fails_cleanly() {
    // A directory exists but cannot be read as a file, which exercises the
    // same open-or-read failure path as a permission error.
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("out.txt");

    let (ok, _out, err) = util::convert(dir.path(), &output, &[]);
    assert!(!ok, "reading a directory should fail the process");
    assert!(!err.trim().is_empty(), "stderr should describe the failure");
    assert!(!output.exists());
}
