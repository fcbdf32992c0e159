use std::path::Path;

use assert_cmd::Command;

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run(args: &[&str]) -> (bool, String, String) {
    let mut cmd = Command::cargo_bin("gbk2utf8").expect("bin");
    let assert = cmd.args(args).assert();
    let ok = assert.get_output().status.success();
    let out =
        String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let err =
        String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    (ok, out, err)
}

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn convert(
    input: &Path,
    output: &Path,
    extra: &[&str],
) -> (bool, String, String) {
    let input_s = input.to_string_lossy().into_owned();
    let output_s = output.to_string_lossy().into_owned();
    let mut args = vec![input_s.as_str(), output_s.as_str()];
    args.extend_from_slice(extra);
    run(&args)
}
