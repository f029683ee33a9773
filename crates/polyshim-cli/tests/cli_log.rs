use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn cli_log_prints_one_line_per_argument() {
    let mut cmd = cargo_bin_cmd!("polyshim");
    cmd.args(["log", "hello", "42", "[1,null,3]", r#"{"a":1}"#, "true", "1e21"]);

    cmd.assert()
        .success()
        .stdout("hello\n42\n1,,3\n[object Object]\ntrue\n1e+21\n");
}

#[test]
fn cli_log_requires_arguments() {
    let mut cmd = cargo_bin_cmd!("polyshim");
    cmd.arg("log");
    cmd.assert().failure().code(2);
}
