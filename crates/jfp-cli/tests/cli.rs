//! Black-box tests for the `jfp` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::tempdir;

const FOO_BAR: &str = r#"{"foo": "bar"}"#;
const FOO_BAR_FP: &str = "jfpv1$sha256$d119f4d8b802091520162b78f57a995a9ecbc88b20573b0c7e474072b1710d9f";
const FIXTURE_FP: &str = "jfpv1$sha256$4009e9440b5ebdfb10fc1d8f1e851151d6630a9abc041fd6f633717c18f7b8c5";

fn jfp() -> Command {
    let mut cmd = Command::cargo_bin("jfp").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().unwrap();
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn create_from_stdin() {
    jfp()
        .arg("create")
        .write_stdin(FOO_BAR)
        .assert()
        .success()
        .stdout(format!("{FOO_BAR_FP}\n"));
}

#[test]
fn create_from_file_is_key_order_independent() {
    for name in ["jfpv1_obj_1.json", "jfpv1_obj_2.json"] {
        jfp()
            .arg("create")
            .arg(fixture(name))
            .assert()
            .success()
            .stdout(format!("{FIXTURE_FP}\n"));
    }
}

#[test]
fn create_json_output_and_hash_selection() {
    let out = stdout_of(
        jfp()
            .args(["--json", "create", "-", "--hash", "sha512"])
            .write_stdin(FOO_BAR),
    );
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let fp = v["fingerprint"].as_str().unwrap();
    assert!(fp.starts_with("jfpv1$sha512$"));
    assert_eq!(fp.len(), "jfpv1$sha512$".len() + 128);
}

#[test]
fn create_errors_exit_2() {
    let assert = jfp()
        .args(["create", "--hash", "md5"])
        .write_stdin(FOO_BAR)
        .assert()
        .code(2);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(stderr.contains("md5"), "{stderr}");

    jfp().args(["create", "--jfp-version", "2"]).write_stdin(FOO_BAR).assert().code(2);
    jfp().arg("create").write_stdin("{\"foo\": bar}").assert().code(2);
    jfp().arg("create").write_stdin(vec![b'"', 0xff, b'"']).assert().code(2);
    jfp().args(["create", "does/not/exist.json"]).assert().code(2);
}

#[test]
fn decode_plain_and_json() {
    jfp()
        .args(["decode", FOO_BAR_FP])
        .assert()
        .success()
        .stdout("1\nsha256\nd119f4d8b802091520162b78f57a995a9ecbc88b20573b0c7e474072b1710d9f\n");

    let out = stdout_of(jfp().args(["--json", "decode", FOO_BAR_FP]));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["version"], 1);
    assert_eq!(v["hash_function"], "sha256");

    jfp().args(["decode", "invalid fingerprint"]).assert().code(2);
}

#[test]
fn match_exit_codes() {
    jfp()
        .args(["match", "--target", FOO_BAR_FP])
        .write_stdin(r#"{ "foo" : "bar" }"#)
        .assert()
        .success()
        .stdout("match\n");

    jfp()
        .args(["match", "--target", FOO_BAR_FP])
        .write_stdin(r#"{"foo": "baz"}"#)
        .assert()
        .code(1)
        .stdout("no match\n");

    jfp()
        .args(["match", "--target", "jfpv1$sha256$nothex"])
        .write_stdin(FOO_BAR)
        .assert()
        .code(2);
}

#[test]
fn find_with_flags_and_list_file() {
    let other = "jfpv1$sha256$".to_string() + &"0".repeat(64);
    let dir = tempdir().unwrap();
    let list = dir.path().join("fps.txt");
    fs::write(&list, format!("  {FOO_BAR_FP}  \n\n{other}\n{FOO_BAR_FP}\n")).unwrap();

    jfp()
        .args(["find", "--fingerprint", FOO_BAR_FP, "--list"])
        .arg(&list)
        .write_stdin(FOO_BAR)
        .assert()
        .success()
        .stdout(format!("{FOO_BAR_FP}\n{FOO_BAR_FP}\n{FOO_BAR_FP}\n"));

    jfp()
        .args(["find", "--dedup", "--fingerprint", FOO_BAR_FP, "--list"])
        .arg(&list)
        .write_stdin(FOO_BAR)
        .assert()
        .success()
        .stdout(format!("{FOO_BAR_FP}\n"));

    jfp()
        .args(["find", "--fingerprint", &other])
        .write_stdin(FOO_BAR)
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn find_requires_candidates() {
    jfp().arg("find").write_stdin(FOO_BAR).assert().code(2);
}

#[test]
fn inspect_prints_hashed_leaves() {
    jfp()
        .arg("inspect")
        .write_stdin(r#"{"b": {}, "a": 1}"#)
        .assert()
        .success()
        .stdout("{\"path\":\"{a}\",\"value\":1}\n{\"path\":\"{b}\",\"value\":{}}\n");

    let out = stdout_of(jfp().args(["--json", "inspect", "--raw"]).write_stdin("[1, [2]]"));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    let leaves = v.as_array().unwrap();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0]["path"], "[2]");
    assert!(leaves[0]["siblings"].is_array());
}

#[test]
fn repeated_runs_are_identical() {
    let a = stdout_of(jfp().arg("create").arg(fixture("jfpv1_obj_1.json")));
    let b = stdout_of(jfp().arg("create").arg(fixture("jfpv1_obj_1.json")));
    assert!(!a.is_empty());
    assert_eq!(a, b);
}
