use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The binary with a config path that does not exist, so defaults apply
/// whatever the working directory holds.
fn patterns(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("patterns").unwrap();
    cmd.arg("--config").arg(dir.join("none.toml"));
    cmd
}

#[test]
fn audit_of_never_written_docs_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = patterns(dir.path())
        .arg("audit")
        .arg("--dir")
        .arg(dir.path().join("never-written"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("singleton"), "{stdout}");
}

#[test]
fn docs_then_audit_exits_zero() {
    let dir = TempDir::new().unwrap();
    let site = dir.path().join("site");

    patterns(dir.path()).arg("docs").arg("--out").arg(&site).assert().success();
    patterns(dir.path()).arg("audit").arg("--dir").arg(&site).assert().code(0);

    fs::write(site.join("stray.md"), "# stray").unwrap();
    patterns(dir.path()).arg("audit").arg("--dir").arg(&site).assert().code(1);
}

#[test]
fn list_json_filters_by_category() {
    let dir = TempDir::new().unwrap();
    let output = patterns(dir.path())
        .args(["list", "--category", "creational", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row["category"] == "Creational"));
}

#[test]
fn unknown_category_exits_two() {
    let dir = TempDir::new().unwrap();
    let output = patterns(dir.path())
        .args(["list", "--category", "functional"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("functional"));
}

#[test]
fn unknown_pattern_exits_two() {
    let dir = TempDir::new().unwrap();
    patterns(dir.path()).args(["run", "monad"]).assert().code(2);
    patterns(dir.path()).args(["verify", "monad"]).assert().code(2);
}

#[test]
fn verify_and_run_succeed() {
    let dir = TempDir::new().unwrap();
    patterns(dir.path()).args(["verify", "strategy"]).assert().code(0);

    let output = patterns(dir.path()).args(["run", "strategy"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "8\n2\n");
}

#[test]
fn no_color_output_has_no_escapes() {
    let dir = TempDir::new().unwrap();
    let output = patterns(dir.path()).args(["--no-color", "list"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("singleton"));
    assert!(!stdout.contains("\x1b["), "{stdout}");
}

#[test]
fn malformed_config_exits_two() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("catalog.toml");
    fs::write(&config, "title = [").unwrap();

    Command::cargo_bin("patterns")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(2);
}
