use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("oer-extract").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn parse_prints_fields_in_schema_order() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("reply.txt");
    std::fs::write(&raw, "Chatter first\nElements: Ru, Ir\nElements: Ru, Ir, Co\n").unwrap();

    let output = Command::cargo_bin("oer-extract")
        .expect("binary exists")
        .arg("parse")
        .arg(&raw)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 18);
    assert_eq!(lines[0], "Detailed Research Field: NULL");
    assert_eq!(lines[4], "Elements: Ru, Ir, Co");
    assert_eq!(lines[17], "Work function: NULL");
}
