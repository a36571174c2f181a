use assert_cmd::Command;
use std::path::Path;

fn write(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn result_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("ranges"), "startup:BEGIN:END\n");
    write(
        &dir.path().join("OUTPUT/app/cold/outpucik-points"),
        "BEGIN,1000\nEND,2500\n",
    );
    write(
        &dir.path().join("OUTPUT/app/warm/outpucik-points"),
        "BEGIN,1000\nBEGIN,1200\nEND,2500\n",
    );
    write(
        &dir.path().join("OUTPUT/app/scratch/outpucik-points"),
        "BEGIN,0\nEND,1\n",
    );
    dir
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range-deck"));
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_cli_reports_with_default_layout() {
    let dir = result_tree();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range-deck"));
    cmd.current_dir(dir.path());

    let stdout = stdout(&mut cmd);

    assert_eq!(
        stdout,
        "\nOUTPUT/app/cold\n startup: 1.5ms\n\nOUTPUT/app/warm\n startup: 1.3ms\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("OUTPUT/app/cold/outpucik-results")).unwrap(),
        "startup: 1.5ms\n"
    );
    assert!(!dir
        .path()
        .join("OUTPUT/app/scratch/outpucik-results")
        .exists());
}

#[test]
fn test_cli_summary() {
    let dir = result_tree();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range-deck"));
    cmd.current_dir(dir.path()).arg("--summary");

    let stdout = stdout(&mut cmd);

    assert!(stdout.contains("\nsummary\ncold (1 scenarios)\n startup: n=1 min=1.5ms"));
    assert!(stdout.contains("\nwarm (1 scenarios)\n startup: n=1 min=1.3ms"));
}

#[test]
fn test_cli_fails_on_malformed_ranges() {
    let dir = result_tree();
    write(&dir.path().join("ranges"), "startup:BEGIN\n");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range-deck"));
    cmd.current_dir(dir.path());
    cmd.assert().failure().code(1);
    assert!(!dir.path().join("OUTPUT/app/cold/outpucik-results").exists());
}

#[test]
fn test_cli_missing_measurements() {
    let dir = result_tree();
    std::fs::create_dir_all(dir.path().join("OUTPUT/other/preload")).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range-deck"));
    cmd.current_dir(dir.path());
    cmd.assert().failure().code(1);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range-deck"));
    cmd.current_dir(dir.path()).arg("--skip-missing");
    let stdout = stdout(&mut cmd);
    assert!(!stdout.contains("preload"));
}

#[test]
fn test_cli_usage_error() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range-deck"));
    cmd.arg("--no-such-flag");
    cmd.assert().failure().code(2);
}
