use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn prio_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("prio"));
    cmd.env_remove("PRIO_FILE")
        .env_remove("PRIO_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    prio_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prioritising projects"));
}

#[test]
fn test_version() {
    prio_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prio"));
}

// =============================================================================
// Menu loop
// =============================================================================

#[test]
fn test_exit_on_first_run_writes_empty_list() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What do you want to do?: "))
        .stdout(predicate::str::contains("1. Add project"))
        .stdout(predicate::str::contains("4. Exit"));

    assert_eq!(read_json(&temp_dir.path().join("tasks.json")), Value::Array(vec![]));
}

#[test]
fn test_add_exit_and_reload() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("1\nAlpha\n1\nDraft\ntodo\nn\n4\n")
        .assert()
        .success();

    let saved = read_json(&temp_dir.path().join("tasks.json"));
    assert_eq!(
        saved,
        serde_json::json!([
            {"title": "Alpha", "priority": 1, "tasks": [{"title": "Draft", "status": "todo"}]}
        ])
    );

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Projects:\n1. Alpha, p1\n   - Draft, todo\n",
        ));
}

#[test]
fn test_list_prints_once() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("1\nSolo\n3\nOnly\nwip\nn\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects:").count(1));
}

#[test]
fn test_invalid_menu_input_reprompts() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("0\nfive\n9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input").count(3));
}

#[test]
fn test_delete_project() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("tasks.json"),
        r#"[{"title":"Alpha","priority":1,"tasks":[]},{"title":"Beta","priority":2,"tasks":[]}]"#,
    )
    .unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("3\n1\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Which project do you want to delete?: "))
        .stdout(predicate::str::contains("2. Beta"))
        .stdout(predicate::str::contains("Project deleted:"))
        .stdout(predicate::str::contains("Alpha"));

    let saved = read_json(&temp_dir.path().join("tasks.json"));
    assert_eq!(saved.as_array().unwrap().len(), 1);
    assert_eq!(saved[0]["title"], "Beta");
}

#[test]
fn test_end_of_input_mid_add_saves_committed_state() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("1\nKept\n1\nt\ns\nn\n1\nLost\n2\nhalf")
        .assert()
        .success()
        .stdout(predicate::str::contains("saving and exiting"));

    let saved = read_json(&temp_dir.path().join("tasks.json"));
    assert_eq!(saved.as_array().unwrap().len(), 1);
    assert_eq!(saved[0]["title"], "Kept");
}

#[test]
fn test_non_utf8_line_does_not_end_session() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin(&b"1\nCaf\xe9\n1\nt\ns\nn\n4\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("saving and exiting").not());

    let saved = read_json(&temp_dir.path().join("tasks.json"));
    assert_eq!(saved.as_array().unwrap().len(), 1);
    assert_eq!(saved[0]["title"], "Caf\u{FFFD}");
    assert_eq!(saved[0]["priority"], 1);
    assert_eq!(saved[0]["tasks"][0]["status"], "s");
}

// =============================================================================
// File selection
// =============================================================================

#[test]
fn test_file_argument() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .arg("work.json")
        .current_dir(temp_dir.path())
        .write_stdin("1\nW\n2\nt\ns\nn\n4\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("work.json").exists());
    assert!(!temp_dir.path().join("tasks.json").exists());
}

#[test]
fn test_file_from_env() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .env("PRIO_FILE", "env.json")
        .current_dir(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("env.json").exists());
}

#[test]
fn test_config_file_selects_compact_output() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".prio.toml"),
        "[prio]\nfile = \"configured.json\"\npretty = false\n",
    )
    .unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("1\nA\n1\nt\ns\nn\n4\n")
        .assert()
        .success();

    let content = std::fs::read_to_string(temp_dir.path().join("configured.json")).unwrap();
    assert_eq!(
        content,
        r#"[{"title":"A","priority":1,"tasks":[{"title":"t","status":"s"}]}]"#
    );
}

#[test]
fn test_log_file_receives_json_events() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .args(["--verbose", "--log-file", "logs/prio.log"])
        .current_dir(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .success();

    let log_files: Vec<_> = std::fs::read_dir(temp_dir.path().join("logs"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(log_files.len(), 1);
    let content = std::fs::read_to_string(&log_files[0]).unwrap();
    assert!(content.contains("Saving projects"));
}

// =============================================================================
// Fatal errors
// =============================================================================

#[test]
fn test_malformed_file_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.json");
    std::fs::write(&path, r#"[{"title":"Alpha","tasks":[]}]"#).unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load projects"))
        .stderr(predicate::str::contains("Malformed record"));

    // The broken file is left untouched
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"[{"title":"Alpha","tasks":[]}]"#
    );
}

#[test]
fn test_invalid_json_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("tasks.json"), "{ nope").unwrap();

    prio_cmd()
        .current_dir(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load projects"));
}

#[test]
fn test_unwritable_target_fails_on_exit() {
    let temp_dir = TempDir::new().unwrap();

    prio_cmd()
        .arg("missing-dir/tasks.json")
        .current_dir(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to save projects"));
}
