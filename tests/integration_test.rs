use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to convert path to forward slashes for TOML compatibility on Windows
fn path_to_toml_string(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Create a config file in the sandbox pointing at a sandboxed journal
fn setup_config(temp_dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let config_path = temp_dir.path().join("advlog.toml");
    let journal_path = temp_dir.path().join("adventure-log.json");

    cargo::cargo_bin_cmd!("advlog")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success();

    let config_content = fs::read_to_string(&config_path).unwrap();
    let updated_config = config_content.replace(
        "journal_file = \"./adventure-log.json\"",
        &format!("journal_file = \"{}\"", path_to_toml_string(&journal_path)),
    );
    fs::write(&config_path, updated_config).unwrap();

    (config_path, journal_path)
}

/// Initialize the journal document for a prepared config
fn setup_journal(config_path: &Path) {
    cargo::cargo_bin_cmd!("advlog")
        .args(["journal", "init", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal created"));
}

/// Read the journal document's markup content back out of the JSON file
fn journal_content(journal_path: &Path) -> String {
    let raw = fs::read_to_string(journal_path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    doc["content"].as_str().unwrap().to_string()
}

#[test]
fn test_config_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("advlog.toml");

    cargo::cargo_bin_cmd!("advlog")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    assert!(config_path.exists());
}

#[test]
fn test_config_init_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("advlog.toml");

    cargo::cargo_bin_cmd!("advlog")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success();

    cargo::cargo_bin_cmd!("advlog")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_journal_init() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, journal_path) = setup_config(&temp_dir);

    setup_journal(&config_path);

    assert!(journal_path.exists());
    assert!(journal_content(&journal_path).contains("<article class=\"adventure-log\">"));
}

#[test]
fn test_log_event_appends_to_journal() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, journal_path) = setup_config(&temp_dir);
    setup_journal(&config_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["event", "The", "bridge", "collapsed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event Logged"));

    let content = journal_content(&journal_path);
    assert!(content.contains("<span class=\"log-event\">The bridge collapsed</span>"));
}

#[test]
fn test_log_quote_appends_to_journal() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, journal_path) = setup_config(&temp_dir);
    setup_journal(&config_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["q", "\"Old", "Tome\"", "We", "found", "it!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gamemaster quoted Old Tome"));

    let content = journal_content(&journal_path);
    assert!(content.contains("<span class=\"log-quote\">We found it!</span>"));
}

#[test]
fn test_log_merge_is_append_only_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, journal_path) = setup_config(&temp_dir);
    setup_journal(&config_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "first"])
        .assert()
        .success();

    let after_first = journal_content(&journal_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "second"])
        .assert()
        .success();

    let after_second = journal_content(&journal_path);

    // The first entry's bytes are untouched and the new entry lands after it
    let first_span = "<span class=\"log-event\">first</span>";
    let second_span = "<span class=\"log-event\">second</span>";
    assert!(after_first.contains(first_span));
    assert!(after_second.contains(first_span));
    assert!(after_second.find(first_span).unwrap() < after_second.find(second_span).unwrap());
}

#[test]
fn test_log_unterminated_quote_recovery() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, journal_path) = setup_config(&temp_dir);
    setup_journal(&config_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["q", "\"Old", "Tome"])
        .assert()
        .success()
        .stderr(predicate::str::contains("closing quote"))
        .stdout(predicate::str::contains("/log q \"Old Tome"));

    // Nothing was appended
    assert!(!journal_content(&journal_path).contains("log-quote"));
}

#[test]
fn test_log_empty_shows_help() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adventure Log"))
        .stdout(predicate::str::contains("quote"));
}

#[test]
fn test_log_disabled() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);

    let config_content = fs::read_to_string(&config_path).unwrap();
    fs::write(
        &config_path,
        config_content.replace("enabled = true", "enabled = false"),
    )
    .unwrap();

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "ignored"])
        .assert()
        .success()
        .stderr(predicate::str::contains("disabled"));
}

#[test]
fn test_log_gm_only_restricts_players() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);

    let config_content = fs::read_to_string(&config_path).unwrap();
    let updated = config_content
        .replace("gm = true", "gm = false")
        .replace("gm_only = false", "gm_only = true");
    fs::write(&config_path, updated).unwrap();

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "ignored"])
        .assert()
        .success()
        .stderr(predicate::str::contains("restricted to the GM"));
}

#[test]
fn test_log_missing_journal_is_actionable_for_gm() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);
    // No journal init

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "something"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Journal not found"))
        .stderr(predicate::str::contains("journal init"));
}

#[test]
fn test_log_missing_journal_is_informational_for_players() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);

    let config_content = fs::read_to_string(&config_path).unwrap();
    fs::write(
        &config_path,
        config_content.replace("gm = true", "gm = false"),
    )
    .unwrap();

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "something"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no adventure log journal"));
}

#[test]
fn test_log_whisper_echo() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);
    setup_journal(&config_path);

    let config_content = fs::read_to_string(&config_path).unwrap();
    let updated = config_content
        .replace("gm_only_whisper = false", "gm_only_whisper = true")
        .replace("gm_only = false", "gm_only = true");
    fs::write(&config_path, updated).unwrap();

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "secret", "door", "found"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(whisper)"));
}

#[test]
fn test_log_config_summary() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adventure log settings"))
        .stdout(predicate::str::contains("echo_messages"));
}

#[test]
fn test_log_custom_actor() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, journal_path) = setup_config(&temp_dir);
    setup_journal(&config_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["--actor", "Nerys"])
        .args(["q", "Bob", "Hello", "there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nerys quoted Bob"));

    assert!(journal_content(&journal_path).contains("Hello there"));
}

#[test]
fn test_show_lists_entries() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);
    setup_journal(&config_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["e", "The", "bridge", "collapsed"])
        .assert()
        .success();

    cargo::cargo_bin_cmd!("advlog")
        .args(["log", "--config", config_path.to_str().unwrap()])
        .args(["q", "\"Old", "Tome\"", "We", "found", "it!"])
        .assert()
        .success();

    cargo::cargo_bin_cmd!("advlog")
        .args(["show", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adventure Log"))
        .stdout(predicate::str::contains("The bridge collapsed"))
        .stdout(predicate::str::contains("We found it!"));
}

#[test]
fn test_show_empty_journal() {
    let temp_dir = TempDir::new().unwrap();
    let (config_path, _) = setup_config(&temp_dir);
    setup_journal(&config_path);

    cargo::cargo_bin_cmd!("advlog")
        .args(["show", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries logged yet"));
}
