//! Integration tests for errorfortune
//!
//! These tests verify end-to-end behavior of cracking, persistence, and
//! the `ef` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use errorfortune::{CrackOptions, FortuneStore, StoreLimits, crack, style_names};

// =============================================================================
// Crack + Store Tests
// =============================================================================

#[test]
fn test_crack_records_history_and_favorites_flow() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FortuneStore::open(temp_dir.path().join("store"), StoreLimits::default())
        .expect("Failed to open store");

    let fortune = crack(
        "TypeError: Cannot read property 'length' of undefined",
        &CrackOptions::default(),
        Some(&store),
    )
    .expect("Failed to crack");

    let history = store.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, fortune.id);

    // Prefix lookup finds it, toggling twice ends up un-favorited
    let found = store.find_by_id(&fortune.id[..8]).expect("Prefix should match");
    assert!(store.toggle_favorite(&found).expect("toggle"));
    assert!(store.is_favorite(&found));
    assert!(!store.toggle_favorite(&found).expect("toggle"));
    assert!(store.favorites().is_empty());
}

#[test]
fn test_export_import_round_trip_across_stores() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = FortuneStore::open(temp_dir.path().join("a"), StoreLimits::default())
        .expect("Failed to open store");

    for message in ["Error: one", "Error: two", "Error: three"] {
        crack(message, &CrackOptions::default(), Some(&source)).expect("Failed to crack");
    }
    let exported = source.export().expect("Failed to export");

    let target = FortuneStore::open(temp_dir.path().join("b"), StoreLimits::default())
        .expect("Failed to open store");
    target.import(&exported).expect("Failed to import");

    let history = target.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].original, "Error: three");
}

#[test]
fn test_every_style_cracks_every_sample() {
    for style in style_names() {
        for sample in errorfortune::SAMPLE_ERRORS.iter().take(5) {
            let options =
                CrackOptions { style: style.to_string(), save_to_history: false };
            let fortune = crack(sample, &options, None).expect("Failed to crack");
            assert!(!fortune.wisdom.trim().is_empty(), "{style} on {sample}");
        }
    }
}

// =============================================================================
// CLI Tests
// =============================================================================

/// Write a config pointing the store at a temp dir, so tests never touch
/// the real data directory.
fn write_config(temp: &TempDir) -> std::path::PathBuf {
    let config_path = temp.path().join("ef.yml");
    let store_path = temp.path().join("store");
    std::fs::write(
        &config_path,
        format!("store_path: {}\n", store_path.display()),
    )
    .expect("Failed to write config");
    config_path
}

fn ef_cmd(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("ef").expect("binary should build");
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_cli_crack_prints_wisdom() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp);

    ef_cmd(&config)
        .args(["crack", "ReferenceError: x is not defined", "--style", "starWars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ReferenceError: x is not defined"))
        .stdout(predicate::str::contains("starWars"));
}

#[test]
fn test_cli_crack_blank_message_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp);

    ef_cmd(&config).args(["crack", "   "]).assert().failure();
}

#[test]
fn test_cli_styles_lists_all() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp);

    ef_cmd(&config)
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("confucius"))
        .stdout(predicate::str::contains("hitchhiker"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 25));
}

#[test]
fn test_cli_history_after_cracking() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp);

    ef_cmd(&config)
        .args(["crack", "SyntaxError: Unexpected token {"])
        .assert()
        .success();

    ef_cmd(&config)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("SyntaxError: Unexpected token {"));
}

#[test]
fn test_cli_no_save_skips_history() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp);

    ef_cmd(&config)
        .args(["crack", "Error: ephemeral", "--no-save"])
        .assert()
        .success();

    ef_cmd(&config)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No fortunes yet"));
}

#[test]
fn test_cli_export_and_import() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp);
    let backup = temp.path().join("backup.json");

    ef_cmd(&config)
        .args(["crack", "Error: keep me"])
        .assert()
        .success();

    ef_cmd(&config)
        .args(["export", "-o"])
        .arg(&backup)
        .assert()
        .success();
    assert!(backup.exists());

    // A second store imports the backup
    let temp2 = TempDir::new().expect("Failed to create temp dir");
    let config2 = write_config(&temp2);

    ef_cmd(&config2).arg("import").arg(&backup).assert().success();
    ef_cmd(&config2)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: keep me"));
}

#[test]
fn test_cli_favorite_unknown_id_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp);

    ef_cmd(&config)
        .args(["favorite", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no fortune matches"));
}
