//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEXICON: &str = r#"{"a": "cat", "b": "gato", "freq": 0.5}
{"a": "dog", "b": "perro", "freq": 0.5}
"#;

fn wordgame(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("wordgame").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("WORDGAME_LEXICON")
        .env_remove("WORDGAME_HISTORY")
        .env_remove("WORDGAME_DECAY");
    cmd
}

fn write_files(dir: &Path, lexicon: &str, history: &str) -> (PathBuf, PathBuf) {
    let lexicon_path = dir.join("lexicon.jsonl");
    let history_path = dir.join("history.jsonl");
    std::fs::write(&lexicon_path, lexicon).unwrap();
    std::fs::write(&history_path, history).unwrap();
    (lexicon_path, history_path)
}

#[test]
fn validate_valid_files() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) = write_files(
        dir.path(),
        LEXICON,
        "{\"id\": 0, \"is_correct\": true}\n{\"id\": 1, \"is_correct\": false}\n",
    );

    wordgame(dir.path())
        .arg("validate")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 words"))
        .stdout(predicate::str::contains("2 answers"))
        .stdout(predicate::str::contains("All files valid"));
}

#[test]
fn validate_rejects_malformed_lexicon() {
    let dir = TempDir::new().unwrap();
    let (lexicon, _) = write_files(dir.path(), "{\"a\": \"cat\"}\n", "");

    wordgame(dir.path())
        .arg("validate")
        .arg("--lexicon")
        .arg(&lexicon)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("lexicon.jsonl:1"));
}

#[test]
fn validate_rejects_history_outside_lexicon() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) =
        write_files(dir.path(), LEXICON, "{\"id\": 5, \"is_correct\": true}\n");

    wordgame(dir.path())
        .arg("validate")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .assert()
        .failure()
        .stderr(predicate::str::contains("word 5"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    wordgame(dir.path())
        .arg("validate")
        .arg("--lexicon")
        .arg("nonexistent.jsonl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn play_requires_lexicon() {
    let dir = TempDir::new().unwrap();
    wordgame(dir.path())
        .arg("play")
        .arg("--history")
        .arg("history.jsonl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lexicon file was not specified"));
}

#[test]
fn play_requires_history() {
    let dir = TempDir::new().unwrap();
    wordgame(dir.path())
        .arg("play")
        .arg("--lexicon")
        .arg("lexicon.jsonl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("history file was not specified"));
}

#[test]
fn play_rejects_missing_history_file() {
    let dir = TempDir::new().unwrap();
    let (lexicon, _) = write_files(dir.path(), LEXICON, "");

    wordgame(dir.path())
        .arg("play")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(dir.path().join("missing.jsonl"))
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.jsonl"));
}

#[test]
fn play_rejects_out_of_range_decay() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) = write_files(dir.path(), LEXICON, "");

    wordgame(dir.path())
        .arg("play")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .arg("--decay")
        .arg("1.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("decay must lie strictly between 0 and 1"));
}

#[test]
fn play_records_answers() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) =
        write_files(dir.path(), LEXICON, "{\"id\": 1, \"is_correct\": true}\n");

    wordgame(dir.path())
        .arg("play")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .arg("--seed")
        .arg("42")
        .write_stdin("\ny\n\nn\n\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 frequency-annotated words"))
        .stdout(predicate::str::contains("Loaded 1 answers from history"))
        .stdout(predicate::str::contains("Accumulated 3 answers in current run"))
        .stdout(predicate::str::contains("3 answers this run, 4 in history"));

    let content = std::fs::read_to_string(&history).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "{\"id\": 1, \"is_correct\": true}");
    for line in &lines[1..] {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(record["id"].as_u64().unwrap() < 2);
        assert!(record["is_correct"].is_boolean());
    }
}

#[test]
fn play_quit_before_answering_leaves_history_untouched() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) = write_files(dir.path(), LEXICON, "");

    wordgame(dir.path())
        .arg("play")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .write_stdin("y\nn\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 answers this run"));

    assert!(std::fs::read_to_string(&history).unwrap().is_empty());
}

#[test]
fn stats_lists_words() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) = write_files(
        dir.path(),
        LEXICON,
        "{\"id\": 0, \"is_correct\": true}\n{\"id\": 0, \"is_correct\": true}\n",
    );

    wordgame(dir.path())
        .arg("stats")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 answers (2 correct, 0 incorrect"))
        .stdout(predicate::str::contains("perro"))
        .stdout(predicate::str::contains("gato"));
}

#[test]
fn stats_json_matches_weighting() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) =
        write_files(dir.path(), LEXICON, "{\"id\": 0, \"is_correct\": true}\n");

    let output = wordgame(dir.path())
        .arg("stats")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let top = report["most_likely"].as_array().unwrap();
    assert_eq!(top[0]["a"], "dog");
    let p = top[0]["probability"].as_f64().unwrap();
    assert!((p - 0.5263).abs() < 1e-4, "got {p}");
    assert_eq!(report["summary"]["total_answers"], 1);
}

#[test]
fn stats_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let (lexicon, history) = write_files(dir.path(), LEXICON, "");

    wordgame(dir.path())
        .arg("stats")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("--history")
        .arg(&history)
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    wordgame(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created wordgame.toml"))
        .stdout(predicate::str::contains("Created lexicon.jsonl"))
        .stdout(predicate::str::contains("Created history.jsonl"));

    assert!(dir.path().join("wordgame.toml").exists());
    assert!(dir.path().join("lexicon.jsonl").exists());
    assert!(dir.path().join("history.jsonl").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    wordgame(dir.path()).arg("init").assert().success();

    wordgame(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_then_play_uses_config() {
    let dir = TempDir::new().unwrap();
    wordgame(dir.path()).arg("init").assert().success();

    wordgame(dir.path())
        .arg("play")
        .write_stdin("\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 8 frequency-annotated words"))
        .stdout(predicate::str::contains("1 answers this run, 1 in history"));
}
