//! Integration tests for the sl-cli binary commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A two-question quiz whose answers each have a single fragment.
const TWO_STEP: &str = r#"{
    "title": "Crossroads",
    "placeholder": "{player}",
    "intro": "In 2049,",
    "names": ["Solo"],
    "questions": [
        {
            "text": "Where does {player} go?",
            "answers": [
                { "text": "Left", "fragments": ["went left."], "next": 1 },
                { "text": "Home", "fragments": ["stayed home."] }
            ]
        },
        {
            "text": "What does {player} find?",
            "answers": [
                { "text": "The sea", "fragments": ["found the sea."] }
            ]
        }
    ]
}"#;

const BROKEN: &str = r#"{
    "questions": [
        { "text": "Q0", "answers": [ { "text": "A", "fragments": ["a"], "next": 5 } ] },
        { "text": "Q1", "answers": [ { "text": "B", "fragments": [] } ] },
        { "text": "Q2", "answers": [] }
    ]
}"#;

fn quiz_file(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quiz.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

fn sl() -> Command {
    let mut cmd = Command::cargo_bin("sl").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_a_valid_sample() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.json");

    sl().arg("init")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sample quiz"));

    assert!(path.exists());
    sl().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'Thoughts of the Machine'"));
}

#[test]
fn init_refuses_to_overwrite() {
    let (_dir, path) = quiz_file(TWO_STEP);

    sl().arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), TWO_STEP);
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_summarizes_a_valid_quiz() {
    let (_dir, path) = quiz_file(TWO_STEP);

    sl().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Where does {player} go?"))
        .stdout(predicate::str::contains("1, end"))
        .stdout(predicate::str::contains("2 questions, 3 answers"));
}

#[test]
fn check_reports_graph_issues() {
    let (_dir, path) = quiz_file(BROKEN);

    sl().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "question 0, answer 0: next question 5 does not exist",
        ))
        .stdout(predicate::str::contains("question 1, answer 0: no story fragments"))
        .stdout(predicate::str::contains("question 1 is never reached"))
        .stderr(predicate::str::contains("2 issues found"));
}

#[test]
fn check_rejects_malformed_json() {
    let (_dir, path) = quiz_file("{ \"questions\": [ oops ] }");

    sl().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed quiz content"));
}

#[test]
fn check_missing_file() {
    sl().arg("check")
        .arg("/nonexistent/quiz.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_tells_the_story() {
    let (_dir, path) = quiz_file(TWO_STEP);

    sl().args(["play", "--name", "Fernanda", "--seed", "1"])
        .arg(&path)
        .write_stdin("1\n1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] Where does Fernanda go?"))
        .stdout(predicate::str::contains("[2/2] What does Fernanda find?"))
        .stdout(predicate::str::contains(
            "In 2049, Fernanda went left. found the sea.",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_terminal_answer_ends_early() {
    let (_dir, path) = quiz_file(TWO_STEP);

    sl().args(["play", "--name", "Caio"])
        .arg(&path)
        .write_stdin("2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("In 2049, Caio stayed home."))
        .stdout(predicate::str::contains("What does Caio find?").not());
}

#[test]
fn play_draws_name_from_list() {
    let (_dir, path) = quiz_file(TWO_STEP);

    sl().args(["play", "--seed", "3"])
        .arg(&path)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Player: Solo"))
        .stdout(predicate::str::contains("Where does Solo go?"));
}

#[test]
fn play_recovers_from_bad_input() {
    let (_dir, path) = quiz_file(TWO_STEP);

    sl().args(["play", "--name", "Amanda"])
        .arg(&path)
        .write_stdin("7\nnope\n0\n2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("question 0 has no answer 6"))
        .stdout(predicate::str::contains("'nope' is not an answer number"))
        .stdout(predicate::str::contains("'0' is not an answer number"))
        .stdout(predicate::str::contains("In 2049, Amanda stayed home."));
}

#[test]
fn play_again_restarts_with_the_same_player() {
    let (_dir, path) = quiz_file(TWO_STEP);

    let output = sl()
        .args(["play", "--name", "Gabriel"])
        .arg(&path)
        .write_stdin("2\n1\nagain\n2\nq\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("In 2049, Gabriel stayed home.").count(), 2);
    assert!(stdout.contains("Type 'again' to play again"));
    assert_eq!(stdout.matches("Where does Gabriel go?").count(), 2);
}

#[test]
fn play_refuses_an_empty_quiz() {
    let (_dir, path) = quiz_file(r#"{ "questions": [] }"#);

    sl().args(["play", "--name", "Izaac"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no questions"));
}
