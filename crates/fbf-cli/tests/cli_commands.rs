//! Integration tests for the fbf CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A journal blob in the shape the browser app wrote.
const BROWSER_JOURNAL: &str = r#"[{"date":"2024-05-01T10:00:00.000Z","question":"Should I move abroad?","topic":"spirituality","cards":[{"id":3,"name":"Ship","meaning":"Travel, distance, movement, foreign matters, commerce"},{"id":19,"name":"Tower","meaning":"Institution, isolation, authority, protection, government"},{"id":2,"name":"Clover","meaning":"Luck, opportunity, small pleasures, quick fortune"}],"meanings":["Focus on spiritual journeys and exploration","Spiritual isolation blocking connection","Trust in divine timing and grace"]}]"#;

fn fbf(journal_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fbf").unwrap();
    cmd.arg("--journal-dir")
        .arg(journal_dir)
        .env_remove("FBF_SEED")
        .env_remove("FBF_JOURNAL_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn journal_file(dir: &Path) -> std::path::PathBuf {
    dir.join("divination-journal.json")
}

fn read_journal(dir: &Path) -> Vec<serde_json::Value> {
    let raw = fs::read_to_string(journal_file(dir)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// ---------------------------------------------------------------------------
// topics / deck / meaning
// ---------------------------------------------------------------------------

#[test]
fn topics_lists_all() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Money/Career")
                .and(predicate::str::contains("Spirituality/Personal Growth"))
                .and(predicate::str::contains("What is hindering your progress")),
        );
}

#[test]
fn deck_lists_catalog() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .arg("deck")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rider")
                .and(predicate::str::contains("Garden"))
                .and(predicate::str::contains("20 cards")),
        );
}

#[test]
fn meaning_exact_lookup() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["meaning", "money", "focus", "rider"])
        .assert()
        .success()
        .stdout("Focus on new financial opportunities arriving\n");
}

#[test]
fn meaning_by_slot_number() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["meaning", "health", "2", "Snake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hidden health issues blocking progress"));
}

#[test]
fn meaning_unknown_card() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["meaning", "health", "focus", "Moon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown card"));
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_requires_topic() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["draw", "Will", "I", "get", "the", "raise?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please select a topic first"));
    assert!(!journal_file(dir.path()).exists());
}

#[test]
fn draw_requires_question() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["draw", "--topic", "money", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please enter a question"));
    assert!(!journal_file(dir.path()).exists());
}

#[test]
fn draw_unknown_topic() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["draw", "--topic", "astrology", "Anything?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown topic"));
}

#[test]
fn draw_appends_to_journal() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["draw", "-t", "money", "Will", "I", "get", "the", "raise?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. Focus")
                .and(predicate::str::contains("2. Block"))
                .and(predicate::str::contains("3. Flow"))
                .and(predicate::str::contains("Saved to journal (1 entries)")),
        );

    fbf(dir.path())
        .args(["draw", "-t", "health", "How do I rest?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to journal (2 entries)"));

    let entries = read_journal(dir.path());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["question"], "How do I rest?");
    assert_eq!(entries[1]["question"], "Will I get the raise?");
    assert_eq!(entries[1]["topic"], "money");

    let cards = entries[1]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    let mut ids: Vec<u64> = cards.iter().map(|c| c["id"].as_u64().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(entries[1]["meanings"].as_array().unwrap().len(), 3);
}

#[test]
fn draw_same_seed_same_cards() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let args = ["draw", "-t", "relationships", "--seed", "7", "Should I call?"];

    fbf(a.path()).args(args).assert().success();
    fbf(b.path()).args(args).assert().success();

    let ja = read_journal(a.path());
    let jb = read_journal(b.path());
    assert_eq!(ja[0]["cards"], jb[0]["cards"]);
    assert_eq!(ja[0]["meanings"], jb[0]["meanings"]);
}

#[test]
fn draw_hidden_prints_face_down() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["draw", "-t", "spirituality", "--hidden", "What now?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[face down]")
                .and(predicate::str::contains("Synthesis").not()),
        );
    assert_eq!(read_journal(dir.path()).len(), 1);
}

#[test]
fn draw_prints_synthesis() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["draw", "-t", "money", "--seed", "11", "Will I get the raise?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Synthesis")
                .and(predicate::str::contains("For your money question, focus on"))
                .and(predicate::str::contains("While being aware that"))
                .and(predicate::str::contains("To move forward effectively,"))
                .and(predicate::str::contains("What practical steps can you take")),
        );
}

#[test]
fn draw_ephemeral_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let journal_dir = dir.path().join("journal");
    fbf(&journal_dir)
        .args(["--ephemeral", "draw", "-t", "money", "Quick one"])
        .assert()
        .success();
    assert!(!journal_dir.exists());
}

// ---------------------------------------------------------------------------
// journal
// ---------------------------------------------------------------------------

#[test]
fn journal_empty() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .arg("journal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal is empty."));
}

#[test]
fn journal_reads_browser_blob() {
    let dir = TempDir::new().unwrap();
    fs::write(journal_file(dir.path()), BROWSER_JOURNAL).unwrap();
    fbf(dir.path())
        .arg("journal")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Should I move abroad?")
                .and(predicate::str::contains("2024-05-01T10:00:00.000Z"))
                .and(predicate::str::contains("Trust in divine timing and grace"))
                .and(predicate::str::contains("Showing 1 of 1 entries")),
        );
}

#[test]
fn journal_keeps_browser_entries_on_append() {
    let dir = TempDir::new().unwrap();
    fs::write(journal_file(dir.path()), BROWSER_JOURNAL).unwrap();
    fbf(dir.path())
        .args(["draw", "-t", "money", "Next step?"])
        .assert()
        .success();

    let entries = read_journal(dir.path());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["question"], "Next step?");
    assert_eq!(entries[1]["date"], "2024-05-01T10:00:00.000Z");
    assert_eq!(entries[1]["question"], "Should I move abroad?");
}

#[test]
fn journal_filters_by_topic_and_limit() {
    let dir = TempDir::new().unwrap();
    for (topic, q) in [("money", "m1"), ("health", "h1"), ("money", "m2")] {
        fbf(dir.path())
            .args(["draw", "-t", topic, q])
            .assert()
            .success();
    }

    fbf(dir.path())
        .args(["journal", "--topic", "money"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("m1")
                .and(predicate::str::contains("m2"))
                .and(predicate::str::contains("h1").not()),
        );

    fbf(dir.path())
        .args(["journal", "--limit", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("m2")
                .and(predicate::str::contains("Showing 1 of 3 entries")),
        );
}

#[test]
fn corrupt_journal_starts_empty_and_is_backed_up() {
    let dir = TempDir::new().unwrap();
    fs::write(journal_file(dir.path()), "{oops").unwrap();

    fbf(dir.path())
        .arg("journal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal is empty."))
        .stderr(predicate::str::contains("corrupt"));

    let backup = dir.path().join("divination-journal.corrupt.json");
    assert_eq!(fs::read_to_string(backup).unwrap(), "{oops");
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_markdown_to_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(journal_file(dir.path()), BROWSER_JOURNAL).unwrap();
    fbf(dir.path())
        .args(["export", "markdown"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Reading Journal")
                .and(predicate::str::contains("## Should I move abroad?"))
                .and(predicate::str::contains("- **Block**: Tower")),
        );
}

#[test]
fn export_json_matches_blob() {
    let dir = TempDir::new().unwrap();
    fs::write(journal_file(dir.path()), BROWSER_JOURNAL).unwrap();
    let output = fbf(dir.path())
        .args(["export", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let exported: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let original: serde_json::Value = serde_json::from_str(BROWSER_JOURNAL).unwrap();
    assert_eq!(exported, original);
}

#[test]
fn export_text_to_file() {
    let dir = TempDir::new().unwrap();
    fs::write(journal_file(dir.path()), BROWSER_JOURNAL).unwrap();
    let out = dir.path().join("journal.txt");
    fbf(dir.path())
        .args(["export", "text", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let content = fs::read_to_string(out).unwrap();
    assert!(content.contains("Q: Should I move abroad?"));
    assert!(content.contains("[Spirituality/Personal Growth]"));
}

#[test]
fn export_unsupported_format() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["export", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_full_reading() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .args(["session", "--seed", "42"])
        .write_stdin("topic money\nask Will I get the raise?\ndraw\nreveal all\nreset\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Topic: Money/Career")
                .and(predicate::str::contains("Question: Will I get the raise?"))
                .and(predicate::str::contains("Drew three cards"))
                .and(predicate::str::contains("Synthesis: For your money question"))
                .and(predicate::str::contains("Cards cleared"))
                .and(predicate::str::contains("Journal: 1 entries"))
                .and(predicate::str::contains("Goodbye!")),
        );

    let entries = read_journal(dir.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["topic"], "money");
    assert_eq!(entries[0]["question"], "Will I get the raise?");
}

#[test]
fn session_reports_validation() {
    let dir = TempDir::new().unwrap();
    fbf(dir.path())
        .arg("session")
        .write_stdin("draw\ntopic health\ndraw\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("please select a topic first")
                .and(predicate::str::contains("please enter a question")),
        );
    assert!(!journal_file(dir.path()).exists());
}
