//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const SIMPLE: &str = "The cat sat on the mat. The dog ran fast.";
const DENSE: &str = "The implementation of the comprehensive organizational restructuring \
                     initiative necessitated the establishment of interdepartmental \
                     communication protocols.";

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run the binary and parse stdout as JSON, asserting success.
fn json_output(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("grade"))
        .stdout(predicate::str::contains("syllables"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEGIBLE_WORDS_PER_MINUTE"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_reports_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let json = json_output(&["-C", tmp.path().to_str().unwrap(), "info", "--json"]);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["config"]["words_per_minute"], 238.0);
    assert_eq!(json["config"]["lexicon"], "built-in");
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn logging_flags_accepted() {
    for flags in [&["-q"][..], &["-v"], &["-vv"], &["--color", "never"]] {
        cmd().args(flags).arg("info").assert().success();
    }
}

#[test]
fn logs_stay_off_stdout() {
    // -vv raises stderr logging; stdout must still be pure JSON.
    let output = cmd()
        .args(["-vv", "--json", "analyze", "--text", SIMPLE])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice::<Value>(&output.stdout).expect("stdout should be JSON only");
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_inline_text_prints_table() {
    cmd()
        .args(["analyze", "--text", SIMPLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch reading ease"))
        .stdout(predicate::str::contains("Text standard"))
        .stdout(predicate::str::contains("Reading time"));
}

#[test]
fn analyze_json_has_every_metric() {
    let json = json_output(&["--json", "analyze", "--text", "The cat sat."]);

    assert_eq!(json["word_count"], 3);
    assert_eq!(json["sentence_count"], 1);
    assert_eq!(json["syllable_count"], 3);
    assert_eq!(json["flesch_reading_ease"], 119.19);
    assert_eq!(json["text_standard"], "Kindergarten");
    assert_eq!(json["text_standard_grade"], 0);
    for key in [
        "flesch_kincaid_grade",
        "automated_readability_index",
        "smog_index",
        "coleman_liau_index",
        "dale_chall_readability_score",
        "linsear_write_formula",
        "gunning_fog",
        "difficult_words",
        "reading_time",
        "reading_time_display",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn analyze_reads_file() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SIMPLE).unwrap();

    let json = json_output(&["--json", "analyze", tmp.path().to_str().unwrap()]);
    assert_eq!(json["word_count"], 10);
    assert_eq!(json["sentence_count"], 2);
}

#[test]
fn analyze_reads_stdin() {
    let output = cmd()
        .args(["--json", "analyze"])
        .write_stdin(SIMPLE)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["word_count"], 10);
}

#[test]
fn analyze_empty_input_reports_null_scores() {
    let json = json_output(&["--json", "analyze", "--text", ""]);
    assert_eq!(json["word_count"], 0);
    assert!(json["flesch_reading_ease"].is_null());
    assert!(json["text_standard"].is_null());
}

#[test]
fn analyze_empty_input_notes_undefined_scores() {
    cmd()
        .args(["analyze", "--text", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("n/a"))
        .stdout(predicate::str::contains("no words found"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_text_and_file_conflict() {
    cmd()
        .args(["analyze", "doc.txt", "--text", SIMPLE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// =============================================================================
// Grade Command
// =============================================================================

#[test]
fn grade_prints_label() {
    cmd()
        .args(["grade", "--text", "The cat sat."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kindergarten"));
}

#[test]
fn grade_passes_under_max() {
    cmd()
        .args(["grade", "--text", SIMPLE, "--max-grade", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn grade_fails_over_max() {
    cmd()
        .args(["grade", "--text", DENSE, "--max-grade", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reads at grade"));
}

#[test]
fn grade_json_reports_over_max() {
    let output = cmd()
        .args(["--json", "grade", "--text", DENSE, "--max-grade", "3"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["over_max"], true);
    assert_eq!(json["max_grade"], 3);
    assert!(json["report"]["text_standard_grade"].as_u64().unwrap() > 3);
}

#[test]
fn grade_flag_overrides_config_max_grade() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".legible.toml"), "max_grade = 3\n").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "grade",
            "--text",
            DENSE,
            "--max-grade",
            "40",
        ])
        .assert()
        .success();
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_prints_counts() {
    cmd()
        .args(["syllables", "cat", "readability"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cat 1"))
        .stdout(predicate::str::contains("(complex)"));
}

#[test]
fn syllables_json() {
    let json = json_output(&["--json", "syllables", "cat", "readability"]);
    let words = json.as_array().unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0]["word"], "cat");
    assert_eq!(words[0]["syllables"], 1);
    assert_eq!(words[1]["syllables"], 5);
    assert_eq!(words[1]["complex"], true);
}

#[test]
fn syllables_requires_words() {
    cmd().arg("syllables").assert().failure();
}

// =============================================================================
// Input Limits and Lexicon
// =============================================================================

#[test]
fn oversized_input_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".legible.toml"), "max_input_bytes = 16\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "--text", SIMPLE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_limit_accepts_oversized_input() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(".legible.toml"),
        "max_input_bytes = 16\ndisable_input_limit = true\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "--text", SIMPLE])
        .assert()
        .success();
}

#[test]
fn missing_lexicon_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(".legible.toml"),
        "lexicon = \"missing-words.txt\"\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "--text", SIMPLE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("familiar-word list"));
}

#[test]
fn missing_lexicon_does_not_block_syllables() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(".legible.toml"),
        "lexicon = \"missing-words.txt\"\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "syllables", "cat"])
        .assert()
        .success();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
