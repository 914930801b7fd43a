//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn write_sample(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

const SAMPLE: &str = "The cat sat on the mat. The dog ran fast.\n\nA second paragraph here.";

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
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
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
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_displays_counts() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    cmd()
        .args(["analyze", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample.txt"))
        .stdout(predicate::str::contains("Counts:"))
        .stdout(predicate::str::contains("Readability:"));
}

#[test]
fn analyze_json_has_report_shape() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    let output = cmd().args(["analyze", &file, "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("analyze --json should output valid JSON");

    assert_eq!(json["fileName"], "sample.txt");
    assert_eq!(json["statistics"]["totalParagraphs"], 2);
    assert_eq!(json["statistics"]["totalSentences"], 3);
    assert!(json["statistics"]["topWordFrequencies"].is_array());
}

#[test]
fn analyze_summary_prints_condensed_view() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    cmd()
        .args(["analyze", &file, "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXT ANALYSIS RESULTS"))
        .stdout(predicate::str::contains("TOP 10 MOST FREQUENT WORDS"));
}

#[test]
fn analyze_stdin_labels_manual_input() {
    let output = cmd()
        .args(["analyze", "-", "--json"])
        .write_stdin("Hello world. This is a test.")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["fileName"], "Manual Input");
    assert_eq!(json["statistics"]["totalWords"], 6);
    assert_eq!(json["statistics"]["uniqueWords"], 6);
}

#[test]
fn analyze_source_name_override() {
    let output = cmd()
        .args(["analyze", "-", "--json", "--source-name", "pasted"])
        .write_stdin("Some text.")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["fileName"], "pasted");
}

#[test]
fn analyze_empty_file_fails_with_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "empty.txt", "   \n\t\n");
    cmd()
        .args(["analyze", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_markdown_strips_code_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let md = "# Title\n\nThe cat sat on the mat.\n\n```rust\nlet zzyzxcode = 1;\n```\n";
    let file = write_sample(&dir, "doc.md", md);
    let output = cmd().args(["analyze", &file, "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let excerpt = json["originalText"].as_str().unwrap();
    assert!(!excerpt.contains("zzyzxcode"));
    assert!(!excerpt.contains("Title"));
}

// =============================================================================
// Export Command
// =============================================================================

#[test]
fn export_csv_to_stdout_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    cmd()
        .args(["export", &file, "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Category,Metric,Value"))
        .stdout(predicate::str::contains("Rank,Word,Frequency"));
}

#[test]
fn export_text_to_stdout_has_banner() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    cmd()
        .args(["export", &file, "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXT ANALYSIS REPORT"))
        .stdout(predicate::str::contains("BASIC STATISTICS"));
}

#[test]
fn export_json_to_file_creates_parseable_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    let out = dir.path().join("report.json");
    cmd()
        .args([
            "export",
            &file,
            "--format",
            "json",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let written = std::fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["fileName"], "sample.txt");
}

#[test]
fn export_to_unwritable_path_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    cmd()
        .args([
            "export",
            &file,
            "--format",
            "csv",
            "--out",
            "/nonexistent-dir/never/report.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("export failed"));
}

#[test]
fn export_requires_format() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);
    cmd()
        .args(["export", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_file_flag_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("textstat.toml");
    std::fs::write(&config_path, "max_input_bytes = 8\n").unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);

    cmd()
        .args(["--config", config_path.to_str().unwrap(), "analyze", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disable_input_limit_lifts_the_cap() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("textstat.toml");
    std::fs::write(
        &config_path,
        "max_input_bytes = 8\ndisable_input_limit = true\n",
    )
    .unwrap();
    let file = write_sample(&dir, "sample.txt", SAMPLE);

    cmd()
        .args(["--config", config_path.to_str().unwrap(), "analyze", &file])
        .assert()
        .success();
}
