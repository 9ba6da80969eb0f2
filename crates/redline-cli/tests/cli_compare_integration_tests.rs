//! CLI compare integration tests
//!
//! These tests run the built binary against documents written to a
//! temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_pair(temp_dir: &TempDir, old: &[u8], new: &[u8]) -> (PathBuf, PathBuf) {
    let old_path = temp_dir.path().join("old.txt");
    let new_path = temp_dir.path().join("new.txt");
    fs::write(&old_path, old).unwrap();
    fs::write(&new_path, new).unwrap();
    (old_path, new_path)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_redline"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_compare_inline_shows_word_markup() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, b"a\nb\nc", b"a\nx\nc");

    let output = run(&["compare", path_str(&old), path_str(&new)]);

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("~    2 | [-b-]{+x+}"));
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_compare_collapse_and_expand() {
    let temp_dir = TempDir::new().unwrap();
    let text = b"1\n2\n3\n4\n5\n6";
    let (old, new) = write_pair(&temp_dir, text, text);

    let folded = run(&["compare", path_str(&old), path_str(&new), "--collapse"]);
    let stdout = String::from_utf8_lossy(&folded.stdout);
    assert!(stdout.contains("… 6 unchanged lines (lines 1-6)"));

    let unfolded = run(&[
        "compare",
        path_str(&old),
        path_str(&new),
        "--collapse",
        "--expand",
        "0",
    ]);
    assert_eq!(String::from_utf8_lossy(&unfolded.stdout).lines().count(), 6);
}

#[test]
fn test_compare_json_view_is_parseable() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, b"x", b"x\ny");

    let output = run(&["compare", path_str(&old), path_str(&new), "--view", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["added"], 1);
    assert_eq!(value["stats"]["unchanged"], 1);
    assert_eq!(value["records"][1]["kind"], "added");
    assert!(value["request_id"].is_string());
}

#[test]
fn test_compare_side_by_side_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, b"a\nb", b"a\nc");
    let out_path = temp_dir.path().join("out.txt");

    let output = run(&[
        "compare",
        path_str(&old),
        path_str(&new),
        "--view",
        "side-by-side",
        "--output",
        path_str(&out_path),
    ]);

    assert!(output.status.success());
    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.lines().nth(1).unwrap().contains("~ [-b-]"));
}

#[test]
fn test_invalid_utf8_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, b"fine", &[0x66, 0xff]);

    let output = run(&["compare", path_str(&old), path_str(&new)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: could not compare files:"));
    assert!(stderr.contains("ERR_INVALID_ENCODING"));
}

#[test]
fn test_missing_file_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let (old, _) = write_pair(&temp_dir, b"a", b"a");
    let missing = temp_dir.path().join("missing.txt");

    let output = run(&["stats", path_str(&old), path_str(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: could not compare files:"));
    assert!(stderr.contains("ERR_IO"));
}

#[test]
fn test_stats_reports_counts() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, b"keep\nold\ngone", b"keep\nnew");

    let output = run(&["stats", path_str(&old), path_str(&new), "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["unchanged"], 1);
    assert_eq!(value["modified"], 1);
    assert_eq!(value["removed"], 1);
    assert_eq!(value["added"], 0);
}

#[test]
fn test_config_file_and_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, b"a", b"b");
    let config = temp_dir.path().join("redline.toml");
    fs::write(&config, "pairing = \"similarity\"\nsimilarity_threshold = 0.9\n").unwrap();

    let accepted = run(&[
        "stats",
        path_str(&old),
        path_str(&new),
        "--config",
        path_str(&config),
    ]);
    assert!(accepted.status.success());

    let rejected = run(&[
        "stats",
        path_str(&old),
        path_str(&new),
        "--config",
        path_str(&config),
        "--similarity-threshold",
        "2.0",
    ]);
    assert_eq!(rejected.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&rejected.stderr).contains("similarity_threshold"));
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&temp_dir, b"a", b"b");
    let config = temp_dir.path().join("redline.toml");
    fs::write(&config, "colour = true\n").unwrap();

    let output = run(&[
        "compare",
        path_str(&old),
        path_str(&new),
        "--config",
        path_str(&config),
    ]);
    assert_eq!(output.status.code(), Some(1));
}
