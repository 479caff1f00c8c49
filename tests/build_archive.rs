//! End-to-end archive builds against throwaway site trees.
//!
//! Library-level tests drive `archive::build` directly; the binary tests run
//! the compiled `archive-index` the way the site's build step does, with no
//! arguments from inside the site root.

use archive_index::archive::{self, ArchiveError};
use archive_index::config::{ArchiveConfig, CONFIG_FILE};
use archive_index::types::Record;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read_archive(path: &Path) -> Vec<Record> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// A site where only one page should make it into the archive.
fn site_with_excluded_pages() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "excluded/scripts/unused.html", "<title>unused</title>");
    write(root, "data/ignored.html", "<title>ignored</title>");
    write(root, "index.html", "<title>archive</title>");
    write(
        root,
        "260101info.html",
        r#"<html><head><title>새해 첫 주일</title></head>
<body><span class="scripture-ref">시편 90:12</span></body></html>"#,
    );
    tmp
}

#[test]
fn only_archivable_pages_are_written() {
    let tmp = site_with_excluded_pages();
    let result = archive::build(tmp.path(), &ArchiveConfig::default()).unwrap();

    let expected = vec![Record {
        file_name: "260101info.html".to_string(),
        relative_url: "260101info.html".to_string(),
        date: "2026-01-01".to_string(),
        title: "새해 첫 주일".to_string(),
        scripture: "시편 90:12".to_string(),
    }];
    assert_eq!(result.records, expected);
    assert_eq!(read_archive(&tmp.path().join("data/archiveData.json")), expected);
}

#[test]
fn mixed_dates_sorted_newest_first() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "250101.html", "<title>a</title>");
    write(root, "notes/undated.html", "<title>b</title>");
    write(root, "2026-03-01-sermon.html", "<title>c</title>");
    write(root, "old/241231info.html", "<title>d</title>");

    let result = archive::build(root, &ArchiveConfig::default()).unwrap();
    let dates: Vec<&str> = result.records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-03-01", "2025-01-01", "2024-12-31", ""]);
}

#[test]
fn rebuild_replaces_previous_archive() {
    let tmp = site_with_excluded_pages();
    let root = tmp.path();
    write(root, "data/archiveData.json", "stale contents");

    archive::build(root, &ArchiveConfig::default()).unwrap();
    write(root, "260108info.html", "<title>둘째 주일</title>");
    let result = archive::build(root, &ArchiveConfig::default()).unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(read_archive(&result.output).len(), 2);
}

#[test]
fn config_file_is_honoured() {
    let tmp = site_with_excluded_pages();
    let root = tmp.path();
    write(
        root,
        CONFIG_FILE,
        r#"
output = "assets/archive.js"
format = "script"
global_name = "SERMONS"
"#,
    );

    let config = archive_index::config::load_config(root).unwrap();
    let result = archive::build(root, &config).unwrap();

    let written = fs::read_to_string(root.join("assets/archive.js")).unwrap();
    assert_eq!(result.output, root.join("assets/archive.js"));
    assert!(written.starts_with("window.SERMONS = ["));
    assert!(written.ends_with("];"));
}

#[test]
fn missing_root_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = archive::build(&tmp.path().join("missing"), &ArchiveConfig::default());
    assert!(matches!(result, Err(ArchiveError::Scan(_))));
}

// =========================================================================
// Binary
// =========================================================================

fn run(root: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_archive-index"))
        .args(args)
        .current_dir(root)
        .output()
        .unwrap()
}

#[test]
fn binary_with_no_arguments_builds_and_reports_count() {
    let tmp = site_with_excluded_pages();
    let out = run(tmp.path(), &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.trim_end().ends_with("with 1 entries."), "{stdout}");
    assert!(tmp.path().join("data/archiveData.json").exists());
}

#[test]
fn binary_check_does_not_write() {
    let tmp = site_with_excluded_pages();
    let out = run(tmp.path(), &["check"]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("001 2026-01-01 새해 첫 주일"));
    assert!(stdout.contains("1 records, 0 undated, 0 without scripture"));
    assert!(!tmp.path().join("data/archiveData.json").exists());
}

#[test]
fn binary_output_override() {
    let tmp = site_with_excluded_pages();
    let out = run(tmp.path(), &["--output", "public/archive.json"]);

    assert!(out.status.success());
    assert_eq!(read_archive(&tmp.path().join("public/archive.json")).len(), 1);
}

#[test]
fn binary_fails_on_bad_config() {
    let tmp = site_with_excluded_pages();
    write(tmp.path(), CONFIG_FILE, "unknown_key = 1");
    let out = run(tmp.path(), &[]);

    assert!(!out.status.success());
    assert!(!tmp.path().join("data/archiveData.json").exists());
}

#[test]
fn binary_gen_config_prints_stock_toml() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["gen-config"]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let parsed: ArchiveConfig = toml_from_str(&stdout);
    assert_eq!(parsed, ArchiveConfig::default());
}

fn toml_from_str(s: &str) -> ArchiveConfig {
    let base = archive_index::config::stock_defaults_value().unwrap();
    let overlay: toml::Value = toml::from_str(s).unwrap();
    archive_index::config::resolve_config(base, Some(overlay)).unwrap()
}
