//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Build
//!
//! A single line once the archive is written:
//!
//! ```text
//! Generated data/archiveData.json with 42 entries.
//! ```
//!
//! ## Check
//!
//! An inventory of what a build would write, newest first. Each record
//! leads with its position, date and title; source path and scripture are
//! indented context lines. Missing fields are called out instead of shown
//! blank.
//!
//! ```text
//! Records
//! 001 2026-01-18 여호와는 나의 목자
//!     Source: 260118info.html
//!     Scripture: 시편 23:1-6
//! 002 (undated) 공지사항
//!     Source: notice.html
//!     Scripture: (none)
//!
//! 2 records, 1 undated, 1 without scripture
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::types::Record;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Record header: positional index, date, title.
///
/// ```text
/// 001 2026-01-11 빛으로 오신 말씀
/// 002 (undated) 가정예배 가이드
/// ```
fn record_header(index: usize, record: &Record) -> String {
    format!(
        "{} {} {}",
        format_index(index),
        or_placeholder(&record.date, "(undated)"),
        record.title
    )
}

// ============================================================================
// Build
// ============================================================================

/// Format the build summary line.
pub fn format_build_output(output: &Path, count: usize) -> Vec<String> {
    vec![format!(
        "Generated {} with {} entries.",
        output.display(),
        count
    )]
}

/// Print the build summary to stdout.
pub fn print_build_output(output: &Path, count: usize) {
    for line in format_build_output(output, count) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the record inventory shown by `check`.
pub fn format_check_output(records: &[Record]) -> Vec<String> {
    let mut lines = vec!["Records".to_string()];

    for (i, record) in records.iter().enumerate() {
        lines.push(record_header(i + 1, record));
        lines.push(format!("{}Source: {}", indent(1), record.relative_url));
        lines.push(format!(
            "{}Scripture: {}",
            indent(1),
            or_placeholder(&record.scripture, "(none)")
        ));
    }

    let undated = records.iter().filter(|r| r.date.is_empty()).count();
    let no_scripture = records.iter().filter(|r| r.scripture.is_empty()).count();
    lines.push(String::new());
    lines.push(format!(
        "{} records, {} undated, {} without scripture",
        records.len(),
        undated,
        no_scripture
    ));

    lines
}

/// Print the record inventory to stdout.
pub fn print_check_output(records: &[Record]) {
    for line in format_check_output(records) {
        println!("{}", line);
    }
}
