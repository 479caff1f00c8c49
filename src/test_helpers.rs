//! Shared test utilities.
//!
//! `fixtures/site/` is a small archive with one page per scripture markup
//! convention, plus pages that must be skipped (`index.html`, `data/`,
//! `scripts/`).
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let records = collect_records(tmp.path(), &ArchiveConfig::default()).unwrap();
//! assert_eq!(find_record(&records, "260111info.html").date, "2026-01-11");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::Record;

/// Number of pages in `fixtures/site/` that should be archived.
pub const FIXTURE_PAGE_COUNT: usize = 6;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can write the archive into.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Record lookups — panics with a clear message on miss
// =========================================================================

/// Find a record by file name. Panics if not found.
pub fn find_record<'a>(records: &'a [Record], file_name: &str) -> &'a Record {
    records
        .iter()
        .find(|r| r.file_name == file_name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = records.iter().map(|r| r.file_name.as_str()).collect();
            panic!("record '{file_name}' not found. Available: {names:?}")
        })
}

/// All dates in record order.
pub fn record_dates(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.date.as_str()).collect()
}
