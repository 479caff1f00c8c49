//! Record collection, sorting, and the archive data file.
//!
//! Stage 2 of the archive build. Reads every page found by [`crate::scan`],
//! extracts its [`Record`], sorts newest first and writes the result.
//!
//! ## Sorting
//!
//! Records are ordered by `date` descending using plain string comparison.
//! Zero-padded ISO dates compare correctly as strings, and the empty string
//! is smaller than any date, so undated pages end up last. The sort is
//! stable: pages sharing a date keep walk order.
//!
//! ## Output formats
//!
//! ```text
//! json    [ { "fileName": ..., ... }, ... ]
//! script  window.ARCHIVE_DATA = [ { "fileName": ..., ... }, ... ];
//! ```
//!
//! Both use two-space indentation and the field order of [`Record`]. The
//! file is only written once every page has been read, so a failed run
//! leaves the previous archive in place.

use crate::config::{ArchiveConfig, OutputFormat};
use crate::metadata::Extractor;
use crate::scan::{self, ScanError};
use crate::types::Record;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a completed build.
#[derive(Debug)]
pub struct BuildResult {
    /// Where the archive was written.
    pub output: PathBuf,
    /// Records in the order they were written.
    pub records: Vec<Record>,
}

/// Run the whole pipeline for the site at `root`: find pages, extract,
/// sort, write.
pub fn build(root: &Path, config: &ArchiveConfig) -> Result<BuildResult, ArchiveError> {
    let mut records = collect_records(root, config)?;
    sort_records(&mut records);

    let output = root.join(&config.output);
    let contents = render(&records, config.format, &config.global_name)?;
    write_archive(&output, &contents)?;

    Ok(BuildResult { output, records })
}

/// Find and read every page under `root`, in walk order.
///
/// Stops at the first page that cannot be read. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD, so a page saved in a legacy encoding
/// still yields a record.
pub fn collect_records(root: &Path, config: &ArchiveConfig) -> Result<Vec<Record>, ArchiveError> {
    let extractor = Extractor::new(&config.titles);
    let pages = scan::find_pages(root, &config.scan)?;

    let mut records = Vec::with_capacity(pages.len());
    for path in pages {
        let bytes = fs::read(&path).map_err(|source| ArchiveError::Read {
            path: path.clone(),
            source,
        })?;
        let html = String::from_utf8_lossy(&bytes);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative_url = scan::relative_url(&path, root);
        records.push(extractor.extract(&file_name, relative_url, &html));
    }
    Ok(records)
}

/// Sort newest first by plain string comparison of `date`.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Serialize records in the configured format.
pub fn render(
    records: &[Record],
    format: OutputFormat,
    global_name: &str,
) -> Result<String, ArchiveError> {
    let json = serde_json::to_string_pretty(records)?;
    Ok(match format {
        OutputFormat::Json => json,
        OutputFormat::Script => format!("window.{global_name} = {json};"),
    })
}

/// Write the archive, replacing any previous file.
///
/// Creates the parent directory if needed.
pub fn write_archive(path: &Path, contents: &str) -> Result<(), ArchiveError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ArchiveError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ArchiveError::Write {
        path: path.to_path_buf(),
        source,
    })
}
