//! Page discovery.
//!
//! Stage 1 of the archive build. Walks the site root and returns every
//! archived page, skipping tooling and output directories:
//!
//! ```text
//! site/
//! ├── index.html                   # The archive viewer itself (skipped)
//! ├── 260111info.html              # Archived page
//! ├── 2025-12-31-sermon.html       # Archived page
//! ├── sermons/
//! │   └── 251225info.html          # Archived page (any depth)
//! ├── data/                        # Output directory (skipped)
//! │   └── archiveData.json
//! ├── scripts/                     # Build tooling (skipped)
//! └── node_modules/                # (skipped)
//! ```
//!
//! ## Exclusion
//!
//! A directory is pruned, together with everything below it, when its path
//! relative to the root contains one of the configured substrings. The test
//! is a plain substring match, so `data` also prunes `metadata/` and
//! `old/data-2024/`. Paths are made relative first so the location of the
//! site on disk never affects what is found.
//!
//! ## Ordering
//!
//! Entries are visited depth-first in file-name order. Output order is
//! decided later by the date sort; walking in a fixed order only keeps
//! equal-date records stable across machines.

use crate::config::ScanConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Site root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Find every archived page under `root`.
///
/// Returned paths are `root` joined with the page's relative path.
pub fn find_pages(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, root, &config.exclude_dirs));

    let mut pages = Vec::new();
    for entry in walker {
        let entry = entry?;
        if is_page(&entry, config) {
            pages.push(entry.into_path());
        }
    }
    Ok(pages)
}

/// Path of `path` relative to `root`, `/`-separated, for use as a link.
pub fn relative_url(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_excluded_dir(entry: &DirEntry, root: &Path, exclude: &[String]) -> bool {
    // The root itself is never excluded.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let rel = relative_url(entry.path(), root);
    exclude.iter().any(|needle| rel.contains(needle.as_str()))
}

fn is_page(entry: &DirEntry, config: &ScanConfig) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }
    let path = entry.path();
    let has_extension = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(&config.extension))
        .unwrap_or(false);
    has_extension && entry.file_name() != config.index_file.as_str()
}
