//! Shared types written to the archive data file.
//!
//! The field names and their order are part of the contract with the
//! browser-side archive viewer, which reads the keys verbatim.

use serde::{Deserialize, Serialize};

/// One archived page.
///
/// ```json
/// {
///   "fileName": "260111info.html",
///   "relativeURL": "sermons/260111info.html",
///   "date": "2026-01-11",
///   "title": "빛으로 오신 주님",
///   "scripture": "요한복음 1:1-14"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Base name of the source file
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Path relative to the site root, `/`-separated
    #[serde(rename = "relativeURL")]
    pub relative_url: String,
    /// `YYYY-MM-DD`, or empty when the filename carries no date
    pub date: String,
    /// `<title>` text with the magazine prefix and year annotation removed
    pub title: String,
    /// Cleaned scripture reference, empty when no convention matched
    pub scripture: String,
}
