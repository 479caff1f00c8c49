//! # Archive Index
//!
//! Builds the data file behind a church website's sermon archive page.
//! The site is a folder of hand-authored HTML pages; this crate walks it,
//! pulls a date, title and scripture reference out of each page, and writes
//! one date-sorted list for the browser-side viewer.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      site/           →  page paths         (filesystem walk)
//! 2. Extract   page text       →  Record             (pattern matching)
//! 3. Archive   Vec<Record>     →  archiveData.json   (sort + serialize)
//! ```
//!
//! The run is a single synchronous pass. Any I/O failure aborts it before
//! the output file is touched; a page missing some metadata is never an
//! error and simply yields empty fields.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the site root, skipping tooling/output directories and the viewer page |
//! | [`naming`] | Filename date conventions (`YYYY-MM-DD…`, `YYMMDD…`) |
//! | [`html`] | Flattens markup fragments to single-line plain text |
//! | [`metadata`] | Title cleanup and the ordered scripture lookup |
//! | [`archive`] | Reads pages, sorts records, writes the data file |
//! | [`config`] | Optional `archive.toml` loading, merging, and validation |
//! | [`types`] | The [`types::Record`] written for each page |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Patterns, Not a DOM
//!
//! Pages were written by hand in a handful of house styles. Each style puts
//! the scripture reference somewhere different, but always in a recognisable
//! spot. Matching those spots with regular expressions is enough and keeps
//! the tool small; a page in an unknown style just gets an empty scripture.
//!
//! ## Plain JSON Output
//!
//! The archive is written as a plain JSON array the viewer fetches on its
//! own, rather than a script assigning a global that must be loaded before
//! the viewer code. The script form is still available (`format = "script"`)
//! for older viewer pages.
//!
//! ## String Date Sort
//!
//! Dates are compared as strings. The ISO format makes that equivalent to a
//! date comparison, and undated pages (empty string) fall to the end of the
//! newest-first list without special casing.

pub mod archive;
pub mod config;
pub mod html;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
