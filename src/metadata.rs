//! Page metadata extraction.
//!
//! Archived pages were written by hand over several years, and each batch
//! marks up its metadata differently. Nothing here parses HTML properly:
//! every field is located by matching the first occurrence of a known
//! markup convention in the raw text.
//!
//! ## Fields
//!
//! - **Date**: from the filename, see [`crate::naming`].
//! - **Title**: first `<title>` element, with the magazine label prefix
//!   (`비주얼 매거진: `) and a trailing event annotation
//!   (` - 2026 송구영신예배`) removed. A placeholder when there is none.
//! - **Scripture**: first hit in the [`ScriptureSource::PRIORITY`] cascade.
//!
//! ## Scripture cascade
//!
//! Sources are tried in a fixed order and the first non-empty result wins,
//! the same first-available rule used everywhere metadata has more than one
//! possible origin:
//!
//! ```text
//! data-scripture="…"                    explicit attribute, taken as written
//! class="scripture-ref"                 dedicated span/div
//! SERMON INFOGRAPHIC • …                infographic header line
//! class="subtitle"                      infographic subtitle
//! <div class="bible-box"> <p>…</p>      older pages, "(…)" gloss dropped
//! <i class="fas fa-book-open"></i> …    icon-labelled line
//! class="guide-info"> … | …             family worship guides
//! ```
//!
//! Earlier, more specific conventions come first so that a page carrying
//! both an explicit reference and a generic subtitle reports the reference.

use crate::config::TitlesConfig;
use crate::html::clean_text;
use crate::naming::parse_date;
use crate::types::Record;
use regex::Regex;
use std::sync::LazyLock;

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title>(.*?)</title>").unwrap());
static RE_TITLE_YEAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*[0-9]{4}\s+.*$").unwrap());

static RE_DATA_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-scripture="([^"]+)""#).unwrap());
static RE_SCRIPTURE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class="scripture-ref"[^>]*>([\s\S]*?)(?:</span>|</div>)"#).unwrap()
});
static RE_INFOGRAPHIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)SERMON INFOGRAPHIC\s*•\s*([\s\S]*?)(?:</div>|</span>)").unwrap()
});
static RE_SUBTITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)class="subtitle"[^>]*>([\s\S]*?)</div>"#).unwrap());
static RE_BIBLE_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div class="bible-box">[\s\S]*?<p>([\s\S]*?)</p>"#).unwrap()
});
static RE_BOOK_ICON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<i class="fase? fa-book-open[^>]*></i>\s*([\s\S]*?)(?:</span>|</div>)"#)
        .unwrap()
});
static RE_GUIDE_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class="guide-info"[^>]*>[\s\S]*?\|\s*([\s\S]*?)(?:</div>|</span>)"#)
        .unwrap()
});
static RE_TRAILING_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([\s\S]*?\)$").unwrap());

/// A markup convention that can carry a page's scripture reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptureSource {
    /// `data-scripture="…"` attribute on any element.
    DataAttribute,
    /// Element with `class="scripture-ref"`.
    ScriptureRef,
    /// Text after the `SERMON INFOGRAPHIC •` header marker.
    InfographicMarker,
    /// `<div class="subtitle">`.
    Subtitle,
    /// First paragraph of `<div class="bible-box">`.
    BibleBox,
    /// Text after a Font Awesome `fa-book-open` icon.
    BookIcon,
    /// Text after the `|` separator in a `guide-info` element.
    GuideInfo,
}

impl ScriptureSource {
    /// Lookup order. The first source yielding non-empty text wins.
    pub const PRIORITY: [ScriptureSource; 7] = [
        ScriptureSource::DataAttribute,
        ScriptureSource::ScriptureRef,
        ScriptureSource::InfographicMarker,
        ScriptureSource::Subtitle,
        ScriptureSource::BibleBox,
        ScriptureSource::BookIcon,
        ScriptureSource::GuideInfo,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            ScriptureSource::DataAttribute => &RE_DATA_ATTR,
            ScriptureSource::ScriptureRef => &RE_SCRIPTURE_REF,
            ScriptureSource::InfographicMarker => &RE_INFOGRAPHIC,
            ScriptureSource::Subtitle => &RE_SUBTITLE,
            ScriptureSource::BibleBox => &RE_BIBLE_BOX,
            ScriptureSource::BookIcon => &RE_BOOK_ICON,
            ScriptureSource::GuideInfo => &RE_GUIDE_INFO,
        }
    }

    /// Text this source yields for `html`, or `None` if the convention is
    /// absent or its content is empty.
    pub fn find(self, html: &str) -> Option<String> {
        let raw = self.pattern().captures(html)?.get(1)?.as_str();
        let text = match self {
            // Attribute values are already plain text.
            ScriptureSource::DataAttribute => raw.to_string(),
            ScriptureSource::BibleBox => RE_TRAILING_PAREN
                .replace(&clean_text(raw), "")
                .into_owned(),
            _ => clean_text(raw),
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Run the scripture cascade, returning the winning source and its text.
pub fn find_scripture(html: &str) -> Option<(ScriptureSource, String)> {
    ScriptureSource::PRIORITY
        .iter()
        .find_map(|source| source.find(html).map(|text| (*source, text)))
}

/// Builds [`Record`]s from page text.
///
/// Holds the title rules from config, compiled once per run.
#[derive(Debug, Clone)]
pub struct Extractor {
    untitled: String,
    strip_prefixes: Vec<Regex>,
}

impl Extractor {
    pub fn new(config: &TitlesConfig) -> Self {
        let strip_prefixes = config
            .strip_prefixes
            .iter()
            .filter(|p| !p.is_empty())
            .filter_map(|p| Regex::new(&format!(r"^{}\s*", regex::escape(p))).ok())
            .collect();
        Self {
            untitled: config.untitled.clone(),
            strip_prefixes,
        }
    }

    /// Extract the record for one page.
    ///
    /// Never fails: a missing field degrades to the placeholder title or an
    /// empty string.
    pub fn extract(&self, file_name: &str, relative_url: String, html: &str) -> Record {
        let scripture = find_scripture(html)
            .map(|(_, text)| clean_text(&text))
            .unwrap_or_default();
        Record {
            file_name: file_name.to_string(),
            relative_url,
            date: parse_date(file_name),
            title: self.title(html),
            scripture,
        }
    }

    /// Page title with label prefix and year annotation removed.
    pub fn title(&self, html: &str) -> String {
        let raw = RE_TITLE
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim());
        let Some(mut title) = raw.map(String::from) else {
            return self.untitled.clone();
        };
        for prefix in &self.strip_prefixes {
            title = prefix.replace(&title, "").into_owned();
        }
        RE_TITLE_YEAR_SUFFIX.replace(&title, "").into_owned()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&TitlesConfig::default())
    }
}
