//! Text cleanup for fragments cut out of page markup.
//!
//! The extractor slices raw HTML between known markers; what comes back can
//! contain inline tags, `<br>` line breaks and source indentation. [`clean_text`]
//! flattens that into a single line of plain text.

use regex::Regex;
use std::sync::LazyLock;

static RE_BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\s+").unwrap());

/// Flatten an HTML fragment to one line of plain text.
///
/// Applied in order:
/// 1. `<br>`, `<br/>`, `<br />` become a space (so wrapped lines don't fuse)
/// 2. every other tag is removed
/// 3. newline runs become a space
/// 4. whitespace runs collapse to a single space
/// 5. leading/trailing whitespace is trimmed
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_text(fragment: &str) -> String {
    let text = RE_BR.replace_all(fragment, " ");
    let text = RE_TAG.replace_all(&text, "");
    let text = RE_NEWLINES.replace_all(&text, " ");
    let text = RE_WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
