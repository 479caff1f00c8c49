//! Filename date conventions.
//!
//! Archived pages carry their publication date in the filename, in one of
//! two encodings:
//!
//! - **Long form**: `YYYY-MM-DD` prefix, e.g. `2026-01-11-sermon.html`
//! - **Short form**: `YYMMDD` prefix, e.g. `260111info.html`. The year is
//!   always read as `20YY`.
//!
//! The long form is tried first, so `2026-01-11.html` is never misread as
//! the short date `2020-26-01`. Neither form is validated against the
//! calendar: `991399.html` yields `2099-13-99`. Only the shape is checked.

/// Extract the publication date from a filename.
///
/// Returns `YYYY-MM-DD`, or an empty string when the name matches neither
/// convention. The result is never partially formed.
///
/// - `"2026-01-11-sermon.html"` → `"2026-01-11"`
/// - `"260111info.html"` → `"2026-01-11"`
/// - `"about.html"` → `""`
pub fn parse_date(file_name: &str) -> String {
    long_form_date(file_name)
        .or_else(|| short_form_date(file_name))
        .unwrap_or_default()
}

/// `YYYY-MM-DD` prefix, returned verbatim.
fn long_form_date(name: &str) -> Option<String> {
    let b = name.as_bytes();
    if b.len() < 10 {
        return None;
    }
    let shape_ok = b[..10].iter().enumerate().all(|(i, c)| match i {
        4 | 7 => *c == b'-',
        _ => c.is_ascii_digit(),
    });
    // All ten bytes are ASCII, so slicing on a char boundary is safe.
    shape_ok.then(|| name[..10].to_string())
}

/// `YYMMDD` prefix, expanded to `20YY-MM-DD`.
fn short_form_date(name: &str) -> Option<String> {
    let b = name.as_bytes();
    if b.len() < 6 || !b[..6].iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(format!("20{}-{}-{}", &name[0..2], &name[2..4], &name[4..6]))
}
