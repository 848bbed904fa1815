//! Title-derived names: route slugs and export file names.
//!
//! Slugs are a lossy projection of a page title. Two titles that differ only
//! in their whitespace map to the same slug, and nothing here tries to make
//! them unique.

/// Replaces whitespace runs when deriving a route slug.
pub const SLUG_SEPARATOR: char = '-';

/// Replaces whitespace runs when deriving an export file name.
pub const FILE_NAME_SEPARATOR: char = '_';

/// Replace every run of whitespace in `text` with a single `separator`.
///
/// Leading and trailing runs are replaced too, not trimmed.
pub fn collapse_whitespace(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(separator);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Route slug for a page title.
pub fn slugify(title: &str) -> String {
    collapse_whitespace(title, SLUG_SEPARATOR)
}

/// File name a page is exported under.
pub fn export_file_name(title: &str) -> String {
    let mut name = collapse_whitespace(title, FILE_NAME_SEPARATOR);
    name.push_str(".json");
    name
}
