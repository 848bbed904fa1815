//! Single-page JSON export.

use serde::Serialize;

use crate::slug;

/// Content type offered with an export download.
pub const EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Serialize)]
struct ExportedPage<'a> {
    title: &'a str,
    #[serde(rename = "bodyText")]
    body_text: &'a str,
}

/// A file ready to be handed to the browser as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Export exactly `title` and `bodyText`, pretty-printed with two-space
    /// indentation.
    pub fn for_page(title: &str, body_text: &str) -> Result<Self, serde_json::Error> {
        let contents = serde_json::to_string_pretty(&ExportedPage { title, body_text })?;
        Ok(Self {
            file_name: slug::export_file_name(title),
            contents,
        })
    }
}
