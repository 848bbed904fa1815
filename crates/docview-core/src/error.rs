//! Error types for docview.
//!
//! [`LoadError`] covers everything that can go wrong between the user pressing
//! "load" and a document landing in the session. Those are user-facing and
//! recoverable. [`SessionError`] is the other kind: an operation called in a
//! state where it has no meaning.

use miette::Diagnostic;

use crate::document::PageId;

/// Failure of a document load.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum LoadError {
    /// The URL was empty or only whitespace; nothing was requested.
    #[error("Please enter a valid JSON URL")]
    #[diagnostic(code(docview::load::validation))]
    Validation,

    /// The retrieval itself failed.
    #[error("Failed to fetch data. Please check the URL.")]
    #[diagnostic(code(docview::load::fetch))]
    Fetch {
        url: String,
        #[source]
        reason: FetchFailure,
    },

    /// The payload arrived but is not a pages document.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),
}

/// Why a retrieval did not produce a body.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum FetchFailure {
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),
}

/// The payload does not have the shape of a pages document.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("Invalid JSON format: {0}")]
    #[diagnostic(code(docview::format::json))]
    InvalidJson(String),

    #[error("Invalid JSON format: expected an object at the top level")]
    #[diagnostic(code(docview::format::not_object))]
    NotAnObject,

    #[error("Invalid JSON format: Missing 'pages' key.")]
    #[diagnostic(
        code(docview::format::missing_pages),
        help("the document needs a top-level `pages` (or `Pages`) object")
    )]
    MissingPages,

    #[error("Invalid JSON format: '{key}' must map page ids to pages")]
    #[diagnostic(code(docview::format::container))]
    InvalidContainer { key: String },

    #[error("Invalid JSON format: page '{id}': {message}")]
    #[diagnostic(
        code(docview::format::page),
        help("every page needs a string `title` and an optional string `bodyText`")
    )]
    InvalidPage { id: String, message: String },
}

/// An operation was invoked in a session state that does not allow it.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum SessionError {
    #[error("no document is loaded")]
    #[diagnostic(code(docview::session::not_loaded))]
    NotLoaded,

    #[error("no page is selected")]
    #[diagnostic(code(docview::session::no_selection))]
    NoSelection,

    #[error("page '{0}' is not part of the document")]
    #[diagnostic(code(docview::session::unknown_page))]
    UnknownPage(PageId),

    #[error("the session is not in edit mode")]
    #[diagnostic(code(docview::session::not_editing))]
    NotEditing,

    #[error("the session is already in edit mode")]
    #[diagnostic(code(docview::session::already_editing))]
    AlreadyEditing,

    #[error(transparent)]
    #[diagnostic(code(docview::session::serialize))]
    Serialize(#[from] serde_json::Error),
}
