//! docview core
//!
//! The page model and the session controller behind the documentation viewer.
//! Nothing in here touches the DOM: the app crate drives a [`Session`] and
//! renders whatever state it reports.

pub mod document;
pub mod edit;
pub mod error;
pub mod export;
pub mod session;
pub mod slug;
pub mod source;

pub use crate::document::{Document, PAGE_CONTAINER_KEYS, Page, PageId};
pub use crate::edit::EditBuffer;
pub use crate::error::{FetchFailure, FormatError, LoadError, SessionError};
pub use crate::export::{EXPORT_MIME_TYPE, ExportFile};
pub use crate::session::{
    EffectivePage, LoadOutcome, LoadTicket, PendingEdit, Session, SessionState,
};
pub use crate::source::HttpSource;
