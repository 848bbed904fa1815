//! The document session: load, navigate, edit, export, refresh.
//!
//! A [`Session`] is the single owner of everything the viewer knows. The UI
//! holds one in a signal and calls into it from event handlers; every method
//! either completes its transition or leaves the state untouched.
//!
//! Loading is split in two so the retrieval can happen outside a borrow of
//! the session:
//!
//! ```ignore
//! let ticket = session.begin_load(&url)?;
//! let result = source.fetch(&url).await;
//! session.finish_load(ticket, result)?;
//! ```
//!
//! Each [`LoadTicket`] is only honoured while it is the load the session is
//! waiting for. Starting another load or refreshing makes older tickets
//! stale, and their results are dropped on arrival.

use serde_json::Value;

use crate::document::{Document, Page, PageId};
use crate::error::{LoadError, SessionError};
use crate::export::ExportFile;

/// Identifies one in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Uncommitted edits to the selected page.
///
/// `None` and `Some("")` both mean "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEdit {
    pub title: Option<String>,
    pub body_text: Option<String>,
}

impl PendingEdit {
    pub fn title_or<'a>(&'a self, stored: &'a str) -> &'a str {
        non_empty(self.title.as_deref()).unwrap_or(stored)
    }

    pub fn body_or<'a>(&'a self, stored: &'a str) -> &'a str {
        non_empty(self.body_text.as_deref()).unwrap_or(stored)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Empty,
    Loading {
        ticket: LoadTicket,
    },
    Viewing {
        document: Document,
        selected: Option<PageId>,
    },
    Editing {
        document: Document,
        selected: PageId,
        pending: PendingEdit,
    },
}

/// What became of a finished retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { pages: usize },
    /// The session moved on before the result arrived; nothing changed.
    Stale,
}

/// The selected page as it would look with pending edits applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectivePage {
    pub id: PageId,
    pub title: String,
    pub body_text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    state: SessionState,
    source_url: String,
    last_ticket: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// URL of the current (or last attempted) load.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing { .. })
    }

    pub fn document(&self) -> Option<&Document> {
        match &self.state {
            SessionState::Viewing { document, .. } | SessionState::Editing { document, .. } => {
                Some(document)
            }
            SessionState::Empty | SessionState::Loading { .. } => None,
        }
    }

    pub fn selected_id(&self) -> Option<&PageId> {
        match &self.state {
            SessionState::Viewing { selected, .. } => selected.as_ref(),
            SessionState::Editing { selected, .. } => Some(selected),
            SessionState::Empty | SessionState::Loading { .. } => None,
        }
    }

    pub fn selected_page(&self) -> Option<(&PageId, &Page)> {
        let id = self.selected_id()?;
        let page = self.document()?.get(id.as_str())?;
        Some((id, page))
    }

    pub fn pending(&self) -> Option<&PendingEdit> {
        match &self.state {
            SessionState::Editing { pending, .. } => Some(pending),
            _ => None,
        }
    }

    /// The selected page with any non-empty pending values laid over it.
    pub fn effective_page(&self) -> Option<EffectivePage> {
        let (id, page) = self.selected_page()?;
        let (title, body_text) = match self.pending() {
            Some(pending) => (
                pending.title_or(&page.title),
                pending.body_or(&page.body_text),
            ),
            None => (page.title.as_str(), page.body_text.as_str()),
        };
        Some(EffectivePage {
            id: id.clone(),
            title: title.to_owned(),
            body_text: body_text.to_owned(),
        })
    }

    /// Start loading `url`.
    ///
    /// Rejects a blank URL without touching the session. Otherwise the
    /// session drops whatever it held and waits for the returned ticket.
    /// Starting a load while another is in flight supersedes it.
    pub fn begin_load(&mut self, url: &str) -> Result<LoadTicket, LoadError> {
        if url.trim().is_empty() {
            return Err(LoadError::Validation);
        }
        self.last_ticket += 1;
        let ticket = LoadTicket(self.last_ticket);
        if let SessionState::Loading { ticket: previous } = self.state {
            tracing::debug!(?previous, "superseding in-flight load");
        }
        self.source_url = url.to_owned();
        self.state = SessionState::Loading { ticket };
        tracing::debug!(?ticket, "loading {url}");
        Ok(ticket)
    }

    /// Apply the result of the retrieval started with `ticket`.
    ///
    /// Failures put the session back to empty and are returned for the
    /// caller to report. A stale ticket changes nothing.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Value, LoadError>,
    ) -> Result<LoadOutcome, LoadError> {
        if self.state != (SessionState::Loading { ticket }) {
            tracing::warn!(?ticket, "discarding stale load result");
            return Ok(LoadOutcome::Stale);
        }

        let parsed =
            result.and_then(|payload| Document::from_payload(payload).map_err(LoadError::from));
        let document = match parsed {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("loading {} failed: {e}", self.source_url);
                self.state = SessionState::Empty;
                return Err(e);
            }
        };

        let pages = document.len();
        let selected = document.first_id().cloned();
        tracing::info!(pages, "loaded {}", self.source_url);
        self.state = SessionState::Viewing { document, selected };
        Ok(LoadOutcome::Loaded { pages })
    }

    /// Select the page under `id`.
    ///
    /// Switching to another page while editing keeps edit mode but drops the
    /// pending values, so the editor starts from the new page's content.
    pub fn select_page(&mut self, id: &str) -> Result<(), SessionError> {
        let document = self.document().ok_or(SessionError::NotLoaded)?;
        if !document.contains(id) {
            return Err(SessionError::UnknownPage(PageId::new(id)));
        }
        match &mut self.state {
            SessionState::Viewing { selected, .. } => {
                *selected = Some(PageId::new(id));
            }
            SessionState::Editing {
                selected, pending, ..
            } => {
                if *selected != *id {
                    *selected = PageId::new(id);
                    *pending = PendingEdit::default();
                }
            }
            SessionState::Empty | SessionState::Loading { .. } => {
                return Err(SessionError::NotLoaded);
            }
        }
        tracing::debug!("selected page {id}");
        Ok(())
    }

    /// Select the first page, in document order, whose title slugs to `slug`.
    ///
    /// Titles differing only in whitespace share a slug, and only the first
    /// of them is reachable this way: following the address bar onto a later
    /// one lands on the earlier page. Unknown slugs leave the selection alone.
    pub fn sync_from_slug(&mut self, slug: &str) -> Option<PageId> {
        let id = self.document()?.find_by_slug(slug)?.clone();
        self.select_page(id.as_str()).ok()?;
        Some(id)
    }

    pub fn enter_edit_mode(&mut self) -> Result<(), SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Viewing {
                document,
                selected: Some(selected),
            } => {
                tracing::debug!("editing page {selected}");
                self.state = SessionState::Editing {
                    document,
                    selected,
                    pending: PendingEdit::default(),
                };
                Ok(())
            }
            other => {
                let err = match &other {
                    SessionState::Viewing { selected: None, .. } => SessionError::NoSelection,
                    SessionState::Editing { .. } => SessionError::AlreadyEditing,
                    _ => SessionError::NotLoaded,
                };
                self.state = other;
                Err(err)
            }
        }
    }

    pub fn update_pending_title(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.pending_mut()?.title = Some(text.into());
        Ok(())
    }

    pub fn update_pending_body(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.pending_mut()?.body_text = Some(text.into());
        Ok(())
    }

    /// Write non-empty pending values into the document and leave edit mode.
    ///
    /// The document is replaced as a whole; returns the committed page id.
    pub fn commit_edit(&mut self) -> Result<PageId, SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Editing {
                document,
                selected,
                pending,
            } => {
                let Some(stored) = document.get(selected.as_str()) else {
                    self.state = SessionState::Editing {
                        document,
                        selected: selected.clone(),
                        pending,
                    };
                    return Err(SessionError::UnknownPage(selected));
                };
                let page = Page {
                    title: pending.title_or(&stored.title).to_owned(),
                    body_text: pending.body_or(&stored.body_text).to_owned(),
                    extra: stored.extra.clone(),
                };
                let document = document.with_page(selected.clone(), page);
                tracing::info!("committed edit to page {selected}");
                self.state = SessionState::Viewing {
                    document,
                    selected: Some(selected.clone()),
                };
                Ok(selected)
            }
            other => {
                self.state = other;
                Err(SessionError::NotEditing)
            }
        }
    }

    /// Export the effective selected page. The session is not modified.
    pub fn export(&self) -> Result<ExportFile, SessionError> {
        if self.document().is_none() {
            return Err(SessionError::NotLoaded);
        }
        let page = self.effective_page().ok_or(SessionError::NoSelection)?;
        let file = ExportFile::for_page(&page.title, &page.body_text)?;
        tracing::info!("exported page {} as {}", page.id, file.file_name);
        Ok(file)
    }

    /// Forget everything. Any load still in flight becomes stale.
    pub fn refresh(&mut self) {
        tracing::debug!("refreshing session");
        self.state = SessionState::Empty;
        self.source_url.clear();
    }

    fn pending_mut(&mut self) -> Result<&mut PendingEdit, SessionError> {
        match &mut self.state {
            SessionState::Editing { pending, .. } => Ok(pending),
            _ => Err(SessionError::NotEditing),
        }
    }
}
