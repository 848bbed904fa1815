//! Notifications.
//!
//! Handlers describe what happened as a [`Notice`] and show it on the
//! toast stack from `use_toast()`. [`ToastProvider`] has to sit above them.

mod component;
pub use component::ToastProvider;

use dioxus_primitives::toast::{ToastOptions, Toasts};
use docview_core::{LoadError, LoadOutcome};

use crate::CONFIG;

pub const LOADED: &str = "Documentation loaded successfully!";
pub const UPDATED: &str = "Page content updated successfully!";
pub const EXPORTED: &str = "Export successful!";
pub const REFRESHED: &str = "Application state refreshed!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// What to tell the user about a finished load. Superseded loads stay
    /// quiet.
    pub fn for_load(outcome: &Result<LoadOutcome, LoadError>) -> Option<Self> {
        match outcome {
            Ok(LoadOutcome::Loaded { .. }) => Some(Self::success(LOADED)),
            Ok(LoadOutcome::Stale) => None,
            Err(e) => Some(Self::error(e.to_string())),
        }
    }

    pub fn show(self, toasts: Toasts) {
        let options = ToastOptions::new().duration(CONFIG.toast_lifetime);
        match self.level {
            NoticeLevel::Success => toasts.success(self.message, options),
            NoticeLevel::Info => toasts.info(self.message, options),
            NoticeLevel::Error => toasts.error(self.message, options),
        }
    }
}
