//! Shared building blocks for the viewer.

mod editor;
pub use editor::MarkdownEditor;

mod markdown;
pub use markdown::MarkdownView;

mod menu;
pub use menu::NavigationMenu;

pub mod toast;
pub use toast::{Notice, ToastProvider};
