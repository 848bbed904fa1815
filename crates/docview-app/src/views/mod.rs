mod page;
mod viewer;
pub use page::PageContent;
pub use viewer::Viewer;

use dioxus::prelude::*;
use docview_core::Session;

#[component]
pub fn Home() -> Element {
    rsx! { PageContent {} }
}

/// A page addressed by slug, `/{slug}`.
///
/// The address bar drives the selection, so back and forward land on the
/// first page with that slug.
#[component]
pub fn DocPage(slug: String) -> Element {
    let mut session = use_context::<Signal<Session>>();

    use_effect(use_reactive!(|slug| {
        if session.write().sync_from_slug(&slug).is_none() {
            tracing::debug!("no page for slug {slug:?}");
        }
    }));

    rsx! { PageContent {} }
}
