use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;
use docview_core::Session;

use super::viewer::{expect_ok, selected_route};
use crate::components::toast::{Notice, UPDATED};
use crate::components::{MarkdownEditor, MarkdownView};

/// The selected page, either rendered or in the edit form.
#[component]
pub fn PageContent() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_toast();
    let navigator = use_navigator();

    let edit = move |_: MouseEvent| {
        expect_ok("edit", session.write().enter_edit_mode());
    };

    let commit = move |_: MouseEvent| {
        if expect_ok("commit", session.write().commit_edit()).is_some() {
            Notice::success(UPDATED).show(toasts);
            navigator.push(selected_route(&session.read()));
        }
    };

    let (editing, page, stored_body, title_draft) = {
        let state = session.read();
        let stored = state.selected_page().map(|(_, page)| page);
        // Drafts start from the stored page so clearing a field does not snap back.
        let title_draft = state
            .pending()
            .and_then(|pending| pending.title.clone())
            .or_else(|| stored.map(|page| page.title.clone()))
            .unwrap_or_default();
        (
            state.is_editing(),
            state.effective_page(),
            stored.map(|page| page.body_text.clone()).unwrap_or_default(),
            title_draft,
        )
    };

    let Some(page) = page else {
        return rsx! {};
    };

    rsx! {
        if editing {
            div { class: "edit-form",
                input {
                    class: "title-input",
                    r#type: "text",
                    aria_label: "Title",
                    value: "{title_draft}",
                    oninput: move |e| {
                        expect_ok("title", session.write().update_pending_title(e.value()));
                    },
                }
                // Keyed by page so switching pages starts a fresh buffer.
                MarkdownEditor {
                    key: "{page.id}",
                    content: stored_body,
                    on_change: move |text: String| {
                        expect_ok("body", session.write().update_pending_body(text));
                    },
                }
                button { class: "commit-button", onclick: commit, "Complete Edit" }
            }
        } else {
            div { class: "page-view",
                header { class: "page-header",
                    h1 { class: "page-title", "{page.title}" }
                    button { class: "edit-button", onclick: edit, "Edit" }
                }
                MarkdownView { content: page.body_text }
            }
        }
    }
}
