//! The document session screen: load form, page menu, and the routed page
//! content in between.
//!
//! This is the layout of every route, so it survives navigation between
//! pages along with its URL field and any load in flight.

use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;
use docview_core::{HttpSource, LoadOutcome, PageId, Session, SessionError};

use crate::components::NavigationMenu;
use crate::components::toast::{EXPORTED, Notice, REFRESHED};
use crate::{CONFIG, Route, download};

/// Route for whatever the session has selected.
pub(crate) fn selected_route(session: &Session) -> Route {
    match session.selected_page() {
        Some((_, page)) => Route::DocPage { slug: page.slug() },
        None => Route::Home {},
    }
}

/// Session operations the UI only calls in states that allow them.
pub(crate) fn expect_ok<T>(op: &str, result: Result<T, SessionError>) -> Option<T> {
    result
        .inspect_err(|e| tracing::warn!("{op} rejected: {e}"))
        .ok()
}

#[component]
pub fn Viewer() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let source = use_context::<HttpSource>();
    let toasts = use_toast();
    let navigator = use_navigator();
    let mut url_input = use_signal(|| {
        let current = session.peek().source_url().to_owned();
        if current.is_empty() {
            CONFIG.default_source_url.to_owned()
        } else {
            current
        }
    });

    let load = move |_: MouseEvent| {
        let url = url_input();
        let ticket = match session.write().begin_load(&url) {
            Ok(ticket) => ticket,
            Err(e) => {
                Notice::error(e.to_string()).show(toasts);
                return;
            }
        };
        let source = source.clone();
        spawn(async move {
            let result = source.fetch(&url).await;
            let outcome = session.write().finish_load(ticket, result);
            if let Err(e) = &outcome {
                tracing::error!("Error fetching JSON: {e}");
            }
            if let Some(notice) = Notice::for_load(&outcome) {
                notice.show(toasts);
            }
            if let Ok(LoadOutcome::Loaded { .. }) = outcome {
                navigator.push(selected_route(&session.read()));
            }
        });
    };

    let refresh = move |_: MouseEvent| {
        session.write().refresh();
        url_input.set(String::new());
        navigator.push(Route::Home {});
        Notice::info(REFRESHED).show(toasts);
    };

    let select = move |id: PageId| {
        if expect_ok("select", session.write().select_page(id.as_str())).is_some() {
            navigator.push(selected_route(&session.read()));
        }
    };

    let export = move |_: MouseEvent| {
        let Some(file) = expect_ok("export", session.read().export()) else {
            return;
        };
        match download::offer(&file) {
            Ok(()) => Notice::success(EXPORTED).show(toasts),
            Err(e) => {
                tracing::error!("{e}");
                Notice::error(e.to_string()).show(toasts);
            }
        }
    };

    let (loading, document, selected, page_title) = {
        let state = session.read();
        (
            state.is_loading(),
            state.document().cloned(),
            state.selected_id().cloned(),
            state.effective_page().map(|page| page.title),
        )
    };
    let has_page = page_title.is_some();
    let title = CONFIG.page_title(page_title.as_deref());

    rsx! {
        document::Title { "{title}" }

        div { class: "docview",
            section { class: "load-panel",
                div { class: "load-row",
                    input {
                        class: "url-input",
                        r#type: "url",
                        placeholder: "Enter JSON URL",
                        aria_label: "Enter JSON URL",
                        value: "{url_input}",
                        oninput: move |e| url_input.set(e.value()),
                    }
                    button { class: "refresh-button", onclick: refresh, "Refresh" }
                }
                button {
                    class: "load-button",
                    disabled: loading,
                    onclick: load,
                    if loading { "Loading..." } else { "Load Documentation" }
                }
            }

            if loading {
                div { class: "loading",
                    span { class: "spinner" }
                    span { "Fetching data, please wait..." }
                }
            }

            if let Some(document) = document {
                div { class: "doc-layout",
                    aside { class: "doc-sidebar",
                        NavigationMenu { document, selected, on_select: select }
                        button {
                            class: "export-button",
                            disabled: !has_page,
                            onclick: export,
                            "Export"
                        }
                    }

                    main { class: "doc-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
