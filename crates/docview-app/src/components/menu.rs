use dioxus::prelude::*;
use docview_core::{Document, PageId};

/// One button per page, in document order.
#[component]
pub fn NavigationMenu(
    document: Document,
    selected: Option<PageId>,
    on_select: EventHandler<PageId>,
) -> Element {
    let entries: Vec<(PageId, String, bool)> = document
        .pages()
        .map(|(id, page)| (id.clone(), page.title.clone(), selected.as_ref() == Some(id)))
        .collect();

    rsx! {
        nav { class: "page-menu", aria_label: "Pages",
            ul { class: "page-menu-list",
                for (id, title, is_selected) in entries {
                    {
                        let key = id.to_string();
                        let class = if is_selected {
                            "page-menu-item selected"
                        } else {
                            "page-menu-item"
                        };
                        let current = if is_selected { "page" } else { "false" };
                        rsx! {
                            li { key: "{key}",
                                button {
                                    class: "{class}",
                                    aria_current: current,
                                    onclick: move |_| on_select.call(id.clone()),
                                    "{title}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
