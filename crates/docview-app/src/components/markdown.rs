use dioxus::prelude::*;
use docview_renderer::render_markdown;

/// Rendered markdown, no interactivity.
#[component]
pub fn MarkdownView(content: String) -> Element {
    let html = render_markdown(&content);

    rsx! {
        article { class: "markdown-body",
            dangerous_inner_html: "{html}"
        }
    }
}
