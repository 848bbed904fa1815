//! Markdown edit surface with a live preview.

use dioxus::prelude::*;
use docview_core::EditBuffer;
use docview_renderer::render_markdown;

/// Textarea over a local [`EditBuffer`].
///
/// The buffer is re-seeded whenever `content` changes; every keystroke hands
/// the whole text to `on_change`.
#[component]
pub fn MarkdownEditor(content: String, on_change: EventHandler<String>) -> Element {
    let mut buffer = use_signal(|| EditBuffer::new(content.clone()));

    use_effect(use_reactive!(|content| {
        if buffer.write().sync(&content) {
            tracing::debug!("editor re-seeded from new content");
        }
    }));

    let text = buffer.read().text().to_owned();
    let preview = render_markdown(&text);

    rsx! {
        div { class: "markdown-editor",
            textarea {
                class: "markdown-editor-input",
                aria_label: "Page content",
                spellcheck: "false",
                value: "{text}",
                oninput: move |e| {
                    let current = buffer.write().input(e.value()).to_owned();
                    on_change.call(current);
                },
            }
            div { class: "markdown-editor-preview markdown-body",
                dangerous_inner_html: "{preview}"
            }
        }
    }
}
