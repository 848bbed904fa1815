//! docview renderer
//!
//! Markdown to HTML for page display and the editor preview.
//!
//! Documents come from arbitrary URLs, so raw HTML embedded in a page body is
//! never passed through. It is rendered as text instead.

use markdown_weaver::{Event, Options, Parser};

/// Markdown extensions enabled for page bodies.
pub fn default_md_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_GFM
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Turn raw HTML into literal text.
fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    }
}

/// Render `content` to an HTML fragment.
///
/// Blank input renders to an empty string.
pub fn render_markdown(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }
    let parser = Parser::new_ext(content, default_md_options()).map(escape_raw_html);
    let mut html = String::with_capacity(content.len() + content.len() / 2);
    markdown_weaver::html::push_html(&mut html, parser);
    tracing::trace!(bytes = html.len(), "rendered markdown");
    html
}
