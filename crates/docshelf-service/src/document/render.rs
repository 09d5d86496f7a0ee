//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Render CommonMark (plus tables and strikethrough) to an HTML fragment.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
