//! Markdown renderer
//!
//! Renders MDX bodies to HTML. Component markup embedded in MDX is treated as raw
//! HTML and passed through untouched.

use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown/MDX body to HTML
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
