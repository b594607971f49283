//! Markdown渲染
//!
//! 将生成的计划文本转换为HTML，启用表格与删除线扩展。

use pulldown_cmark::{html, Options, Parser};

/// Markdown → HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);
    output
}
