//! Markdown rendering with CommonMark and table support.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, format_html, parse_document};
use std::io;

use super::rewrite_escaped_images;

/// Renders issue markdown to HTML.
///
/// Raw HTML in the source is treated as text: HTML blocks are parsed again as
/// markdown with their tags escaped, and inline HTML becomes plain text.
/// Escaped `<img>` tags are then rebuilt by [`rewrite_escaped_images`],
/// keeping only their `src` and `width` attributes. Every other piece of raw
/// HTML stays escaped text.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with tables and strikethrough enabled.
    ///
    /// Configures:
    /// - Tables and strikethrough extensions
    /// - Raw HTML escaped instead of rendered or dropped
    /// - No smart punctuation, no autolinking of bare URLs
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;

        options.render.unsafe_ = false;
        options.render.escape = true;

        Self { options }
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML with escaped image tags rewritten
    ///
    /// # Errors
    ///
    /// Returns error if HTML formatting fails
    pub fn render(&self, content: &str) -> io::Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);
        self.flatten_raw_html(&arena, root);

        let mut output = Vec::with_capacity(content.len() * 2);
        format_html(root, &self.options, &mut output)?;
        let html = String::from_utf8(output)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if html.contains("img") {
            Ok(rewrite_escaped_images(&html))
        } else {
            Ok(html)
        }
    }

    /// Turns raw HTML nodes into markdown text.
    ///
    /// Each HTML block is replaced by the blocks parsed from its literal with
    /// tag lines escaped, so markdown following a tag line on the next line
    /// still renders. Inline HTML becomes a text node. Repeats until no HTML
    /// block is left; every pass consumes at least the first line of each
    /// block.
    fn flatten_raw_html<'n>(&self, arena: &'n Arena<AstNode<'n>>, root: &'n AstNode<'n>) {
        loop {
            let blocks: Vec<&'n AstNode<'n>> = root
                .descendants()
                .filter(|node| matches!(node.data.borrow().value, NodeValue::HtmlBlock(_)))
                .collect();

            if blocks.is_empty() {
                break;
            }

            for block in blocks {
                let source = match &block.data.borrow().value {
                    NodeValue::HtmlBlock(html) => escape_tag_lines(&html.literal),
                    _ => continue,
                };

                let reparsed = parse_document(arena, &source, &self.options);
                let children: Vec<_> = reparsed.children().collect();
                for child in children {
                    child.detach();
                    block.insert_before(child);
                }
                block.detach();
            }
        }

        for node in root.descendants() {
            let mut data = node.data.borrow_mut();
            let text = match &data.value {
                NodeValue::HtmlInline(literal) => literal.clone(),
                _ => continue,
            };
            data.value = NodeValue::Text(text);
        }
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Backslash-escapes the `<` opening each line outside fenced code.
fn escape_tag_lines(literal: &str) -> String {
    let mut result = String::with_capacity(literal.len() + 16);
    let mut fence: Option<&str> = None;

    for line in literal.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            result.push_str(line);
            continue;
        }

        if trimmed.starts_with("```") {
            fence = Some("```");
        } else if trimmed.starts_with("~~~") {
            fence = Some("~~~");
        }

        if fence.is_none() && trimmed.starts_with('<') {
            result.push_str(&line[..indent]);
            result.push('\\');
            result.push_str(trimmed);
        } else {
            result.push_str(line);
        }
    }

    result
}
