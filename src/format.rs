//! Deterministic HTML pretty printing.
//!
//! Block-level elements start on their own line and indent their children by
//! two spaces. Inline runs (text, links, images, emphasis) stay on a single
//! line with whitespace collapsed. A block whose content is entirely inline
//! is printed on one line. Script and style bodies are re-indented line by
//! line, `pre` and `textarea` bodies are kept verbatim.

const INDENT: &str = "  ";

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "colgroup", "dd", "details",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "head", "header", "hr", "html", "li", "link", "main", "meta", "nav", "ol",
    "p", "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr",
    "ul",
];

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose body is code, re-indented but not reflowed.
const SCRIPT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements whose body is whitespace sensitive.
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Doctype(&'a str),
    Comment(&'a str),
    Open { name: String, raw: &'a str },
    Close { name: String, raw: &'a str },
    Text(&'a str),
    RawText { content: &'a str, preformatted: bool },
}

/// Pretty prints an HTML document.
///
/// The same input always produces the same output. Output ends with a
/// newline unless the input is empty.
///
/// # Arguments
///
/// * `html`: Serialized HTML document or fragment
///
/// # Returns
///
/// Indented HTML
pub(crate) fn pretty_print(html: &str) -> String {
    let mut printer = Printer::default();

    for token in tokenize(html) {
        match token {
            Token::Doctype(raw) => {
                printer.flush();
                printer.write(raw);
            }
            Token::Comment(raw) => printer.push_inline(raw),
            Token::Text(text) => printer.push_text(text),
            Token::Open { name, raw } => {
                if !starts_line(&name) {
                    printer.push_inline(raw);
                } else if is_void(&name) {
                    printer.flush();
                    printer.write(raw);
                } else {
                    printer.open_block(raw, PREFORMATTED_ELEMENTS.contains(&name.as_str()));
                }
            }
            Token::Close { name, raw } => {
                if starts_line(&name) {
                    printer.close_block(raw);
                } else {
                    printer.push_inline(raw);
                }
            }
            Token::RawText {
                content,
                preformatted,
            } => {
                if preformatted {
                    printer.line.push_str(content);
                } else {
                    printer.script_body(content);
                }
            }
        }
    }

    printer.flush();
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    line: String,
    line_indent: usize,
    indent: usize,
    /// Pending line starts with the open tag of the innermost block.
    line_opens_block: bool,
    /// Pending line holds preformatted content.
    line_verbatim: bool,
    /// Length of the open tag that starts the pending line.
    block_tag_len: usize,
}

impl Printer {
    fn flush(&mut self) {
        let trimmed = self.line.trim();
        if !trimmed.is_empty() {
            write_line(&mut self.out, self.line_indent, trimmed);
        }
        self.line.clear();
        self.line_opens_block = false;
        self.line_verbatim = false;
    }

    fn write(&mut self, raw: &str) {
        write_line(&mut self.out, self.indent, raw);
    }

    fn push_inline(&mut self, raw: &str) {
        if self.line.is_empty() {
            self.line_indent = self.indent;
        }
        self.line.push_str(raw);
    }

    fn push_text(&mut self, text: &str) {
        let collapsed = collapse_whitespace(text);
        let at_line_start = self.line.is_empty()
            || (self.line_opens_block && self.line.len() == self.block_tag_len);
        let text = if at_line_start {
            collapsed.trim_start()
        } else {
            collapsed.as_str()
        };

        if !text.is_empty() {
            self.push_inline(text);
        }
    }

    fn open_block(&mut self, raw: &str, preformatted: bool) {
        self.flush();
        self.line_indent = self.indent;
        self.line.push_str(raw);
        self.block_tag_len = raw.len();
        self.indent += 1;
        self.line_opens_block = true;
        self.line_verbatim = preformatted;
    }

    fn close_block(&mut self, raw: &str) {
        self.indent = self.indent.saturating_sub(1);

        if self.line_opens_block {
            if !self.line_verbatim {
                let kept = self.line.trim_end().len();
                self.line.truncate(kept);
            }
            self.line.push_str(raw);
            self.flush();
        } else {
            self.flush();
            self.write(raw);
        }
    }

    fn script_body(&mut self, content: &str) {
        let lines: Vec<&str> = content.lines().collect();
        let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
            return;
        };
        let last = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .unwrap_or(first);
        let body = &lines[first..=last];

        let common = body
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| leading_whitespace(l))
            .min()
            .unwrap_or(0);

        self.flush();
        for line in body {
            if line.trim().is_empty() {
                self.out.push('\n');
            } else {
                write_line(&mut self.out, self.indent, line[common..].trim_end());
            }
        }
    }
}

fn write_line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn starts_line(name: &str) -> bool {
    BLOCK_ELEMENTS.contains(&name)
        || SCRIPT_ELEMENTS.contains(&name)
        || PREFORMATTED_ELEMENTS.contains(&name)
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                result.push(' ');
                in_space = true;
            }
        } else {
            result.push(c);
            in_space = false;
        }
    }

    result
}

/// Splits HTML into tags, text, comments and raw element bodies.
fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < html.len() {
        let Some(offset) = html[pos..].find('<') else {
            tokens.push(Token::Text(&html[pos..]));
            break;
        };

        let start = pos + offset;
        if start > pos {
            tokens.push(Token::Text(&html[pos..start]));
        }

        let rest = &html[start..];

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map_or(html.len(), |p| start + p + 3);
            tokens.push(Token::Comment(&html[start..end]));
            pos = end;
            continue;
        }

        if rest.starts_with("<!") {
            let end = rest.find('>').map_or(html.len(), |p| start + p + 1);
            tokens.push(Token::Doctype(&html[start..end]));
            pos = end;
            continue;
        }

        let closing = rest.starts_with("</");
        let name_start = start + if closing { 2 } else { 1 };
        let name = tag_name(&html[name_start..]);

        // Stray '<' in text
        if name.is_empty() {
            tokens.push(Token::Text(&html[start..start + 1]));
            pos = start + 1;
            continue;
        }

        let end = tag_end(html, name_start);
        let raw = &html[start..end];
        pos = end;

        if closing {
            tokens.push(Token::Close { name, raw });
            continue;
        }

        let script = SCRIPT_ELEMENTS.contains(&name.as_str());
        let preformatted = PREFORMATTED_ELEMENTS.contains(&name.as_str());
        let close_pattern = format!("</{}", name);
        tokens.push(Token::Open { name, raw });

        if script || preformatted {
            let content_end = html[pos..]
                .find(&close_pattern)
                .map_or(html.len(), |p| pos + p);
            if content_end > pos {
                tokens.push(Token::RawText {
                    content: &html[pos..content_end],
                    preformatted,
                });
            }
            pos = content_end;
        }
    }

    tokens
}

/// Returns the lowercase tag name at the start of `s`, empty if none.
fn tag_name(s: &str) -> String {
    if !s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return String::new();
    }

    s.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns the index just past the `>` closing a tag, skipping quoted values.
fn tag_end(html: &str, from: usize) -> usize {
    let mut quote: Option<u8> = None;

    for (i, b) in html.bytes().enumerate().skip(from) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return i + 1,
            (None, _) => {}
        }
    }

    html.len()
}
