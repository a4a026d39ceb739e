//! Rendered text of a subtree.
//!
//! Approximates the browser's `innerText` without a layout engine: elements
//! that never render are skipped, whitespace in ordinary text collapses,
//! block boundaries become line breaks and table cells are tab separated.
//! Display is inferred from the tag name and the `hidden` attribute or an
//! inline `display: none`; stylesheets are not consulted.

use dom_query::{NodeRef, Selection};

use crate::dom;

/// Elements whose content is never part of rendered text.
const NON_RENDERED: &[&str] = &[
    "head", "title", "script", "style", "noscript", "template", "meta", "link",
    "base", "iframe", "object", "embed", "svg", "canvas", "audio", "video",
    "select", "datalist", "textarea", "input",
];

/// Elements rendered as blocks: one required line break on each side.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "center", "dd",
    "details", "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hgroup", "hr", "legend", "li", "listing", "main", "menu", "nav", "ol",
    "pre", "section", "summary", "table", "tbody", "tfoot", "thead", "tr", "ul",
];

enum Step<'a> {
    Enter(NodeRef<'a>, bool),
    Leave(usize),
}

/// Rendered text of every node in `sel`, concatenated in document order.
#[must_use]
pub fn inner_text(sel: &Selection) -> String {
    let mut out = TextBuilder::default();
    for node in sel.nodes() {
        render(*node, &mut out);
    }
    out.finish()
}

/// Rendered text of a single node and its descendants.
#[must_use]
pub fn node_inner_text(node: NodeRef) -> String {
    let mut out = TextBuilder::default();
    render(node, &mut out);
    out.finish()
}

fn render<'a>(root: NodeRef<'a>, out: &mut TextBuilder) {
    let mut stack = vec![Step::Enter(root, false)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Leave(breaks) => out.request_break(breaks),
            Step::Enter(node, preformatted) => {
                if node.is_text() {
                    let text = node.text();
                    if preformatted {
                        out.push_preformatted(&text);
                    } else {
                        out.push_text(&text);
                    }
                    continue;
                }
                if !node.is_element() {
                    continue;
                }

                let tag = dom::tag_name(&node).unwrap_or_default();
                if !is_rendered(&node, &tag) {
                    continue;
                }

                match tag.as_str() {
                    "br" => {
                        out.push_newline();
                        continue;
                    }
                    "td" | "th" => {
                        if dom::previous_element_sibling(&node)
                            .and_then(|prev| dom::tag_name(&prev))
                            .is_some_and(|t| t == "td" || t == "th")
                        {
                            out.push_separator('\t');
                        }
                    }
                    _ => {}
                }

                let breaks = if tag == "p" {
                    2
                } else if BLOCK_ELEMENTS.contains(&tag.as_str()) {
                    1
                } else {
                    0
                };
                out.request_break(breaks);

                let preformatted = preformatted || tag == "pre" || tag == "listing";
                stack.push(Step::Leave(breaks));
                for child in node.children().into_iter().rev() {
                    stack.push(Step::Enter(child, preformatted));
                }
            }
        }
    }
}

fn is_rendered(node: &NodeRef, tag: &str) -> bool {
    if NON_RENDERED.contains(&tag) || node.has_attr("hidden") {
        return false;
    }
    !dom::node_attribute(node, "style").is_some_and(|style| {
        let style: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        style.contains("display:none")
    })
}

/// Accumulates rendered text, deferring spaces and line breaks until the
/// next visible content so that none appear at the start or end of output
/// or around line boundaries.
#[derive(Default)]
struct TextBuilder {
    out: String,
    pending_space: bool,
    pending_breaks: usize,
}

impl TextBuilder {
    fn request_break(&mut self, count: usize) {
        if count > 0 {
            self.pending_breaks = self.pending_breaks.max(count);
            self.pending_space = false;
        }
    }

    fn flush(&mut self) {
        if self.out.is_empty() {
            self.pending_breaks = 0;
            self.pending_space = false;
            return;
        }
        if self.pending_breaks > 0 {
            let trimmed = self.out.trim_end_matches(' ').len();
            self.out.truncate(trimmed);
            for _ in 0..self.pending_breaks {
                self.out.push('\n');
            }
        } else if self.pending_space && !self.out.ends_with(['\n', '\t', ' ']) {
            self.out.push(' ');
        }
        self.pending_breaks = 0;
        self.pending_space = false;
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut words = text.split_whitespace().peekable();
        if words.peek().is_none() {
            self.pending_space = self.pending_breaks == 0;
            return;
        }
        if text.starts_with(char::is_whitespace) && self.pending_breaks == 0 {
            self.pending_space = true;
        }
        let mut first = true;
        for word in words {
            if !first {
                self.pending_space = true;
            }
            first = false;
            self.flush();
            self.out.push_str(word);
        }
        if text.ends_with(char::is_whitespace) {
            self.pending_space = true;
        }
    }

    fn push_preformatted(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.flush();
        self.out.push_str(&text.replace("\r\n", "\n"));
    }

    fn push_newline(&mut self) {
        self.pending_space = false;
        self.flush();
        self.out.push('\n');
    }

    fn push_separator(&mut self, sep: char) {
        if !self.out.is_empty() && self.pending_breaks == 0 {
            self.pending_space = false;
            self.out.push(sep);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
