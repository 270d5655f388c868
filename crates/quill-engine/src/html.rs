//! HTML rendition of a [`RenderTree`].
//!
//! `Preview` reproduces the editor's live preview markup (utility classes,
//! language badge, copy button keyed by handle). `Email` is class-free markup
//! for sending a note as a mail body.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    parsing::inline::InlineSpan,
    render::{CodeBlockNode, CodeMarkup, RenderNode, RenderTree},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlFlavor {
    #[default]
    Preview,
    Email,
}

/// Serializes a render tree, one top-level element per node.
///
/// Text is escaped; highlighted code markup is inserted as produced by the
/// highlighter. The email flavor wraps each run of list items of one kind in
/// `<ul>` or `<ol>`.
pub fn to_html(tree: &RenderTree, flavor: HtmlFlavor) -> String {
    let mut parts = Vec::with_capacity(tree.nodes.len());
    // `Some(ordered)` while an email list is open.
    let mut open_list: Option<bool> = None;

    for node in &tree.nodes {
        let mut out = String::new();
        match flavor {
            HtmlFlavor::Preview => write_preview_node(&mut out, node),
            HtmlFlavor::Email => {
                let list = match node {
                    RenderNode::ListItem { ordered, .. } => Some(*ordered),
                    _ => None,
                };
                if list != open_list {
                    if let Some(ordered) = open_list {
                        parts.push(list_tag(ordered, true));
                    }
                    if let Some(ordered) = list {
                        parts.push(list_tag(ordered, false));
                    }
                    open_list = list;
                }
                write_email_node(&mut out, node);
            }
        }
        parts.push(out);
    }
    if let Some(ordered) = open_list {
        parts.push(list_tag(ordered, true));
    }
    parts.join("\n")
}

fn list_tag(ordered: bool, close: bool) -> String {
    let name = if ordered { "ol" } else { "ul" };
    if close {
        format!("</{name}>")
    } else {
        format!("<{name}>")
    }
}

fn write_preview_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Heading {
            level,
            size,
            inline,
        } => {
            let _ = write!(out, "<h{level} class=\"text-{size}xl font-bold my-4\">");
            write_inline(out, inline, HtmlFlavor::Preview);
            let _ = write!(out, "</h{level}>");
        }
        RenderNode::Paragraph { inline } => {
            out.push_str("<p>");
            write_inline(out, inline, HtmlFlavor::Preview);
            out.push_str("</p>");
        }
        RenderNode::ListItem {
            indent_units,
            ordered,
            checkbox,
            inline,
        } => {
            let margin = indent_units * 4;
            match checkbox {
                Some(checked) => {
                    let _ = write!(
                        out,
                        "<div class=\"flex items-center ml-{margin} my-1\">\
                         <input type=\"checkbox\"{} class=\"mr-2 form-checkbox h-4 w-4 text-blue-600\" disabled />\
                         <span>",
                        if *checked { " checked" } else { "" }
                    );
                    write_inline(out, inline, HtmlFlavor::Preview);
                    out.push_str("</span></div>");
                }
                None => {
                    let list_style = if *ordered { " list-decimal" } else { "" };
                    let _ = write!(out, "<li class=\"ml-{margin}{list_style}\">");
                    write_inline(out, inline, HtmlFlavor::Preview);
                    out.push_str("</li>");
                }
            }
        }
        RenderNode::CodeBlock(block) => write_preview_code(out, block),
        RenderNode::Literal { text } => out.push_str(&encode_text(text)),
    }
}

fn write_preview_code(out: &mut String, block: &CodeBlockNode) {
    let language = encode_double_quoted_attribute(&block.language);
    let _ = write!(
        out,
        "<div class=\"relative my-4\">\
         <div class=\"absolute top-0 right-0 bg-gray-700 text-white text-xs px-2 py-1 rounded-bl\">{}</div>\
         <button class=\"absolute top-0 right-16 bg-gray-700 text-white text-xs px-2 py-1 rounded-bl copy-btn\" data-handle=\"{}\">Copy</button>\
         <pre><code class=\"hljs language-{language}\">",
        encode_text(&block.language),
        block.handle,
    );
    write_code_markup(out, &block.markup);
    out.push_str("</code></pre></div>");
}

fn write_email_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Heading { level, inline, .. } => {
            let _ = write!(out, "<h{level}>");
            write_inline(out, inline, HtmlFlavor::Email);
            let _ = write!(out, "</h{level}>");
        }
        RenderNode::Paragraph { inline } => {
            out.push_str("<p>");
            write_inline(out, inline, HtmlFlavor::Email);
            out.push_str("</p>");
        }
        RenderNode::ListItem {
            checkbox, inline, ..
        } => {
            out.push_str("<li>");
            match checkbox {
                Some(true) => out.push_str("<input type=\"checkbox\" checked disabled> "),
                Some(false) => out.push_str("<input type=\"checkbox\" disabled> "),
                None => {}
            }
            write_inline(out, inline, HtmlFlavor::Email);
            out.push_str("</li>");
        }
        RenderNode::CodeBlock(block) => {
            out.push_str("<pre><code>");
            write_code_markup(out, &block.markup);
            out.push_str("</code></pre>");
        }
        RenderNode::Literal { text } => {
            out.push_str(&encode_text(text).replace('\n', "<br>"));
        }
    }
}

fn write_code_markup(out: &mut String, markup: &CodeMarkup) {
    match markup {
        CodeMarkup::Plain(code) => out.push_str(&encode_text(code)),
        CodeMarkup::Highlighted(markup) => out.push_str(markup),
    }
}

fn write_inline(out: &mut String, spans: &[InlineSpan], flavor: HtmlFlavor) {
    for span in spans {
        match span {
            InlineSpan::Text(s) => out.push_str(&encode_text(s)),
            InlineSpan::Bold(s) => {
                let _ = write!(out, "<strong>{}</strong>", encode_text(s));
            }
            InlineSpan::Italic(s) => {
                let _ = write!(out, "<em>{}</em>", encode_text(s));
            }
            InlineSpan::InlineCode(s) => match flavor {
                HtmlFlavor::Preview => {
                    let _ = write!(
                        out,
                        "<code class=\"bg-gray-800 rounded px-1\">{}</code>",
                        encode_text(s)
                    );
                }
                HtmlFlavor::Email => {
                    let _ = write!(out, "<code>{}</code>", encode_text(s));
                }
            },
        }
    }
}
