//! # Rendering
//!
//! Turns a parsed [`Document`] into a [`RenderTree`] in two explicit phases:
//!
//! 1. **`render_plain`** builds every node. Code blocks show their raw code,
//!    get a resolved language and a fresh [`HandleId`].
//! 2. **`RenderTree::apply_highlighting`** (or per-block
//!    `RenderTree::apply_highlight` for deferred highlighters) swaps in
//!    highlighted markup without touching sibling nodes.
//!
//! [`render`] runs both phases back to back.

pub mod handles;
pub mod heading;
pub mod tree;

pub use handles::{CodeHandles, HandleId};
pub use heading::HeadingScale;
pub use tree::{CodeBlockNode, CodeMarkup, HighlightJob, RenderNode, RenderTree};

use crate::{
    highlight::{Highlighter, PLAINTEXT, resolve_language},
    parsing::{Document, blocks::BlockKind, parse_document},
};

/// Presentation settings the surrounding app varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub heading_scale: HeadingScale,
    /// Language for code blocks without a usable tag.
    pub default_language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_scale: HeadingScale::default(),
            default_language: PLAINTEXT.to_string(),
        }
    }
}

/// Phase 1: builds the render tree with raw code in every code block.
///
/// The highlighter is only asked which languages it supports.
pub fn render_plain(
    document: Document,
    highlighter: &dyn Highlighter,
    options: &RenderOptions,
) -> RenderTree {
    let mut handles = CodeHandles::new();
    let mut nodes = Vec::with_capacity(document.len());

    for block in document {
        let node = match block.kind {
            BlockKind::Heading { level, inline } => RenderNode::Heading {
                level,
                size: options.heading_scale.size(level),
                inline,
            },
            BlockKind::Paragraph { inline } => RenderNode::Paragraph { inline },
            BlockKind::ListItem {
                indent_units,
                ordered,
                checkbox,
                inline,
            } => RenderNode::ListItem {
                indent_units,
                ordered,
                checkbox,
                inline,
            },
            BlockKind::CodeBlock { language, raw_code } => {
                let language = resolve_language(
                    language.as_deref(),
                    highlighter,
                    &options.default_language,
                );
                let markup = CodeMarkup::Plain(raw_code.clone());
                RenderNode::CodeBlock(CodeBlockNode {
                    handle: handles.register(raw_code),
                    language,
                    markup,
                })
            }
            BlockKind::Literal { text } => RenderNode::Literal { text },
        };
        nodes.push(node);
    }

    log::debug!(
        "Rendered {} nodes with {} code blocks",
        nodes.len(),
        handles.len()
    );
    RenderTree { nodes, handles }
}

/// Renders a document and highlights its code blocks synchronously.
///
/// Never fails: a highlighter error leaves that block's raw code in place,
/// still behind its handle.
pub fn render(
    document: Document,
    highlighter: &dyn Highlighter,
    options: &RenderOptions,
) -> RenderTree {
    let mut tree = render_plain(document, highlighter, options);
    tree.apply_highlighting(highlighter);
    tree
}

/// Parses and renders raw text in one call. Each call is a fresh pass.
pub fn render_markdown(
    text: &str,
    highlighter: &dyn Highlighter,
    options: &RenderOptions,
) -> RenderTree {
    render(parse_document(text), highlighter, options)
}
