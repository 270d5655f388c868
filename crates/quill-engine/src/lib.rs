//! Markdown rendering engine for the quill notes editor.
//!
//! Raw text goes through the block parser ([`parsing`]) into a [`Document`],
//! then through the render pipeline ([`render`]) into a [`RenderTree`]. Code
//! blocks are colored by an external [`Highlighter`] and exposed to the
//! copy-to-clipboard affordance ([`copy`]) through per-render handles.

pub mod copy;
pub mod highlight;
pub mod html;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use copy::{Clipboard, ClipboardError, CopyError, CopyFeedback, CopyLabel};
pub use highlight::{HighlightError, Highlighter, KeywordHighlighter, PlainHighlighter};
pub use html::{HtmlFlavor, to_html};
pub use parsing::{
    Document,
    blocks::{Block, BlockKind},
    inline::InlineSpan,
    parse_document,
};
pub use render::{
    CodeBlockNode, CodeMarkup, HandleId, HeadingScale, RenderNode, RenderOptions, RenderTree,
    render, render_markdown, render_plain,
};
