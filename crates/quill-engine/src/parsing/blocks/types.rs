use crate::parsing::{inline::InlineSpan, rope::span::Span};

/// The kind of a parsed block, carrying its owned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX heading (`# ` .. `###### `).
    Heading {
        /// Literal count of leading `#` characters (1..=6).
        level: u8,
        inline: Vec<InlineSpan>,
    },
    /// A single non-blank line that matched no other rule.
    Paragraph { inline: Vec<InlineSpan> },
    /// A fenced code block (```).
    CodeBlock {
        /// Language token from the opening fence, verbatim.
        language: Option<String>,
        /// Source between the fences, minus a single trailing newline.
        raw_code: String,
    },
    /// A bullet, checkbox or ordered list item.
    ListItem {
        /// Count of leading whitespace characters on the source line.
        indent_units: usize,
        ordered: bool,
        /// `Some(checked)` only for `- [x] ` / `- [ ] ` items.
        checkbox: Option<bool>,
        inline: Vec<InlineSpan>,
    },
    /// Fallback for source that forms no other block (a document made only
    /// of blank lines).
    Literal { text: String },
}

impl BlockKind {
    /// Short variant name, used by snapshot output and logging.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "Heading",
            BlockKind::Paragraph { .. } => "Paragraph",
            BlockKind::CodeBlock { .. } => "CodeBlock",
            BlockKind::ListItem { .. } => "ListItem",
            BlockKind::Literal { .. } => "Literal",
        }
    }
}

/// A parsed block with the source span it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Byte span of source owned by this block, including its delimiters
    /// and any blank lines absorbed after it.
    pub span: Span,
}

impl Block {
    /// Inline content of the block, empty for code blocks and literals.
    pub fn inline(&self) -> &[InlineSpan] {
        match &self.kind {
            BlockKind::Heading { inline, .. }
            | BlockKind::Paragraph { inline }
            | BlockKind::ListItem { inline, .. } => inline,
            BlockKind::CodeBlock { .. } | BlockKind::Literal { .. } => &[],
        }
    }
}
