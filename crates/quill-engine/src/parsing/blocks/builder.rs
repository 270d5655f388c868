use xi_rope::Rope;

use crate::parsing::{
    inline::parse_inline,
    rope::{slice::slice_to_string, span::Span},
};

use super::{
    classify::LineClass,
    kinds::{CodeFence, ListMarker},
    open::{BlockOpen, try_open_leaf},
    types::{Block, BlockKind},
};

#[derive(Debug)]
enum LeafState {
    None,
    Fence {
        language: Option<String>,
        /// Start of the opening fence line.
        start: usize,
        /// First byte after the opening fence line.
        content_start: usize,
        last_line_end: usize,
    },
}

/// Phase 2 of block parsing: turns classified lines into [`Block`]s.
///
/// Every line ends up inside exactly one block span. Blank lines outside a
/// fence extend the previous block; blank lines before the first block are
/// held back and prepended to it.
pub struct BlockBuilder<'a> {
    rope: &'a Rope,
    leaf: LeafState,
    leading_blank: Option<Span>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(rope: &'a Rope) -> Self {
        Self {
            rope,
            leaf: LeafState::None,
            leading_blank: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.absorb_blank(c.line);
            return;
        }

        match try_open_leaf(&c.text, c.fence_sig.as_ref()) {
            Some(BlockOpen::FencedCode { language }) => {
                self.leaf = LeafState::Fence {
                    language,
                    start: c.line.start,
                    content_start: c.line.end,
                    last_line_end: c.line.end,
                };
            }
            Some(BlockOpen::Heading {
                level,
                content_start,
            }) => {
                let inline = parse_inline(&c.text[content_start..]);
                self.emit(BlockKind::Heading { level, inline }, c.line);
            }
            Some(BlockOpen::ListItem {
                indent_units,
                marker,
                content_start,
            }) => {
                let (ordered, checkbox) = match marker {
                    ListMarker::Checkbox(checked) => (false, Some(checked)),
                    ListMarker::Bullet => (false, None),
                    ListMarker::Ordered => (true, None),
                };
                let inline = parse_inline(&c.text[content_start..]);
                self.emit(
                    BlockKind::ListItem {
                        indent_units,
                        ordered,
                        checkbox,
                        inline,
                    },
                    c.line,
                );
            }
            None => {
                let inline = parse_inline(&c.text);
                self.emit(BlockKind::Paragraph { inline }, c.line);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: an unterminated fence keeps everything up to the end
        if let LeafState::Fence { last_line_end, .. } = self.leaf {
            self.close_fence(last_line_end, last_line_end);
        }

        if self.out.is_empty()
            && let Some(blank) = self.leading_blank.take()
            && !blank.is_empty()
        {
            self.out.push(Block {
                kind: BlockKind::Literal {
                    text: slice_to_string(self.rope, blank),
                },
                span: blank,
            });
        }

        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, kind: BlockKind, source: Span) {
        let start = self
            .leading_blank
            .take()
            .map_or(source.start, |blank| blank.start);
        self.out.push(Block {
            kind,
            span: Span::new(start, source.end),
        });
    }

    fn absorb_blank(&mut self, line: Span) {
        if let Some(last) = self.out.last_mut() {
            last.span.end = line.end;
            return;
        }
        self.leading_blank = Some(match self.leading_blank {
            Some(blank) => blank.cover(line),
            None => line,
        });
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        if CodeFence::closes(c.fence_sig.as_ref()) {
            self.close_fence(c.line.start, c.line.end);
            return;
        }
        if let LeafState::Fence { last_line_end, .. } = &mut self.leaf {
            *last_line_end = c.line.end;
        }
    }

    fn close_fence(&mut self, content_end: usize, block_end: usize) {
        let LeafState::Fence {
            language,
            start,
            content_start,
            ..
        } = std::mem::replace(&mut self.leaf, LeafState::None)
        else {
            return;
        };

        let content = slice_to_string(self.rope, Span::new(content_start, content_end));
        let raw_code = CodeFence::strip_trailing_newline(&content).to_string();
        self.emit(
            BlockKind::CodeBlock { language, raw_code },
            Span::new(start, block_end),
        );
    }
}
