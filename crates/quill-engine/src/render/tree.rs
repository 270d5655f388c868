use crate::{
    highlight::{HighlightError, Highlighter},
    parsing::inline::{InlineSpan, plain_text},
};

use super::handles::{CodeHandles, HandleId};

/// Presentation markup of a code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeMarkup {
    /// The raw code, not yet (or not successfully) highlighted. Unescaped.
    Plain(String),
    /// Markup returned by the highlighter, ready to insert as-is.
    Highlighted(String),
}

impl CodeMarkup {
    pub fn is_highlighted(&self) -> bool {
        matches!(self, CodeMarkup::Highlighted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockNode {
    pub handle: HandleId,
    /// Resolved language, `plaintext` when absent or unsupported.
    pub language: String,
    pub markup: CodeMarkup,
}

impl CodeBlockNode {
    /// Installs a highlighter result. Failures and empty markup leave the
    /// current markup in place.
    fn install(&mut self, result: Result<String, HighlightError>) -> bool {
        match result {
            Ok(markup) if !markup.is_empty() => {
                self.markup = CodeMarkup::Highlighted(markup);
                true
            }
            Ok(_) => {
                log::warn!(
                    "Highlighter returned no markup for {} ({}), keeping raw code",
                    self.handle,
                    self.language
                );
                false
            }
            Err(e) => {
                log::warn!(
                    "Highlighting {} ({}) failed, keeping raw code: {e}",
                    self.handle,
                    self.language
                );
                false
            }
        }
    }
}

/// A block translated into presentation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Heading {
        level: u8,
        /// Size rank from the configured [`HeadingScale`](super::HeadingScale).
        size: u8,
        inline: Vec<InlineSpan>,
    },
    Paragraph {
        inline: Vec<InlineSpan>,
    },
    ListItem {
        indent_units: usize,
        ordered: bool,
        checkbox: Option<bool>,
        inline: Vec<InlineSpan>,
    },
    CodeBlock(CodeBlockNode),
    Literal {
        text: String,
    },
}

/// A unit of highlighting work for callers that highlight off the render path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightJob<'a> {
    pub handle: HandleId,
    pub language: &'a str,
    pub code: &'a str,
}

/// Output of one render pass: nodes in source order plus the handle side channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTree {
    pub nodes: Vec<RenderNode>,
    pub handles: CodeHandles,
}

impl RenderTree {
    /// Raw code behind a handle, for the copy affordance.
    pub fn code(&self, handle: HandleId) -> Option<&str> {
        self.handles.code(handle)
    }

    /// Visible text of the first heading, if any.
    pub fn title(&self) -> Option<String> {
        self.nodes.iter().find_map(|n| match n {
            RenderNode::Heading { inline, .. } => Some(plain_text(inline)),
            _ => None,
        })
    }

    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlockNode> {
        self.nodes.iter().filter_map(|n| match n {
            RenderNode::CodeBlock(block) => Some(block),
            _ => None,
        })
    }

    fn code_block_mut(&mut self, handle: HandleId) -> Option<&mut CodeBlockNode> {
        self.nodes.iter_mut().find_map(|n| match n {
            RenderNode::CodeBlock(block) if block.handle == handle => Some(block),
            _ => None,
        })
    }

    /// Non-empty code blocks still showing raw code.
    pub fn highlight_jobs(&self) -> Vec<HighlightJob<'_>> {
        self.code_blocks()
            .filter(|block| !block.markup.is_highlighted())
            .filter_map(|block| {
                let code = self.handles.code(block.handle)?;
                (!code.is_empty()).then_some(HighlightJob {
                    handle: block.handle,
                    language: &block.language,
                    code,
                })
            })
            .collect()
    }

    /// Applies one highlighter result to the block behind `handle`.
    ///
    /// Only that block's markup changes; nodes are never added, removed or
    /// reordered. Returns `false` for an unknown handle or a failed result.
    pub fn apply_highlight(
        &mut self,
        handle: HandleId,
        result: Result<String, HighlightError>,
    ) -> bool {
        match self.code_block_mut(handle) {
            Some(block) => block.install(result),
            None => {
                log::debug!("Ignoring highlight for unknown handle {handle}");
                false
            }
        }
    }

    /// Phase 2 of rendering: highlights every code block in place.
    ///
    /// Returns how many blocks now carry highlighted markup from this call.
    pub fn apply_highlighting(&mut self, highlighter: &dyn Highlighter) -> usize {
        let handles = &self.handles;
        let mut applied = 0;
        for node in &mut self.nodes {
            let RenderNode::CodeBlock(block) = node else {
                continue;
            };
            // Empty fences have nothing to color.
            let Some(code) = handles.code(block.handle).filter(|c| !c.is_empty()) else {
                continue;
            };
            let result = highlighter.highlight(code, &block.language);
            if block.install(result) {
                applied += 1;
            }
        }
        applied
    }
}
