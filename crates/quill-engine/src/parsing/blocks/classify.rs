use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, line ending included.
    pub line: Span,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Line text without its line ending (`\n` or `\r\n`).
    pub text: String,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.content();

        LineClass {
            line: lr.span,
            is_blank: text.trim().is_empty(),
            text: text.to_string(),
            fence_sig: CodeFence::sig(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> LineRef {
        LineRef {
            span: Span::new(0, text.len()),
            text: text.to_string(),
        }
    }

    #[test]
    fn strips_crlf_and_detects_fence() {
        let lc = MarkdownLineClassifier.classify(&line("```rust\r\n"));
        assert_eq!(lc.text, "```rust");
        assert_eq!(lc.fence_sig, Some(FenceSig::Tagged("rust".into())));
        assert_eq!(lc.line, Span::new(0, 9));
    }

    #[test]
    fn whitespace_line_is_blank() {
        assert!(MarkdownLineClassifier.classify(&line("  \t\n")).is_blank);
        assert!(!MarkdownLineClassifier.classify(&line("x\n")).is_blank);
    }
}
