/// What a fence-looking line carries after its backticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceSig {
    /// Exactly ```, usable as an opener or a closer.
    Bare,
    /// ``` immediately followed by a language token; opener only.
    Tagged(String),
}

/// Fenced code block syntax knowledge.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Classifies a line (line ending already stripped) as a fence line.
    ///
    /// The fence must start the line. A language token must follow the
    /// backticks directly and contain no whitespace or backticks; anything
    /// else makes the line an ordinary one. Trailing whitespace is ignored.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let rest = line.trim_end().strip_prefix(Self::BACKTICKS)?;
        if rest.is_empty() {
            return Some(FenceSig::Bare);
        }
        if rest.chars().any(|c| c.is_whitespace() || c == '`') {
            return None;
        }
        Some(FenceSig::Tagged(rest.to_string()))
    }

    /// The declared language of an opening fence.
    pub fn language(sig: &FenceSig) -> Option<String> {
        match sig {
            FenceSig::Bare => None,
            FenceSig::Tagged(lang) => Some(lang.clone()),
        }
    }

    /// Only a bare fence closes an open code block.
    pub fn closes(sig: Option<&FenceSig>) -> bool {
        matches!(sig, Some(FenceSig::Bare))
    }

    /// Drops a single trailing newline (`\n` or `\r\n`) from fence content.
    pub fn strip_trailing_newline(content: &str) -> &str {
        content
            .strip_suffix("\r\n")
            .or_else(|| content.strip_suffix('\n'))
            .unwrap_or(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_bare_fence() {
        assert_eq!(CodeFence::sig("```"), Some(FenceSig::Bare));
    }

    #[test]
    fn detect_tagged_fence() {
        assert_eq!(
            CodeFence::sig("```rust"),
            Some(FenceSig::Tagged("rust".into()))
        );
    }

    #[test]
    fn trailing_whitespace_is_tolerated() {
        assert_eq!(CodeFence::sig("```  \r"), Some(FenceSig::Bare));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("  ```"), None);
    }

    #[test]
    fn token_with_whitespace_is_not_a_fence() {
        assert_eq!(CodeFence::sig("```rust extra"), None);
        assert_eq!(CodeFence::sig("````"), None);
    }

    #[test]
    fn only_bare_fence_closes() {
        assert!(CodeFence::closes(Some(&FenceSig::Bare)));
        assert!(!CodeFence::closes(Some(&FenceSig::Tagged("py".into()))));
        assert!(!CodeFence::closes(None));
    }

    #[test]
    fn strips_one_newline_only() {
        assert_eq!(CodeFence::strip_trailing_newline("a\n\n"), "a\n");
        assert_eq!(CodeFence::strip_trailing_newline("a\r\n"), "a");
        assert_eq!(CodeFence::strip_trailing_newline("a"), "a");
    }
}
