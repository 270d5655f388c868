//! # Syntax Highlighting
//!
//! The engine never colors code itself; it asks a [`Highlighter`] for
//! presentation markup and falls back to the raw code when that fails.
//!
//! - **`plain`**: `PlainHighlighter`, HTML-escaped code, `plaintext` only
//! - **`keyword`**: `KeywordHighlighter`, regex token classes for a few languages

pub mod keyword;
pub mod plain;

pub use keyword::KeywordHighlighter;
pub use plain::PlainHighlighter;

/// Language used when a block declares none, or one the highlighter does not know.
pub const PLAINTEXT: &str = "plaintext";

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Highlighting failed: {0}")]
    Failed(String),
}

/// External capability mapping `(code, language)` to presentation markup.
///
/// Implementations must be fast and side-effect free; rendering calls them
/// synchronously on every text change.
pub trait Highlighter {
    /// Whether `language` (already lower-cased) is recognized.
    fn supports(&self, language: &str) -> bool;

    /// Produces markup for `code`. The returned markup is inserted into HTML
    /// output as-is, so implementations escape what they emit.
    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError>;
}

impl<H: Highlighter + ?Sized> Highlighter for &H {
    fn supports(&self, language: &str) -> bool {
        (**self).supports(language)
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        (**self).highlight(code, language)
    }
}

impl<H: Highlighter + ?Sized> Highlighter for Box<H> {
    fn supports(&self, language: &str) -> bool {
        (**self).supports(language)
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        (**self).highlight(code, language)
    }
}

/// Resolves the language a code block is rendered with.
///
/// The declared tag is lower-cased; a missing tag, or one the highlighter
/// does not support, resolves to `default`.
pub fn resolve_language(
    declared: Option<&str>,
    highlighter: &dyn Highlighter,
    default: &str,
) -> String {
    declared
        .map(str::to_lowercase)
        .filter(|lang| highlighter.supports(lang))
        .unwrap_or_else(|| default.to_string())
}
