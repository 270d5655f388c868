use super::{HighlightError, Highlighter, PLAINTEXT};

/// Highlighter that only escapes code for HTML output.
///
/// Used when no real highlighter is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn supports(&self, language: &str) -> bool {
        language == PLAINTEXT
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        if !self.supports(language) {
            return Err(HighlightError::UnsupportedLanguage(language.to_string()));
        }
        Ok(html_escape::encode_text(code).into_owned())
    }
}
