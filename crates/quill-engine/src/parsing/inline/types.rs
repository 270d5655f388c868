/// A typed fragment of a block's inline content.
///
/// Every variant owns the text between its delimiters; the delimiters
/// themselves are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text, passed through without re-escaping.
    Text(String),
    /// `**text**`
    Bold(String),
    /// `*text*`
    Italic(String),
    /// `` `text` ``. Rendered with a fixed inline-code treatment, never highlighted.
    InlineCode(String),
}

impl InlineSpan {
    /// The text owned by this span.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(s)
            | InlineSpan::Bold(s)
            | InlineSpan::Italic(s)
            | InlineSpan::InlineCode(s) => s,
        }
    }

    /// Short variant name, used by snapshot output and the terminal previewer.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineSpan::Text(_) => "Text",
            InlineSpan::Bold(_) => "Bold",
            InlineSpan::Italic(_) => "Italic",
            InlineSpan::InlineCode(_) => "InlineCode",
        }
    }
}

/// Concatenates the visible text of a span sequence, delimiters dropped.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}
