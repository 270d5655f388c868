use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis},
    types::InlineSpan,
};

/// Parses a single line of inline content into a sequence of [`InlineSpan`]s.
///
/// # Precedence
/// At each position bold is tried first, then italic, then a code span.
/// Delimiters close at the nearest following marker and must enclose at
/// least one byte. A `**` that does not close is consumed as text in one
/// step, so the italic rule never pairs its second `*` with a later one.
///
/// # Returns
/// Spans covering the whole input in order. Adjacent plain text is merged
/// into a single `InlineSpan::Text`. Empty input yields no spans.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a Text span
    fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
        if !text.is_empty() {
            out.push(InlineSpan::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.i;
        let parsed = try_parse_bold(&mut cur)
            .or_else(|| try_parse_italic(&mut cur))
            .or_else(|| try_parse_code_span(&mut cur));

        if let Some(span) = parsed {
            flush_text(&mut out, &s[text_start..start]);
            out.push(span);
            text_start = cur.i;
            continue;
        }

        if cur.starts_with(Emphasis::STRONG) {
            cur.bump_n(Emphasis::STRONG.len());
        } else {
            cur.bump_char();
        }
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

/// Attempts to parse `**text**` at the current position.
///
/// Returns `None` (cursor untouched) if not at `**` or if no non-empty
/// content is closed by the nearest following `**`.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(Emphasis::STRONG) {
        return None;
    }
    let inner_start = cur.i + Emphasis::STRONG.len();
    let inner_end = cur.find_from(inner_start, Emphasis::STRONG)?;
    if inner_end == inner_start {
        return None;
    }

    let inner = &cur.s[inner_start..inner_end];
    cur.i = inner_end + Emphasis::STRONG.len();
    Some(InlineSpan::Bold(inner.to_string()))
}

/// Attempts to parse `*text*` at the current position.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(Emphasis::EM) || cur.starts_with(Emphasis::STRONG) {
        return None;
    }
    let inner_start = cur.i + 1;
    let inner_end = cur.find_from(inner_start, &[Emphasis::EM])?;
    if inner_end == inner_start {
        return None;
    }

    let inner = &cur.s[inner_start..inner_end];
    cur.i = inner_end + 1;
    Some(InlineSpan::Italic(inner.to_string()))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span isn't closed, or if it
/// is empty.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let inner_start = cur.i + 1;
    let inner_end = cur.find_from(inner_start, &[CodeSpan::TICK])?;
    if inner_end == inner_start {
        return None;
    }

    let inner = &cur.s[inner_start..inner_end];
    cur.i = inner_end + 1;
    Some(InlineSpan::InlineCode(inner.to_string()))
}
