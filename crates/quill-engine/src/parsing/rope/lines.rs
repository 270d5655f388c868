use xi_rope::Rope;

use super::span::Span;

/// One source line and where it sits in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span in the rope, line ending included.
    pub span: Span,
    pub text: String,
}

impl LineRef {
    /// The line without its `\n` or `\r\n` ending.
    pub fn content(&self) -> &str {
        let text = self.text.as_str();
        text.strip_suffix('\n')
            .map(|t| t.strip_suffix('\r').unwrap_or(t))
            .unwrap_or(text)
    }
}

/// Splits the rope into lines that tile it with no gaps.
///
/// Block coverage relies on every byte, line endings included, belonging to
/// exactly one line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    rope.lines_raw(..).scan(0usize, |offset, line| {
        let span = Span::new(*offset, *offset + line.len());
        *offset = span.end;
        Some(LineRef {
            span,
            text: line.into_owned(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("one\ntwo\r\n\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].span, Span::new(0, 4));
        assert_eq!(lines[1].text, "two\r\n");
        assert_eq!(lines[3].span, Span::new(10, 15));
        for pair in lines.windows(2) {
            assert_eq!(pair[0].span.end, pair[1].span.start);
        }
    }

    #[test]
    fn content_drops_only_the_line_ending() {
        let rope = Rope::from("a\r\nb\n\rc");
        let lines: Vec<_> = lines_with_spans(&rope).collect();

        assert_eq!(lines[0].content(), "a");
        assert_eq!(lines[1].content(), "b");
        assert_eq!(lines[2].content(), "\rc");
    }
}
