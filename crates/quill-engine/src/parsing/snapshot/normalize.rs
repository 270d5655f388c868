use std::fmt::Write;

use xi_rope::Rope;

use crate::parsing::{Document, blocks::BlockKind, rope::slice::preview};

/// Renders a parsed document as stable, line-oriented text for snapshots.
///
/// One header line per block (kind, attributes, span, source preview),
/// followed by one indented line per inline span or by the raw code.
pub fn normalize(source: &str, doc: &Document) -> String {
    let rope = Rope::from(source);
    let mut out = String::new();

    for b in doc.iter() {
        let attrs = match &b.kind {
            BlockKind::Heading { level, .. } => format!("level={level}"),
            BlockKind::Paragraph { .. } | BlockKind::Literal { .. } => String::new(),
            BlockKind::CodeBlock { language, .. } => format!("language={language:?}"),
            BlockKind::ListItem {
                indent_units,
                ordered,
                checkbox,
                ..
            } => format!("indent={indent_units} ordered={ordered} checkbox={checkbox:?}"),
        };
        let _ = writeln!(
            out,
            "{}({attrs}) {}..{} {:?}",
            b.kind.name(),
            b.span.start,
            b.span.end,
            preview(&rope, b.span, 60)
        );

        match &b.kind {
            BlockKind::CodeBlock { raw_code, .. } => {
                let _ = writeln!(out, "  code {raw_code:?}");
            }
            BlockKind::Literal { text } => {
                let _ = writeln!(out, "  literal {text:?}");
            }
            _ => {
                for span in b.inline() {
                    let _ = writeln!(out, "  {} {:?}", span.kind_name(), span.text());
                }
            }
        }
    }

    out
}
