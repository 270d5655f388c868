use super::kinds::{CodeFence, FenceSig, Heading, ListItem, ListMarker};

/// A block opener detected at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode {
        language: Option<String>,
    },
    Heading {
        level: u8,
        content_start: usize,
    },
    ListItem {
        indent_units: usize,
        marker: ListMarker,
        content_start: usize,
    },
}

/// Tries each leaf rule in priority order against one line.
///
/// Precedence: fence, heading, list item (checkbox before bullet before
/// ordered, resolved inside [`ListItem::parse`]). `None` means the line is a
/// paragraph.
pub fn try_open_leaf(line: &str, fence_sig: Option<&FenceSig>) -> Option<BlockOpen> {
    if let Some(sig) = fence_sig {
        return Some(BlockOpen::FencedCode {
            language: CodeFence::language(sig),
        });
    }
    if let Some((level, content_start)) = Heading::parse(line) {
        return Some(BlockOpen::Heading {
            level,
            content_start,
        });
    }
    if let Some(open) = ListItem::parse(line) {
        return Some(BlockOpen::ListItem {
            indent_units: open.indent_units,
            marker: open.marker,
            content_start: open.content_start,
        });
    }
    None
}
