/// Which list rule matched a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `- [x] ` (true) or `- [ ] ` (false).
    Checkbox(bool),
    /// `- `
    Bullet,
    /// `1. `
    Ordered,
}

/// A list item opener found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemOpen {
    /// Count of leading whitespace characters (not bytes, not tab stops).
    pub indent_units: usize,
    pub marker: ListMarker,
    /// Byte offset of the item text within the line.
    pub content_start: usize,
}

/// List item syntax knowledge.
pub struct ListItem;

impl ListItem {
    pub const BULLET: &'static str = "- ";
    pub const CHECKED: &'static str = "[x] ";
    pub const UNCHECKED: &'static str = "[ ] ";
    pub const ORDERED_DELIM: &'static str = ". ";

    /// Matches a list item opener against a line without its line ending.
    ///
    /// Checkbox items take priority over plain bullets: `- [x] a` is never
    /// a bullet whose text is `[x] a`. Item text may be empty.
    pub fn parse(line: &str) -> Option<ListItemOpen> {
        let (indent_units, indent_bytes) = line
            .chars()
            .take_while(|c| c.is_whitespace())
            .fold((0, 0), |(n, bytes), c| (n + 1, bytes + c.len_utf8()));
        let rest = &line[indent_bytes..];

        if let Some(after_bullet) = rest.strip_prefix(Self::BULLET) {
            let bullet_end = indent_bytes + Self::BULLET.len();
            let (marker, content_start) = if after_bullet.starts_with(Self::CHECKED) {
                (ListMarker::Checkbox(true), bullet_end + Self::CHECKED.len())
            } else if after_bullet.starts_with(Self::UNCHECKED) {
                (ListMarker::Checkbox(false), bullet_end + Self::UNCHECKED.len())
            } else {
                (ListMarker::Bullet, bullet_end)
            };
            return Some(ListItemOpen {
                indent_units,
                marker,
                content_start,
            });
        }

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && rest[digits..].starts_with(Self::ORDERED_DELIM) {
            return Some(ListItemOpen {
                indent_units,
                marker: ListMarker::Ordered,
                content_start: indent_bytes + digits + Self::ORDERED_DELIM.len(),
            });
        }

        None
    }
}
