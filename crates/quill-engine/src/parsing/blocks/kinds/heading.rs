/// ATX heading syntax knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Matches `^(#{1,6})\s(.*)$` against a line without its line ending.
    ///
    /// Returns the level and the byte offset where content begins. The
    /// single whitespace character after the hashes is consumed; content may
    /// be empty.
    pub fn parse(line: &str) -> Option<(u8, usize)> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        let sep = line[hashes..].chars().next()?;
        if !sep.is_whitespace() {
            return None;
        }
        Some((hashes as u8, hashes + sep.len_utf8()))
    }
}
