/// Bold and italic delimiters.
///
/// Bold is tried before italic at the same position, so the single `*`
/// rule never splits a `**` pair.
pub struct Emphasis;

impl Emphasis {
    /// Strong emphasis (bold) delimiter.
    pub const STRONG: &'static [u8] = b"**";
    /// Emphasis (italic) delimiter.
    pub const EM: u8 = b'*';
}
