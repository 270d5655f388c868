/// Inline code span type with owned delimiter constant.
///
/// Code spans are raw: emphasis markers inside them are kept verbatim.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
