//! # Inline Parsing
//!
//! Cursor-based inline parsing over a single block's text payload
//! (heading content, paragraph line, list item text).
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, InlineCode)
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, CodeSpan)
//! - **`cursor`**: `Cursor` for byte-wise scanning with marker search
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Spans are extracted left to right and never overlap. At each position the
//! parser tries `**bold**`, then `*italic*`, then `` `code` ``; the first one
//! that closes wins. Anything that does not close is plain text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineSpan, plain_text};
