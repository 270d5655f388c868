//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Emphasis`**: `STRONG = b"**"`, `EM = b'*'`
//! - **`CodeSpan`**: `TICK = b'\`'`
//!
//! The parser reads these constants; it never hardcodes `*` or `` ` ``.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
