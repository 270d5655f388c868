//! # Block Parsing
//!
//! Two-phase, single-pass block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, fence signature, text without line ending)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks whether a fence is
//!    open and emits `Block`s in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific syntax with owned delimiters (CodeFence, Heading, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers in priority order
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Block spans tile the input: no gaps, no overlaps
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - An unterminated fence runs to end of input

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, BlockKind};
