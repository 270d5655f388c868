pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use rope::lines_with_spans;

/// An ordered sequence of blocks parsed from one input text.
///
/// Rebuilt from scratch on every parse; it has no identity beyond the call
/// that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

/// Parses raw text into a [`Document`].
///
/// Total: malformed constructs fall back to paragraphs or literal text and
/// an unterminated fence runs to end of input.
pub fn parse_document(text: &str) -> Document {
    let rope = Rope::from(text);
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(&rope);

    for lr in lines_with_spans(&rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    Document {
        blocks: builder.finish(),
    }
}
