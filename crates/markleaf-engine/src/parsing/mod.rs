pub mod blocks;
pub mod inline;

use log::debug;

use blocks::{BlockContent, BlockType, classify_block, markdown_to_blocks};
use inline::{InlineError, InlineToken, text_to_tokens};

/// A block string with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    pub text: String,
    pub block_type: BlockType,
}

impl ParsedBlock {
    /// Re-derives the marker-stripped content of this block.
    pub fn content(&self) -> BlockContent<'_> {
        classify_block(&self.text)
    }
}

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<ParsedBlock>,
}

/// Splits `markdown` into blocks and classifies each one.
pub fn parse_document(markdown: &str) -> ParsedDoc {
    let blocks: Vec<ParsedBlock> = markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| {
            let block_type = classify_block(&text).block_type();
            ParsedBlock { text, block_type }
        })
        .collect();

    debug!("parsed document into {} blocks", blocks.len());
    ParsedDoc { blocks }
}

/// Convenience: inline tokens for each inline-bearing part of a block.
///
/// Returns one token sequence per entry of [`BlockContent::inline_texts`];
/// code blocks yield none.
pub fn parse_inline_for_block(b: &ParsedBlock) -> Result<Vec<Vec<InlineToken>>, InlineError> {
    b.content()
        .inline_texts()
        .iter()
        .map(|text| text_to_tokens(text))
        .collect()
}

#[cfg(test)]
mod tests;
