use log::trace;

use super::{
    content::BlockContent,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block string.
///
/// Checks run in fixed priority order and the first match wins: heading,
/// code, quote, unordered list, ordered list, then paragraph as the default.
/// The block is never modified; the same input always gives the same type.
pub fn block_to_block_type(block: &str) -> BlockType {
    classify_block(block).block_type()
}

/// Classifies a block and strips its markers in one pass.
pub fn classify_block(block: &str) -> BlockContent<'_> {
    let content = if let Some((level, text)) = Heading::split(block) {
        BlockContent::Heading { level, text }
    } else if let Some(body) = CodeFence::body(block) {
        BlockContent::Code { body }
    } else if let Some(lines) = BlockQuote::lines(block) {
        BlockContent::Quote { lines }
    } else if let Some(items) = UnorderedList::items(block) {
        BlockContent::UnorderedList { items }
    } else if let Some(items) = OrderedList::items(block) {
        BlockContent::OrderedList { items }
    } else {
        BlockContent::Paragraph {
            lines: Paragraph::lines(block),
        }
    };

    trace!("classified block as {}", content.block_type());
    content
}
