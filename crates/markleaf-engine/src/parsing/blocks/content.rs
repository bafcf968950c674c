//! Block content projection: a classified block with its markers stripped.

use super::{kinds::Paragraph, types::BlockType};

/// The meaningful content of a classified block.
///
/// Borrowed from the block string; markers (`#`, `> `, `- `, `N. `, fences)
/// are already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent<'a> {
    Paragraph { lines: Vec<&'a str> },
    Heading { level: u8, text: &'a str },
    Code { body: &'a str },
    Quote { lines: Vec<&'a str> },
    UnorderedList { items: Vec<&'a str> },
    OrderedList { items: Vec<&'a str> },
}

impl BlockContent<'_> {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockContent::Paragraph { .. } => BlockType::Paragraph,
            BlockContent::Heading { .. } => BlockType::Heading,
            BlockContent::Code { .. } => BlockType::Code,
            BlockContent::Quote { .. } => BlockType::Quote,
            BlockContent::UnorderedList { .. } => BlockType::UnorderedList,
            BlockContent::OrderedList { .. } => BlockType::OrderedList,
        }
    }

    /// Text to feed the inline tokenizer, one entry per output element.
    ///
    /// Paragraphs and quotes collapse to a single entry with their lines
    /// joined by a space; lists yield one entry per item; code blocks yield
    /// nothing because their body is raw.
    pub fn inline_texts(&self) -> Vec<String> {
        match self {
            BlockContent::Paragraph { lines } => vec![lines.join(Paragraph::LINE_JOIN)],
            BlockContent::Quote { lines } => vec![
                lines
                    .iter()
                    .map(|line| line.trim())
                    .collect::<Vec<_>>()
                    .join(Paragraph::LINE_JOIN),
            ],
            BlockContent::Heading { text, .. } => vec![text.to_string()],
            BlockContent::UnorderedList { items } | BlockContent::OrderedList { items } => {
                items.iter().map(|item| item.to_string()).collect()
            }
            BlockContent::Code { .. } => vec![],
        }
    }
}
