//! # markleaf-engine
//!
//! Converts markdown text into a renderable HTML node tree.
//!
//! ```text
//! markdown → markdown_to_blocks → classify_block → BlockContent
//!                                                      │
//!                              text_to_tokens ◄────────┘
//!                                    │
//!                         text_token_to_leaf → HtmlNode::render
//! ```
//!
//! All functions are pure and synchronous; every error aborts the operation
//! that raised it.

pub mod document;
pub mod html;
pub mod parsing;

pub use document::{
    ConvertOptions, block_to_html_node, convert_blocks, extract_title, markdown_to_html_node,
};
pub use html::{HtmlError, HtmlNode, Props, text_token_to_leaf};
pub use parsing::{
    ParsedBlock, ParsedDoc,
    blocks::{BlockType, block_to_block_type, markdown_to_blocks},
    inline::{InlineError, InlineToken, TextType, text_to_tokens},
    parse_document,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Html(#[from] HtmlError),
    #[error("document has no level-1 heading to use as a title")]
    MissingTitle,
}
