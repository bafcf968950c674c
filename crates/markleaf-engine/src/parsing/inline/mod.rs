//! # Inline Tokenizing
//!
//! Turns the text content of a single block into a flat sequence of typed
//! [`InlineToken`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a pipeline of stages. Each stage consumes the previous
//! token sequence and only re-processes `Plain` tokens:
//!
//! 1. delimiter splits for `**`, `_` and `` ` `` (paired delimiters)
//! 2. image extraction, then link extraction (pattern scans)
//!
//! Styled tokens are never re-split, so there is no nesting.
//!
//! ## Modules
//!
//! - **`types`**: `TextType` and `InlineToken`
//! - **`kinds`**: inline-specific types owning their delimiters and patterns
//! - **`parser`**: `text_to_tokens()` entry point and the individual stages

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    extract_images, extract_links, split_images, split_links, split_on_delimiter, text_to_tokens,
};
pub use types::{InlineToken, TextType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("unterminated inline delimiter {delimiter:?} in {text:?}")]
    UnterminatedDelimiter { delimiter: String, text: String },
}
