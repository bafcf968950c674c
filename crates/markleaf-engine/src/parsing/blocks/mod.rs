//! # Block Parsing
//!
//! Two-phase block parsing over a whole markdown document.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into trimmed blocks at
//!    every blank line
//!
//! 2. **Classification** (`classify`): each block is assigned a `BlockType`
//!    independently of its neighbours, and its markers are stripped into a
//!    `BlockContent`
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block-specific types owning their markers (Heading,
//!   CodeFence, BlockQuote, lists, Paragraph)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type` and `classify_block`
//! - **`content`**: `BlockContent` with the text destined for inline
//!   tokenizing
//!
//! ## Key Invariants
//!
//! - Classification is pure and never modifies the block
//! - Code blocks are raw zones: no inline tokenizing inside

pub mod classify;
pub mod content;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::{block_to_block_type, classify_block};
pub use content::BlockContent;
pub use split::markdown_to_blocks;
pub use types::BlockType;
