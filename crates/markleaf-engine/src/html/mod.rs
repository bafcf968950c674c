//! # HTML Nodes
//!
//! A two-variant node tree (`Leaf` / `Parent`) that renders to an HTML
//! string, plus the fixed mapping from inline tokens to leaves.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` and its `render` contract
//! - **`props`**: insertion-ordered attribute map and its serialization
//! - **`mapper`**: `text_token_to_leaf`
//!
//! ## Known Limitation
//!
//! Attribute values and text are emitted verbatim. Quotes, `<` and `&` are
//! not escaped.

pub mod mapper;
pub mod node;
pub mod props;

pub use mapper::text_token_to_leaf;
pub use node::HtmlNode;
pub use props::{Props, props_to_html};

use crate::parsing::inline::InlineToken;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
    #[error("token cannot be mapped to html: {token}")]
    UnrecognizedToken { token: InlineToken },
}
