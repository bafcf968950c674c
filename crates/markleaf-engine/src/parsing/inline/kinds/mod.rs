//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "_"`
//! - **`CodeSpan`**: `TICK = "\`"`
//! - **`Image`** / **`Link`**: `![alt](url)` and `[text](url)` matchers
//!
//! The parser calls these; it never hardcodes `**` or `[`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link, LinkMatch};
