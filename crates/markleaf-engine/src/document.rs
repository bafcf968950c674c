//! Document assembly: blocks and inline tokens wrapped into one HTML tree.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    ConvertError,
    html::{HtmlNode, text_token_to_leaf},
    parsing::{
        blocks::{BlockContent, BlockType, classify_block, markdown_to_blocks},
        inline::text_to_tokens,
        parse_document,
    },
};

/// Options for [`markdown_to_html_node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Tag of the node wrapping all blocks.
    pub wrapper_tag: String,
    /// Drop empty plain-text tokens before mapping them to leaves.
    pub drop_empty_text: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            wrapper_tag: "div".to_string(),
            drop_empty_text: true,
        }
    }
}

/// Converts a markdown document into a single HTML tree.
///
/// Every block becomes one child of a `wrapper_tag` parent:
///
/// | block          | node                               |
/// |----------------|------------------------------------|
/// | Paragraph      | `<p>`                              |
/// | Heading        | `<h1>`..`<h6>`                     |
/// | Code           | `<pre><code>` with raw body text   |
/// | Quote          | `<blockquote>`                     |
/// | UnorderedList  | `<ul>` of `<li>`                   |
/// | OrderedList    | `<ol>` of `<li>`                   |
///
/// # Errors
/// The first tokenizer or mapping error aborts the conversion.
pub fn markdown_to_html_node(
    markdown: &str,
    options: &ConvertOptions,
) -> Result<HtmlNode, ConvertError> {
    let blocks = markdown_to_blocks(markdown);
    let mut children = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let node = block_to_html_node(block, options).inspect_err(|e| {
            warn!("block {index} failed to convert: {e}");
        })?;
        children.push(node);
    }

    debug!(
        "assembled {} blocks under <{}>",
        children.len(),
        options.wrapper_tag
    );
    Ok(HtmlNode::parent(options.wrapper_tag.clone(), children))
}

/// Converts one block into its HTML node.
pub fn block_to_html_node(block: &str, options: &ConvertOptions) -> Result<HtmlNode, ConvertError> {
    let content = classify_block(block);
    let node = match &content {
        BlockContent::Paragraph { .. } => {
            HtmlNode::parent("p", inline_children(&joined(&content), options)?)
        }
        BlockContent::Heading { level, text } => {
            HtmlNode::parent(format!("h{level}"), inline_children(text, options)?)
        }
        BlockContent::Code { body } => {
            let code = HtmlNode::parent("code", vec![HtmlNode::text(format!("{body}\n"))]);
            HtmlNode::parent("pre", vec![code])
        }
        BlockContent::Quote { .. } => {
            HtmlNode::parent("blockquote", inline_children(&joined(&content), options)?)
        }
        BlockContent::UnorderedList { items } => HtmlNode::parent("ul", list_items(items, options)?),
        BlockContent::OrderedList { items } => HtmlNode::parent("ol", list_items(items, options)?),
    };
    Ok(node)
}

/// Pairs every block of `markdown` with its classification.
pub fn convert_blocks(markdown: &str) -> Vec<(String, BlockType)> {
    parse_document(markdown)
        .blocks
        .into_iter()
        .map(|block| (block.text, block.block_type))
        .collect()
}

/// Returns the text of the first level-1 heading block in `markdown`.
///
/// Only whole blocks count, so `# ` lines inside code fences or
/// multi-line paragraphs are never titles.
///
/// # Errors
/// [`ConvertError::MissingTitle`] if no block is an `# ` heading.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    markdown_to_blocks(markdown)
        .iter()
        .find_map(|block| match classify_block(block) {
            BlockContent::Heading { level: 1, text } => Some(text.trim().to_string()),
            _ => None,
        })
        .ok_or(ConvertError::MissingTitle)
}

fn joined(content: &BlockContent<'_>) -> String {
    content.inline_texts().concat()
}

fn list_items(items: &[&str], options: &ConvertOptions) -> Result<Vec<HtmlNode>, ConvertError> {
    items
        .iter()
        .map(|item| Ok(HtmlNode::parent("li", inline_children(item, options)?)))
        .collect()
}

fn inline_children(text: &str, options: &ConvertOptions) -> Result<Vec<HtmlNode>, ConvertError> {
    let tokens = text_to_tokens(text)?;
    let mut nodes = Vec::with_capacity(tokens.len());
    for token in &tokens {
        if options.drop_empty_text && token.is_plain() && token.text.is_empty() {
            continue;
        }
        nodes.push(text_token_to_leaf(token)?);
    }
    Ok(nodes)
}
