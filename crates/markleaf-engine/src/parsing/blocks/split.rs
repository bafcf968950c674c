use std::sync::LazyLock;

use regex::Regex;

static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Splits a markdown document into trimmed, non-empty blocks.
///
/// Blocks are separated by runs of two or more newlines. Order is
/// preserved; an empty document yields no blocks.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    BLANK_LINE_RE
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
