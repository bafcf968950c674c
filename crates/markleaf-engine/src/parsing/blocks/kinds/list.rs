use std::sync::LazyLock;

use regex::Regex;

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\. (.+)$").unwrap());

/// Unordered list block type (`- item`).
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    /// Returns the item text of every line, or `None` if any line lacks the
    /// marker.
    pub fn items(block: &str) -> Option<Vec<&str>> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER))
            .collect()
    }
}

/// Ordered list block type (`1. item`).
pub struct OrderedList;

impl OrderedList {
    /// Returns the item text of every line.
    ///
    /// Every line must be `N. content` and the numbers must run 1, 2, 3, ...
    /// with no gaps; otherwise `None`.
    pub fn items(block: &str) -> Option<Vec<&str>> {
        let mut items = Vec::new();
        for (index, line) in block.split('\n').enumerate() {
            let caps = ORDERED_ITEM_RE.captures(line)?;
            let number: usize = caps[1].parse().ok()?;
            if number != index + 1 {
                return None;
            }
            items.push(caps.get(2)?.as_str());
        }
        Some(items)
    }
}
