/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The prefix every quote line starts with.
    pub const PREFIX: &'static str = "> ";

    /// Strips the quote prefix from every line.
    ///
    /// Returns `None` if any line lacks the prefix.
    pub fn lines(block: &str) -> Option<Vec<&str>> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::PREFIX))
            .collect()
    }
}
