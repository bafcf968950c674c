use std::fmt;

/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other block type matches.
    Paragraph,
    /// A single line starting with 1-6 `#`.
    Heading,
    /// A block fenced by lines of exactly three backticks.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Every line is `N. content`, numbered 1, 2, 3, ...
    OrderedList,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
