/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters; they are the default when no other block
/// type matches. Their lines are joined with a single space before inline
/// tokenizing.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    pub fn lines(block: &str) -> Vec<&str> {
        block.split('\n').collect()
    }
}
