/// Fenced code block type with owned fence constant.
///
/// Code blocks are raw zones: their body is never inline-tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Returns the text between the opening and closing fence lines.
    ///
    /// Both fence lines must be exactly [`Self::FENCE`] and the body must be
    /// non-empty. The newline before the closing fence is not part of the
    /// body.
    pub fn body(block: &str) -> Option<&str> {
        let inner = block
            .strip_prefix(Self::FENCE)?
            .strip_prefix('\n')?
            .strip_suffix(Self::FENCE)?
            .strip_suffix('\n')?;
        if inner.is_empty() { None } else { Some(inner) }
    }
}
