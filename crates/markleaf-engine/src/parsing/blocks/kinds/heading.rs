/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading block into `(level, text)`.
    ///
    /// Returns `None` unless `block` is a single line of 1-6 `#`, one space,
    /// and at least one more character.
    pub fn split(block: &str) -> Option<(u8, &str)> {
        if block.contains('\n') {
            return None;
        }
        let level = block.bytes().take_while(|&b| b == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        let text = block[level..].strip_prefix(' ')?;
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text))
    }
}
