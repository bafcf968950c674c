/// Emphasis delimiters. Pairs of these bracket styled text; they never nest.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "_";
}
