/// Code span inline type with owned delimiter constant.
///
/// Code spans are split after bold and italic, so emphasis markers inside
/// backticks have already been consumed by then.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
