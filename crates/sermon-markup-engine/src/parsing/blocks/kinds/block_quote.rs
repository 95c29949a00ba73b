/// Blockquote block type with owned prefix constant.
///
/// Only a single `> ` level is recognised; `>> nested` is ordinary text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted content (possibly empty) if `line` is a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
