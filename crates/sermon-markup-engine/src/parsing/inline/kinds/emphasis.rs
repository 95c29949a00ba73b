use std::sync::OnceLock;

use regex::Regex;

/// Strong emphasis, `**text**`. Matched lazily so `**a** and **b**` yields two spans.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";

    pub fn pattern() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        BOLD_REGEX.get_or_init(|| {
            let d = regex::escape(Self::DELIM);
            Regex::new(&format!("{d}(.+?){d}")).expect("Invalid bold regex")
        })
    }
}

/// Emphasis, `*text*`.
///
/// The content class excludes `*` so a stray asterisk left over from an
/// unmatched `**` is never paired up.
pub struct Italic;

impl Italic {
    pub const DELIM: &'static str = "*";

    pub fn pattern() -> &'static Regex {
        static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
        ITALIC_REGEX.get_or_init(|| {
            let d = regex::escape(Self::DELIM);
            Regex::new(&format!("{d}([^{d}]+){d}")).expect("Invalid italic regex")
        })
    }
}
