use std::sync::OnceLock;

use regex::Regex;

/// Highlighter-pen style, `==text==`.
pub struct Highlight;

impl Highlight {
    pub const DELIM: &'static str = "==";

    pub fn pattern() -> &'static Regex {
        static HIGHLIGHT_REGEX: OnceLock<Regex> = OnceLock::new();
        HIGHLIGHT_REGEX.get_or_init(|| {
            let d = regex::escape(Self::DELIM);
            Regex::new(&format!("{d}(.+?){d}")).expect("Invalid highlight regex")
        })
    }
}
