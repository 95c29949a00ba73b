use std::sync::OnceLock;

use regex::Regex;

/// Unordered list item, `- text`.
pub struct Bullet;

impl Bullet {
    pub const PREFIX: &'static str = "- ";
    /// Text of the marker segment rendered in place of `- `.
    pub const DEFAULT_GLYPH: &'static str = "• ";

    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}

/// Ordered list item, `12. text`.
pub struct Numbered;

impl Numbered {
    pub const SEPARATOR: &'static str = ". ";

    fn pattern() -> &'static Regex {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        // ASCII digits only; `\d` would also accept other scripts' numerals.
        NUMBERED_REGEX.get_or_init(|| {
            Regex::new(r"^([0-9]+\. )(.*)").expect("Invalid numbered list regex")
        })
    }

    /// Splits an ordered list line into its numeral prefix (`"3. "`) and remainder.
    pub fn split(line: &str) -> Option<(&str, &str)> {
        let caps = Self::pattern().captures(line)?;
        let marker = caps.get(1)?;
        let rest = caps.get(2).map_or("", |m| m.as_str());
        Some((marker.as_str(), rest))
    }

    /// The item number of an ordered list line. Numerals too large for `u32`
    /// saturate rather than failing.
    pub fn number(line: &str) -> Option<u32> {
        let (marker, _) = Self::split(line)?;
        let digits = marker.trim_end_matches(Self::SEPARATOR);
        Some(digits.parse().unwrap_or(u32::MAX))
    }

    pub fn marker(number: u32) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }
}
