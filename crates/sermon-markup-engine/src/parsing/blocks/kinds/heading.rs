use crate::segment::HeadingLevel;

/// ATX-style headings, restricted to the two tiers sermons use.
pub struct Heading;

impl Heading {
    pub const H2_PREFIX: &'static str = "## ";
    pub const H3_PREFIX: &'static str = "### ";

    pub fn prefix(level: HeadingLevel) -> &'static str {
        match level {
            HeadingLevel::H2 => Self::H2_PREFIX,
            HeadingLevel::H3 => Self::H3_PREFIX,
        }
    }

    /// Detects a heading line, returning its level and the text after the prefix.
    ///
    /// `### ` is checked before `## `. `#### x` and `# x` are not headings.
    pub fn strip_prefix(line: &str) -> Option<(HeadingLevel, &str)> {
        [HeadingLevel::H3, HeadingLevel::H2]
            .into_iter()
            .find_map(|level| line.strip_prefix(Self::prefix(level)).map(|rest| (level, rest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("### Title", Some((HeadingLevel::H3, "Title")))]
    #[case("## Title", Some((HeadingLevel::H2, "Title")))]
    #[case("## ", Some((HeadingLevel::H2, "")))]
    #[case("# Title", None)]
    #[case("#### Title", None)]
    #[case("##Title", None)]
    #[case("Title ## ", None)]
    fn detects_heading_prefix(#[case] line: &str, #[case] expected: Option<(HeadingLevel, &str)>) {
        assert_eq!(Heading::strip_prefix(line), expected);
    }
}
