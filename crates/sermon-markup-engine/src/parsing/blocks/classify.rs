use crate::parsing::inline::parse_inline;
use crate::segment::{BlockMarker, HeadingLevel, Segment};

use super::kinds::{BlockQuote, Bullet, Heading, Numbered};

/// Classifies single lines into segments.
///
/// The classifier only recognises lines that are already numbered; it never
/// renumbers ordered lists (see [`crate::numbering`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClassifier {
    bullet: String,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(Bullet::DEFAULT_GLYPH)
    }
}

impl LineClassifier {
    /// Creates a classifier that renders `- ` list markers as `bullet`.
    ///
    /// An empty bullet would leave a zero-length marker segment, so it falls
    /// back to [`Bullet::DEFAULT_GLYPH`].
    pub fn new(bullet: impl Into<String>) -> Self {
        let mut bullet = bullet.into();
        if bullet.is_empty() {
            bullet = Bullet::DEFAULT_GLYPH.to_string();
        }
        Self { bullet }
    }

    pub fn bullet(&self) -> &str {
        &self.bullet
    }

    /// Classifies one physical line (no `\n`) into segments.
    ///
    /// The block-marked segment, if any, comes first. Heading and quote text
    /// is kept as a single segment; list remainders go through the inline
    /// tokenizer and do not inherit the list marker.
    pub fn classify(&self, line: &str) -> Vec<Segment> {
        if line.trim().is_empty() {
            return vec![Segment::empty_line()];
        }

        if let Some((level, rest)) = Heading::strip_prefix(line) {
            return heading(level, rest);
        }

        if let Some(rest) = BlockQuote::strip_prefix(line) {
            return vec![Segment::block(rest, BlockMarker::Quote)];
        }

        if let Some((marker, rest)) = Numbered::split(line) {
            return with_marker(Segment::block(marker, BlockMarker::NumberedList), rest);
        }

        if let Some(rest) = Bullet::strip_prefix(line) {
            return with_marker(
                Segment::block(self.bullet.as_str(), BlockMarker::ListItem),
                rest,
            );
        }

        parse_inline(line)
    }
}

// A heading with nothing after the prefix renders as a blank line.
fn heading(level: HeadingLevel, rest: &str) -> Vec<Segment> {
    if rest.trim().is_empty() {
        return vec![Segment::empty_line()];
    }
    vec![Segment::block(rest, BlockMarker::Heading(level))]
}

fn with_marker(marker: Segment, rest: &str) -> Vec<Segment> {
    let mut out = vec![marker];
    out.extend(parse_inline(rest));
    out
}
