pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{LineClassifier, kinds::Bullet};

use crate::segment::Segment;

pub use inline::parse_inline;

/// Knobs that change how segments are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Text of the marker segment emitted for `- ` list items.
    pub bullet: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            bullet: Bullet::DEFAULT_GLYPH.to_string(),
        }
    }
}

/// Document segmenter: the entry point renderers use.
///
/// Pure and stateless between calls; every call re-derives the full segment
/// list from the text it is given.
#[derive(Debug, Clone, Default)]
pub struct SegmentParser {
    classifier: LineClassifier,
}

impl SegmentParser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            classifier: LineClassifier::new(options.bullet),
        }
    }

    /// Splits `text` on `\n` and classifies every line.
    ///
    /// A bare `"\n"` segment is emitted before each line except the first, so
    /// the line break belongs to the start of the following line. No line is
    /// dropped: a trailing newline yields a trailing empty-line segment.
    pub fn parse_document(&self, text: &str) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut lines = 0usize;

        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push(Segment::line_break());
            }
            out.extend(self.classifier.classify(line));
            lines += 1;
        }

        log::trace!("segmented {lines} lines into {} segments", out.len());
        out
    }

    pub fn classify_line(&self, line: &str) -> Vec<Segment> {
        self.classifier.classify(line)
    }

    pub fn parse_inline(&self, line: &str) -> Vec<Segment> {
        parse_inline(line)
    }
}

/// Parses a whole document with default options.
pub fn parse_document(text: &str) -> Vec<Segment> {
    SegmentParser::default().parse_document(text)
}

/// Classifies a single line with default options.
pub fn classify_line(line: &str) -> Vec<Segment> {
    LineClassifier::default().classify(line)
}
