use serde::{Deserialize, Serialize};

/// Heading tiers recognised by the line classifier.
///
/// Sermon documents only use second and third level headings; a single `#`
/// is left as ordinary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level (2 or 3), as used by renderers keyed on heading depth.
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Block-level role of the first segment produced for a line.
///
/// At most one block marker applies per line, so this is an enum rather than
/// a set of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockMarker {
    Heading(HeadingLevel),
    Quote,
    /// Unordered list marker; the segment text is the bullet glyph.
    ListItem,
    /// Ordered list marker; the segment text is the numeral prefix, e.g. `"3. "`.
    NumberedList,
}

/// Paired-delimiter styles produced by the inline tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Highlight,
    Italic,
}

/// A contiguous run of text plus the style flags a renderer needs.
///
/// `text` never contains consumed markup markers. Segments are produced fresh
/// on every parse and carry no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockMarker>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Segment {
    pub const LINE_BREAK: &'static str = "\n";

    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The bare `"\n"` segment emitted between lines.
    pub fn line_break() -> Self {
        Self::plain(Self::LINE_BREAK)
    }

    /// The single segment emitted for a blank line.
    pub fn empty_line() -> Self {
        Self::plain("")
    }

    pub fn styled(text: impl Into<String>, style: InlineStyle) -> Self {
        let mut segment = Self::plain(text);
        match style {
            InlineStyle::Bold => segment.bold = true,
            InlineStyle::Highlight => segment.highlight = true,
            InlineStyle::Italic => segment.italic = true,
        }
        segment
    }

    pub fn block(text: impl Into<String>, marker: BlockMarker) -> Self {
        Self {
            text: text.into(),
            block: Some(marker),
            ..Self::default()
        }
    }

    /// True when no inline or block flag is set.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.highlight && self.block.is_none()
    }

    pub fn is_line_break(&self) -> bool {
        self.is_plain() && self.text == Self::LINE_BREAK
    }

    pub fn heading_level(&self) -> Option<HeadingLevel> {
        match self.block {
            Some(BlockMarker::Heading(level)) => Some(level),
            _ => None,
        }
    }
}
