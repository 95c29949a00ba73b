//! UniFFI bindings for the sermon editor mobile apps
//!
//! Exposes the segment parser to the Kotlin and Swift preview renderers.
//! Segments cross the boundary as flat flag records, the shape the
//! renderers key their text styles on.

use sermon_markup_engine::{BlockMarker, ParseOptions, Segment, SegmentParser};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Logging ============

/// Route `log` output to logcat on Android. Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("SermonMarkup"),
        );
    }

    log::info!("sermon-markup bindings ready");
}

// ============ Document Handle ============

struct Parsed {
    text: String,
    segments: Vec<Segment>,
}

/// A sermon text plus its most recently derived segments.
///
/// The editor calls `set_text` on every change; segments are only
/// recomputed when the text actually differs from the last one seen.
#[derive(uniffi::Object)]
pub struct SermonDocument {
    parser: SegmentParser,
    inner: Mutex<Parsed>,
}

impl SermonDocument {
    fn with_parser(text: String, parser: SegmentParser) -> Self {
        let segments = parser.parse_document(&text);
        Self {
            parser,
            inner: Mutex::new(Parsed { text, segments }),
        }
    }
}

#[uniffi::export]
impl SermonDocument {
    /// Create a document from sermon text.
    #[uniffi::constructor]
    pub fn from_string(text: String) -> Self {
        Self::with_parser(text, SegmentParser::default())
    }

    /// Create a document whose `- ` list items render with `bullet`.
    #[uniffi::constructor]
    pub fn from_string_with_bullet(text: String, bullet: String) -> Self {
        Self::with_parser(text, SegmentParser::new(ParseOptions { bullet }))
    }

    /// Replace the text. Returns true if the segments were recomputed.
    pub fn set_text(&self, text: String) -> bool {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        let mut parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if parsed.text == text {
            return false;
        }
        parsed.segments = self.parser.parse_document(&text);
        parsed.text = text;
        true
    }

    pub fn get_text(&self) -> String {
        let parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        parsed.text.clone()
    }

    /// Segments for the current text, ready for rendering.
    pub fn get_segments(&self) -> Vec<SegmentDto> {
        let parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        to_dtos(&parsed.segments)
    }

    /// The current text with inline formatting markers removed.
    pub fn get_plain_text(&self) -> String {
        let parsed = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        sermon_markup_engine::project_source(&parsed.segments)
    }
}

// ============ DTOs ============

/// A styled run of text.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct SegmentDto {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub highlight: bool,
    /// Heading level (2 or 3), 0 otherwise
    pub heading: u8,
    pub quote: bool,
    /// Bullet marker segment
    pub list_item: bool,
    /// Numeral marker segment, e.g. "3. "
    pub numbered_list: bool,
}

impl SegmentDto {
    fn from_engine(segment: &Segment) -> Self {
        Self {
            text: segment.text.clone(),
            bold: segment.bold,
            italic: segment.italic,
            highlight: segment.highlight,
            heading: segment.heading_level().map_or(0, |level| level.level()),
            quote: segment.block == Some(BlockMarker::Quote),
            list_item: segment.block == Some(BlockMarker::ListItem),
            numbered_list: segment.block == Some(BlockMarker::NumberedList),
        }
    }
}

fn to_dtos(segments: &[Segment]) -> Vec<SegmentDto> {
    segments.iter().map(SegmentDto::from_engine).collect()
}

// ============ Standalone Functions ============

#[uniffi::export]
pub fn parse_document(text: String) -> Vec<SegmentDto> {
    to_dtos(&sermon_markup_engine::parse_document(&text))
}

#[uniffi::export]
pub fn parse_inline(line: String) -> Vec<SegmentDto> {
    to_dtos(&sermon_markup_engine::parse_inline(&line))
}

#[uniffi::export]
pub fn classify_line(line: String) -> Vec<SegmentDto> {
    to_dtos(&sermon_markup_engine::classify_line(&line))
}

/// Number the next ordered list item should take after `previous_line`.
#[uniffi::export]
pub fn next_list_number(previous_line: String) -> u32 {
    sermon_markup_engine::next_list_number(&previous_line)
}

/// Prefix a new line should start with after `previous_line`, if it continues a list.
#[uniffi::export]
pub fn continuation_prefix(previous_line: String) -> Option<String> {
    sermon_markup_engine::continuation_prefix(&previous_line)
}
