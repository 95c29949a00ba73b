//! Segment parsing for the sermon editor's markdown dialect.
//!
//! Text flows Document Segmenter → Line Classifier → Inline Tokenizer and
//! comes out as a flat list of [`Segment`]s ready for a renderer.

pub mod io;
pub mod numbering;
pub mod parsing;
pub mod projection;
pub mod segment;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use numbering::{continuation_prefix, next_list_number};
pub use parsing::{ParseOptions, SegmentParser, classify_line, parse_document, parse_inline};
pub use projection::{display_text, project_source};
pub use segment::{BlockMarker, HeadingLevel, InlineStyle, Segment};
