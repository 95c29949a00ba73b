use crate::parsing::blocks::kinds::{BlockQuote, Bullet, Heading};
use crate::segment::{BlockMarker, Segment};

/// Rebuilds source-like text from segments.
///
/// Block-marked segments get their line prefix back (`### `, `## `, `> `,
/// `- `); numbered markers already hold their prefix. Inline delimiters
/// consumed by the tokenizer are not restored, so the result equals the
/// source minus formatting markers.
pub fn project_source(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg.block {
            Some(BlockMarker::Heading(level)) => {
                out.push_str(Heading::prefix(level));
                out.push_str(&seg.text);
            }
            Some(BlockMarker::Quote) => {
                out.push_str(BlockQuote::PREFIX);
                out.push_str(&seg.text);
            }
            // The bullet glyph stands in for the prefix.
            Some(BlockMarker::ListItem) => out.push_str(Bullet::PREFIX),
            Some(BlockMarker::NumberedList) | None => out.push_str(&seg.text),
        }
    }
    out
}

/// Concatenated segment text exactly as a renderer would display it.
pub fn display_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
