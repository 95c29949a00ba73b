use crate::segment::{BlockMarker, Segment};

/// Validates segmenter output invariants for `segments` parsed from `text`.
///
/// Asserts that:
/// - There is one `"\n"` segment per newline in `text`, and line breaks carry no flags
/// - Each source line produces at least one segment
/// - Only empty-line and quote segments may have empty text
/// - A block-marked segment is always the first segment of its line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, segments: &[Segment]) {
    let newlines = text.matches('\n').count();
    let breaks = segments.iter().filter(|s| s.text == "\n").count();
    assert_eq!(
        breaks, newlines,
        "line break segments ({breaks}) do not match source newlines ({newlines})"
    );

    for line in segments.split(|s| s.text == "\n") {
        assert!(!line.is_empty(), "a source line produced no segments");

        for (i, seg) in line.iter().enumerate() {
            if seg.text.is_empty() {
                let empty_line = line.len() == 1 && seg.is_plain();
                let empty_quote = seg.block == Some(BlockMarker::Quote);
                assert!(
                    empty_line || empty_quote,
                    "zero-length segment leaked: {seg:?} in line {line:?}"
                );
            }
            assert!(
                i == 0 || seg.block.is_none(),
                "block marker not first in line: {seg:?} in line {line:?}"
            );
        }
    }

    for seg in segments.iter().filter(|s| s.text == "\n") {
        assert!(seg.is_plain(), "line break carries flags: {seg:?}");
    }
}
