use crate::segment::{BlockMarker, HeadingLevel, Segment};

/// Renders segments as one text line per source line.
///
/// Each segment is written as its Debug-quoted text, wrapped in a tag when it
/// carries flags, e.g. `bullet("• ") "item " bold("one")`. Tags of combined
/// inline flags are joined with `+`.
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    let mut at_line_start = true;

    for seg in segments {
        if seg.is_line_break() {
            out.push('\n');
            at_line_start = true;
            continue;
        }
        if !at_line_start {
            out.push(' ');
        }
        out.push_str(&render_one(seg));
        at_line_start = false;
    }

    out
}

fn render_one(seg: &Segment) -> String {
    let tags = tags(seg);
    if tags.is_empty() {
        format!("{:?}", seg.text)
    } else {
        format!("{}({:?})", tags.join("+"), seg.text)
    }
}

fn tags(seg: &Segment) -> Vec<&'static str> {
    let mut tags = Vec::new();
    match seg.block {
        Some(BlockMarker::Heading(HeadingLevel::H2)) => tags.push("h2"),
        Some(BlockMarker::Heading(HeadingLevel::H3)) => tags.push("h3"),
        Some(BlockMarker::Quote) => tags.push("quote"),
        Some(BlockMarker::ListItem) => tags.push("bullet"),
        Some(BlockMarker::NumberedList) => tags.push("num"),
        None => {}
    }
    if seg.bold {
        tags.push("bold");
    }
    if seg.italic {
        tags.push("italic");
    }
    if seg.highlight {
        tags.push("highlight");
    }
    tags
}
