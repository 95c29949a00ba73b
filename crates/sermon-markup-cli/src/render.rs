use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use sermon_markup_engine::{BlockMarker, HeadingLevel, Segment};

/// Maps segments to styled terminal lines, one per source line.
pub fn segments_to_lines(segments: &[Segment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for seg in segments {
        if seg.is_line_break() {
            lines.push(Line::from(std::mem::take(&mut current)));
            continue;
        }
        current.push(Span::styled(seg.text.clone(), segment_style(seg)));
    }
    lines.push(Line::from(current));

    lines
}

pub fn segment_style(seg: &Segment) -> Style {
    let mut style = match seg.block {
        Some(BlockMarker::Heading(HeadingLevel::H2)) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        Some(BlockMarker::Heading(HeadingLevel::H3)) => Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
        Some(BlockMarker::Quote) => Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
        Some(BlockMarker::ListItem | BlockMarker::NumberedList) => {
            Style::default().fg(Color::Magenta)
        }
        None => Style::default(),
    };

    if seg.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if seg.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if seg.highlight {
        style = style.bg(Color::Yellow).fg(Color::Black);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sermon_markup_engine::parse_document;

    #[test]
    fn one_terminal_line_per_source_line() {
        let lines = segments_to_lines(&parse_document("## A\n\n- b **c**"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].spans.len(), 3);
        assert_eq!(lines[2].spans[0].content, "• ");
    }

    #[test]
    fn inline_flags_become_modifiers() {
        let lines = segments_to_lines(&parse_document("**b** *i* ==h=="));
        let spans = &lines[0].spans;
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(spans[2].style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(spans[4].style.bg, Some(Color::Yellow));
    }

    #[test]
    fn headings_are_coloured() {
        let lines = segments_to_lines(&parse_document("### Point"));
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::LightCyan));
    }
}
