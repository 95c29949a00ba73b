use regex::Regex;

use crate::segment::{InlineStyle, Segment};

use super::kinds::{Bold, Highlight, Italic};

/// A slice of the input line, either still unclaimed or claimed by a style pass.
#[derive(Debug, Clone, Copy)]
struct Run<'a> {
    text: &'a str,
    style: Option<InlineStyle>,
}

/// Style passes in priority order. Earlier passes win overlapping delimiters.
fn passes() -> [(InlineStyle, &'static Regex); 3] {
    [
        (InlineStyle::Bold, Bold::pattern()),
        (InlineStyle::Highlight, Highlight::pattern()),
        (InlineStyle::Italic, Italic::pattern()),
    ]
}

/// Parses inline markup into an ordered list of [`Segment`]s.
///
/// The returned segments cover the input exactly once, minus the consumed
/// delimiters. Unmatched delimiters stay in the text as literal characters;
/// this never fails. Empty input yields no segments.
pub fn parse_inline(line: &str) -> Vec<Segment> {
    let mut runs = Vec::new();
    push_unclaimed(&mut runs, line);

    for (style, pattern) in passes() {
        runs = claim(runs, style, pattern);
    }

    runs.into_iter()
        .map(|run| match run.style {
            Some(style) => Segment::styled(run.text, style),
            None => Segment::plain(run.text),
        })
        .collect()
}

/// Splits every unclaimed run around the matches of `pattern`.
///
/// Claimed runs pass through untouched, which is what keeps a lower priority
/// style from matching inside a higher priority span.
fn claim<'a>(runs: Vec<Run<'a>>, style: InlineStyle, pattern: &Regex) -> Vec<Run<'a>> {
    let mut out = Vec::with_capacity(runs.len());

    for run in runs {
        if run.style.is_some() {
            out.push(run);
            continue;
        }

        let mut last = 0;
        for caps in pattern.captures_iter(run.text) {
            let (Some(full), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_unclaimed(&mut out, &run.text[last..full.start()]);
            out.push(Run {
                text: inner.as_str(),
                style: Some(style),
            });
            last = full.end();
        }
        push_unclaimed(&mut out, &run.text[last..]);
    }

    out
}

// Zero-length plain runs are never emitted.
fn push_unclaimed<'a>(out: &mut Vec<Run<'a>>, text: &'a str) {
    if !text.is_empty() {
        out.push(Run { text, style: None });
    }
}
