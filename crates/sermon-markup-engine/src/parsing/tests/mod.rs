//! Document segmenter tests.
//!
//! Every case is also run through the invariant checker so that structural
//! guarantees hold across all inputs, not just the asserted ones.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{ParseOptions, SegmentParser, parse_document, snapshot};
use crate::segment::{BlockMarker, HeadingLevel, InlineStyle, Segment};

fn parse_checked(text: &str) -> Vec<Segment> {
    let segments = parse_document(text);
    snapshot::invariants(text, &segments);
    segments
}

#[test]
fn two_plain_lines() {
    assert_eq!(
        parse_checked("Line1\nLine2"),
        vec![
            Segment::plain("Line1"),
            Segment::line_break(),
            Segment::plain("Line2"),
        ]
    );
}

#[test]
fn empty_document_is_one_empty_line() {
    assert_eq!(parse_checked(""), vec![Segment::empty_line()]);
}

#[test]
fn trailing_newline_keeps_trailing_empty_line() {
    assert_eq!(
        parse_checked("Amen\n"),
        vec![
            Segment::plain("Amen"),
            Segment::line_break(),
            Segment::empty_line(),
        ]
    );
}

#[test]
fn blank_lines_between_paragraphs() {
    assert_eq!(
        parse_checked("a\n\n\nb"),
        vec![
            Segment::plain("a"),
            Segment::line_break(),
            Segment::empty_line(),
            Segment::line_break(),
            Segment::empty_line(),
            Segment::line_break(),
            Segment::plain("b"),
        ]
    );
}

#[test]
fn first_line_has_no_leading_break() {
    let segments = parse_checked("## Intro\nText");
    assert_eq!(
        segments[0],
        Segment::block("Intro", BlockMarker::Heading(HeadingLevel::H2))
    );
    assert!(segments[1].is_line_break());
}

#[test]
fn mixed_document() {
    let text = "### Point one\n> Quote\n1. **Bold** start\n- ==mark==\nplain *it*";
    assert_eq!(
        parse_checked(text),
        vec![
            Segment::block("Point one", BlockMarker::Heading(HeadingLevel::H3)),
            Segment::line_break(),
            Segment::block("Quote", BlockMarker::Quote),
            Segment::line_break(),
            Segment::block("1. ", BlockMarker::NumberedList),
            Segment::styled("Bold", InlineStyle::Bold),
            Segment::plain(" start"),
            Segment::line_break(),
            Segment::block("• ", BlockMarker::ListItem),
            Segment::styled("mark", InlineStyle::Highlight),
            Segment::line_break(),
            Segment::plain("plain "),
            Segment::styled("it", InlineStyle::Italic),
        ]
    );
}

#[test]
fn markers_never_span_lines() {
    assert_eq!(
        parse_checked("**open\nclose**"),
        vec![
            Segment::plain("**open"),
            Segment::line_break(),
            Segment::plain("close**"),
        ]
    );
}

#[test]
fn carriage_returns_are_kept_as_text() {
    assert_eq!(
        parse_checked("a\r\nb"),
        vec![
            Segment::plain("a\r"),
            Segment::line_break(),
            Segment::plain("b"),
        ]
    );
}

#[test]
fn custom_bullet_flows_through_document() {
    let parser = SegmentParser::new(ParseOptions {
        bullet: "* ".to_string(),
    });
    assert_eq!(
        parser.parse_document("- a\n- b"),
        vec![
            Segment::block("* ", BlockMarker::ListItem),
            Segment::plain("a"),
            Segment::line_break(),
            Segment::block("* ", BlockMarker::ListItem),
            Segment::plain("b"),
        ]
    );
}

#[test]
fn empty_bullet_never_leaks_a_zero_length_marker() {
    let parser = SegmentParser::new(ParseOptions {
        bullet: String::new(),
    });
    let segments = parser.parse_document("- x");
    snapshot::invariants("- x", &segments);
    assert_eq!(
        segments,
        vec![
            Segment::block("• ", BlockMarker::ListItem),
            Segment::plain("x"),
        ]
    );
}

#[test]
fn parser_methods_match_free_functions() {
    let parser = SegmentParser::default();
    assert_eq!(
        parser.classify_line("- x"),
        crate::parsing::classify_line("- x")
    );
    assert_eq!(
        parser.parse_inline("*x*"),
        crate::parsing::parse_inline("*x*")
    );
}

#[test]
fn same_input_same_output() {
    let text = "## Title\n- **a** b\n\n> q";
    assert_eq!(parse_document(text), parse_document(text));
}

#[rstest]
#[case("**unclosed")]
#[case("==a **b** c==\n*")]
#[case("### \n## \n> \n- \n1. ")]
#[case("\n\n\n")]
#[case("* * *\n== ==\n** **")]
#[case("1.\n-\n>\n##\n###")]
fn never_panics_and_holds_invariants(#[case] text: &str) {
    parse_checked(text);
}

#[rstest]
#[case("plain sermon text")]
#[case("no markers, just punctuation: a-b, c=d; e*f")]
fn plain_text_is_one_unstyled_segment(#[case] text: &str) {
    let segments = crate::parsing::parse_inline(text);
    assert_eq!(segments, vec![Segment::plain(text)]);
}
