use sermon_markup_engine::parsing::{parse_document, snapshot};

fn render_fixture(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let segments = parse_document(&md);
    snapshot::invariants(&md, &segments);
    snapshot::render(&segments)
}

#[test]
fn fixture_good_shepherd() {
    insta::assert_snapshot!(render_fixture("good_shepherd"), @r#"
    h2("The Good Shepherd")
    h3("John 10:1-18")
    ""
    quote("I am the good shepherd.")
    ""
    "Jesus speaks of " bold("sheep") " and " italic("shepherds") "."
    num("1. ") "The shepherd " highlight("knows") " his sheep"
    num("2. ") "The sheep know his voice"
    bullet("• ") "Application: " bold("listen")
    ""
    "Amen"
    ""
    "#);
}

#[test]
fn fixture_malformed() {
    insta::assert_snapshot!(render_fixture("malformed"), @r#####"
    "**unclosed bold"
    "==half highlight"
    ""
    "#### Too deep"
    italic("a") " " bold("b") " " highlight("c")
    ""
    "#####);
}

/// Every segment list should re-render identically from the same text
#[test]
fn parsing_is_pure() {
    let md = "## A\n- **b** c\n\n> d";
    assert_eq!(
        snapshot::render(&parse_document(md)),
        snapshot::render(&parse_document(md))
    );
}
