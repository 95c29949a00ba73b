//! List continuation helpers for the editor.
//!
//! Kept apart from the segmenter: the classifier only recognises lines that
//! are already numbered, while these functions decide what the *next* line
//! should start with when the author presses return.

use crate::parsing::blocks::kinds::{Bullet, Numbered};

/// Number for an ordered item following `previous_line`.
///
/// Continues the sequence when the previous line is an ordered item,
/// otherwise starts again at 1.
pub fn next_list_number(previous_line: &str) -> u32 {
    Numbered::number(previous_line).map_or(1, |n| n.saturating_add(1))
}

/// Prefix for a new line typed after `previous_line`.
///
/// Returns `None` when the previous line is not a list item, or when it is an
/// empty item (return on an empty item ends the list).
pub fn continuation_prefix(previous_line: &str) -> Option<String> {
    if let Some((_, rest)) = Numbered::split(previous_line) {
        if rest.trim().is_empty() {
            return None;
        }
        return Some(Numbered::marker(next_list_number(previous_line)));
    }

    let rest = Bullet::strip_prefix(previous_line)?;
    if rest.trim().is_empty() {
        return None;
    }
    Some(Bullet::PREFIX.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1. first", 2)]
    #[case("9. ninth", 10)]
    #[case("3. ", 4)]
    #[case("- bullet", 1)]
    #[case("plain text", 1)]
    #[case("", 1)]
    #[case("4294967295. max", u32::MAX)]
    fn next_number(#[case] previous: &str, #[case] expected: u32) {
        assert_eq!(next_list_number(previous), expected);
    }

    #[rstest]
    #[case("1. first", Some("2. "))]
    #[case("- item", Some("- "))]
    #[case("1. ", None)]
    #[case("- ", None)]
    #[case("-   ", None)]
    #[case("> quote", None)]
    #[case("text", None)]
    fn continuation(#[case] previous: &str, #[case] expected: Option<&str>) {
        assert_eq!(continuation_prefix(previous).as_deref(), expected);
    }
}
