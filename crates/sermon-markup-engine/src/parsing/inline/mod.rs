//! # Inline Parsing
//!
//! Turns one line of text (block prefix already stripped) into styled
//! [`Segment`](crate::Segment)s.
//!
//! ## Passes
//!
//! Styles are resolved by three passes in strict priority order: bold,
//! highlight, italic. Each pass only looks at text no earlier pass has
//! claimed, so `**a*b*c**` is bold `a*b*c` and never italic inside bold.
//! Nesting is not supported.
//!
//! ## Modules
//!
//! - **`kinds`**: style types owning their delimiters and patterns
//! - **`parser`**: `parse_inline()` entry point

pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
