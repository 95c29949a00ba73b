//! # Snapshot Testing Support
//!
//! Utilities for testing the segmenter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: Renders a segment list as compact, line-oriented text for
//!   `insta` snapshots (one output line per source line)
//! - **`invariants`**: Runtime checks for segmenter correctness (no zero-length
//!   leaks, line breaks match source newlines, block markers lead their line)

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::render;
