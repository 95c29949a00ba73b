//! # Block Classification
//!
//! Each physical line is classified on its own, by its leading characters,
//! with no reference to surrounding lines.
//!
//! ## Matching order
//!
//! First match wins: blank, `### `, `## `, `> `, `N. `, `- `, then plain
//! inline text. A line can carry at most one block marker. This is a
//! deliberately small single-line dialect, not CommonMark.
//!
//! ## Modules
//!
//! - **`kinds`**: block types owning their prefixes (Heading, BlockQuote, Bullet, Numbered)
//! - **`classify`**: `LineClassifier` turning a line into segments

pub mod classify;
pub mod kinds;

pub use classify::LineClassifier;
