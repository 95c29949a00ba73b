//! # Inline Kinds
//!
//! Inline styles that own their delimiters and match patterns.
//!
//! ## Types
//!
//! - **`Bold`**: `**text**`
//! - **`Highlight`**: `==text==`
//! - **`Italic`**: `*text*`, content may not contain `*`
//!
//! The tokenizer asks these types for their patterns; it never hardcodes
//! `**` or `==`.

pub mod emphasis;
pub mod highlight;

pub use emphasis::{Bold, Italic};
pub use highlight::Highlight;
