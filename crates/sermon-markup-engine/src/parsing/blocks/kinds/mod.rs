pub mod block_quote;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list::{Bullet, Numbered};
