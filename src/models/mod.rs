mod document;
mod field;
mod rule;

pub use document::*;
pub use field::*;
pub use rule::*;
