pub mod docs;
pub mod parse;

pub use docs::*;
pub use parse::*;
