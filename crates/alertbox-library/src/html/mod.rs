//! HTML markup tree.

mod dom;

pub use self::dom::*;
