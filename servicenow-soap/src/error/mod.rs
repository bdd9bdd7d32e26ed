//! Error types

mod cursor;
mod field;
mod value;
mod xml;

pub use cursor::*;
pub use field::*;
pub use value::*;
pub use xml::*;
