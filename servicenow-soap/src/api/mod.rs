//! Record submission

mod submission;
mod table;

pub use submission::*;
pub use table::*;
