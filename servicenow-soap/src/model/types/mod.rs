//! Value types shared by field values and records

mod date_time;

pub use date_time::*;
