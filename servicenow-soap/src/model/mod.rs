//! Field values, parameters and records

mod field_value;
mod field_values;
mod key;
mod name_value;
mod parameters;
mod record;
mod record_list;
pub mod types;

pub use field_value::*;
pub use field_values::*;
pub use key::*;
pub use name_value::*;
pub use parameters::*;
pub use record::*;
pub use record_list::*;
