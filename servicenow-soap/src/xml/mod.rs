//! XML tree, rendering and parsing
//!
//! Requests are built as [`Element`] trees and rendered to text with
//! [`format`]. Responses are parsed back into the same tree with [`parse`].
//!
//! # Example
//!
//! ```
//! use servicenow_soap::xml::{self, Element};
//!
//! let request = Element::new("get").with_child(Element::new("sys_id").with_text("abc"));
//!
//! assert_eq!(
//!     xml::format(&request, false).unwrap(),
//!     "<get><sys_id>abc</sys_id></get>"
//! );
//! ```

mod element;
mod format;
mod parse;

pub use element::*;
pub use format::*;
pub use parse::*;
