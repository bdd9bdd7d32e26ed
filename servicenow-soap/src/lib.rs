//! ServiceNow SOAP record layer
//!
//! Field values for inserts and updates, request parameters, query results
//! with a removing cursor, and thread-safe XML rendering for requests and
//! debug logging. The transport that exchanges SOAP envelopes plugs in
//! through [`api::Table`].
//!
//! # Example
//!
//! ```
//! use servicenow_soap::model::FieldValues;
//! use servicenow_soap::xml;
//!
//! let values = FieldValues::new()
//!     .set("short_description", "Email is down")
//!     .set("urgency", 1)
//!     .set_null("assigned_to");
//!
//! let request = values.to_element("insert");
//! println!("{}", xml::format_pretty(&request).unwrap());
//! ```

pub mod api;
pub mod error;
pub mod model;
pub mod xml;
