//! Table collaborator

use crate::model::FieldValues;
use crate::model::Key;

/// A remote table that can insert and update records.
///
/// Implemented by the transport layer, which renders the values to a SOAP
/// request and sends it. Errors are the implementation's own and pass
/// through this crate unchanged.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
///
/// use servicenow_soap::api::Table;
/// use servicenow_soap::model::{FieldValues, Key};
///
/// struct InMemory(RefCell<Vec<FieldValues>>);
///
/// impl Table for InMemory {
///     type Error = std::convert::Infallible;
///
///     fn name(&self) -> &str {
///         "incident"
///     }
///
///     fn insert(&self, values: &FieldValues) -> Result<Key, Self::Error> {
///         let mut rows = self.0.borrow_mut();
///         rows.push(values.clone());
///         Ok(Key::new(rows.len().to_string()))
///     }
///
///     fn update(&self, _key: &Key, _values: &FieldValues) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// let table = InMemory(RefCell::new(Vec::new()));
/// let key = FieldValues::with("short_description", "hello").insert(&table).unwrap();
/// assert_eq!(key.as_str(), "1");
/// ```
pub trait Table {
    /// The failure type of the underlying transport.
    type Error;

    /// Returns the table name, e.g. `incident`.
    fn name(&self) -> &str;

    /// Inserts a record and returns the key the service assigned.
    fn insert(&self, values: &FieldValues) -> Result<Key, Self::Error>;

    /// Updates the record identified by `key`.
    fn update(&self, key: &Key, values: &FieldValues) -> Result<(), Self::Error>;
}

impl<T: Table + ?Sized> Table for &T {
    type Error = T::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn insert(&self, values: &FieldValues) -> Result<Key, Self::Error> {
        (**self).insert(values)
    }

    fn update(&self, key: &Key, values: &FieldValues) -> Result<(), Self::Error> {
        (**self).update(key, values)
    }
}
