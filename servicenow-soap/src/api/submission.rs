//! Insert and update operations as values

use crate::model::FieldValues;
use crate::model::Key;
use crate::model::SYS_ID;
use crate::xml::Element;

use super::Table;

/// An insert or update waiting to be sent.
///
/// Submissions can be built ahead of time, logged with
/// [`to_element`](Self::to_element), and run against any [`Table`].
///
/// # Example
///
/// ```
/// use servicenow_soap::api::Submission;
/// use servicenow_soap::model::{FieldValues, Key};
/// use servicenow_soap::xml;
///
/// let submission = Submission::update(Key::new("abc"), FieldValues::with("state", 2));
/// assert_eq!(
///     xml::format(&submission.to_element(), false).unwrap(),
///     "<update><sys_id>abc</sys_id><state>2</state></update>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Create a new record.
    Insert { values: FieldValues },

    /// Update an existing record.
    Update { key: Key, values: FieldValues },
}

impl Submission {
    pub fn insert(values: FieldValues) -> Self {
        Self::Insert { values }
    }

    pub fn update(key: Key, values: FieldValues) -> Self {
        Self::Update { key, values }
    }

    pub fn values(&self) -> &FieldValues {
        match self {
            Self::Insert { values } | Self::Update { values, .. } => values,
        }
    }

    /// Returns the key of the target record, for updates.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Self::Insert { .. } => None,
            Self::Update { key, .. } => Some(key),
        }
    }

    /// Returns the SOAP method name: `insert` or `update`.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Update { .. } => "update",
        }
    }

    /// Runs the submission and returns the key of the affected record.
    pub fn execute<T: Table + ?Sized>(&self, table: &T) -> Result<Key, T::Error> {
        match self {
            Self::Insert { values } => values.insert(table),
            Self::Update { key, values } => {
                values.update(table, key)?;
                Ok(key.clone())
            }
        }
    }

    /// Renders the request body element.
    ///
    /// Updates carry the target `sys_id` first; a `sys_id` among the values
    /// is not sent twice.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(self.method());
        match self {
            Self::Insert { values } => values.append_to(&mut element),
            Self::Update { key, values } => {
                element.push_child(Element::new(SYS_ID).with_text(key.as_str()));
                if values.contains(SYS_ID) {
                    let mut values = values.clone();
                    values.remove(SYS_ID);
                    values.append_to(&mut element);
                } else {
                    values.append_to(&mut element);
                }
            }
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::xml;

    struct Counter {
        calls: RefCell<Vec<&'static str>>,
    }

    impl Table for Counter {
        type Error = String;

        fn name(&self) -> &str {
            "change_request"
        }

        fn insert(&self, _values: &FieldValues) -> Result<Key, String> {
            self.calls.borrow_mut().push("insert");
            Ok(Key::new("new"))
        }

        fn update(&self, key: &Key, _values: &FieldValues) -> Result<(), String> {
            self.calls.borrow_mut().push("update");
            if key.as_str() == "missing" {
                return Err(format!("No record {key}"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_execute() {
        let table = Counter {
            calls: RefCell::new(Vec::new()),
        };

        let inserted = Submission::insert(FieldValues::with("a", "1")).execute(&table);
        assert_eq!(inserted, Ok(Key::new("new")));

        let updated = Submission::update(Key::new("k"), FieldValues::new()).execute(&table);
        assert_eq!(updated, Ok(Key::new("k")));

        let failed = Submission::update(Key::new("missing"), FieldValues::new()).execute(&table);
        assert_eq!(failed, Err("No record missing".to_string()));

        assert_eq!(*table.calls.borrow(), ["insert", "update", "update"]);
    }

    #[test]
    fn test_insert_element() {
        let submission = Submission::insert(FieldValues::new().set("a", "1").set_null("b"));
        assert_eq!(submission.key(), None);
        assert_eq!(
            xml::format(&submission.to_element(), false).unwrap(),
            r#"<insert xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><a>1</a><b xsi:nil="true"/></insert>"#
        );
    }

    #[test]
    fn test_update_element_skips_duplicate_sys_id() {
        let values = FieldValues::new().set("sys_id", "other").set("a", "1");
        let submission = Submission::update(Key::new("abc"), values);
        assert_eq!(
            xml::format(&submission.to_element(), false).unwrap(),
            "<update><sys_id>abc</sys_id><a>1</a></update>"
        );
    }
}
