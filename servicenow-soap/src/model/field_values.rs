//! Field values for inserting or updating records

use serde::Deserialize;
use serde::Serialize;

use super::FieldValue;
use super::Key;
use super::NameValueMap;
use super::types::format_duration;
use crate::api::Table;
use crate::error::ValueError;
use crate::xml::Element;

/// Attribute marking an explicitly null field in a request.
pub const NIL_ATTRIBUTE: &str = "xsi:nil";

/// Namespace bound to the `xsi` prefix used by [`NIL_ATTRIBUTE`].
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// An ordered set of field values used to insert or update a record.
///
/// Setters coerce their input to text (see [`FieldValue`]) and return the
/// map so calls can be chained. Fields are sent in the order they were
/// first set.
///
/// # Example
///
/// ```
/// use servicenow_soap::model::FieldValues;
///
/// let values = FieldValues::new()
///     .set("short_description", "Printer on fire")
///     .set("active", true)
///     .set("priority", 1)
///     .set_null("assigned_to");
///
/// assert_eq!(values.get_str("active"), Some("1"));
/// assert!(values.get("assigned_to").unwrap().is_null());
/// assert!(values.get("caller_id").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: NameValueMap<FieldValue>,
}

impl FieldValues {
    /// Creates an empty set of field values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates field values holding a single entry.
    pub fn with(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new().set(name, value)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.put(name, value);
        self
    }

    /// Sets a field value in place.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.set(name, value.into());
    }

    /// Sets a field to the explicit null marker, asking the service to clear it.
    pub fn set_null(self, name: impl Into<String>) -> Self {
        self.set(name, FieldValue::Null)
    }

    /// Sets a duration field from a number of seconds.
    ///
    /// The value is stored as `<days> <HH:MM:SS>`. `None` is the same as
    /// [`set_null`](Self::set_null). Negative durations are rejected.
    ///
    /// ```
    /// use servicenow_soap::model::FieldValues;
    ///
    /// let values = FieldValues::new().set_duration("business_duration", Some(90061)).unwrap();
    /// assert_eq!(values.get_str("business_duration"), Some("1 01:01:01"));
    /// ```
    pub fn set_duration(mut self, name: impl Into<String>, seconds: Option<i64>) -> Result<Self, ValueError> {
        self.put_duration(name, seconds)?;
        Ok(self)
    }

    /// Sets a duration field in place. On error the map is unchanged.
    pub fn put_duration(&mut self, name: impl Into<String>, seconds: Option<i64>) -> Result<(), ValueError> {
        let name = name.into();
        let value = match seconds {
            None => FieldValue::Null,
            Some(s) => {
                let s = u64::try_from(s).map_err(|_| ValueError::negative_duration(name.as_str(), s))?;
                FieldValue::Text(format_duration(s))
            }
        };
        self.put(name, value);
        Ok(())
    }

    /// Copies every entry of `other` into this set (builder pattern).
    ///
    /// Nulls in `other` stay null. Existing names keep their position.
    pub fn set_all(mut self, other: &FieldValues) -> Self {
        self.values.merge(&other.values);
        self
    }

    /// Removes a field so that it is not sent at all.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the value of a field: `None` if absent, `Some(FieldValue::Null)`
    /// if explicitly null.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Returns the text of a field, or `None` if absent or null.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over fields in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Appends one child element per field to `parent`.
    ///
    /// Text values become `<name>text</name>`. Nulls become
    /// `<name xsi:nil="true"/>` so the service clears the field, and
    /// `parent` gets an `xmlns:xsi` declaration for the prefix.
    pub fn append_to(&self, parent: &mut Element) {
        for (name, value) in self.iter() {
            let child = match value {
                FieldValue::Text(text) => Element::new(name).with_text(text.as_str()),
                FieldValue::Null => {
                    parent.set_attribute("xmlns:xsi", XSI_NAMESPACE);
                    Element::new(name).with_attribute(NIL_ATTRIBUTE, "true")
                }
            };
            parent.push_child(child);
        }
    }

    /// Builds a request element named `name` holding every field.
    pub fn to_element(&self, name: impl Into<String>) -> Element {
        let mut element = Element::new(name);
        self.append_to(&mut element);
        element
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Updates the record identified by `key` with these values.
    ///
    /// Errors from the table are returned unchanged.
    pub fn update<T: Table + ?Sized>(&self, table: &T, key: &Key) -> Result<(), T::Error> {
        log::debug!("Updating {} {} ({} fields)", table.name(), key, self.len());
        table.update(key, self)
    }

    /// Inserts a new record with these values and returns its key.
    ///
    /// Errors from the table are returned unchanged.
    pub fn insert<T: Table + ?Sized>(&self, table: &T) -> Result<Key, T::Error> {
        log::debug!("Inserting into {} ({} fields)", table.name(), self.len());
        let key = table.insert(self)?;
        log::debug!("Inserted {} {}", table.name(), key);
        Ok(key)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.put(name, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::xml;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_typed_setters() {
        let values = FieldValues::new()
            .set("name", "disk")
            .set("active", false)
            .set("count", 12)
            .set("big", 9_000_000_000i64);

        assert_eq!(values.get("name"), Some(&text("disk")));
        assert_eq!(values.get("active"), Some(&text("0")));
        assert_eq!(values.get("count"), Some(&text("12")));
        assert_eq!(values.get("big"), Some(&text("9000000000")));
    }

    #[test]
    fn test_last_set_wins_first_position_kept() {
        let values = FieldValues::new()
            .set("a", 1)
            .set("b", 2)
            .set("a", 3);

        let entries: Vec<_> = values.iter().collect();
        assert_eq!(entries, [("a", &text("3")), ("b", &text("2"))]);
    }

    #[test]
    fn test_set_duration() {
        let values = FieldValues::new()
            .set_duration("d", Some(90_061))
            .unwrap()
            .set_duration("zero", Some(0))
            .unwrap();
        assert_eq!(values.get_str("d"), Some("1 01:01:01"));
        assert_eq!(values.get_str("zero"), Some("0 00:00:00"));
    }

    #[test]
    fn test_set_duration_none_is_null() {
        let a = FieldValues::new().set_duration("d", None).unwrap();
        let b = FieldValues::new().set_null("d");
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_duration_negative_rejected() {
        let err = FieldValues::new().set_duration("d", Some(-1)).unwrap_err();
        assert_eq!(err, ValueError::negative_duration("d", -1));

        let mut values = FieldValues::with("d", "keep");
        assert!(values.put_duration("d", Some(-86_400)).is_err());
        assert_eq!(values.get_str("d"), Some("keep"));
    }

    #[test]
    fn test_null_differs_from_absent() {
        let values = FieldValues::new().set_null("x");
        assert!(values.contains("x"));
        assert_eq!(values.get("x"), Some(&FieldValue::Null));
        assert_eq!(values.get_str("x"), None);
        assert_eq!(values.get("y"), None);
    }

    #[test]
    fn test_set_all_propagates_null() {
        let source = FieldValues::new().set("b", "new").set_null("c");
        let values = FieldValues::new().set("a", "1").set("b", "old").set_all(&source);

        let entries: Vec<_> = values.iter().collect();
        assert_eq!(
            entries,
            [("a", &text("1")), ("b", &text("new")), ("c", &FieldValue::Null)]
        );
    }

    #[test]
    fn test_set_all_empty_is_noop() {
        let values = FieldValues::with("a", "1");
        assert_eq!(values.clone().set_all(&FieldValues::new()), values);
    }

    #[test]
    fn test_to_element() {
        let values = FieldValues::new()
            .set("short_description", "a & b")
            .set_null("assigned_to")
            .set("comments", "");

        let element = values.to_element("insert");
        assert_eq!(
            xml::format(&element, false).unwrap(),
            r#"<insert xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><short_description>a &amp; b</short_description><assigned_to xsi:nil="true"/><comments></comments></insert>"#
        );
    }

    #[test]
    fn test_xsi_declared_once_and_only_for_nulls() {
        let values = FieldValues::new().set_null("a").set_null("b");
        let element = values.to_element("update");
        assert_eq!(element.attributes(), [("xmlns:xsi".to_string(), XSI_NAMESPACE.to_string())]);

        let parsed = Element::parse(&xml::format(&element, false).unwrap()).unwrap();
        assert_eq!(parsed.attribute("xmlns:xsi"), Some(XSI_NAMESPACE));
        assert_eq!(parsed.child("b").and_then(|b| b.attribute(NIL_ATTRIBUTE)), Some("true"));

        let plain = FieldValues::with("a", "1").to_element("update");
        assert!(plain.attributes().is_empty());
    }

    struct MockTable {
        inserted: RefCell<Vec<FieldValues>>,
        updated: RefCell<Vec<(Key, FieldValues)>>,
        fail: bool,
    }

    #[derive(Debug, PartialEq)]
    struct MockError(&'static str);

    impl MockTable {
        fn new(fail: bool) -> Self {
            Self {
                inserted: RefCell::new(Vec::new()),
                updated: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl Table for MockTable {
        type Error = MockError;

        fn name(&self) -> &str {
            "incident"
        }

        fn insert(&self, values: &FieldValues) -> Result<Key, MockError> {
            if self.fail {
                return Err(MockError("insert refused"));
            }
            self.inserted.borrow_mut().push(values.clone());
            Ok(Key::new("0123456789abcdef0123456789abcdef"))
        }

        fn update(&self, key: &Key, values: &FieldValues) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError("update refused"));
            }
            self.updated.borrow_mut().push((key.clone(), values.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_insert_and_update_delegate() {
        let table = MockTable::new(false);
        let values = FieldValues::with("short_description", "hello");

        let key = values.insert(&table).unwrap();
        assert!(key.is_sys_id());
        assert_eq!(table.inserted.borrow().as_slice(), [values.clone()]);

        values.update(&table, &key).unwrap();
        assert_eq!(table.updated.borrow().as_slice(), [(key, values)]);
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let table = MockTable::new(true);
        let values = FieldValues::with("a", "b");

        assert_eq!(values.insert(&table), Err(MockError("insert refused")));
        assert_eq!(
            values.update(&table, &Key::new("k")),
            Err(MockError("update refused"))
        );
    }
}
