//! A record returned by a query

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::Key;
use super::NameValueMap;
use super::parameters::NUMBER;
use super::parameters::SYS_ID;
use super::types::DateTime;
use super::types::parse_duration;
use crate::error::FieldError;
use crate::xml::Element;

/// A single record from a query result.
///
/// Fields are kept as the text the service returned, in response order.
/// The service sends an empty element for a null field, so typed getters
/// treat empty text as null.
///
/// # Example
///
/// ```
/// use servicenow_soap::model::Record;
/// use servicenow_soap::xml::Element;
///
/// let row = Element::parse(
///     "<getResponse><number>INC0010001</number><active>1</active><closed_at/></getResponse>",
/// )
/// .unwrap();
/// let record = Record::from_element(&row);
///
/// assert_eq!(record.number(), Some("INC0010001"));
/// assert_eq!(record.get_bool("active").unwrap(), Some(true));
/// assert_eq!(record.get_datetime("closed_at").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: NameValueMap<String>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a response element, one field per child element.
    pub fn from_element(element: &Element) -> Self {
        element
            .children()
            .map(|child| (child.name(), child.text()))
            .collect()
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns the raw text of a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in response order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Sets a field's text.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Returns the record's key, if the `sys_id` field is present and non-empty.
    pub fn sys_id(&self) -> Option<Key> {
        self.get(SYS_ID).filter(|s| !s.is_empty()).map(Key::from)
    }

    /// Returns the record's display number, if present.
    pub fn number(&self) -> Option<&str> {
        self.get(NUMBER)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if the field is missing or does not decode.
    // Return Ok(None) only if the field exists and is empty.
    // =========================================================================

    fn typed<T>(
        &self,
        field: &str,
        expected: &'static str,
        decode: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some("") => Ok(None),
            Some(s) => decode(s)
                .map(Some)
                .ok_or_else(|| FieldError::parse(field, expected, s)),
        }
    }

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some("") => Ok(None),
            Some(s) => Ok(Some(s)),
        }
    }

    /// Gets a boolean field value. Accepts `1`/`0` and `true`/`false`.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        self.typed(field, "bool", |s| match s {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        })
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        self.typed(field, "int", |s| s.parse().ok())
    }

    /// Gets a decimal field value.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        self.typed(field, "decimal", |s| s.parse().ok())
    }

    /// Gets a date-time field value (`YYYY-MM-DD HH:MM:SS`).
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime>, FieldError> {
        self.typed(field, "datetime", |s| s.parse().ok())
    }

    /// Gets a duration field value (`<days> <HH:MM:SS>`) in seconds.
    pub fn get_duration(&self, field: &str) -> Result<Option<u64>, FieldError> {
        self.typed(field, "duration", parse_duration)
    }

    /// Gets a reference field value as a record key.
    pub fn get_key(&self, field: &str) -> Result<Option<Key>, FieldError> {
        self.typed(field, "key", |s| Some(Key::from(s)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        [
            ("sys_id", "9d385017c611228701d22104cc95c371"),
            ("number", "INC0010001"),
            ("active", "true"),
            ("priority", "3"),
            ("cost", "12.50"),
            ("opened_at", "2024-02-29 08:00:00"),
            ("business_duration", "2 00:30:00"),
            ("assigned_to", ""),
            ("state", "new"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_typed_getters() {
        let r = sample();
        assert_eq!(r.get_bool("active").unwrap(), Some(true));
        assert_eq!(r.get_int("priority").unwrap(), Some(3));
        assert_eq!(r.get_decimal("cost").unwrap(), Some(Decimal::new(1250, 2)));
        assert_eq!(
            r.get_datetime("opened_at").unwrap().map(|d| d.to_string()),
            Some("2024-02-29 08:00:00".to_string())
        );
        assert_eq!(r.get_duration("business_duration").unwrap(), Some(2 * 86_400 + 1_800));
        assert_eq!(r.get_string("state").unwrap(), Some("new"));
    }

    #[test]
    fn test_empty_is_null() {
        let r = sample();
        assert_eq!(r.get_string("assigned_to").unwrap(), None);
        assert_eq!(r.get_key("assigned_to").unwrap(), None);
        assert_eq!(r.get_int("assigned_to").unwrap(), None);
    }

    #[test]
    fn test_missing_and_parse_errors() {
        let r = sample();
        assert_eq!(r.get_int("nope"), Err(FieldError::missing("nope")));
        assert_eq!(r.get_int("state"), Err(FieldError::parse("state", "int", "new")));
        assert_eq!(r.get_bool("state").unwrap_err().field(), "state");
    }

    #[test]
    fn test_oversized_duration_is_parse_error() {
        let row = Element::parse("<r><d>999999999999999 00:00:00</d></r>").unwrap();
        let record = Record::from_element(&row);
        assert_eq!(
            record.get_duration("d"),
            Err(FieldError::parse("d", "duration", "999999999999999 00:00:00"))
        );
    }

    #[test]
    fn test_identity_lookups() {
        let r = sample();
        assert!(r.sys_id().unwrap().is_sys_id());
        assert_eq!(r.number(), Some("INC0010001"));
        assert_eq!(Record::new().sys_id(), None);
    }

    #[test]
    fn test_from_element_keeps_order() {
        let row = Element::parse("<r><b>2</b><a>1</a><c/></r>").unwrap();
        let record = Record::from_element(&row);
        let fields: Vec<_> = record.fields().collect();
        assert_eq!(fields, [("b", "2"), ("a", "1"), ("c", "")]);
    }

    #[test]
    fn test_serde_keeps_order() {
        let record: Record = [("z", "1"), ("a", "2")].into_iter().collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);
    }
}
