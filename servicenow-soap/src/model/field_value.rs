//! Coerced field value for writes

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::Key;
use super::types::DateTime;

/// A value destined for a remote insert or update.
///
/// Every typed input is coerced to text when it is set; the only other state
/// is an explicit null, which asks the service to clear the field. An absent
/// field, by contrast, is left untouched.
///
/// # Coercions
///
/// | Input | Stored |
/// |-------|--------|
/// | `&str`, `String` | as is |
/// | `bool` | `"1"` / `"0"` |
/// | integers, `Decimal` | decimal text |
/// | [`DateTime`], `chrono::DateTime<Utc>` | `YYYY-MM-DD HH:MM:SS` |
/// | [`Key`] | the key text |
/// | `None` | `Null` |
///
/// # Example
///
/// ```
/// use servicenow_soap::model::FieldValue;
///
/// assert_eq!(FieldValue::from(true), FieldValue::Text("1".into()));
/// assert_eq!(FieldValue::from(42), FieldValue::Text("42".into()));
/// assert_eq!(FieldValue::from(None::<i32>), FieldValue::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null: clear the field.
    #[default]
    Null,
    /// Text value.
    Text(String),
}

impl FieldValue {
    /// Returns `true` if this is the explicit null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the text, or `None` for null.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(s),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(v: &String) -> Self {
        FieldValue::Text(v.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Text(if v { "1" } else { "0" }.to_string())
    }
}

macro_rules! from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    FieldValue::Text(v.to_string())
                }
            }
        )*
    };
}

from_display!(i32, i64, u32, u64, Decimal, DateTime);

impl From<chrono::DateTime<Utc>> for FieldValue {
    fn from(v: chrono::DateTime<Utc>) -> Self {
        DateTime::new(v).into()
    }
}

impl From<Key> for FieldValue {
    fn from(v: Key) -> Self {
        FieldValue::Text(v.into_string())
    }
}

impl From<&Key> for FieldValue {
    fn from(v: &Key) -> Self {
        FieldValue::Text(v.as_str().to_string())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => FieldValue::Null,
        }
    }
}
