//! Record identifier

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The unique identifier (`sys_id`) of a single remote record.
///
/// Keys are opaque strings. The service issues them as 32 lowercase hex
/// digits, which is the "simple" form of a UUID.
///
/// # Example
///
/// ```
/// use servicenow_soap::model::Key;
/// use uuid::Uuid;
///
/// let key = Key::new("9d385017c611228701d22104cc95c371");
/// assert!(key.is_sys_id());
///
/// let generated = Key::from(Uuid::new_v4());
/// assert_eq!(generated.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the key has the shape of a `sys_id`: 32 hex digits.
    pub fn is_sys_id(&self) -> bool {
        self.0.len() == 32 && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<Uuid> for Key {
    fn from(v: Uuid) -> Self {
        Self(v.simple().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sys_id_shape() {
        assert!(Key::new("0123456789abcdef0123456789ABCDEF").is_sys_id());
        assert!(!Key::new("INC0010001").is_sys_id());
        assert!(!Key::new("").is_sys_id());
    }

    #[test]
    fn test_from_uuid_is_simple_form() {
        let id = Uuid::nil();
        assert_eq!(Key::from(id).as_str(), "00000000000000000000000000000000");
    }

    #[test]
    fn test_ordering_and_display() {
        let a = Key::from("a");
        let b = Key::from("b");
        assert!(a < b);
        assert_eq!(b.to_string(), "b");
    }
}
