//! Request parameters

use serde::Deserialize;
use serde::Serialize;

use super::Key;
use super::NameValueMap;
use crate::xml::Element;

/// Reserved field holding a record's identifier.
pub const SYS_ID: &str = "sys_id";

/// Reserved field holding a record's display number (e.g. `INC0010001`).
pub const NUMBER: &str = "number";

/// An ordered list of name/value pairs sent with a request.
///
/// # Example
///
/// ```
/// use servicenow_soap::model::Parameters;
///
/// let mut params = Parameters::with("sys_id", "9d385017c611228701d22104cc95c371");
/// params.set("active", "true");
///
/// assert_eq!(params.sys_id().unwrap().as_str(), "9d385017c611228701d22104cc95c371");
/// assert_eq!(params.number(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    params: NameValueMap<String>,
}

impl Parameters {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parameter list holding a single pair.
    pub fn with(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            params: NameValueMap::with(name, value.into()),
        }
    }

    /// Adds or replaces a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.set(name, value.into());
    }

    /// Adds every parameter of `other`, replacing values for names already
    /// present. New names are appended in `other`'s order.
    pub fn merge(&mut self, other: &Parameters) {
        self.params.merge(&other.params);
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.params.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Returns the record key stored under `sys_id`, if set.
    pub fn sys_id(&self) -> Option<Key> {
        self.get(SYS_ID).map(Key::from)
    }

    /// Returns the display number stored under `number`, if set.
    pub fn number(&self) -> Option<&str> {
        self.get(NUMBER)
    }

    /// Appends one `<name>value</name>` child per parameter to `parent`.
    pub fn append_to(&self, parent: &mut Element) {
        for (name, value) in self.iter() {
            parent.push_child(Element::new(name).with_text(value));
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}
