//! Insertion-ordered name/value map

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// An insertion-ordered map from field or parameter name to a value.
///
/// Setting an existing name overwrites its value in place, so a name keeps
/// the position of its first insertion. Order matters: it is the order in
/// which fields are serialized for the remote service.
///
/// # Example
///
/// ```
/// use servicenow_soap::model::NameValueMap;
///
/// let mut map = NameValueMap::new();
/// map.set("b", 1);
/// map.set("a", 2);
/// map.set("b", 3);
///
/// let names: Vec<_> = map.names().collect();
/// assert_eq!(names, ["b", "a"]);
/// assert_eq!(map.get("b"), Some(&3));
/// ```
///
/// Two maps are equal only when they hold the same entries in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameValueMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> NameValueMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a map holding a single entry.
    pub fn with(name: impl Into<String>, value: V) -> Self {
        let mut map = Self::new();
        map.set(name, value);
        map
    }

    /// Inserts or overwrites a value. Returns the previous value, if any.
    pub fn set(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(name.into(), value)
    }

    /// Removes a name, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.entries.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<V: Clone> NameValueMap<V> {
    /// Copies every entry of `other` into this map.
    ///
    /// Names already present keep their position and take the new value;
    /// new names are appended in `other`'s order. An empty `other` leaves
    /// this map unchanged.
    pub fn merge(&mut self, other: &NameValueMap<V>) {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
    }
}

impl<V: PartialEq> PartialEq for NameValueMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<V: Eq> Eq for NameValueMap<V> {}

impl<V> Default for NameValueMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for NameValueMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for NameValueMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
