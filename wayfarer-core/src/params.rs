//! Ordered route parameters.

use std::fmt;

/// An insertion-ordered mapping of parameter name to value.
///
/// Order is the order in which names were first inserted; inserting an
/// existing name replaces its value in place.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one if the name was present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) -> Option<String> {
        let name = name.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Params;
    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap,
    };
    use std::fmt;

    impl Serialize for Params {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, value) in self.iter() {
                map.serialize_entry(name, value)?;
            }
            map.end()
        }
    }

    struct ParamsVisitor;

    impl<'de> Visitor<'de> for ParamsVisitor {
        type Value = Params;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of parameter names to string values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Params, A::Error> {
            let mut params = Params::new();
            while let Some((name, value)) = access.next_entry::<String, String>()? {
                params.insert(name, value);
            }
            Ok(params)
        }
    }

    impl<'de> Deserialize<'de> for Params {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(ParamsVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let params = Params::new()
            .with("username", "Alice")
            .with("subpage", "posts")
            .with("postId", 7);
        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["username", "subpage", "postId"]);
        assert_eq!(params.get("postId"), Some("7"));
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut params = Params::from([("a", "1"), ("b", "2")]);
        assert_eq!(params.insert("a", "3"), Some("1".to_string()));
        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries, [("a", "3"), ("b", "2")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_order() {
        let params = Params::from([("z", "1"), ("a", "2")]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
        let back: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
