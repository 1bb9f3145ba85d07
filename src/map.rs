//! Ordered map type for JSON objects.
//!
//! [`NodeMap`] wraps an [`IndexMap`] so object fields keep the order they were read
//! in. Lookups are by exact key.
//!
//! ## Examples
//!
//! ```rust
//! use serde_period::{JsonNode, NodeMap};
//!
//! let mut map = NodeMap::new();
//! map.insert("hours".to_string(), JsonNode::from(7));
//!
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("hours").and_then(|v| v.as_i64()), Some(7));
//! ```

use crate::JsonNode;
use indexmap::IndexMap;

/// An ordered map of string keys to JSON nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMap(IndexMap<String, JsonNode>);

impl NodeMap {
    /// Creates an empty `NodeMap`.
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    /// Creates an empty `NodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the key
    /// keeps its original position. JSON objects with duplicate keys therefore
    /// resolve to the last value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::{JsonNode, NodeMap};
    ///
    /// let mut map = NodeMap::new();
    /// assert!(map.insert("key".to_string(), JsonNode::from(1)).is_none());
    /// assert!(map.insert("key".to_string(), JsonNode::from(2)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: JsonNode) -> Option<JsonNode> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonNode> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, JsonNode> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonNode> {
        self.0.iter()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, JsonNode);
    type IntoIter = indexmap::map::IntoIter<String, JsonNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, JsonNode)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (String, JsonNode)>>(iter: T) -> Self {
        NodeMap(IndexMap::from_iter(iter))
    }
}
