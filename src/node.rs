//! Dynamic JSON document nodes.
//!
//! [`JsonNode`] is the materialized form of one JSON value. The decoder reads
//! unit-tagged period objects through it using safe navigation: [`JsonNode::path`]
//! never fails, it returns [`JsonNode::Missing`] for absent keys, and the accessors
//! on a missing node yield empty defaults.
//!
//! ## Examples
//!
//! ```rust
//! use serde_period::{node, JsonNode};
//!
//! let tree = node!({
//!     "periodType": { "name": "Hours" },
//!     "hours": 7
//! });
//!
//! assert_eq!(tree.path("periodType").path("name").as_text(), "Hours");
//! assert_eq!(tree.path("fieldType").path("name").as_text(), "");
//! assert_eq!(tree.path("hours").as_int().unwrap(), 7);
//! assert!(tree.path("minutes").is_missing());
//! ```

use crate::{Error, NodeMap, Result};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer};
use std::fmt;

static MISSING: JsonNode = JsonNode::Missing;

/// A dynamically-typed JSON value.
///
/// `Missing` is never produced by parsing; it stands for "no such path".
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonNode {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonNode>),
    Object(NodeMap),
    Missing,
}

/// A JSON number.
///
/// Integers that do not fit an `i64` (from `u64` or 128-bit values) are kept as
/// [`Number::BigInt`] so the decoder can report them as overflowing instead of
/// losing precision.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    BigInt(BigInt),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInt(_))
    }

    /// Converts this number to an `i64` if it is an integer in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::BigInt(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl JsonNode {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonNode::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, JsonNode::Missing)
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonNode::Object(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonNode::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonNode::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&NodeMap> {
        match self {
            JsonNode::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the child at `key`, or [`JsonNode::Missing`] if this is not an object
    /// or has no such key. Chains freely: `node.path("a").path("b")`.
    #[must_use]
    pub fn path(&self, key: &str) -> &JsonNode {
        match self {
            JsonNode::Object(map) => map.get(key).unwrap_or(&MISSING),
            _ => &MISSING,
        }
    }

    /// Returns the node's scalar text.
    ///
    /// Strings yield their content, numbers and booleans their JSON text and null
    /// yields `"null"`. Containers and missing nodes yield an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::JsonNode;
    ///
    /// assert_eq!(JsonNode::from("Days").as_text(), "Days");
    /// assert_eq!(JsonNode::from(12).as_text(), "12");
    /// assert_eq!(JsonNode::Missing.as_text(), "");
    /// ```
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            JsonNode::String(s) => s.clone(),
            JsonNode::Number(n) => n.to_string(),
            JsonNode::Bool(b) => b.to_string(),
            JsonNode::Null => "null".to_string(),
            JsonNode::Array(_) | JsonNode::Object(_) | JsonNode::Missing => String::new(),
        }
    }

    /// Reads the node as a 32-bit magnitude.
    ///
    /// Integers are used as-is, floats are truncated toward zero and numeric text is
    /// parsed. Every other node, including a missing one, reads as zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MagnitudeOverflow`] when a numeric node does not fit in an `i32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::JsonNode;
    ///
    /// assert_eq!(JsonNode::from(7).as_int().unwrap(), 7);
    /// assert_eq!(JsonNode::from(7.9).as_int().unwrap(), 7);
    /// assert_eq!(JsonNode::from("7").as_int().unwrap(), 7);
    /// assert_eq!(JsonNode::from("seven").as_int().unwrap(), 0);
    /// assert_eq!(JsonNode::Missing.as_int().unwrap(), 0);
    /// assert!(JsonNode::from(i64::MAX).as_int().is_err());
    /// ```
    pub fn as_int(&self) -> Result<i32> {
        match self {
            JsonNode::Number(Number::Integer(i)) => {
                i32::try_from(*i).map_err(|_| Error::magnitude_overflow(i))
            }
            JsonNode::Number(Number::BigInt(i)) => Err(Error::magnitude_overflow(i)),
            JsonNode::Number(Number::Float(x)) => {
                let truncated = x.trunc();
                if truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX) {
                    Ok(truncated as i32)
                } else {
                    Err(Error::magnitude_overflow(x))
                }
            }
            JsonNode::String(s) => Ok(s.trim().parse().unwrap_or(0)),
            _ => Ok(0),
        }
    }
}

impl From<bool> for JsonNode {
    fn from(value: bool) -> Self {
        JsonNode::Bool(value)
    }
}

impl From<i32> for JsonNode {
    fn from(value: i32) -> Self {
        JsonNode::Number(Number::Integer(i64::from(value)))
    }
}

impl From<i64> for JsonNode {
    fn from(value: i64) -> Self {
        JsonNode::Number(Number::Integer(value))
    }
}

impl From<u64> for JsonNode {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => JsonNode::Number(Number::Integer(i)),
            Err(_) => JsonNode::Number(Number::BigInt(BigInt::from(value))),
        }
    }
}

impl From<f64> for JsonNode {
    fn from(value: f64) -> Self {
        JsonNode::Number(Number::Float(value))
    }
}

impl From<&str> for JsonNode {
    fn from(value: &str) -> Self {
        JsonNode::String(value.to_string())
    }
}

impl From<String> for JsonNode {
    fn from(value: String) -> Self {
        JsonNode::String(value)
    }
}

impl From<Vec<JsonNode>> for JsonNode {
    fn from(value: Vec<JsonNode>) -> Self {
        JsonNode::Array(value)
    }
}

impl From<NodeMap> for JsonNode {
    fn from(value: NodeMap) -> Self {
        JsonNode::Object(value)
    }
}

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonNodeVisitor;

        impl<'de> Visitor<'de> for JsonNodeVisitor {
            type Value = JsonNode;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> std::result::Result<Self::Value, E> {
                Ok(match i64::try_from(value) {
                    Ok(i) => JsonNode::from(i),
                    Err(_) => JsonNode::Number(Number::BigInt(BigInt::from(value))),
                })
            }

            fn visit_u128<E>(self, value: u128) -> std::result::Result<Self::Value, E> {
                Ok(match i64::try_from(value) {
                    Ok(i) => JsonNode::from(i),
                    Err(_) => JsonNode::Number(Number::BigInt(BigInt::from(value))),
                })
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::from(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::from(value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(JsonNode::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JsonNode::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = NodeMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JsonNode::Object(values))
            }
        }

        deserializer.deserialize_any(JsonNodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_through_non_object() {
        let node = JsonNode::from(3);
        assert!(node.path("a").is_missing());
        assert!(node.path("a").path("b").is_missing());
    }

    #[test]
    fn test_as_text_of_containers() {
        assert_eq!(JsonNode::Array(vec![]).as_text(), "");
        assert_eq!(JsonNode::Object(NodeMap::new()).as_text(), "");
        assert_eq!(JsonNode::Null.as_text(), "null");
        assert_eq!(JsonNode::Bool(true).as_text(), "true");
    }

    #[test]
    fn test_as_int_of_non_numeric() {
        assert_eq!(JsonNode::Bool(true).as_int().unwrap(), 0);
        assert_eq!(JsonNode::Null.as_int().unwrap(), 0);
        assert_eq!(JsonNode::Array(vec![JsonNode::from(1)]).as_int().unwrap(), 0);
    }

    #[test]
    fn test_as_int_bounds() {
        assert_eq!(JsonNode::from(i64::from(i32::MIN)).as_int().unwrap(), i32::MIN);
        assert_eq!(JsonNode::from(-3.7).as_int().unwrap(), -3);
        assert!(matches!(
            JsonNode::from(u64::MAX).as_int(),
            Err(Error::MagnitudeOverflow { .. })
        ));
        assert!(JsonNode::from(1e12).as_int().is_err());
    }

    #[test]
    fn test_big_unsigned_kept_exact() {
        match JsonNode::from(u64::MAX) {
            JsonNode::Number(Number::BigInt(n)) => assert_eq!(n.to_string(), "18446744073709551615"),
            other => panic!("expected big integer, got {other:?}"),
        }
    }
}
