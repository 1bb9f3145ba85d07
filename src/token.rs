//! Pull-based JSON token streams.
//!
//! A [`TokenStream`] is positioned on the first token of the value to decode.
//! [`PeriodDecoder`](crate::PeriodDecoder) inspects the token kind and then reads
//! the scalar or materializes the whole value as a [`JsonNode`].
//!
//! JSON text is decoded through `serde_json` (see
//! [`PeriodDecoder::decode_str`](crate::PeriodDecoder::decode_str)); [`TreeStream`]
//! walks an already materialized node. Other sources implement the trait directly.

use crate::{Error, JsonNode, Number, Result};
use std::fmt;

/// The kind of the current JSON token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    /// An object key; the stream's text is the key.
    FieldName,
    String,
    /// An integer literal, whatever its size.
    Integer,
    Float,
    True,
    False,
    Null,
}

impl Token {
    /// Returns `true` for tokens that are a complete value on their own.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Token::String | Token::Integer | Token::Float | Token::True | Token::False | Token::Null
        )
    }

    /// Returns `true` for tokens that open an object or array.
    #[must_use]
    pub const fn is_container_start(self) -> bool {
        matches!(self, Token::StartObject | Token::StartArray)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::StartObject => "'{'",
            Token::EndObject => "'}'",
            Token::StartArray => "'['",
            Token::EndArray => "']'",
            Token::FieldName => "field name",
            Token::String => "string",
            Token::Integer => "integer number",
            Token::Float => "floating-point number",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes an optional token, naming the end of input when there is none.
#[must_use]
pub fn describe(token: Option<Token>) -> &'static str {
    token.map_or("end of input", Token::as_str)
}

/// A stream of JSON tokens positioned on the value being decoded.
pub trait TokenStream {
    /// The token the stream is positioned on, or `None` at end of input.
    fn current_token(&self) -> Option<Token>;

    /// The text of the current string or field-name token.
    ///
    /// # Errors
    ///
    /// Fails when the current token carries no text.
    fn text(&self) -> Result<&str>;

    /// The current integer token as an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MagnitudeOverflow`](crate::Error::MagnitudeOverflow) for integer
    /// literals outside the `i64` range, and an error for non-integer tokens.
    fn long_value(&self) -> Result<i64>;

    /// Materializes the value starting at the current token.
    ///
    /// On a [`Token::FieldName`] inside an object, the remaining fields of that object
    /// are read. Afterwards the stream is positioned on the value's last token.
    ///
    /// # Errors
    ///
    /// Fails on malformed input or when the current token does not start a value.
    fn read_value_as_tree(&mut self) -> Result<JsonNode>;

    /// Skips the children of the current object or array, leaving the stream on its
    /// closing token. Does nothing on any other token.
    ///
    /// # Errors
    ///
    /// Fails on malformed input.
    fn skip_children(&mut self) -> Result<()>;
}

/// A token stream over one already materialized node.
///
/// The stream is positioned on the node's first token from the start, which lets
/// values obtained elsewhere (for example from another serde format) go through the
/// same decoder as JSON text.
///
/// ```rust
/// use serde_period::{node, Token, TokenStream, TreeStream};
///
/// let tree = node!({ "days": 2 });
/// let mut stream = TreeStream::new(&tree);
/// assert_eq!(stream.current_token(), Some(Token::StartObject));
/// assert_eq!(stream.read_value_as_tree().unwrap(), tree);
/// ```
pub struct TreeStream<'a> {
    node: &'a JsonNode,
    field: Option<usize>,
    skipped: bool,
}

impl<'a> TreeStream<'a> {
    #[must_use]
    pub fn new(node: &'a JsonNode) -> Self {
        TreeStream {
            node,
            field: None,
            skipped: false,
        }
    }

    /// Positions a stream on the field `key` of `object`, as if the object's earlier
    /// fields had already been consumed.
    ///
    /// Returns `None` when `object` is not an object or has no such field.
    ///
    /// ```rust
    /// use serde_period::{node, Token, TokenStream, TreeStream};
    ///
    /// let tree = node!({ "a": 1, "b": 2, "c": 3 });
    /// let mut stream = TreeStream::at_field(&tree, "b").unwrap();
    /// assert_eq!(stream.current_token(), Some(Token::FieldName));
    /// assert_eq!(stream.text().unwrap(), "b");
    /// assert_eq!(stream.read_value_as_tree().unwrap(), node!({ "b": 2, "c": 3 }));
    /// ```
    #[must_use]
    pub fn at_field(object: &'a JsonNode, key: &str) -> Option<Self> {
        let index = object.as_object()?.keys().position(|k| k == key)?;
        Some(TreeStream {
            node: object,
            field: Some(index),
            skipped: false,
        })
    }

    fn field_key(&self) -> Option<&'a str> {
        let index = self.field?;
        let map = self.node.as_object()?;
        map.keys().nth(index).map(String::as_str)
    }
}

impl TokenStream for TreeStream<'_> {
    fn current_token(&self) -> Option<Token> {
        if self.field.is_some() {
            return Some(Token::FieldName);
        }
        match self.node {
            JsonNode::Array(_) if self.skipped => Some(Token::EndArray),
            JsonNode::Object(_) if self.skipped => Some(Token::EndObject),
            JsonNode::Null => Some(Token::Null),
            JsonNode::Bool(true) => Some(Token::True),
            JsonNode::Bool(false) => Some(Token::False),
            JsonNode::Number(n) if n.is_integer() => Some(Token::Integer),
            JsonNode::Number(_) => Some(Token::Float),
            JsonNode::String(_) => Some(Token::String),
            JsonNode::Array(_) => Some(Token::StartArray),
            JsonNode::Object(_) => Some(Token::StartObject),
            JsonNode::Missing => None,
        }
    }

    fn text(&self) -> Result<&str> {
        if let Some(key) = self.field_key() {
            return Ok(key);
        }
        self.node.as_str().ok_or_else(|| {
            Error::custom(format!(
                "Expected a string, found {}",
                describe(self.current_token())
            ))
        })
    }

    fn long_value(&self) -> Result<i64> {
        match (self.field, self.node) {
            (None, JsonNode::Number(Number::Integer(i))) => Ok(*i),
            (None, JsonNode::Number(Number::BigInt(i))) => Err(Error::magnitude_overflow(i)),
            _ => Err(Error::custom(format!(
                "Expected an integer, found {}",
                describe(self.current_token())
            ))),
        }
    }

    fn read_value_as_tree(&mut self) -> Result<JsonNode> {
        match (self.field.take(), self.node) {
            (Some(index), JsonNode::Object(map)) => {
                self.skipped = true;
                Ok(JsonNode::Object(
                    map.iter()
                        .skip(index)
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                ))
            }
            _ => {
                self.skipped = true;
                Ok(self.node.clone())
            }
        }
    }

    fn skip_children(&mut self) -> Result<()> {
        if self.current_token().is_some_and(Token::is_container_start) {
            self.skipped = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node;

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "end of input");
        assert_eq!(describe(Some(Token::True)), "true");
        assert_eq!(Token::StartArray.to_string(), "'['");
    }

    #[test]
    fn test_scalars() {
        assert!(Token::Float.is_scalar());
        assert!(!Token::FieldName.is_scalar());
        assert!(!Token::StartObject.is_scalar());
        assert!(Token::StartArray.is_container_start());
        assert!(!Token::EndArray.is_container_start());
    }

    #[test]
    fn test_tree_stream_tokens() {
        assert_eq!(TreeStream::new(&JsonNode::from(1)).current_token(), Some(Token::Integer));
        assert_eq!(TreeStream::new(&JsonNode::from(1.5)).current_token(), Some(Token::Float));
        assert_eq!(TreeStream::new(&JsonNode::Missing).current_token(), None);
        assert_eq!(TreeStream::new(&JsonNode::from("P1D")).text().unwrap(), "P1D");
    }

    #[test]
    fn test_tree_stream_long_value() {
        assert_eq!(TreeStream::new(&JsonNode::from(-9)).long_value().unwrap(), -9);
        assert!(matches!(
            TreeStream::new(&JsonNode::from(u64::MAX)).long_value(),
            Err(Error::MagnitudeOverflow { .. })
        ));
        assert!(TreeStream::new(&JsonNode::from("9")).long_value().is_err());
    }

    #[test]
    fn test_skip_children_moves_to_closing_token() {
        let tree = node!([1, [2, 3]]);
        let mut stream = TreeStream::new(&tree);
        stream.skip_children().unwrap();
        assert_eq!(stream.current_token(), Some(Token::EndArray));

        let tree = node!({ "a": 1 });
        let mut stream = TreeStream::new(&tree);
        stream.skip_children().unwrap();
        assert_eq!(stream.current_token(), Some(Token::EndObject));

        let scalar = JsonNode::from(true);
        let mut stream = TreeStream::new(&scalar);
        stream.skip_children().unwrap();
        assert_eq!(stream.current_token(), Some(Token::True));
    }

    #[test]
    fn test_at_field_reads_remaining_fields() {
        let tree = node!({ "x": 0, "periodType": { "name": "Days" }, "days": 2 });
        let mut stream = TreeStream::at_field(&tree, "periodType").unwrap();
        assert_eq!(stream.text().unwrap(), "periodType");
        assert!(stream.long_value().is_err());
        let rest = stream.read_value_as_tree().unwrap();
        assert!(rest.path("x").is_missing());
        assert_eq!(rest.path("days").as_i64(), Some(2));
        assert_eq!(stream.current_token(), Some(Token::EndObject));

        assert!(TreeStream::at_field(&tree, "nope").is_none());
        assert!(TreeStream::at_field(&JsonNode::from(1), "x").is_none());
    }
}
