//! Serde support.
//!
//! [`PeriodValue`] and [`Period`] implement [`Deserialize`], so they can be used as
//! fields of any `#[derive(Deserialize)]` type with any self-describing format:
//!
//! - `PeriodValue` keeps the unit the input named (`5` becomes `Seconds(5)`)
//! - `Period` always holds the composite form
//!
//! Neither accepts a blank string, because a non-optional field has nothing to
//! return for it. Use the helpers in [`option`] for fields where blank means absent.
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_period::{Period, PeriodValue};
//!
//! #[derive(Deserialize)]
//! struct Job {
//!     timeout: PeriodValue,
//!     retention: Period,
//! }
//!
//! let job: Job = serde_json::from_str(r#"{
//!     "timeout": 30,
//!     "retention": {"periodType":{"name":"Days"},"fieldType":{"name":"days"},"days":7}
//! }"#).unwrap();
//!
//! assert_eq!(job.timeout, PeriodValue::Seconds(30));
//! assert_eq!(job.retention, Period::days(7));
//! ```

use crate::decoder::EXPECTED_TOKENS;
use crate::{
    DecodeContext, DecoderOptions, Error, JsonNode, Period, PeriodDecoder, PeriodValue, Result,
    Token,
};
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, IgnoredAny, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A serde visitor that decodes periods with a [`PeriodDecoder`].
///
/// The visitor's value is the decoding outcome. Errors raised by the data format
/// surface as the format's own error type; decoding errors are returned inside the
/// value so their [`Error`] variant survives any format.
pub struct PeriodVisitor<'a, C> {
    decoder: &'a PeriodDecoder<C>,
}

impl<'a, C: DecodeContext> PeriodVisitor<'a, C> {
    #[must_use]
    pub fn new(decoder: &'a PeriodDecoder<C>) -> Self {
        PeriodVisitor { decoder }
    }

    fn unexpected(&self, token: Token) -> Result<Option<PeriodValue>> {
        self.decoder.context().handle_unexpected_token(
            self.decoder.handled_type(),
            Some(token),
            EXPECTED_TOKENS,
        )
    }

    fn seconds<T>(&self, value: T) -> Result<Option<PeriodValue>>
    where
        T: Copy + fmt::Display + TryInto<i64>,
    {
        let seconds = value
            .try_into()
            .map_err(|_| Error::magnitude_overflow(value))?;
        self.decoder.decode_seconds(seconds).map(Some)
    }
}

/// Formats without arbitrary precision hand over integer literals outside the
/// `i64`/`u64` ranges as floats. Integral floats at or past the `i64` bounds are
/// read as such literals.
fn is_overflowed_integer(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && (value >= i64::MAX as f64 || value <= i64::MIN as f64)
}

impl<'de, C: DecodeContext> Visitor<'de> for PeriodVisitor<'_, C> {
    type Value = Result<Option<PeriodValue>>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ISO-8601 period string, a number of seconds or a unit-tagged object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
        Ok(self.decoder.decode_text(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
        Ok(self.seconds(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
        Ok(self.seconds(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> std::result::Result<Self::Value, E> {
        Ok(self.seconds(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> std::result::Result<Self::Value, E> {
        Ok(self.seconds(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
        if is_overflowed_integer(value) {
            return Ok(Err(Error::magnitude_overflow(value)));
        }
        Ok(self.unexpected(Token::Float))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Self::Value, E> {
        Ok(self.unexpected(if value { Token::True } else { Token::False }))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(self.unexpected(Token::Null))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        // drain so a substituted value leaves the input consistent
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(self.unexpected(Token::StartArray))
    }

    fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let tree = JsonNode::deserialize(MapAccessDeserializer::new(map))?;
        Ok(self.decoder.decode_tree(&tree))
    }
}

impl<C: DecodeContext> PeriodDecoder<C> {
    /// Decodes the next value of any self-describing serde format.
    ///
    /// The outer result carries the format's errors (syntax, I/O, nesting limits);
    /// the inner one is the decoding outcome, as from [`PeriodDecoder::decode`].
    ///
    /// ```rust
    /// use serde_period::{DecoderOptions, PeriodDecoder, PeriodValue};
    ///
    /// let decoder = PeriodDecoder::new(DecoderOptions::single_unit());
    /// let mut json = serde_json::Deserializer::from_str("[1]");
    /// let outcome = decoder.decode_deserializer(&mut json).unwrap();
    /// assert!(outcome.is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error when the input is not well formed.
    pub fn decode_deserializer<'de, D>(
        &self,
        deserializer: D,
    ) -> std::result::Result<Result<Option<PeriodValue>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PeriodVisitor::new(self))
    }
}

fn deserialize_with_options<'de, D>(
    deserializer: D,
    options: DecoderOptions,
) -> std::result::Result<Option<PeriodValue>, D::Error>
where
    D: Deserializer<'de>,
{
    PeriodDecoder::new(options)
        .decode_deserializer(deserializer)?
        .map_err(de::Error::custom)
}

fn blank<E: de::Error>() -> E {
    E::invalid_value(Unexpected::Str(""), &"a non-blank period")
}

impl<'de> Deserialize<'de> for PeriodValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_with_options(deserializer, DecoderOptions::single_unit())?.ok_or_else(blank)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_with_options(deserializer, DecoderOptions::composite())?
            .map(Period::from)
            .ok_or_else(blank)
    }
}

/// `deserialize_with` helpers for optional period fields.
///
/// Blank strings and JSON `null` both become `None`.
///
/// ```rust
/// use serde::Deserialize;
/// use serde_period::{Period, PeriodValue};
///
/// #[derive(Deserialize)]
/// struct Settings {
///     #[serde(default, deserialize_with = "serde_period::de::option::period")]
///     grace: Option<Period>,
///     #[serde(default, deserialize_with = "serde_period::de::option::value")]
///     retry: Option<PeriodValue>,
/// }
///
/// let settings: Settings = serde_json::from_str(r#"{"grace": "  ", "retry": 5}"#).unwrap();
/// assert_eq!(settings.grace, None);
/// assert_eq!(settings.retry, Some(PeriodValue::Seconds(5)));
/// ```
pub mod option {
    use super::deserialize_with_options;
    use crate::{DecoderOptions, Period, PeriodValue};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(transparent)]
    struct Wrapped(#[serde(deserialize_with = "single_unit")] Option<PeriodValue>);

    fn single_unit<'de, D>(deserializer: D) -> Result<Option<PeriodValue>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_with_options(deserializer, DecoderOptions::single_unit())
    }

    /// Deserializes an optional single-unit [`PeriodValue`].
    pub fn value<'de, D>(deserializer: D) -> Result<Option<PeriodValue>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wrapped: Option<Wrapped> = Option::deserialize(deserializer)?;
        Ok(wrapped.and_then(|Wrapped(value)| value))
    }

    /// Deserializes an optional composite [`Period`].
    pub fn period<'de, D>(deserializer: D) -> Result<Option<Period>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(value(deserializer)?.map(Period::from))
    }
}
