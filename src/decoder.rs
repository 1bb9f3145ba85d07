//! Period decoding.
//!
//! [`PeriodDecoder`] turns one JSON value into a [`PeriodValue`]. The value's shape
//! is decided by its first token:
//!
//! | Token | Interpretation |
//! |---|---|
//! | string | ISO-8601 period text; blank text means no value |
//! | integer | a number of seconds |
//! | object (or a field name inside one) | a unit-tagged object |
//! | anything else | handed to the [`DecodeContext`] |
//!
//! Unit-tagged objects look like
//! `{"periodType":{"name":"Hours"},"fieldType":{"name":"hours"},"hours":7}`:
//! `periodType.name` picks the unit and `fieldType.name` names the sibling key that
//! holds the magnitude. Absent paths read as an empty name or a zero magnitude.
//!
//! ## Examples
//!
//! ```rust
//! use serde_period::{node, DecoderOptions, Period, PeriodDecoder, PeriodValue, TreeStream};
//!
//! let decoder = PeriodDecoder::new(DecoderOptions::single_unit());
//!
//! assert_eq!(decoder.decode_str("90").unwrap(), Some(PeriodValue::Seconds(90)));
//! assert_eq!(
//!     decoder.decode_str(r#""P1DT2H""#).unwrap(),
//!     Some(PeriodValue::Composite(Period { days: 1, hours: 2, ..Period::ZERO }))
//! );
//!
//! let tree = node!({ "periodType": { "name": "Days" }, "fieldType": { "name": "days" }, "days": 3 });
//! assert_eq!(
//!     decoder.decode(&mut TreeStream::new(&tree)).unwrap(),
//!     Some(PeriodValue::Days(3))
//! );
//! ```

use crate::{
    iso, DecodeContext, DecoderOptions, Error, JsonNode, PeriodUnit, PeriodValue, Result,
    StrictContext, Token, TokenStream,
};
use tracing::{debug, trace};

/// Token kinds the decoder accepts, as reported to [`DecodeContext`].
pub const EXPECTED_TOKENS: &str = "Number, String, or Object";

/// Decodes JSON values into periods.
///
/// A decoder holds only its options and context. It is immutable, so one instance
/// can serve any number of threads when its context is `Sync`.
#[derive(Clone, Debug, Default)]
pub struct PeriodDecoder<C = StrictContext> {
    options: DecoderOptions,
    context: C,
}

impl PeriodDecoder {
    /// Creates a decoder that raises on every mismatch.
    #[must_use]
    pub fn new(options: DecoderOptions) -> Self {
        PeriodDecoder {
            options,
            context: StrictContext,
        }
    }
}

impl<C: DecodeContext> PeriodDecoder<C> {
    /// Creates a decoder that reports mismatches to `context`.
    #[must_use]
    pub fn with_context(options: DecoderOptions, context: C) -> Self {
        PeriodDecoder { options, context }
    }

    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Name of the type this decoder produces, used in mismatch reports.
    #[must_use]
    pub fn handled_type(&self) -> &'static str {
        if self.options.require_composite {
            "Period"
        } else {
            "PeriodValue"
        }
    }

    /// Decodes the value the stream is positioned on.
    ///
    /// Returns `Ok(None)` for a blank string. Objects, and arrays handed to the
    /// context, are consumed up to their closing token.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedPeriodString`] for string values outside the ISO grammar
    /// - [`Error::MagnitudeOverflow`] for integers that do not fit a period field
    /// - whatever the context returns for unknown units and unexpected tokens
    /// - stream errors while materializing an object
    pub fn decode<S>(&self, stream: &mut S) -> Result<Option<PeriodValue>>
    where
        S: TokenStream + ?Sized,
    {
        match stream.current_token() {
            Some(Token::String) => self.decode_text(stream.text()?),
            Some(Token::Integer) => self.decode_seconds(stream.long_value()?).map(Some),
            Some(Token::StartObject | Token::FieldName) => {
                let tree = stream.read_value_as_tree()?;
                self.decode_tree(&tree)
            }
            other => {
                debug!(token = ?other, "unexpected token for period");
                stream.skip_children()?;
                self.context
                    .handle_unexpected_token(self.handled_type(), other, EXPECTED_TOKENS)
            }
        }
    }

    /// Decodes one JSON document, rejecting anything after the value.
    ///
    /// # Errors
    ///
    /// [`Error::Syntax`] for malformed JSON (including nesting deeper than
    /// `serde_json` allows), otherwise as [`PeriodDecoder::decode`].
    pub fn decode_json<'de, R>(
        &self,
        deserializer: &mut serde_json::Deserializer<R>,
    ) -> Result<Option<PeriodValue>>
    where
        R: serde_json::de::Read<'de>,
    {
        let value = self.decode_deserializer(&mut *deserializer)??;
        deserializer.end()?;
        Ok(value)
    }

    /// Decodes one JSON document held in `json`.
    ///
    /// # Errors
    ///
    /// As [`PeriodDecoder::decode_json`].
    pub fn decode_str(&self, json: &str) -> Result<Option<PeriodValue>> {
        self.decode_json(&mut serde_json::Deserializer::from_str(json))
    }

    /// Decodes ISO-8601 period text. Blank text yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPeriodString`] when the trimmed text is not a period.
    pub fn decode_text(&self, text: &str) -> Result<Option<PeriodValue>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            trace!("blank period string decodes to no value");
            return Ok(None);
        }
        let period = iso::parse_period(trimmed)?;
        trace!(%period, "decoded period string");
        Ok(Some(PeriodValue::Composite(period)))
    }

    /// Decodes a bare integer, which always counts seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MagnitudeOverflow`] when `seconds` does not fit in an `i32`.
    pub fn decode_seconds(&self, seconds: i64) -> Result<PeriodValue> {
        let seconds = i32::try_from(seconds).map_err(|_| Error::magnitude_overflow(seconds))?;
        trace!(seconds, "decoded integer period");
        Ok(self.normalize(PeriodValue::Seconds(seconds)))
    }

    /// Decodes a materialized unit-tagged object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MagnitudeOverflow`] for a numeric magnitude outside `i32`, or
    /// whatever the context returns for an unrecognized unit family.
    pub fn decode_tree(&self, tree: &JsonNode) -> Result<Option<PeriodValue>> {
        let unit_family = tree.path("periodType").path("name").as_text();
        let field_key = tree.path("fieldType").path("name").as_text();
        // TODO: reject negative magnitudes once producers agree on their meaning
        let magnitude = tree.path(&field_key).as_int()?;

        match PeriodUnit::resolve(&unit_family) {
            Some(unit) => {
                trace!(%unit, magnitude, "decoded unit-tagged period");
                Ok(Some(self.normalize(unit.of(magnitude))))
            }
            None => {
                debug!(unit_family = %unit_family, "unknown period unit family");
                self.context.report_mismatch(self.handled_type(), &unit_family)
            }
        }
    }

    fn normalize(&self, value: PeriodValue) -> PeriodValue {
        if self.options.require_composite {
            value.widen()
        } else {
            value
        }
    }
}
