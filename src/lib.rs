//! # serde_period
//!
//! Decodes JSON periods of unknown shape into strongly typed, calendar-aware values.
//!
//! ## What is a period?
//!
//! A period is a span of calendar time such as "1 month and 2 days". Unlike a fixed
//! duration it has no absolute length until it is applied to a date. JSON producers
//! encode periods in several incompatible ways; this crate accepts all of them:
//!
//! - **ISO-8601 text**: `"P1Y2M3W4DT5H6M7.008S"`
//! - **Bare integers**, always counted in seconds: `90`
//! - **Unit-tagged objects**:
//!   `{"periodType":{"name":"Hours"},"fieldType":{"name":"hours"},"hours":7}`
//!
//! ## Output contracts
//!
//! Decoding produces a [`PeriodValue`]. With the default [`DecoderOptions`] every
//! result is widened into [`PeriodValue::Composite`]; with
//! [`DecoderOptions::single_unit`] the unit named by the input is preserved.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_period::{from_str, from_str_with_options, DecoderOptions, Period, PeriodValue};
//!
//! let value = from_str(r#""P2W""#).unwrap();
//! assert_eq!(value, Some(PeriodValue::Composite(Period::weeks(2))));
//!
//! let json = r#"{"periodType":{"name":"Hours"},"fieldType":{"name":"hours"},"hours":7}"#;
//! let value = from_str_with_options(json, DecoderOptions::single_unit()).unwrap();
//! assert_eq!(value, Some(PeriodValue::Hours(7)));
//!
//! // Blank strings mean "no period"
//! assert_eq!(from_str(r#""  ""#).unwrap(), None);
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_period::PeriodValue;
//!
//! #[derive(Deserialize)]
//! struct Lease {
//!     term: PeriodValue,
//! }
//!
//! let lease: Lease = serde_json::from_str(r#"{"term": 3600}"#).unwrap();
//! assert_eq!(lease.term, PeriodValue::Seconds(3600));
//! ```
//!
//! ## Error Handling
//!
//! Unknown unit families and unexpected token kinds are handed to a
//! [`DecodeContext`], which may raise (the default, [`StrictContext`]) or substitute
//! a value. Malformed ISO text and out-of-range magnitudes always fail. See
//! [`Error`] for the full taxonomy.
//!
//! ## Logging
//!
//! Decoding emits [`tracing`] events at `trace` and `debug` level. They cost nothing
//! unless a subscriber is installed.
//!
//! ## JSON input
//!
//! Text goes through [`serde_json`], which also bounds nesting depth. Already
//! materialized values are decoded with [`TreeStream`] or [`from_node`].

pub mod context;
pub mod de;
pub mod decoder;
pub mod error;
pub mod iso;
pub mod macros;
pub mod map;
pub mod node;
pub mod options;
pub mod period;
pub mod token;
pub mod unit;

pub use context::{DecodeContext, StrictContext};
pub use decoder::PeriodDecoder;
pub use error::{Error, Result};
pub use map::NodeMap;
pub use node::{JsonNode, Number};
pub use options::DecoderOptions;
pub use period::{Period, PeriodValue};
pub use token::{Token, TokenStream, TreeStream};
pub use unit::PeriodUnit;

use std::io;

/// Decode a period from a JSON document using the default (composite) options.
///
/// # Examples
///
/// ```rust
/// use serde_period::{from_str, Period, PeriodValue};
///
/// assert_eq!(from_str("45").unwrap(), Some(PeriodValue::Composite(Period::seconds(45))));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid JSON, holds trailing data, or does not
/// decode to a period.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Option<PeriodValue>> {
    from_str_with_options(s, DecoderOptions::default())
}

/// Decode a period from a JSON document with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_period::{from_str_with_options, DecoderOptions, PeriodValue};
///
/// let value = from_str_with_options("45", DecoderOptions::single_unit()).unwrap();
/// assert_eq!(value, Some(PeriodValue::Seconds(45)));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid JSON, holds trailing data, or does not
/// decode to a period.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: DecoderOptions) -> Result<Option<PeriodValue>> {
    PeriodDecoder::new(options).decode_str(s)
}

/// Decode a period from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 JSON or do not decode to a period.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Option<PeriodValue>> {
    PeriodDecoder::new(DecoderOptions::default())
        .decode_json(&mut serde_json::Deserializer::from_slice(v))
}

/// Decode a period from an I/O stream of JSON.
///
/// # Examples
///
/// ```rust
/// use serde_period::{from_reader, Period, PeriodValue};
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(br#""PT90M""#)).unwrap();
/// assert_eq!(value, Some(PeriodValue::Composite(Period::minutes(90))));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input does not decode to a period.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Option<PeriodValue>>
where
    R: io::Read,
{
    PeriodDecoder::new(DecoderOptions::default())
        .decode_json(&mut serde_json::Deserializer::from_reader(reader))
}

/// Decode a period from an already materialized node.
///
/// # Examples
///
/// ```rust
/// use serde_period::{from_node, node, DecoderOptions, PeriodValue};
///
/// let tree = node!({ "periodType": { "name": "Years" }, "fieldType": { "name": "years" }, "years": 2 });
/// let value = from_node(&tree, DecoderOptions::single_unit()).unwrap();
/// assert_eq!(value, Some(PeriodValue::Years(2)));
/// ```
///
/// # Errors
///
/// Returns an error if the node does not decode to a period.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_node(node: &JsonNode, options: DecoderOptions) -> Result<Option<PeriodValue>> {
    PeriodDecoder::new(options).decode(&mut TreeStream::new(node))
}
