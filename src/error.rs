//! Error types for period decoding.
//!
//! ## Error Categories
//!
//! - **Malformed period strings**: ISO-8601 text that does not follow the period grammar
//! - **Magnitude overflow**: integer magnitudes outside the range a period field can hold
//! - **Unknown period units**: unit-tagged objects naming an unrecognized unit family
//! - **Unexpected tokens**: JSON values that are not a number, string or object
//! - **Syntax errors**: malformed JSON text, with line/column information
//!
//! ## Examples
//!
//! ```rust
//! use serde_period::{from_str, Error};
//!
//! let result = from_str(r#""P1Q""#);
//! assert!(matches!(result, Err(Error::MalformedPeriodString { .. })));
//! ```

use serde_json::error::Category;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while decoding a period.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading
    #[error("IO error: {0}")]
    Io(String),

    /// JSON syntax error
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// ISO-8601 period text that does not follow the period grammar
    #[error("Invalid period format: \"{text}\" {reason}")]
    MalformedPeriodString { text: String, reason: String },

    /// Magnitude that does not fit in a period field
    #[error("Period magnitude {value} is out of range")]
    MagnitudeOverflow { value: String },

    /// Unit-tagged object naming an unrecognized unit family
    #[error("Don't know how to deserialize {type_name} using periodName '{unit_family}'")]
    UnknownPeriodUnit {
        type_name: String,
        unit_family: String,
    },

    /// Token kind the decoder cannot handle
    #[error("Unexpected token ({actual}) for {type_name}: expected JSON {expected}")]
    UnexpectedToken {
        type_name: String,
        expected: String,
        actual: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::Error;
    ///
    /// let err = Error::syntax(3, 7, "expected ':'");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a malformed-period error carrying the offending text.
    pub fn malformed_period(text: &str, reason: &str) -> Self {
        Error::MalformedPeriodString {
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an overflow error for a magnitude that does not fit a period field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::Error;
    ///
    /// let err = Error::magnitude_overflow(i64::MAX);
    /// assert!(err.to_string().contains("9223372036854775807"));
    /// ```
    pub fn magnitude_overflow<T: fmt::Display>(value: T) -> Self {
        Error::MagnitudeOverflow {
            value: value.to_string(),
        }
    }

    /// Creates an unknown-unit error naming the handled type and the unresolved family.
    pub fn unknown_period_unit(type_name: &str, unit_family: &str) -> Self {
        Error::UnknownPeriodUnit {
            type_name: type_name.to_string(),
            unit_family: unit_family.to_string(),
        }
    }

    /// Creates an unexpected-token error.
    pub fn unexpected_token(type_name: &str, expected: &str, actual: &str) -> Self {
        Error::UnexpectedToken {
            type_name: type_name.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let col = err.column();
        let text = err.to_string();
        // serde_json appends the position to its message
        let msg = text
            .rsplit_once(" at line ")
            .map_or(text.as_str(), |(msg, _)| msg);
        match err.classify() {
            Category::Io => Error::io(msg),
            Category::Syntax | Category::Eof => Error::syntax(line, col, msg),
            Category::Data => Error::custom(msg),
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
