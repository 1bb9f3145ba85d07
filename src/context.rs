//! Error-reporting hooks consulted by the decoder.
//!
//! When the decoder meets an unknown unit family or a token it cannot decode, it
//! does not fail by itself. It hands the problem to a [`DecodeContext`], which
//! either returns an error or substitutes a result. [`StrictContext`] raises.
//!
//! ```rust
//! use serde_period::{DecodeContext, DecoderOptions, PeriodDecoder, PeriodValue, Result, Token};
//!
//! /// Treats anything undecodable as "no period".
//! struct Lenient;
//!
//! impl DecodeContext for Lenient {
//!     fn handle_unexpected_token(
//!         &self,
//!         _type_name: &str,
//!         _actual: Option<Token>,
//!         _expected: &str,
//!     ) -> Result<Option<PeriodValue>> {
//!         Ok(None)
//!     }
//! }
//!
//! let decoder = PeriodDecoder::with_context(DecoderOptions::new(), Lenient);
//! assert_eq!(decoder.decode_str("true").unwrap(), None);
//! assert_eq!(decoder.decode_str("[1, 2]").unwrap(), None);
//! ```

use crate::token::describe;
use crate::{Error, PeriodValue, Result, Token};

/// Decides how the decoder recovers from mismatched input.
///
/// Both methods default to raising an error. Return `Ok(value)` to make `value`
/// the result of the decode call instead.
pub trait DecodeContext {
    /// Called when a unit-tagged object names an unrecognized unit family.
    ///
    /// # Errors
    ///
    /// The default raises [`Error::UnknownPeriodUnit`].
    fn report_mismatch(&self, type_name: &str, unit_family: &str) -> Result<Option<PeriodValue>> {
        Err(Error::unknown_period_unit(type_name, unit_family))
    }

    /// Called when the current token is not a number, string or object.
    /// `actual` is `None` at the end of input.
    ///
    /// # Errors
    ///
    /// The default raises [`Error::UnexpectedToken`].
    fn handle_unexpected_token(
        &self,
        type_name: &str,
        actual: Option<Token>,
        expected: &str,
    ) -> Result<Option<PeriodValue>> {
        Err(Error::unexpected_token(type_name, expected, describe(actual)))
    }
}

/// The default context: every mismatch is an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrictContext;

impl DecodeContext for StrictContext {}

impl<C: DecodeContext + ?Sized> DecodeContext for &C {
    fn report_mismatch(&self, type_name: &str, unit_family: &str) -> Result<Option<PeriodValue>> {
        (**self).report_mismatch(type_name, unit_family)
    }

    fn handle_unexpected_token(
        &self,
        type_name: &str,
        actual: Option<Token>,
        expected: &str,
    ) -> Result<Option<PeriodValue>> {
        (**self).handle_unexpected_token(type_name, actual, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_mismatch() {
        let err = StrictContext.report_mismatch("Period", "Fortnights").unwrap_err();
        assert_eq!(err, Error::unknown_period_unit("Period", "Fortnights"));
    }

    #[test]
    fn test_strict_unexpected_token() {
        let err = StrictContext
            .handle_unexpected_token("Period", Some(Token::StartArray), "Number, String, or Object")
            .unwrap_err();
        match err {
            Error::UnexpectedToken { expected, actual, .. } => {
                assert_eq!(expected, "Number, String, or Object");
                assert_eq!(actual, "'['");
            }
            other => panic!("expected unexpected-token error, got {other:?}"),
        }
    }

    #[test]
    fn test_end_of_input_described() {
        let err = StrictContext
            .handle_unexpected_token("Period", None, "Number, String, or Object")
            .unwrap_err();
        assert!(err.to_string().contains("end of input"));
    }
}
