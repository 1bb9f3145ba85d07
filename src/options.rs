//! Configuration options for period decoding.
//!
//! [`DecoderOptions`] selects which output contract the decoder honours:
//!
//! - **Composite** (default): every decoded value is a [`PeriodValue::Composite`]
//! - **Single-unit**: values keep the unit the input named, e.g. [`PeriodValue::Hours`]
//!
//! ## Examples
//!
//! ```rust
//! use serde_period::{from_str_with_options, DecoderOptions, PeriodValue};
//!
//! let json = r#"{"periodType":{"name":"Hours"},"fieldType":{"name":"hours"},"hours":7}"#;
//!
//! let value = from_str_with_options(json, DecoderOptions::single_unit()).unwrap();
//! assert_eq!(value, Some(PeriodValue::Hours(7)));
//! ```
//!
//! [`PeriodValue::Composite`]: crate::PeriodValue::Composite
//! [`PeriodValue::Hours`]: crate::PeriodValue::Hours

/// Configuration options for [`PeriodDecoder`](crate::PeriodDecoder).
///
/// Options are fixed at decoder construction; a decoder never changes them.
///
/// # Examples
///
/// ```rust
/// use serde_period::DecoderOptions;
///
/// let options = DecoderOptions::new();
/// assert!(options.require_composite);
///
/// let options = DecoderOptions::new().with_require_composite(false);
/// assert!(!options.require_composite);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Widen single-unit values into a composite period before returning them.
    pub require_composite: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            require_composite: true,
        }
    }
}

impl DecoderOptions {
    /// Creates default options (composite output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that always produce composite periods.
    #[must_use]
    pub fn composite() -> Self {
        DecoderOptions {
            require_composite: true,
        }
    }

    /// Creates options that preserve the unit named by the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::DecoderOptions;
    ///
    /// assert!(!DecoderOptions::single_unit().require_composite);
    /// ```
    #[must_use]
    pub fn single_unit() -> Self {
        DecoderOptions {
            require_composite: false,
        }
    }

    /// Sets whether single-unit values are widened into composite periods.
    #[must_use]
    pub fn with_require_composite(mut self, require_composite: bool) -> Self {
        self.require_composite = require_composite;
        self
    }
}
