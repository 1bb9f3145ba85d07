//! Period values.
//!
//! A period is a calendar-based span of time with no fixed absolute length:
//! "1 month" is 28 to 31 days depending on where it is applied. This module
//! provides two representations:
//!
//! - [`Period`]: the composite form, with independent years, months, weeks, days,
//!   hours, minutes, seconds and milliseconds fields
//! - [`PeriodValue`]: a tagged union of the seven single-unit forms plus
//!   [`PeriodValue::Composite`]
//!
//! ## Examples
//!
//! ```rust
//! use serde_period::{Period, PeriodValue};
//!
//! let value = PeriodValue::Hours(7);
//! assert_eq!(value.to_period(), Period::hours(7));
//! assert_eq!(value.to_string(), "PT7H");
//!
//! let period: Period = "P1Y2M3W4DT5H6M7.008S".parse().unwrap();
//! assert_eq!(period.weeks, 3);
//! assert_eq!(period.millis, 8);
//! ```

use crate::{Error, PeriodUnit};
use chrono::Duration;
use std::fmt;
use std::str::FromStr;

/// A composite period holding a magnitude for every unit.
///
/// Fields are independent: `Period { hours: 36, .. }` is not normalized into days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub weeks: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub millis: i32,
}

impl Period {
    /// The zero period.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        millis: 0,
    };

    #[must_use]
    pub const fn years(years: i32) -> Self {
        Period { years, ..Self::ZERO }
    }

    #[must_use]
    pub const fn months(months: i32) -> Self {
        Period { months, ..Self::ZERO }
    }

    #[must_use]
    pub const fn weeks(weeks: i32) -> Self {
        Period { weeks, ..Self::ZERO }
    }

    #[must_use]
    pub const fn days(days: i32) -> Self {
        Period { days, ..Self::ZERO }
    }

    #[must_use]
    pub const fn hours(hours: i32) -> Self {
        Period { hours, ..Self::ZERO }
    }

    #[must_use]
    pub const fn minutes(minutes: i32) -> Self {
        Period { minutes, ..Self::ZERO }
    }

    #[must_use]
    pub const fn seconds(seconds: i32) -> Self {
        Period { seconds, ..Self::ZERO }
    }

    #[must_use]
    pub const fn millis(millis: i32) -> Self {
        Period { millis, ..Self::ZERO }
    }

    /// Returns the field for `unit`.
    #[must_use]
    pub const fn get(&self, unit: PeriodUnit) -> i32 {
        match unit {
            PeriodUnit::Years => self.years,
            PeriodUnit::Months => self.months,
            PeriodUnit::Weeks => self.weeks,
            PeriodUnit::Days => self.days,
            PeriodUnit::Hours => self.hours,
            PeriodUnit::Minutes => self.minutes,
            PeriodUnit::Seconds => self.seconds,
        }
    }

    /// Returns a copy with the field for `unit` replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::{Period, PeriodUnit};
    ///
    /// let period = Period::days(1).with(PeriodUnit::Hours, 12);
    /// assert_eq!(period.to_string(), "P1DT12H");
    /// ```
    #[must_use]
    pub fn with(mut self, unit: PeriodUnit, value: i32) -> Self {
        match unit {
            PeriodUnit::Years => self.years = value,
            PeriodUnit::Months => self.months = value,
            PeriodUnit::Weeks => self.weeks = value,
            PeriodUnit::Days => self.days = value,
            PeriodUnit::Hours => self.hours = value,
            PeriodUnit::Minutes => self.minutes = value,
            PeriodUnit::Seconds => self.seconds = value,
        }
        self
    }

    /// Returns a copy with the milliseconds field replaced.
    #[must_use]
    pub fn with_millis(mut self, millis: i32) -> Self {
        self.millis = millis;
        self
    }

    /// Returns `true` if every field is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Converts to a fixed-length duration using standard unit lengths
    /// (a week is 7 days, a day is 24 hours).
    ///
    /// Returns `None` when years or months are set, since those have no standard
    /// length, or when the total does not fit a [`chrono::Duration`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::Period;
    /// use chrono::Duration;
    ///
    /// let period = Period::weeks(1).with_millis(500);
    /// assert_eq!(
    ///     period.to_standard_duration(),
    ///     Some(Duration::days(7) + Duration::milliseconds(500))
    /// );
    /// assert_eq!(Period::months(1).to_standard_duration(), None);
    /// ```
    #[must_use]
    pub fn to_standard_duration(&self) -> Option<Duration> {
        if self.years != 0 || self.months != 0 {
            return None;
        }
        [
            Duration::weeks(i64::from(self.weeks)),
            Duration::days(i64::from(self.days)),
            Duration::hours(i64::from(self.hours)),
            Duration::minutes(i64::from(self.minutes)),
            Duration::seconds(i64::from(self.seconds)),
            Duration::milliseconds(i64::from(self.millis)),
        ]
        .into_iter()
        .try_fold(Duration::zero(), |total, part| total.checked_add(&part))
    }
}

impl fmt::Display for Period {
    /// Formats the period as ISO-8601 text, e.g. `P1Y2DT3H4.500S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }

        f.write_str("P")?;
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }

        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.millis == 0 {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds != 0 || self.millis != 0 {
            // seconds and millis print as one signed decimal
            let total = i64::from(self.seconds) * 1000 + i64::from(self.millis);
            let sign = if total < 0 { "-" } else { "" };
            let whole = (total / 1000).unsigned_abs();
            let fraction = (total % 1000).unsigned_abs();
            if fraction == 0 {
                write!(f, "{sign}{whole}S")?;
            } else {
                write!(f, "{sign}{whole}.{fraction:03}S")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::iso::parse_period(s)
    }
}

/// A decoded period: one of the seven single-unit forms, or a composite.
///
/// Which variant a decoder returns depends on
/// [`DecoderOptions::require_composite`](crate::DecoderOptions::require_composite).
///
/// # Examples
///
/// ```rust
/// use serde_period::{PeriodUnit, PeriodValue};
///
/// let value = PeriodValue::Weeks(2);
/// assert_eq!(value.unit(), Some(PeriodUnit::Weeks));
/// assert_eq!(value.magnitude(), Some(2));
/// assert!(!value.is_composite());
/// assert!(value.widen().is_composite());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodValue {
    Seconds(i32),
    Minutes(i32),
    Hours(i32),
    Days(i32),
    Weeks(i32),
    Months(i32),
    Years(i32),
    Composite(Period),
}

impl PeriodValue {
    /// The unit of a single-unit value, or `None` for a composite.
    #[must_use]
    pub const fn unit(&self) -> Option<PeriodUnit> {
        match self {
            PeriodValue::Seconds(_) => Some(PeriodUnit::Seconds),
            PeriodValue::Minutes(_) => Some(PeriodUnit::Minutes),
            PeriodValue::Hours(_) => Some(PeriodUnit::Hours),
            PeriodValue::Days(_) => Some(PeriodUnit::Days),
            PeriodValue::Weeks(_) => Some(PeriodUnit::Weeks),
            PeriodValue::Months(_) => Some(PeriodUnit::Months),
            PeriodValue::Years(_) => Some(PeriodUnit::Years),
            PeriodValue::Composite(_) => None,
        }
    }

    /// The magnitude of a single-unit value, or `None` for a composite.
    #[must_use]
    pub const fn magnitude(&self) -> Option<i32> {
        match *self {
            PeriodValue::Seconds(n)
            | PeriodValue::Minutes(n)
            | PeriodValue::Hours(n)
            | PeriodValue::Days(n)
            | PeriodValue::Weeks(n)
            | PeriodValue::Months(n)
            | PeriodValue::Years(n) => Some(n),
            PeriodValue::Composite(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, PeriodValue::Composite(_))
    }

    /// Converts to a composite period, setting only the field of this value's unit.
    #[must_use]
    pub fn to_period(&self) -> Period {
        match *self {
            PeriodValue::Seconds(n) => Period::seconds(n),
            PeriodValue::Minutes(n) => Period::minutes(n),
            PeriodValue::Hours(n) => Period::hours(n),
            PeriodValue::Days(n) => Period::days(n),
            PeriodValue::Weeks(n) => Period::weeks(n),
            PeriodValue::Months(n) => Period::months(n),
            PeriodValue::Years(n) => Period::years(n),
            PeriodValue::Composite(period) => period,
        }
    }

    /// Widens a single-unit value into [`PeriodValue::Composite`]; composites are
    /// returned unchanged.
    #[must_use]
    pub fn widen(self) -> PeriodValue {
        PeriodValue::Composite(self.to_period())
    }
}

impl From<Period> for PeriodValue {
    fn from(period: Period) -> Self {
        PeriodValue::Composite(period)
    }
}

impl From<PeriodValue> for Period {
    fn from(value: PeriodValue) -> Self {
        value.to_period()
    }
}

impl fmt::Display for PeriodValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_period(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening_sets_exactly_one_field() {
        for unit in PeriodUnit::ALL {
            let period = unit.of(9).to_period();
            for other in PeriodUnit::ALL {
                let expected = if other == unit { 9 } else { 0 };
                assert_eq!(period.get(other), expected, "{unit} widened into {other}");
            }
            assert_eq!(period.millis, 0);
        }
    }

    #[test]
    fn test_composite_widens_to_itself() {
        let period = Period::years(1).with(PeriodUnit::Seconds, 2).with_millis(3);
        assert_eq!(PeriodValue::Composite(period).widen(), PeriodValue::Composite(period));
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Period::ZERO.to_string(), "PT0S");
    }

    #[test]
    fn test_display_fields() {
        let period = Period {
            years: 1,
            months: 2,
            weeks: 3,
            days: 4,
            hours: 5,
            minutes: 6,
            seconds: 7,
            millis: 8,
        };
        assert_eq!(period.to_string(), "P1Y2M3W4DT5H6M7.008S");
    }

    #[test]
    fn test_display_date_only() {
        assert_eq!(Period::months(-3).to_string(), "P-3M");
        assert_eq!(PeriodValue::Weeks(2).to_string(), "P2W");
    }

    #[test]
    fn test_display_millis() {
        assert_eq!(Period::seconds(1).with_millis(500).to_string(), "PT1.500S");
        assert_eq!(Period::millis(-500).to_string(), "PT-0.500S");
        assert_eq!(Period::seconds(-2).with_millis(-250).to_string(), "PT-2.250S");
    }

    #[test]
    fn test_standard_duration() {
        let period = Period::days(1).with(PeriodUnit::Hours, 2);
        assert_eq!(
            period.to_standard_duration(),
            Some(Duration::hours(26))
        );
        assert_eq!(Period::years(1).to_standard_duration(), None);
    }
}
