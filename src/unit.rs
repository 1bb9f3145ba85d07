//! Period units and unit-family resolution.
//!
//! Unit-tagged JSON objects name their unit through a family string such as
//! `"Hours"`. [`PeriodUnit::resolve`] maps exactly seven family names to units;
//! anything else, including case or plural variants, resolves to nothing.

use crate::PeriodValue;
use std::fmt;

/// One of the seven single-unit period kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

/// Family names recognised in unit-tagged objects. Matching is exact.
const FAMILIES: [(&str, PeriodUnit); 7] = [
    ("Seconds", PeriodUnit::Seconds),
    ("Minutes", PeriodUnit::Minutes),
    ("Hours", PeriodUnit::Hours),
    ("Days", PeriodUnit::Days),
    ("Weeks", PeriodUnit::Weeks),
    ("Months", PeriodUnit::Months),
    ("Years", PeriodUnit::Years),
];

impl PeriodUnit {
    /// All units, largest first.
    pub const ALL: [PeriodUnit; 7] = [
        PeriodUnit::Years,
        PeriodUnit::Months,
        PeriodUnit::Weeks,
        PeriodUnit::Days,
        PeriodUnit::Hours,
        PeriodUnit::Minutes,
        PeriodUnit::Seconds,
    ];

    /// Resolves a unit family name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::PeriodUnit;
    ///
    /// assert_eq!(PeriodUnit::resolve("Weeks"), Some(PeriodUnit::Weeks));
    /// assert_eq!(PeriodUnit::resolve("weeks"), None);
    /// assert_eq!(PeriodUnit::resolve("Week"), None);
    /// assert_eq!(PeriodUnit::resolve(""), None);
    /// ```
    #[must_use]
    pub fn resolve(unit_family: &str) -> Option<PeriodUnit> {
        FAMILIES
            .iter()
            .find(|(name, _)| *name == unit_family)
            .map(|(_, unit)| *unit)
    }

    /// The family name used in `periodType.name`.
    #[must_use]
    pub const fn family_name(self) -> &'static str {
        match self {
            PeriodUnit::Seconds => "Seconds",
            PeriodUnit::Minutes => "Minutes",
            PeriodUnit::Hours => "Hours",
            PeriodUnit::Days => "Days",
            PeriodUnit::Weeks => "Weeks",
            PeriodUnit::Months => "Months",
            PeriodUnit::Years => "Years",
        }
    }

    /// The field name used in `fieldType.name`.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            PeriodUnit::Seconds => "seconds",
            PeriodUnit::Minutes => "minutes",
            PeriodUnit::Hours => "hours",
            PeriodUnit::Days => "days",
            PeriodUnit::Weeks => "weeks",
            PeriodUnit::Months => "months",
            PeriodUnit::Years => "years",
        }
    }

    /// The single-unit constructor for this unit.
    #[must_use]
    pub fn constructor(self) -> fn(i32) -> PeriodValue {
        match self {
            PeriodUnit::Seconds => PeriodValue::Seconds,
            PeriodUnit::Minutes => PeriodValue::Minutes,
            PeriodUnit::Hours => PeriodValue::Hours,
            PeriodUnit::Days => PeriodValue::Days,
            PeriodUnit::Weeks => PeriodValue::Weeks,
            PeriodUnit::Months => PeriodValue::Months,
            PeriodUnit::Years => PeriodValue::Years,
        }
    }

    /// Builds a single-unit value of this unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_period::{PeriodUnit, PeriodValue};
    ///
    /// assert_eq!(PeriodUnit::Days.of(3), PeriodValue::Days(3));
    /// ```
    #[must_use]
    pub fn of(self, magnitude: i32) -> PeriodValue {
        (self.constructor())(magnitude)
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family_name())
    }
}

/// Resolves a unit family name straight to its single-unit constructor.
///
/// # Examples
///
/// ```rust
/// use serde_period::{unit, PeriodValue};
///
/// let make = unit::resolve("Minutes").unwrap();
/// assert_eq!(make(90), PeriodValue::Minutes(90));
/// assert!(unit::resolve("Fortnights").is_none());
/// ```
#[must_use]
pub fn resolve(unit_family: &str) -> Option<fn(i32) -> PeriodValue> {
    PeriodUnit::resolve(unit_family).map(PeriodUnit::constructor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_resolves_to_itself() {
        for unit in PeriodUnit::ALL {
            assert_eq!(PeriodUnit::resolve(unit.family_name()), Some(unit));
        }
    }

    #[test]
    fn test_resolution_is_exact() {
        for name in ["seconds", "SECONDS", "Second", " Seconds", "Sec", "Fortnights"] {
            assert_eq!(PeriodUnit::resolve(name), None, "{name:?} should not resolve");
        }
    }

    #[test]
    fn test_field_name_is_not_a_family() {
        assert!(resolve("hours").is_none());
        assert_eq!(resolve("Hours").map(|make| make(7)), Some(PeriodValue::Hours(7)));
    }

    #[test]
    fn test_constructor_matches_unit() {
        for unit in PeriodUnit::ALL {
            let value = unit.of(5);
            assert_eq!(value.unit(), Some(unit));
            assert_eq!(value.magnitude(), Some(5));
        }
    }
}
