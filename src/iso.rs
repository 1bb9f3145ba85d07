//! ISO-8601 period text.
//!
//! Parses the standard period grammar `PnYnMnWnDTnHnMnS`:
//!
//! - `P`, then optional date components `nY`, `nM`, `nW`, `nD` in that order
//! - optionally `T`, then time components `nH`, `nM`, `nS` in that order
//! - each `n` is an optionally signed decimal integer; seconds may carry a fraction
//!   (`.` or `,` separator), kept to millisecond precision
//!
//! Designators are matched case-insensitively. At least one component is required.
//!
//! ```rust
//! use serde_period::{iso, Period};
//!
//! let period = iso::parse_period("P2DT1.5S").unwrap();
//! assert_eq!(period, Period { days: 2, seconds: 1, millis: 500, ..Period::ZERO });
//! ```

use crate::{Error, Period, PeriodUnit, Result};

/// Parses trimmed ISO-8601 period text into a composite [`Period`].
///
/// # Errors
///
/// Returns [`Error::MalformedPeriodString`] carrying the text when it does not follow
/// the grammar or a component does not fit in a period field.
pub fn parse_period(text: &str) -> Result<Period> {
    PeriodText::new(text).parse()
}

const DATE_DESIGNATORS: [(char, PeriodUnit); 4] = [
    ('Y', PeriodUnit::Years),
    ('M', PeriodUnit::Months),
    ('W', PeriodUnit::Weeks),
    ('D', PeriodUnit::Days),
];

const TIME_DESIGNATORS: [(char, PeriodUnit); 3] = [
    ('H', PeriodUnit::Hours),
    ('M', PeriodUnit::Minutes),
    ('S', PeriodUnit::Seconds),
];

/// A component value as written, before it is bound to a designator.
struct Component {
    negative: bool,
    /// Signed value.
    value: i32,
    /// Fraction digits, only legal on seconds.
    fraction: Option<String>,
}

struct PeriodText<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> PeriodText<'a> {
    fn new(input: &'a str) -> Self {
        PeriodText { input, position: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn malformed(&self, reason: &str) -> Error {
        Error::malformed_period(self.input, reason)
    }

    fn consume_designator(&mut self, designator: char) -> bool {
        match self.peek_char() {
            Some(ch) if ch.eq_ignore_ascii_case(&designator) => {
                self.next_char();
                true
            }
            _ => false,
        }
    }

    fn parse(mut self) -> Result<Period> {
        if !self.consume_designator('P') {
            return Err(self.malformed("must start with 'P'"));
        }

        let mut period = Period::ZERO;
        let mut components = 0;

        let date_count = self.parse_section(&DATE_DESIGNATORS, &mut period)?;
        components += date_count;

        if self.consume_designator('T') {
            let time_count = self.parse_section(&TIME_DESIGNATORS, &mut period)?;
            if time_count == 0 {
                return Err(self.malformed("has no time component after 'T'"));
            }
            components += time_count;
        }

        if !self.at_end() {
            return Err(self.malformed("has unexpected trailing text"));
        }
        if components == 0 {
            return Err(self.malformed("has no components"));
        }
        Ok(period)
    }

    /// Parses components for one section, enforcing designator order.
    /// Stops at `T` or the end of input.
    fn parse_section(
        &mut self,
        designators: &[(char, PeriodUnit)],
        period: &mut Period,
    ) -> Result<usize> {
        let mut next_allowed = 0;
        let mut count = 0;

        while !self.at_end() && !matches!(self.peek_char(), Some('T' | 't')) {
            let component = self.parse_component()?;
            let designator = self
                .next_char()
                .ok_or_else(|| self.malformed("ends without a designator"))?;

            let slot = designators[next_allowed..]
                .iter()
                .position(|(d, _)| d.eq_ignore_ascii_case(&designator))
                .map(|offset| next_allowed + offset)
                .ok_or_else(|| {
                    self.malformed(&format!("has unexpected designator '{designator}'"))
                })?;
            let unit = designators[slot].1;
            next_allowed = slot + 1;

            *period = period.with(unit, component.value);

            if let Some(digits) = component.fraction {
                if unit != PeriodUnit::Seconds {
                    return Err(self.malformed("has a fraction outside the seconds component"));
                }
                period.millis = fraction_to_millis(&digits, component.negative);
            }
            count += 1;
        }
        Ok(count)
    }

    fn parse_component(&mut self) -> Result<Component> {
        let negative = match self.peek_char() {
            Some('-') => {
                self.next_char();
                true
            }
            Some('+') => {
                self.next_char();
                false
            }
            _ => false,
        };

        let digits = self.take_digits();
        if digits.is_empty() {
            return Err(self.malformed("has a component without digits"));
        }
        // i32::MIN has no positive counterpart, so apply the sign before narrowing
        let magnitude: i64 = digits
            .parse()
            .map_err(|_| self.malformed("has a component out of range"))?;
        let signed = if negative { -magnitude } else { magnitude };
        let value =
            i32::try_from(signed).map_err(|_| self.malformed("has a component out of range"))?;

        let fraction = if matches!(self.peek_char(), Some('.' | ',')) {
            self.next_char();
            let digits = self.take_digits();
            if digits.is_empty() || digits.len() > 9 {
                return Err(self.malformed("has an invalid fraction"));
            }
            Some(digits.to_string())
        } else {
            None
        };

        Ok(Component {
            negative,
            value,
            fraction,
        })
    }

    fn take_digits(&mut self) -> &'a str {
        let input = self.input;
        let start = self.position;
        while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
            self.next_char();
        }
        &input[start..self.position]
    }
}

/// Keeps the first three fraction digits as milliseconds.
fn fraction_to_millis(digits: &str, negative: bool) -> i32 {
    let millis = digits
        .chars()
        .chain(std::iter::repeat('0'))
        .take(3)
        .filter_map(|ch| ch.to_digit(10))
        .fold(0i32, |acc, digit| acc * 10 + digit as i32);
    if negative {
        -millis
    } else {
        millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(text: &str) -> String {
        match parse_period(text) {
            Err(Error::MalformedPeriodString { text: t, reason }) => {
                assert_eq!(t, text);
                reason
            }
            other => panic!("expected malformed period for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_all_components() {
        let period = parse_period("P1Y2M3W4DT5H6M7.008S").unwrap();
        assert_eq!(
            period,
            Period {
                years: 1,
                months: 2,
                weeks: 3,
                days: 4,
                hours: 5,
                minutes: 6,
                seconds: 7,
                millis: 8,
            }
        );
    }

    #[test]
    fn test_minutes_and_months_disambiguated_by_t() {
        assert_eq!(parse_period("P5M").unwrap(), Period::months(5));
        assert_eq!(parse_period("PT5M").unwrap(), Period::minutes(5));
    }

    #[test]
    fn test_signed_components() {
        let period = parse_period("P-1DT+2H").unwrap();
        assert_eq!(period.days, -1);
        assert_eq!(period.hours, 2);
    }

    #[test]
    fn test_fraction_truncates_to_millis() {
        assert_eq!(parse_period("PT1.5S").unwrap(), Period::seconds(1).with_millis(500));
        assert_eq!(parse_period("PT0,123456S").unwrap(), Period::millis(123));
        assert_eq!(parse_period("PT-0.25S").unwrap(), Period::millis(-250));
    }

    #[test]
    fn test_lowercase_designators() {
        assert_eq!(parse_period("p1dt2h").unwrap(), Period::days(1).with(PeriodUnit::Hours, 2));
    }

    #[test]
    fn test_extremes() {
        assert_eq!(parse_period("PT2147483647S").unwrap(), Period::seconds(i32::MAX));
        assert_eq!(parse_period("PT-2147483648S").unwrap(), Period::seconds(i32::MIN));
        assert!(reason("PT2147483648S").contains("out of range"));
    }

    #[test]
    fn test_malformed() {
        assert!(reason("1D").contains("start with 'P'"));
        assert!(reason("P").contains("no components"));
        assert!(reason("PT").contains("no time component"));
        assert!(reason("P1D2Y").contains("unexpected designator"));
        assert!(reason("PT1S2S").contains("unexpected designator"));
        assert!(reason("P1H").contains("unexpected designator"));
        assert!(reason("P1.5D").contains("fraction"));
        assert!(reason("PT1.S").contains("fraction"));
        assert!(reason("PD").contains("without digits"));
        assert!(reason("P1").contains("without a designator"));
        assert!(reason("P1DT1HX").contains("without digits"));
        assert!(reason("PT1HT2M").contains("trailing text"));
    }
}
