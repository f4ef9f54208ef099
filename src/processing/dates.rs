//! Date string validation

use chrono::{Datelike, Local};
use regex::Regex;

/// Oldest year any resume date may carry.
pub const MIN_YEAR: i32 = 1900;

/// How far past the reference year an end date may point.
pub const FUTURE_YEAR_GRACE: i32 = 10;

/// Validates `MM/YYYY` date strings.
///
/// The upper year bound is `reference_year + 10`. The wall clock is read only
/// in [`DateValidator::new`]; pin the year with
/// [`DateValidator::with_reference_year`] when exact boundaries matter.
pub struct DateValidator {
    pattern: Regex,
    reference_year: i32,
}

impl DateValidator {
    pub fn new() -> Self {
        Self::with_reference_year(Local::now().year())
    }

    pub fn with_reference_year(reference_year: i32) -> Self {
        let pattern = Regex::new(r"^(0[1-9]|1[0-2])/\d{4}$").expect("Invalid date pattern");

        Self {
            pattern,
            reference_year,
        }
    }

    /// True iff the string is `MM/YYYY` with month 01-12 and year within
    /// `[1900, reference_year + 10]`.
    pub fn is_valid(&self, date: &str) -> bool {
        if !self.pattern.is_match(date) {
            return false;
        }

        let year: i32 = match date[3..].parse() {
            Ok(year) => year,
            Err(_) => return false,
        };

        (MIN_YEAR..=self.reference_year + FUTURE_YEAR_GRACE).contains(&year)
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> DateValidator {
        DateValidator::with_reference_year(2024)
    }

    #[test]
    fn test_accepts_well_formed_dates() {
        let dates = validator();
        assert!(dates.is_valid("01/2024"));
        assert!(dates.is_valid("12/1900"));
        assert!(dates.is_valid("06/2010"));
    }

    #[test]
    fn test_rejects_bad_months() {
        let dates = validator();
        assert!(!dates.is_valid("13/2024"));
        assert!(!dates.is_valid("00/2024"));
    }

    #[test]
    fn test_rejects_missing_leading_zero() {
        assert!(!validator().is_valid("1/2024"));
    }

    #[test]
    fn test_rejects_other_shapes() {
        let dates = validator();
        assert!(!dates.is_valid("01-2024"));
        assert!(!dates.is_valid("2024/01"));
        assert!(!dates.is_valid("01/20245"));
        assert!(!dates.is_valid("Present"));
        assert!(!dates.is_valid(""));
    }

    #[test]
    fn test_year_bounds() {
        let dates = validator();
        assert!(!dates.is_valid("01/1899"));
        assert!(dates.is_valid("01/1900"));
        assert!(dates.is_valid("01/2034"));
        assert!(!dates.is_valid("01/2035"));
    }
}
