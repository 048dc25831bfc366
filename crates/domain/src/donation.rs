//! Donation amount typed into the campaign detail sidebar.
//!
//! There is no submission behind it yet; the value only decides whether the
//! "Donate Now" button is enabled.

use std::fmt;

/// A strictly positive, finite donation amount in dollars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DonationAmount(f64);

impl DonationAmount {
    /// Interpret the raw text of the amount input.
    ///
    /// Returns `None` for empty input, text that is not a number, and any
    /// amount that is zero, negative, or not finite.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value: f64 = trimmed.parse().ok()?;
        Self::new(value)
    }

    /// Wrap an already numeric amount.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// The amount in dollars.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DonationAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether the donate action should be enabled for the given input.
#[must_use]
pub fn can_donate(input: &str) -> bool {
    DonationAmount::parse(input).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_positive_amounts() {
        assert_eq!(DonationAmount::parse("25").map(DonationAmount::value), Some(25.0));
        assert_eq!(DonationAmount::parse(" 12.5 ").map(DonationAmount::value), Some(12.5));
        assert!(can_donate("0.01"));
    }

    #[test]
    fn should_disable_for_empty_input() {
        assert!(!can_donate(""));
        assert!(!can_donate("   "));
    }

    #[test]
    fn should_disable_for_non_positive_amounts() {
        assert!(!can_donate("0"));
        assert!(!can_donate("-5"));
        assert!(!can_donate("-0.0"));
    }

    #[test]
    fn should_disable_for_non_numeric_input() {
        assert!(!can_donate("abc"));
        assert!(!can_donate("NaN"));
        assert!(!can_donate("inf"));
    }

    #[test]
    fn should_display_like_the_typed_number() {
        assert_eq!(DonationAmount::parse("40").unwrap().to_string(), "40");
    }
}
