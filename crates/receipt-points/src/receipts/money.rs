//! Exact currency amounts held as integer cents.
//!
//! Receipt totals and prices arrive as `dollars.cents` strings. Parsing them
//! into cents keeps every rule (round dollars, quarter multiples, percentage
//! bonuses) in integer arithmetic, so `0.1 + 0.2` style drift cannot change a
//! score.

use std::fmt;

use serde::{Deserialize, Serialize};

const CENTS_PER_DOLLAR: u64 = 100;

/// Non-negative amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

/// Reasons an amount string was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("amount must look like 12.34 (digits, a dot, exactly two decimals)")]
    Format,
    #[error("amount is too large to represent")]
    Overflow,
}

impl Money {
    pub const ZERO: Money = Money(0);

    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parses `^\d+\.\d{2}$` (ASCII digits only) into cents.
    pub fn parse(raw: &str) -> Result<Self, MoneyParseError> {
        let (major, minor) = raw.split_once('.').ok_or(MoneyParseError::Format)?;

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyParseError::Format);
        }
        if minor.len() != 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyParseError::Format);
        }

        let dollars: u64 = major.parse().map_err(|_| MoneyParseError::Overflow)?;
        let cents: u64 = minor.parse().map_err(|_| MoneyParseError::Format)?;

        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|value| value.checked_add(cents))
            .map(Money)
            .ok_or(MoneyParseError::Overflow)
    }

    /// True when the cents part is `.00`.
    #[inline]
    pub const fn is_whole_dollars(self) -> bool {
        self.0 % CENTS_PER_DOLLAR == 0
    }

    /// True when the amount is an exact multiple of `step`. A zero step never divides.
    #[inline]
    pub const fn is_multiple_of(self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// `ceil(amount * percent / 100)` in whole dollars, computed without floats.
    pub fn percent_ceil_dollars(self, percent: u64) -> u64 {
        let scaled = u128::from(self.0) * u128::from(percent);
        let divisor = u128::from(CENTS_PER_DOLLAR) * 100;
        let dollars = scaled.div_ceil(divisor);
        u64::try_from(dollars).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / CENTS_PER_DOLLAR,
            self.0 % CENTS_PER_DOLLAR
        )
    }
}
