//! Guessing game rule types.
//!
//! These types guarantee a playable game by construction: the secret range is
//! never empty and the player always gets at least one attempt.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("guess range is empty (low {low} > high {high})")]
    EmptyRange { low: i64, high: i64 },
    #[error("at least one attempt is required")]
    ZeroAttempts,
}

/// Inclusive range the secret number is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    low: i64,
    high: i64,
}

impl GuessRange {
    pub const DEFAULT_LOW: i64 = 1;
    pub const DEFAULT_HIGH: i64 = 20;

    pub const fn new(low: i64, high: i64) -> Result<Self, RulesError> {
        if low > high {
            return Err(RulesError::EmptyRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub const fn low(self) -> i64 {
        self.low
    }

    #[must_use]
    pub const fn high(self) -> i64 {
        self.high
    }

    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    #[must_use]
    pub const fn as_range(self) -> RangeInclusive<i64> {
        self.low..=self.high
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.low, self.high)
    }
}

/// Maximum number of guesses. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptLimit(u32);

impl AttemptLimit {
    pub const DEFAULT: u32 = 6;

    pub const fn new(attempts: u32) -> Result<Self, RulesError> {
        if attempts == 0 {
            return Err(RulesError::ZeroAttempts);
        }
        Ok(Self(attempts))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for AttemptLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Validated rules for one round of the guessing game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessRules {
    pub range: GuessRange,
    pub attempts: AttemptLimit,
}

impl GuessRules {
    pub fn new(low: i64, high: i64, attempts: u32) -> Result<Self, RulesError> {
        Ok(Self {
            range: GuessRange::new(low, high)?,
            attempts: AttemptLimit::new(attempts)?,
        })
    }
}

/// How a guess compares to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooLow,
    TooHigh,
    Correct,
}

impl Verdict {
    /// Verdict for `guess.cmp(&secret)`.
    #[must_use]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Verdict::TooLow,
            Ordering::Greater => Verdict::TooHigh,
            Ordering::Equal => Verdict::Correct,
        }
    }
}
