//! Injectable randomness.

use std::ops::RangeInclusive;

/// Source of uniform random choices.
pub trait RandomSource {
    /// Uniform integer in `range`.
    fn int_in(&mut self, range: RangeInclusive<i64>) -> i64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

/// Thread-local `rand` generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_in(&mut self, range: RangeInclusive<i64>) -> i64 {
        rand::random_range(range)
    }

    fn index(&mut self, len: usize) -> usize {
        rand::random_range(0..len)
    }
}

/// Replays a fixed list of values, wrapping around when exhausted.
///
/// Values are clamped into the requested range (`int_in`) or reduced modulo
/// `len` (`index`), so a script can never produce an out-of-range choice.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i64>,
    cursor: usize,
}

impl SequenceRandom {
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }

    fn next_value(&mut self) -> i64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl RandomSource for SequenceRandom {
    fn int_in(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.next_value().clamp(*range.start(), *range.end())
    }

    fn index(&mut self, len: usize) -> usize {
        // `len` is a small collection size; it always fits in i64.
        self.next_value().rem_euclid(len as i64) as usize
    }
}
