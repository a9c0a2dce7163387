//! Collatz printer.
//!
//! Reads one integer, then prints every value of its Collatz sequence up to
//! and including the first 1. Non-integer input is rejected and re-prompted
//! for as long as it takes. Values are arbitrary precision, so no start value
//! is too large and no step can overflow.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use thiserror::Error;

use crate::console::{Console, ConsoleError};

pub const PROMPT: &str = "Enter an integer: ";
pub const NOT_VALID: &str = "Not valid! Please enter an integer: ";

#[derive(Debug, Error)]
pub enum CollatzError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// One Collatz step: `n / 2` for even `n`, `3n + 1` otherwise.
#[must_use]
pub fn collatz_step(n: &BigInt) -> BigInt {
    if n.is_even() {
        n / 2u32
    } else {
        n * 3u32 + 1u32
    }
}

/// Values that follow `start`, ending with the first 1.
///
/// Empty when `start` is already 1. Zero and negative starts never reach 1,
/// so their sequences are unbounded.
#[derive(Debug, Clone)]
pub struct CollatzSequence {
    current: BigInt,
}

impl CollatzSequence {
    #[must_use]
    pub fn new(start: BigInt) -> Self {
        Self { current: start }
    }
}

impl Iterator for CollatzSequence {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_one() {
            return None;
        }
        self.current = collatz_step(&self.current);
        Some(self.current.clone())
    }
}

/// Parse a base-10 integer of any size, ignoring surrounding whitespace.
#[must_use]
pub fn parse_integer(input: &str) -> Option<BigInt> {
    input.trim().parse().ok()
}

/// Prompt until the reply parses as an integer.
pub fn read_start(console: &mut impl Console) -> Result<BigInt, ConsoleError> {
    loop {
        let reply = console.prompt(PROMPT)?;
        if let Some(start) = parse_integer(&reply) {
            return Ok(start);
        }
        tracing::debug!(input = %reply, "Rejected non-integer start value");
        console.write_line(NOT_VALID)?;
    }
}

/// Run the printer: read a start value, then print its sequence.
pub fn run(console: &mut impl Console) -> Result<(), CollatzError> {
    let start = read_start(console)?;
    tracing::info!(start = %start, "Collatz sequence started");

    let mut steps: u64 = 0;
    for value in CollatzSequence::new(start.clone()) {
        console.write_line(&value.to_string())?;
        steps += 1;
    }

    tracing::info!(start = %start, steps, "Collatz sequence reached 1");
    Ok(())
}
