//! Number guessing game.
//!
//! A secret is drawn from the configured range (1 to 20 by default) and the
//! player gets a fixed number of attempts (6 by default). Every wrong guess is
//! answered with "too low" or "too high". A guess that is not an integer ends
//! the game with an error.

use num_bigint::BigInt;
use thiserror::Error;

use parlour_types::{GuessRules, Verdict};

use crate::console::{Console, ConsoleError};
use crate::random::RandomSource;

pub const TAKE_A_GUESS: &str = "Take a guess.";
pub const TOO_LOW: &str = "Your guess is too low.";
pub const TOO_HIGH: &str = "Your guess is too high.";

#[derive(Debug, Error)]
pub enum GuessError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("guess is not an integer: {input:?}")]
    NotANumber { input: String },
    #[error("secret {secret} is outside the range {low} to {high}")]
    SecretOutOfRange { secret: i64, low: i64, high: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: u32 },
    Lost { secret: i64 },
}

#[derive(Debug, Clone, Copy)]
pub struct GuessGame {
    rules: GuessRules,
    secret: i64,
}

impl GuessGame {
    /// Draw a secret uniformly from the rules' range.
    pub fn new(rules: GuessRules, rng: &mut impl RandomSource) -> Self {
        let secret = rng.int_in(rules.range.as_range());
        debug_assert!(rules.range.contains(secret));
        tracing::debug!(secret, "Secret number drawn");
        Self { rules, secret }
    }

    pub fn with_secret(rules: GuessRules, secret: i64) -> Result<Self, GuessError> {
        if !rules.range.contains(secret) {
            return Err(GuessError::SecretOutOfRange {
                secret,
                low: rules.range.low(),
                high: rules.range.high(),
            });
        }
        Ok(Self { rules, secret })
    }

    #[must_use]
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Compare a guess of any size with the secret.
    #[must_use]
    pub fn judge(&self, guess: &BigInt) -> Verdict {
        Verdict::from_ordering(guess.cmp(&BigInt::from(self.secret)))
    }

    /// Play one full game on `console`.
    pub fn play(&self, console: &mut impl Console) -> Result<Outcome, GuessError> {
        console.write_line(&format!(
            "I'm thinking of a number between {}",
            self.rules.range
        ))?;

        for attempt in 1..=self.rules.attempts.get() {
            console.write_line(TAKE_A_GUESS)?;
            let guess = parse_guess(&console.read_line()?)?;

            let feedback = match self.judge(&guess) {
                Verdict::TooLow => TOO_LOW,
                Verdict::TooHigh => TOO_HIGH,
                Verdict::Correct => {
                    tracing::info!(attempt, "Secret guessed");
                    console.write_line(&format!(
                        "Good job! You guessed my number in {attempt} guesses!"
                    ))?;
                    return Ok(Outcome::Won { attempts: attempt });
                }
            };
            console.write_line("")?;
            console.write_line(feedback)?;
            console.write_line("")?;
        }

        tracing::info!(secret = self.secret, "Out of attempts");
        console.write_line(&format!(
            "Nope. The number I was thinking of was {}",
            self.secret
        ))?;
        Ok(Outcome::Lost {
            secret: self.secret,
        })
    }
}

/// Parse one guess of any size. Anything but an integer is fatal.
pub fn parse_guess(input: &str) -> Result<BigInt, GuessError> {
    input.trim().parse().map_err(|_| {
        tracing::warn!(input, "Guess is not an integer");
        GuessError::NotANumber {
            input: input.to_string(),
        }
    })
}

/// Draw a secret and play one game.
pub fn run(
    console: &mut impl Console,
    rules: GuessRules,
    rng: &mut impl RandomSource,
) -> Result<Outcome, GuessError> {
    GuessGame::new(rules, rng).play(console)
}
