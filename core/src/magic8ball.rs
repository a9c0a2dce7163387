//! Magic 8 ball.
//!
//! Asks for a question, thinks for a moment, and answers with one of eight
//! canned responses. The question itself is never looked at.

use std::time::Duration;

use thiserror::Error;

use parlour_types::{ANSWERS, NonEmptyStaticStr};

use crate::console::{Console, ConsoleError};
use crate::pause::Pause;
use crate::random::RandomSource;

pub const GREETING: &str = "I am the Magic 8 Ball!";
pub const ASK: &str = "Ask your question: ";
pub const THINKING: &str = "Thinking....";
pub const ANOTHER: &str = "Would you like to ask another question? ";
pub const FAREWELL: &str = "Ok, bye bye.";

#[derive(Debug, Error)]
pub enum MagicBallError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// Whether a continuation reply means "ask again".
///
/// Only `yes`, `yeah` and `y` count, in any letter case. Whitespace is
/// significant.
#[must_use]
pub fn wants_another(reply: &str) -> bool {
    matches!(reply.to_lowercase().as_str(), "yes" | "yeah" | "y")
}

pub fn choose_answer(rng: &mut impl RandomSource) -> NonEmptyStaticStr {
    ANSWERS[rng.index(ANSWERS.len()) % ANSWERS.len()]
}

/// One round: question, pause, answer, separator.
pub fn ask_once(
    console: &mut impl Console,
    rng: &mut impl RandomSource,
    pause: &mut impl Pause,
    delay: Duration,
) -> Result<&'static str, MagicBallError> {
    let _question = console.prompt(ASK)?;
    console.write_line("")?;
    console.write_line(THINKING)?;
    console.write_line("")?;

    pause.pause(delay);

    let answer = choose_answer(rng).as_str();
    console.write_line(answer)?;
    console.write_line(" ")?;
    Ok(answer)
}

/// Answer questions until the player declines to ask another.
pub fn run(
    console: &mut impl Console,
    rng: &mut impl RandomSource,
    pause: &mut impl Pause,
    delay: Duration,
) -> Result<(), MagicBallError> {
    console.write_line(GREETING)?;

    let mut rounds: u32 = 0;
    loop {
        let answer = ask_once(console, rng, pause, delay)?;
        rounds += 1;
        tracing::debug!(round = rounds, answer, "Answered");

        let reply = console.prompt(ANOTHER)?;
        if !wants_another(&reply) {
            break;
        }
    }

    console.write_line(FAREWELL)?;
    tracing::info!(rounds, "Magic 8 ball finished");
    Ok(())
}
