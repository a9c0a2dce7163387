//! Guess the secret number in a limited number of attempts.

use anyhow::{Context, Result};

use parlour_core::{LineConsole, ThreadRandom, guess};

fn main() -> Result<()> {
    parlour::init_tracing();

    let config = parlour::load_config();
    let rules = config.guess_rules().unwrap_or_default();

    let mut console = LineConsole::stdio();
    let outcome =
        guess::run(&mut console, rules, &mut ThreadRandom).context("guessing game failed")?;
    tracing::info!(?outcome, "Guessing game finished");
    Ok(())
}
