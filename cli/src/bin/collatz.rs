//! Print the Collatz sequence of an integer read from stdin.

use anyhow::{Context, Result};

use parlour_core::{LineConsole, collatz};

fn main() -> Result<()> {
    parlour::init_tracing();

    let mut console = LineConsole::stdio();
    collatz::run(&mut console).context("Collatz printer failed")?;
    Ok(())
}
