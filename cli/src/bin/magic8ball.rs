//! Ask the magic 8 ball questions until you run out of them.

use anyhow::{Context, Result};

use parlour_core::{LineConsole, ThreadPause, ThreadRandom, magic8ball};

fn main() -> Result<()> {
    parlour::init_tracing();

    let config = parlour::load_config();
    let delay = config.magic8ball_delay();

    let mut console = LineConsole::stdio();
    magic8ball::run(&mut console, &mut ThreadRandom, &mut ThreadPause, delay)
        .context("magic 8 ball failed")?;
    Ok(())
}
