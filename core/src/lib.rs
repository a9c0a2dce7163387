//! Game loops for Parlour.
//!
//! Each program is a plain function over three seams, so tests can script
//! them end to end:
//!
//! ```text
//! Console       read_line / write / write_line   (stdin+stdout or buffers)
//! RandomSource  int_in / index                   (rand or a scripted list)
//! Pause         pause(Duration)                  (thread sleep or recorder)
//! ```
//!
//! The programs share nothing beyond these seams and the error types.

pub mod collatz;
mod console;
pub mod guess;
pub mod magic8ball;
mod pause;
mod random;

pub use collatz::{CollatzError, CollatzSequence, collatz_step};
pub use console::{Console, ConsoleError, LineConsole};
pub use guess::{GuessError, GuessGame, Outcome};
pub use magic8ball::{MagicBallError, wants_another};
pub use pause::{Pause, RecordingPause, ThreadPause};
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
