use std::thread;
use std::time::Duration;

/// Blocking delay.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Records requested delays without sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingPause {
    pub requested: Vec<Duration>,
}

impl Pause for RecordingPause {
    fn pause(&mut self, duration: Duration) {
        self.requested.push(duration);
    }
}
