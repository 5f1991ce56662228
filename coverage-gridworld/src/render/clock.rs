//! Frame rate throttling.
use std::{
    thread,
    time::{Duration, Instant},
};

/// Keeps successive frames at least `1 / fps` seconds apart.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Option<Duration>,
    last: Option<Instant>,
}

impl FrameClock {
    /// A clock for the given frame rate, `0` disables throttling.
    pub fn new(fps: u32) -> Self {
        let period = if fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / fps as f64))
        };
        Self { period, last: None }
    }

    /// Sleeps until a frame period has elapsed since the previous tick.
    ///
    /// Returns the time slept. The first tick never sleeps.
    pub fn tick(&mut self) -> Duration {
        let slept = match (self.period, self.last) {
            (Some(period), Some(last)) => {
                let elapsed = last.elapsed();
                if elapsed < period {
                    let d = period - elapsed;
                    thread::sleep(d);
                    d
                } else {
                    Duration::from_secs(0)
                }
            }
            _ => Duration::from_secs(0),
        };
        self.last = Some(Instant::now());
        slept
    }
}
