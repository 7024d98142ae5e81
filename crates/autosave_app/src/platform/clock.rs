use std::time::Instant;

use autosave_core::{MonotonicMs, TimeOfDay};
use chrono::Timelike;

/// Time source injected into the shell so the scheduler can be driven with
/// synthetic time in tests.
pub trait Clock: Send + Sync {
    /// Milliseconds since an arbitrary fixed origin; never goes backwards.
    fn monotonic_ms(&self) -> MonotonicMs;
    /// Local wall-clock time, for display stamps only.
    fn time_of_day(&self) -> TimeOfDay;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic_ms(&self) -> MonotonicMs {
        self.origin.elapsed().as_millis() as u64
    }

    fn time_of_day(&self) -> TimeOfDay {
        let now = chrono::Local::now();
        TimeOfDay {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }
}
