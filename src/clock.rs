//! Session clock: converts wall-clock time into logical one-second ticks.
//!
//! The engine only defines what a tick does; this module decides how many
//! ticks are due. The clock lives inside the app struct, so it starts with
//! the game screen and is dropped with it.

use std::time::{Duration, Instant};

/// Tracks the instant ticks were last drained up to
pub struct SessionClock {
    mark: Instant,
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            mark: Instant::now(),
        }
    }

    /// Whole seconds elapsed since the previous drain.
    ///
    /// Advances the internal mark by exactly the returned number of seconds;
    /// the sub-second remainder is carried over, so ticks are neither lost
    /// nor duplicated. After a stall this catches up one tick per elapsed
    /// second rather than skipping time.
    pub fn due_ticks(&mut self) -> u64 {
        let elapsed = self.mark.elapsed().as_secs();
        if elapsed > 0 {
            self.mark += Duration::from_secs(elapsed);
        }
        elapsed
    }

    #[cfg(test)]
    fn backdated(by: Duration) -> Self {
        Self {
            mark: Instant::now() - by,
        }
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as zero-padded `MM:SS` (65 -> "01:05")
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(5), "00:05");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(300), "05:00");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn test_fresh_clock_has_no_due_ticks() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.due_ticks(), 0);
    }

    #[test]
    fn test_catches_up_one_tick_per_elapsed_second() {
        let mut clock = SessionClock::backdated(Duration::from_secs(3));
        assert_eq!(clock.due_ticks(), 3);
        // Fully drained; the next drain right away owes nothing
        assert_eq!(clock.due_ticks(), 0);
    }

    #[test]
    fn test_subsecond_remainder_not_counted() {
        let mut clock = SessionClock::backdated(Duration::from_millis(2500));
        assert_eq!(clock.due_ticks(), 2);
    }
}
