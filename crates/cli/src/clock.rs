//! Session clock - elapsed time since the desk opened.
//!
//! Independent of the queue: it ticks whether or not anybody is waiting.

use std::time::{Duration, Instant};

pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed session time rendered MM:SS.
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.started.elapsed())
    }
}

/// MM:SS with zero padding; the minute field widens past 99 if the desk
/// stays open that long.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(9)), "00:09");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "00:59");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "01:00");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "01:01");
        assert_eq!(format_elapsed(Duration::from_secs(3599)), "59:59");
    }

    #[test]
    fn test_format_elapsed_widens_past_an_hour() {
        assert_eq!(format_elapsed(Duration::from_secs(6000)), "100:00");
    }

    #[test]
    fn test_subsecond_precision_is_dropped() {
        assert_eq!(format_elapsed(Duration::from_millis(1999)), "00:01");
    }
}
