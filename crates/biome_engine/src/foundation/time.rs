//! Frame timing

/// Frame clock driven by an external time source
///
/// Timestamps come from the windowing system (seconds since it was
/// initialised) so the clock itself never reads the OS time. Delta time is
/// always `now - last`.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: f64,
    delta_time: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock whose first frame is measured from `start`
    pub fn new(start: f64) -> Self {
        Self {
            last_frame: start,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance to `now` and return the elapsed seconds since the last tick
    pub fn tick(&mut self, now: f64) -> f64 {
        self.delta_time = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Seconds elapsed during the last tick
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Timestamp of the last tick
    pub fn last_frame(&self) -> f64 {
        self.last_frame
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_now_minus_last() {
        let mut clock = FrameClock::new(1.0);
        assert_eq!(clock.tick(1.25), 0.25);
        assert_eq!(clock.tick(2.0), 0.75);
        assert_eq!(clock.last_frame(), 2.0);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_same_timestamp_gives_zero_delta() {
        let mut clock = FrameClock::new(3.0);
        assert_eq!(clock.tick(3.0), 0.0);
        assert_eq!(clock.delta_time(), 0.0);
    }
}
