use std::time::{Duration, Instant};

/// Time source consumed by the render loop.
///
/// `now` is expressed in seconds since the clock was created. The loop never
/// touches `Instant` directly so that pacing can be driven by a fake clock.
pub trait Clock {
    /// Seconds elapsed since the clock started. Monotonic.
    fn now(&self) -> f64;

    /// Blocks the calling thread for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Monotonic wall clock anchored at construction.
///
/// Created once per process (or per render loop); the elapsed seconds double as
/// the rotation angle of the rendered transform.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    /// Creates a new clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn now(&self) -> f64 {
        Instant::now()
            .saturating_duration_since(self.start)
            .as_secs_f64()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_starts_near_zero_and_is_monotonic() {
        let clock = FrameClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn sleep_advances_now() {
        let mut clock = FrameClock::new();
        let before = clock.now();
        clock.sleep(Duration::from_millis(2));
        assert!(clock.now() - before >= 0.002);
    }
}
