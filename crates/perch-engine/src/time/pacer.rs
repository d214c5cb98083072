use std::time::Duration;

/// Frame rate the host paces itself to when no other target is configured.
pub const DEFAULT_TARGET_FPS: f64 = 60.0;

/// Fraction of the budget that may be missing while a frame still counts as due.
const SLACK_FRACTION: f64 = 0.01;

/// Number of idle re-checks per frame budget.
const IDLE_CHECKS_PER_FRAME: u32 = 10;

/// Decides whether a loop iteration renders or idles.
///
/// The pacer compares the time since the last *presented* frame against a
/// fixed budget. It never catches up: after a stall the next frame is simply
/// due immediately, and the budget restarts from when it was presented.
#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: f64,
    slack: f64,
    idle_interval: Duration,
    /// `None` until the first frame is presented.
    last_frame: Option<f64>,
}

impl FramePacer {
    /// Creates a pacer for `target_fps` frames per second.
    ///
    /// Non-finite or non-positive targets fall back to [`DEFAULT_TARGET_FPS`].
    pub fn new(target_fps: f64) -> Self {
        let fps = if target_fps.is_finite() && target_fps > 0.0 {
            target_fps
        } else {
            log::warn!("invalid target fps {target_fps}; using {DEFAULT_TARGET_FPS}");
            DEFAULT_TARGET_FPS
        };

        let budget = 1.0 / fps;
        Self {
            budget,
            slack: budget * SLACK_FRACTION,
            idle_interval: Duration::from_secs_f64(budget) / IDLE_CHECKS_PER_FRAME,
            last_frame: None,
        }
    }

    /// Seconds allotted to one frame.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Bounded sleep taken when a check reports idle.
    pub fn idle_interval(&self) -> Duration {
        self.idle_interval
    }

    /// Time of the last presented frame, if any.
    pub fn last_frame_time(&self) -> Option<f64> {
        self.last_frame
    }

    /// Returns `true` if a frame is due at `now`.
    ///
    /// Always `true` before the first frame has been presented.
    pub fn should_render(&self, now: f64) -> bool {
        match self.last_frame {
            None => true,
            Some(last) => now - last + self.slack >= self.budget,
        }
    }

    /// Records that a frame sampled at `now` was presented.
    pub fn mark_rendered(&mut self, now: f64) {
        debug_assert!(
            self.last_frame.is_none_or(|last| now >= last),
            "frame time went backwards: {now} < {:?}",
            self.last_frame
        );
        self.last_frame = Some(now);
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── first frame ───────────────────────────────────────────────────────

    #[test]
    fn first_check_renders_at_time_zero() {
        let pacer = FramePacer::default();
        assert!(pacer.should_render(0.0));
    }

    #[test]
    fn first_check_renders_regardless_of_start_value() {
        let pacer = FramePacer::default();
        assert!(pacer.should_render(0.001));
        assert!(pacer.should_render(12_345.678));
    }

    // ── budget ────────────────────────────────────────────────────────────

    #[test]
    fn elapsed_near_budget_renders() {
        let mut pacer = FramePacer::new(60.0);
        pacer.mark_rendered(1.0);
        assert!(pacer.should_render(1.0 + 0.0166));
    }

    #[test]
    fn elapsed_well_under_budget_idles() {
        let mut pacer = FramePacer::new(60.0);
        pacer.mark_rendered(1.0);
        assert!(!pacer.should_render(1.0 + 0.005));
    }

    #[test]
    fn elapsed_past_budget_renders_once_without_catch_up() {
        let mut pacer = FramePacer::new(60.0);
        pacer.mark_rendered(1.0);

        // A long stall makes exactly one frame due, then the budget restarts.
        assert!(pacer.should_render(2.0));
        pacer.mark_rendered(2.0);
        assert!(!pacer.should_render(2.001));
    }

    #[test]
    fn idle_checks_do_not_move_last_frame() {
        let mut pacer = FramePacer::new(60.0);
        pacer.mark_rendered(0.5);
        for i in 0..5 {
            let _ = pacer.should_render(0.5 + f64::from(i) * 0.001);
        }
        assert_eq!(pacer.last_frame_time(), Some(0.5));
    }

    #[test]
    fn budget_matches_target() {
        let pacer = FramePacer::new(50.0);
        assert!((pacer.budget() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn invalid_target_falls_back_to_default() {
        assert_eq!(FramePacer::new(0.0).budget(), FramePacer::default().budget());
        assert_eq!(FramePacer::new(f64::NAN).budget(), FramePacer::default().budget());
        assert_eq!(FramePacer::new(-30.0).budget(), FramePacer::default().budget());
    }

    // ── idle interval ─────────────────────────────────────────────────────

    #[test]
    fn idle_interval_is_a_fraction_of_the_budget() {
        let pacer = FramePacer::new(60.0);
        let idle = pacer.idle_interval().as_secs_f64();
        assert!(idle > 0.0);
        assert!(idle < pacer.budget());
        assert!((idle - pacer.budget() / 10.0).abs() < 1e-6);
    }
}
