use crate::paint::Color;
use crate::render::transform::frame_transform;
use crate::time::{Clock, FramePacer};
use crate::window::Lifecycle;

use super::app::{FrameDriver, FrameOutcome};
use super::ctx::FrameParams;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// What a single iteration did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    /// Not due yet; slept for the idle interval.
    Idle,
    /// A frame was presented.
    Rendered,
    /// Due, but nothing was presented (empty framebuffer or surface hiccup).
    Skipped,
    /// Termination observed; the loop is finished.
    Terminated,
}

/// Counters reported when the loop terminates.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LoopStats {
    pub iterations: u64,
    pub frames_rendered: u64,
    pub frames_skipped: u64,
    pub idle_sleeps: u64,
}

/// Frame-paced render loop.
///
/// Single-threaded: the caller's thread owns the driver, and the only
/// suspension point is the bounded idle sleep.
pub struct RenderLoop<C: Clock> {
    pacer: FramePacer,
    clock: C,
    clear_color: Color,
    state: LoopState,
    stats: LoopStats,
}

impl<C: Clock> RenderLoop<C> {
    pub fn new(pacer: FramePacer, clock: C, clear_color: Color) -> Self {
        Self {
            pacer,
            clock,
            clear_color,
            state: LoopState::Running,
            stats: LoopStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == LoopState::Terminated
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Iterates until termination and returns the final counters.
    pub fn run<D: FrameDriver>(&mut self, driver: &mut D, lifecycle: &mut Lifecycle) -> LoopStats {
        log::info!(
            "render loop running at {:.1} fps budget",
            1.0 / self.pacer.budget()
        );

        while self.step(driver, lifecycle) != Step::Terminated {}

        log::info!("render loop terminated: {:?}", self.stats);
        self.stats
    }

    /// Runs one iteration.
    pub fn step<D: FrameDriver>(&mut self, driver: &mut D, lifecycle: &mut Lifecycle) -> Step {
        if self.state == LoopState::Terminated {
            return Step::Terminated;
        }
        if lifecycle.should_close() {
            self.state = LoopState::Terminated;
            driver.release(lifecycle);
            return Step::Terminated;
        }

        self.stats.iterations += 1;

        let now = self.clock.now();
        if !self.pacer.should_render(now) {
            self.idle();
            return Step::Idle;
        }

        // Input is only observed on iterations that render.
        driver.poll_events(lifecycle);

        let viewport = driver.framebuffer_size();
        let Some(aspect) = viewport.aspect_ratio() else {
            log::trace!(
                "framebuffer is {}x{}; skipping frame",
                viewport.width,
                viewport.height
            );
            self.stats.frames_skipped += 1;
            self.idle();
            return Step::Skipped;
        };

        let frame = FrameParams {
            viewport,
            clear_color: self.clear_color,
            transform: frame_transform(now as f32, aspect),
            time: now,
        };

        match driver.draw_frame(&frame) {
            FrameOutcome::Presented => {
                self.pacer.mark_rendered(now);
                self.stats.frames_rendered += 1;
                Step::Rendered
            }
            FrameOutcome::Skipped => {
                self.stats.frames_skipped += 1;
                self.idle();
                Step::Skipped
            }
            FrameOutcome::Fatal => {
                log::error!("surface is unusable; closing");
                self.stats.frames_skipped += 1;
                lifecycle.close();
                Step::Skipped
            }
        }
    }

    fn idle(&mut self) {
        self.stats.idle_sleeps += 1;
        self.clock.sleep(self.pacer.idle_interval());
    }
}
