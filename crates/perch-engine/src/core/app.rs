use crate::coords::Viewport;
use crate::window::Lifecycle;

use super::ctx::FrameParams;

/// Result of asking the driver to draw one frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// The frame was drawn, presented and the device drained.
    Presented,
    /// Nothing was presented this time (transient surface condition).
    Skipped,
    /// The surface cannot be used any more; the host should terminate.
    Fatal,
}

/// Platform + GPU operations consumed by the render loop.
///
/// Implemented by the window runtime; tests provide their own.
pub trait FrameDriver {
    /// Drains pending window-system events, routing close requests and the
    /// termination gesture into `lifecycle`.
    fn poll_events(&mut self, lifecycle: &mut Lifecycle);

    /// Current framebuffer size in physical pixels.
    fn framebuffer_size(&self) -> Viewport;

    /// Clears, draws and presents one frame, then waits for the device.
    fn draw_frame(&mut self, frame: &FrameParams) -> FrameOutcome;

    /// Tells the window system the window is closing.
    ///
    /// Called once, on the iteration that observes termination. The default
    /// runs one last event pump, which sees the flag already set.
    fn release(&mut self, lifecycle: &mut Lifecycle) {
        self.poll_events(lifecycle);
    }
}
