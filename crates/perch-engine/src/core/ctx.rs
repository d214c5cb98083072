use glam::Mat4;

use crate::coords::Viewport;
use crate::paint::Color;

/// Everything the driver needs to produce one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameParams {
    /// Full framebuffer; never empty.
    pub viewport: Viewport,
    pub clear_color: Color,

    /// Combined projection * rotation transform.
    pub transform: Mat4,

    /// Clock time the frame was sampled at, in seconds.
    pub time: f64,
}
