/// Framebuffer size in physical pixels.
///
/// Either dimension may be zero while the window is minimized or being
/// restored on some platforms; nothing should be drawn into such a viewport.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `width / height`, or `None` for an empty viewport.
    #[inline]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}
