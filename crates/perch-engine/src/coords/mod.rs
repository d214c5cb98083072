//! Framebuffer geometry.
//!
//! Sizes here are physical pixels as reported by the window system; the
//! projection works in NDC scaled by the framebuffer aspect ratio.

mod viewport;

pub use viewport::Viewport;
