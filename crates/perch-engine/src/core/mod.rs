//! Core render loop.
//!
//! This module defines the seam between the paced loop and the platform/GPU
//! side that actually polls events and presents frames. The loop only sees
//! the [`FrameDriver`] trait and a [`Clock`](crate::time::Clock), so its
//! state machine runs the same against a real window or a test double.

mod app;
mod ctx;
mod render_loop;

pub use app::{FrameDriver, FrameOutcome};
pub use ctx::FrameParams;
pub use render_loop::{LoopState, LoopStats, RenderLoop, Step};
