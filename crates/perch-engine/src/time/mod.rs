//! Time subsystem.
//!
//! Provides testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per render loop, sampled once per iteration
//! - one `FramePacer` deciding whether the sampled instant is due for a frame

mod frame_clock;
mod pacer;

pub use frame_clock::{Clock, FrameClock};
pub use pacer::{FramePacer, DEFAULT_TARGET_FPS};
