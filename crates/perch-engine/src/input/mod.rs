//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The window layer translates platform events into `KeyInput`s; the only
//! consumer in the engine is the lifecycle's termination gesture.

mod types;

pub(crate) mod platform;

pub use types::{Key, KeyInput, KeyState};
