//! Window + lifecycle.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer, and
//! exposes the open → init → run → clean-up phases as distinct types.

mod config;
mod error;
mod handler;
mod lifecycle;
mod runtime;

pub use config::{HostConfig, WindowStyle};
pub use error::OpenError;
pub use lifecycle::{Lifecycle, TERMINATION_KEY};
pub use runtime::{Host, RunningHost};
