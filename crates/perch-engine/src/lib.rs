//! Perch engine crate.
//!
//! A minimal real-time rendering host: one borderless, always-on-top window,
//! one program drawing one triangle, and a frame-paced loop that runs until
//! Escape is pressed or the window is closed.
//!
//! Phases are distinct types: [`Host::open`] → [`Host::init`] →
//! [`RunningHost::run_loop`] → [`RunningHost::clean_up`].

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;

pub use window::{Host, HostConfig, OpenError, RunningHost};
