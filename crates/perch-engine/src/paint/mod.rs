//! Paint model shared by the render loop and the GPU pass.
//!
//! Scope: color representation (linear premultiplied alpha).

pub mod color;

pub use color::Color;
