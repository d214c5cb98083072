//! GPU rendering subsystem.
//!
//! One-time resource setup (geometry, program, vertex layout) and the
//! per-frame pass that clears, draws and presents.
//!
//! Convention:
//! - geometry is in NDC-like units centered on the origin
//! - the vertex shader applies a single combined transform uniform

mod geometry;
mod pass;
mod resources;
pub mod shader;
pub mod transform;

pub use geometry::{TRIANGLE, Vertex};
pub use resources::GraphicsResources;
pub use shader::{CompiledShader, ShaderBindings, ShaderError, UniformSlot};

pub(crate) use pass::draw_frame;
