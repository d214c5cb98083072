use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

/// One vertex of the static geometry: 2D position + RGB color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub col: [f32; 3],
}

/// The triangle uploaded once at init and drawn every frame.
///
/// Centered on y; the centroid sits slightly left of the origin, at
/// `x = -0.433 / 3`, so the rotation sweeps it in a small circle.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex { pos: [-0.433_012_7, -0.5], col: [1.0, 0.0, 0.0] },
    Vertex { pos: [0.433_012_7, 0.0], col: [0.0, 1.0, 0.0] },
    Vertex { pos: [-0.433_012_7, 0.5], col: [0.0, 0.0, 1.0] },
];

impl Vertex {
    pub const STRIDE: u64 = size_of::<Vertex>() as u64;

    /// Vertex attributes for the given shader input locations.
    ///
    /// Offsets are the byte offsets of `pos` and `col` within the record.
    pub fn attributes(position: u32, color: u32) -> [wgpu::VertexAttribute; 2] {
        [
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: offset_of!(Vertex, pos) as u64,
                shader_location: position,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: offset_of!(Vertex, col) as u64,
                shader_location: color,
            },
        ]
    }

    pub fn layout(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 20);
        assert_eq!(offset_of!(Vertex, pos), 0);
        assert_eq!(offset_of!(Vertex, col), 8);
    }

    #[test]
    fn attributes_use_resolved_locations() {
        let [pos, col] = Vertex::attributes(3, 7);
        assert_eq!(pos.shader_location, 3);
        assert_eq!(pos.offset, 0);
        assert_eq!(pos.format, wgpu::VertexFormat::Float32x2);
        assert_eq!(col.shader_location, 7);
        assert_eq!(col.offset, 8);
        assert_eq!(col.format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn triangle_centroid_is_centered_on_y_and_left_of_origin() {
        let x: f32 = TRIANGLE.iter().map(|v| v.pos[0]).sum::<f32>() / 3.0;
        let y: f32 = TRIANGLE.iter().map(|v| v.pos[1]).sum::<f32>() / 3.0;
        assert!(y.abs() < 1e-6);
        assert!((x + 0.144_337_6).abs() < 1e-6, "x = {x}");
    }

    #[test]
    fn triangle_casts_to_bytes() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE);
        assert_eq!(bytes.len(), 3 * Vertex::STRIDE as usize);
    }
}
