/// Represents a single acquired frame.
///
/// This object is short-lived and must be presented promptly. Holding the
/// surface texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Size of the acquired surface texture in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let texture = &self.surface_texture.texture;
        (texture.width(), texture.height())
    }
}
