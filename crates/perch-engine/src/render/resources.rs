use anyhow::{Context, Result};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::geometry::{TRIANGLE, Vertex};
use super::shader::{CompiledShader, FRAGMENT_ENTRY, ShaderBindings, TRIANGLE_SHADER, VERTEX_ENTRY};

const TRANSFORM_SIZE: u64 = std::mem::size_of::<[f32; 16]>() as u64;

/// Device resources created once after the context is bound.
///
/// Every handle is an owning wgpu object and is released when this value is
/// dropped, on every exit path.
pub struct GraphicsResources {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,

    transform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    pipeline: wgpu::RenderPipeline,
    bindings: ShaderBindings,
}

impl GraphicsResources {
    /// Uploads the geometry, compiles the program and builds the vertex layout.
    ///
    /// Must run once; calling it again allocates a second set of resources.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Result<Self> {
        // Geometry.
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("perch triangle vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::debug!("uploaded {} vertices", TRIANGLE.len());

        // Program.
        let compiled = CompiledShader::compile(TRIANGLE_SHADER).context("triangle shader")?;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("perch triangle shader"),
            source: wgpu::ShaderSource::Wgsl(compiled.source().into()),
        });

        // Locations.
        let bindings = compiled.resolve().context("triangle shader")?;
        anyhow::ensure!(
            bindings.transform.group == 0,
            "transform uniform must live in bind group 0, found group {}",
            bindings.transform.group
        );
        log::debug!("resolved shader bindings {bindings:?}");

        let transform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("perch transform ubo"),
            contents: bytemuck::cast_slice(&Mat4::IDENTITY.to_cols_array()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("perch transform bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: bindings.transform.binding,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(TRANSFORM_SIZE),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("perch transform bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: bindings.transform.binding,
                resource: transform_buffer.as_entire_binding(),
            }],
        });

        // Vertex layout + pipeline.
        let attributes = Vertex::attributes(bindings.position, bindings.color);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("perch triangle pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("perch triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout(&attributes)],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(Self {
            vertex_buffer,
            vertex_count: TRIANGLE.len() as u32,
            transform_buffer,
            bind_group,
            pipeline,
            bindings,
        })
    }

    /// Uploads the combined transform to the uniform slot.
    pub(crate) fn write_transform(&self, queue: &wgpu::Queue, transform: &Mat4) {
        queue.write_buffer(
            &self.transform_buffer,
            0,
            bytemuck::cast_slice(&transform.to_cols_array()),
        );
    }

    /// Binds the program, transform and vertex layout, and draws every vertex.
    pub(crate) fn record_draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(self.bindings.transform.group, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}
