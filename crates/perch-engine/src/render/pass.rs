use winit::window::Window;

use crate::core::{FrameOutcome, FrameParams};
use crate::device::{Gpu, SurfaceErrorAction};

use super::GraphicsResources;

/// Clears, draws the triangle with `frame.transform`, presents, and waits for
/// the device to go idle.
pub(crate) fn draw_frame(
    window: &Window,
    gpu: &mut Gpu<'_>,
    resources: &GraphicsResources,
    frame: &FrameParams,
) -> FrameOutcome {
    let mut gpu_frame = match gpu.begin_frame() {
        Ok(f) => f,
        Err(err) => {
            log::debug!("surface error: {err:?}");
            let action = gpu.handle_surface_error(err);
            return match action {
                SurfaceErrorAction::Fatal => FrameOutcome::Fatal,
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                    FrameOutcome::Skipped
                }
            };
        }
    };

    resources.write_transform(gpu.queue(), &frame.transform);

    // The acquired texture is authoritative for the viewport extent.
    let (width, height) = gpu_frame.size();

    {
        let mut rpass = gpu_frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("perch frame pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &gpu_frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(frame.clear_color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_viewport(0.0, 0.0, width as f32, height as f32, 0.0, 1.0);
        resources.record_draw(&mut rpass);
    }

    window.pre_present_notify();
    gpu.present(gpu_frame);
    gpu.finish();

    FrameOutcome::Presented
}
