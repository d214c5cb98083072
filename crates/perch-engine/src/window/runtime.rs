use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{FrameDriver, FrameOutcome, FrameParams, LoopStats, RenderLoop};
use crate::device::Gpu;
use crate::render::{self, GraphicsResources};
use crate::time::{FrameClock, FramePacer};

use super::config::HostConfig;
use super::error::OpenError;
use super::handler::{EventObserver, WindowOpener};
use super::lifecycle::Lifecycle;

/// Pumps allowed for the event loop to deliver `resumed` during `open`.
const OPEN_PUMP_ATTEMPTS: usize = 8;

/// Per-pump wait while the window is being created.
const OPEN_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

#[self_referencing]
struct Stage {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// An opened window without graphics resources.
///
/// Produced by [`Host::open`]; consumed by [`Host::init`].
pub struct Host {
    config: HostConfig,
    lifecycle: Lifecycle,
    clock: FrameClock,
    event_loop: EventLoop<()>,
    window: Window,
}

impl Host {
    /// Connects to the window system and creates the host window.
    pub fn open(config: HostConfig) -> Result<Self, OpenError> {
        let clock = FrameClock::new();
        let mut event_loop = EventLoop::new()?;

        let style = config.style();
        log::info!(
            "opening {}x{} window at ({}, {}) {:?}",
            config.size.width,
            config.size.height,
            config.position.x,
            config.position.y,
            style
        );

        let mut opener = WindowOpener::new(config.window_attributes());
        for _ in 0..OPEN_PUMP_ATTEMPTS {
            let status = event_loop.pump_app_events(Some(OPEN_PUMP_TIMEOUT), &mut opener);
            if opener.is_done() {
                break;
            }
            if let PumpStatus::Exit(code) = status {
                log::warn!("event loop exited with {code} before the window was created");
                break;
            }
        }

        let window = opener.into_window()?;
        log::debug!("window {:?} created", window.id());

        Ok(Self {
            config,
            lifecycle: Lifecycle::new(),
            clock,
            event_loop,
            window,
        })
    }

    /// Requests termination.
    ///
    /// The loop exits on its next check, and that check runs one more event
    /// pump so the window system sees the window closing.
    pub fn close(&mut self) {
        self.lifecycle.close();
    }

    /// Binds the graphics context to the window and creates all device resources.
    ///
    /// Consumes the opened host, so resources are created exactly once.
    pub fn init(self) -> Result<RunningHost> {
        let Host {
            config,
            lifecycle,
            clock,
            event_loop,
            window,
        } = self;

        let window_id = window.id();
        let gpu_init = config.gpu_init();

        let stage = StageTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to bind a graphics context to the window")?;

        let resources = stage
            .with_gpu(|gpu| GraphicsResources::new(gpu.device(), gpu.surface_format()))
            .context("failed to initialize graphics resources")?;

        let render_loop = RenderLoop::new(
            FramePacer::new(config.target_fps),
            clock,
            config.clear_color,
        );

        log::info!("graphics initialized");

        Ok(RunningHost {
            lifecycle,
            event_loop,
            window_id,
            resources,
            stage,
            render_loop,
        })
    }
}

/// A window with a bound graphics context and initialized resources.
pub struct RunningHost {
    lifecycle: Lifecycle,
    event_loop: EventLoop<()>,
    window_id: WindowId,
    resources: GraphicsResources,
    stage: Stage,
    render_loop: RenderLoop<FrameClock>,
}

impl RunningHost {
    /// Requests termination.
    ///
    /// The loop exits on its next check, and that check runs one more event
    /// pump so the window system sees the window closing.
    pub fn close(&mut self) {
        self.lifecycle.close();
    }

    /// Runs the paced render loop until termination is requested.
    pub fn run_loop(&mut self) -> LoopStats {
        let mut driver = HostDriver {
            event_loop: &mut self.event_loop,
            window_id: self.window_id,
            stage: &mut self.stage,
            resources: &self.resources,
        };

        self.render_loop.run(&mut driver, &mut self.lifecycle)
    }

    /// Releases device resources, destroys the window and disconnects from
    /// the window system.
    pub fn clean_up(self) {
        if !self.render_loop.is_terminated() {
            log::warn!("cleaning up before the render loop terminated");
        }

        let RunningHost {
            event_loop,
            resources,
            stage,
            ..
        } = self;

        drop(resources);
        // The surface borrows the window, so the stage drops it first.
        drop(stage);
        drop(event_loop);

        log::info!("window destroyed");
    }
}

/// Binds the live window, GPU and resources to the render loop's driver seam.
struct HostDriver<'a> {
    event_loop: &'a mut EventLoop<()>,
    window_id: WindowId,
    stage: &'a mut Stage,
    resources: &'a GraphicsResources,
}

impl FrameDriver for HostDriver<'_> {
    fn poll_events(&mut self, lifecycle: &mut Lifecycle) {
        let mut observer = EventObserver::new(lifecycle, self.window_id);
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut observer);

        if let PumpStatus::Exit(code) = status {
            log::debug!("window system reported exit ({code})");
            lifecycle.close();
        }
    }

    fn framebuffer_size(&self) -> Viewport {
        self.stage.with_window(|w| w.inner_size()).into()
    }

    fn draw_frame(&mut self, frame: &FrameParams) -> FrameOutcome {
        let resources = self.resources;
        self.stage.with_mut(|fields| {
            let size = PhysicalSize::new(frame.viewport.width, frame.viewport.height);
            if fields.gpu.size() != size {
                fields.gpu.resize(size);
            }
            render::draw_frame(fields.window, fields.gpu, resources, frame)
        })
    }
}
