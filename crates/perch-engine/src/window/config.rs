use winit::dpi::{LogicalPosition, LogicalSize};
use winit::window::{Window, WindowAttributes, WindowLevel};

use crate::device::GpuInit;
use crate::paint::Color;
use crate::time::DEFAULT_TARGET_FPS;

/// Construction-time window style.
///
/// Derived from [`HostConfig`]; immutable once the window exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowStyle {
    pub decorated: bool,
    pub always_on_top: bool,
    pub transparent: bool,
}

/// Host configuration.
///
/// `debug` only affects the window backing: debug windows are opaque so the
/// cleared framebuffer is visible against the desktop.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub title: String,

    /// Window content size in logical pixels.
    pub size: LogicalSize<f64>,

    /// Window position relative to the primary display origin, logical pixels.
    pub position: LogicalPosition<f64>,

    pub debug: bool,
    pub target_fps: f64,
    pub clear_color: Color,
    pub gpu: GpuInit,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "perch".to_string(),
            size: LogicalSize::new(500.0, 500.0),
            position: LogicalPosition::new(100.0, 300.0),
            debug: false,
            target_fps: DEFAULT_TARGET_FPS,
            clear_color: Color::transparent(),
            gpu: GpuInit::default(),
        }
    }
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn style(&self) -> WindowStyle {
        WindowStyle {
            decorated: false,
            always_on_top: true,
            transparent: !self.debug,
        }
    }

    /// Builds the winit attributes for the host window.
    pub fn window_attributes(&self) -> WindowAttributes {
        let style = self.style();
        let level = if style.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size)
            .with_position(self.position)
            .with_resizable(false)
            .with_decorations(style.decorated)
            .with_window_level(level)
            .with_transparent(style.transparent)
    }

    /// GPU parameters matching the window style.
    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            transparent: self.style().transparent,
            ..self.gpu.clone()
        }
    }
}
