use winit::application::ApplicationHandler;
use winit::error::OsError;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::input::platform::translate_key_event;

use super::error::OpenError;
use super::lifecycle::Lifecycle;

/// Creates the host window once the event loop reports it is resumed.
///
/// winit 0.30 only creates windows from inside a running event loop, so
/// `Host::open` pumps the loop with this handler until the window exists.
pub(super) struct WindowOpener {
    attributes: Option<WindowAttributes>,
    created: Option<Result<Window, OsError>>,
}

impl WindowOpener {
    pub(super) fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes: Some(attributes),
            created: None,
        }
    }

    pub(super) fn is_done(&self) -> bool {
        self.created.is_some()
    }

    pub(super) fn into_window(self) -> Result<Window, OpenError> {
        match self.created {
            Some(Ok(window)) => Ok(window),
            Some(Err(e)) => Err(OpenError::Window(e)),
            None => Err(OpenError::NotResumed),
        }
    }
}

impl ApplicationHandler for WindowOpener {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(attrs) = self.attributes.take() {
            self.created = Some(event_loop.create_window(attrs));
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

/// Routes window-system events for one pump into the lifecycle.
///
/// Built fresh for every pump with an explicit `&mut Lifecycle`, so the
/// handler never needs to reach the host through shared state.
pub(super) struct EventObserver<'a> {
    lifecycle: &'a mut Lifecycle,
    window_id: WindowId,
}

impl<'a> EventObserver<'a> {
    pub(super) fn new(lifecycle: &'a mut Lifecycle, window_id: WindowId) -> Self {
        Self {
            lifecycle,
            window_id,
        }
    }

    /// Mirrors the flag into the window system so later pumps report exit.
    fn mirror_close(&self, event_loop: &ActiveEventLoop) {
        if self.lifecycle.should_close() && !event_loop.exiting() {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for EventObserver<'_> {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, _: StartCause) {
        // Picks up a close requested outside any pump.
        self.mirror_close(event_loop);
    }

    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window_id {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.lifecycle.close(),
            WindowEvent::KeyboardInput { event, .. } => {
                let input = translate_key_event(event);
                if !self.lifecycle.observe_key(input) {
                    log::trace!("ignored key input {input:?}");
                }
            }
            _ => {}
        }

        self.mirror_close(event_loop);
    }
}
