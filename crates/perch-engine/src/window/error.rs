use thiserror::Error;
use winit::error::{EventLoopError, OsError};

/// Fatal failure while opening the host window.
///
/// Each variant maps to a distinct process exit code; the caller must not
/// continue to `init` after any of them.
#[derive(Error, Debug)]
pub enum OpenError {
    /// The window system connection could not be established.
    #[error("failed to initialize the window system: {0}")]
    WindowSystem(#[from] EventLoopError),

    /// The window system refused to create the window.
    #[error("failed to create the window: {0}")]
    Window(#[from] OsError),

    /// The event loop never became ready to create windows.
    #[error("window system did not resume; no window was created")]
    NotResumed,
}

impl OpenError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            OpenError::WindowSystem(_) => 1,
            OpenError::Window(_) | OpenError::NotResumed => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_creation_failures_share_exit_code() {
        assert_eq!(OpenError::NotResumed.exit_code(), 2);
    }

    #[test]
    fn window_system_failure_exit_code() {
        let err = OpenError::from(EventLoopError::RecreationAttempt);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("failed to initialize the window system"));
    }
}
