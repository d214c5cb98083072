use std::sync::Once;

/// Filter applied when neither an explicit filter nor `RUST_LOG` is set.
///
/// wgpu and naga are chatty at info level, so they are held to warnings.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "perch_engine=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Verbose preset used by debug mode.
    pub fn verbose() -> Self {
        Self {
            env_filter: Some("debug,wgpu_core=warn,wgpu_hal=warn,naga=warn".to_string()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(DEFAULT_FILTER);
        }

        builder.write_style(config.write_style);

        // A second global logger may already be installed by a test harness.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::verbose());
        assert!(INIT.is_completed());
    }

    #[test]
    fn verbose_preset_sets_filter() {
        let cfg = LoggingConfig::verbose();
        assert!(cfg.env_filter.as_deref().is_some_and(|f| f.starts_with("debug")));
    }
}
