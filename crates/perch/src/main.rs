use std::process::ExitCode;

use perch_engine::logging::{LoggingConfig, init_logging};
use perch_engine::{Host, HostConfig};

/// Exit code when graphics initialization fails after the window opened.
const INIT_FAILURE: u8 = 3;

/// Command-line switches.
///
/// `debug` only selects the opaque window backing. Log verbosity is separate:
/// `--verbose`, or `RUST_LOG` for anything finer.
#[derive(Debug, Default, PartialEq, Eq)]
struct Switches {
    debug: bool,
    verbose: bool,
}

impl Switches {
    fn parse(args: impl IntoIterator<Item = String>, debug_env: Option<&str>) -> Self {
        let mut switches = Self {
            debug: debug_env == Some("1"),
            verbose: false,
        };
        for arg in args {
            match arg.as_str() {
                "--debug" => switches.debug = true,
                "--verbose" => switches.verbose = true,
                _ => {}
            }
        }
        switches
    }

    fn from_env() -> Self {
        let debug_env = std::env::var("PERCH_DEBUG").ok();
        Self::parse(std::env::args().skip(1), debug_env.as_deref())
    }
}

fn main() -> ExitCode {
    let switches = Switches::from_env();
    init_logging(if switches.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    });

    let config = HostConfig::new()
        .with_title("perch")
        .with_debug(switches.debug);

    let host = match Host::open(config) {
        Ok(host) => host,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let mut running = match host.init() {
        Ok(running) => running,
        Err(e) => {
            log::error!("{e:#}");
            return ExitCode::from(INIT_FAILURE);
        }
    };

    running.run_loop();
    running.clean_up();

    ExitCode::SUCCESS
}
