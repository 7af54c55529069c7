// src/logging.rs
use crate::error::NowafError;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Logs go to stderr; stdout carries only the generated request.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logger(verbose: bool) -> Result<(), NowafError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| NowafError::Config(format!("failed to initialise logger: {}", err)))
}
