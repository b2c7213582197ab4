//! Logger setup for the command-line tool
//!
//! The library only emits through the `log` facade; the binary decides where
//! records go.

use crate::io::error::{GenerationError, Result};
use flexi_logger::{Logger, LoggerHandle, default_format};

/// Start logging to stderr with a specification such as `"info"` or
/// `"warn, edgetile::algorithm = trace"`
///
/// The returned handle must be kept alive for the duration of the run.
///
/// # Errors
///
/// Returns `Logging` if the specification cannot be parsed or a logger is
/// already installed
pub fn init_logger(spec: &str) -> Result<LoggerHandle> {
    Logger::try_with_str(spec)
        .and_then(|logger| logger.format(default_format).start())
        .map_err(|e| GenerationError::Logging {
            reason: e.to_string(),
        })
}
