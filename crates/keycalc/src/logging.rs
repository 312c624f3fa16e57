//! Log subscriber setup for the `keycalc` binary
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. The filter comes from `RUST_LOG` when set, else from the
//! config's `log_level`, else from the `-q`/`-v` flags.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{CalcConfig, Verbosity};
use crate::error::{CalcError, CalcResult};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error (batch mode)
    Stderr,
    /// Append to a file (interactive mode)
    File(PathBuf),
    /// Nowhere; the terminal UI owns stdout and stderr
    Disabled,
}

impl LogTarget {
    /// Picks the target for a run mode
    #[must_use]
    pub fn for_mode(interactive: bool, config: &CalcConfig) -> Self {
        match (&config.log_file, interactive) {
            (Some(path), _) => Self::File(path.clone()),
            (None, false) => Self::Stderr,
            (None, true) => Self::Disabled,
        }
    }
}

/// Resolves the filter directive without touching the environment
#[must_use]
pub fn filter_directive(verbosity: Verbosity, config: &CalcConfig) -> String {
    config
        .log_level
        .clone()
        .unwrap_or_else(|| verbosity.level().to_string())
}

/// Installs the global subscriber
pub fn init(target: &LogTarget, verbosity: Verbosity, config: &CalcConfig) -> CalcResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(verbosity, config)))
        .map_err(|e| CalcError::config(format!("invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| CalcError::config(format!("logger already installed: {e}")))
}
