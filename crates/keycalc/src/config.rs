//! Front-end configuration
//!
//! Loaded from an optional YAML file; every field has a default so a
//! partial file (or none at all) is fine.
//!
//! ```yaml
//! tape_capacity: 50
//! show_keypad: true
//! show_tape: false
//! log_level: debug
//! log_file: /tmp/keycalc.log
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Tape;
use crate::error::{CalcError, CalcResult};

/// Verbosity level chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Default output
    #[default]
    Normal,
    /// Per-evaluation debug logging
    Verbose,
    /// Per-keystroke trace logging
    Trace,
}

impl Verbosity {
    /// Builds a verbosity from `-q` and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// Log level used when neither `RUST_LOG` nor the config names one
    #[must_use]
    pub const fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Trace => "trace",
        }
    }
}

/// keycalc configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Maximum number of tape entries kept (0 disables the tape)
    pub tape_capacity: usize,
    /// Show the clickable keypad panel
    pub show_keypad: bool,
    /// Show the tape panel
    pub show_tape: bool,
    /// Log filter directive, e.g. `debug` or `keycalc=trace`
    pub log_level: Option<String>,
    /// File that receives logs in interactive mode
    pub log_file: Option<PathBuf>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            tape_capacity: Tape::DEFAULT_CAPACITY,
            show_keypad: true,
            show_tape: true,
            log_level: None,
            log_file: None,
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates a YAML config file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates YAML text
    pub fn from_yaml(text: &str) -> CalcResult<Self> {
        // An empty file deserializes to unit, not to a map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks values serde cannot
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                return Err(CalcError::config("log_level must not be empty"));
            }
        }
        Ok(())
    }

    /// Builds the tape this config asks for
    #[must_use]
    pub fn tape(&self) -> Tape {
        Tape::with_capacity(self.tape_capacity)
    }

    /// Set tape capacity
    #[must_use]
    pub const fn with_tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = capacity;
        self
    }

    /// Set keypad visibility
    #[must_use]
    pub const fn with_keypad(mut self, show: bool) -> Self {
        self.show_keypad = show;
        self
    }

    /// Set tape visibility
    #[must_use]
    pub const fn with_tape(mut self, show: bool) -> Self {
        self.show_tape = show;
        self
    }

    /// Set log filter directive
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}
