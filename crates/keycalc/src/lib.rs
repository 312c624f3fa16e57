//! keycalc - a keypad calculator state machine with a terminal front end
//!
//! The engine models a pocket calculator: keys are applied one at a time,
//! operators evaluate strictly left to right, and every value on screen is
//! rendered by a single canonical number formatter.
//!
//! # Layers
//!
//! - [`core`]: the [`Calculator`](core::Calculator) state machine, key
//!   [`Command`](core::Command)s, number formatting and the tape
//! - [`driver`]: one key-level interface over the engine and the terminal
//!   front end, with behaviour checks that run against either
//! - `tui`: ratatui keypad, input mapping and rendering (feature `tui`)
//! - [`config`], [`logging`], [`error`]: ambient plumbing for the binary
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.apply_all(Command::parse_sequence("12 + 7 - 1 =").unwrap());
//! assert_eq!(calc.display(), "18");
//!
//! // No operator precedence: 2 + 3 * 4 is (2 + 3) * 4
//! calc.apply_all(Command::parse_sequence("c 2 + 3 * 4 =").unwrap());
//! assert_eq!(calc.display(), "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, Verbosity};
    pub use crate::core::{
        format_number, parse_operand, BinaryOperator, Calculator, Command, MemoryOperation,
        Snapshot, Tape, TapeEntry, UnaryOperator,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver, TapeItem};
    pub use crate::error::{CalcError, CalcResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
