//! Calculator core: the state machine and everything it needs
//!
//! - `engine`: the [`Calculator`] state machine
//! - `operations`: binary, unary and memory operators
//! - `number`: the one canonical number formatter and the operand parser
//! - `command`: validated key presses
//! - `tape`: bounded log of completed evaluations

pub mod command;
pub mod engine;
pub mod number;
mod operations;
pub mod tape;

pub use command::Command;
pub use engine::{Calculator, Snapshot};
pub use number::{format_number, parse_operand};
pub use operations::{BinaryOperator, MemoryOperation, UnaryOperator};
pub use tape::{Tape, TapeEntry};
