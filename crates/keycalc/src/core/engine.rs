//! Calculator state machine
//!
//! The engine holds the typed entry, one pending operation and a memory
//! register. Every key press runs exactly one transition; callers re-read the
//! state afterwards to render it.
//!
//! Two modes drive most transitions:
//!
//! - **entry mode** (`overwrite == false`): digits and `.` append to the display
//! - **fresh mode** (`overwrite == true`): the next digit or `.` replaces it
//!
//! Evaluation is strictly left to right. Pressing a second operator resolves
//! the pending one first, so `3 + 4 + 5 =` shows `7` on the second `+` and
//! `12` on `=`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::command::Command;
use crate::core::number::{format_number, parse_display, parse_operand};
use crate::core::operations::{BinaryOperator, MemoryOperation, UnaryOperator};
use crate::core::tape::Tape;

/// Display text of a fresh calculator
const ZERO: &str = "0";

/// Observable calculator state, emitted after every transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current operand text
    pub display: String,
    /// Left-hand operand text, empty when nothing is pending
    pub pending_operand: String,
    /// Latched operator
    pub pending_operator: Option<BinaryOperator>,
    /// Whether the next digit replaces the display
    pub overwrite: bool,
    /// Memory register
    pub memory: f64,
}

/// Two `NaN` memory registers compare equal
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.display == other.display
            && self.pending_operand == other.pending_operand
            && self.pending_operator == other.pending_operator
            && self.overwrite == other.overwrite
            && (self.memory == other.memory || (self.memory.is_nan() && other.memory.is_nan()))
    }
}

/// Keypad calculator engine
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    pending_operand: String,
    pending_operator: Option<BinaryOperator>,
    overwrite: bool,
    memory: f64,
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in its start-of-session state
    #[must_use]
    pub fn new() -> Self {
        Self::with_tape(Tape::new())
    }

    /// Creates a calculator recording to the given tape
    #[must_use]
    pub fn with_tape(tape: Tape) -> Self {
        Self {
            display: ZERO.to_string(),
            pending_operand: String::new(),
            pending_operator: None,
            overwrite: false,
            memory: 0.0,
            tape,
        }
    }

    // ===== Accessors =====

    /// Current operand text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left-hand operand text, empty when nothing is pending
    #[must_use]
    pub fn pending_operand(&self) -> &str {
        &self.pending_operand
    }

    /// Latched operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.pending_operator
    }

    /// True in fresh mode
    #[must_use]
    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    /// Memory register value
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Completed evaluations
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Empties the tape; calculator state is untouched
    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// Owned copy of the observable state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            pending_operand: self.pending_operand.clone(),
            pending_operator: self.pending_operator,
            overwrite: self.overwrite,
            memory: self.memory,
        }
    }

    // ===== Dispatch =====

    /// Runs the transition for one key press
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(d) => self.enter_digit(d),
            Command::Decimal => self.enter_decimal_point(),
            Command::Operator(op) => self.select_operator(op),
            Command::Equals => self.confirm_equals(),
            Command::Clear => self.clear(),
            Command::ClearEntry => self.clear_entry(),
            Command::Backspace => self.backspace(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Unary(op) => self.apply_unary(op),
            Command::Memory(op) => self.memory_op(op),
        }
        trace!(
            key = %command,
            display = %self.display,
            pending = %self.pending_operand,
            operator = ?self.pending_operator,
            overwrite = self.overwrite,
            "transition"
        );
    }

    /// Runs a whole key sequence in order
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
    }

    // ===== Transitions =====

    /// Types a digit; `d` must be 0-9
    pub fn enter_digit(&mut self, d: u8) {
        debug_assert!(d <= 9, "digit out of range: {d}");
        let digit = char::from(b'0' + d.min(9));
        if self.overwrite || self.display == ZERO {
            self.display = digit.to_string();
            self.overwrite = false;
        } else if self.display == "-0" {
            self.display = format!("-{digit}");
        } else {
            self.display.push(digit);
        }
    }

    /// Types a decimal point; a second point in the same entry is ignored
    pub fn enter_decimal_point(&mut self) {
        if self.overwrite {
            self.display = "0.".to_string();
            self.overwrite = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Latches a binary operator, resolving any pending one first
    pub fn select_operator(&mut self, op: BinaryOperator) {
        let has_pending = !self.pending_operand.is_empty();

        // Operator pressed right after typing a bare `0` only swaps the
        // operator; the pending operation is not evaluated against that 0.
        // Observable behaviour, kept deliberately.
        if self.display == ZERO && has_pending && !self.overwrite {
            self.pending_operator = Some(op);
            return;
        }

        if has_pending && !self.overwrite {
            let result = format_number(self.evaluate());
            self.display.clone_from(&result);
            self.pending_operand = result;
        } else {
            self.pending_operand.clone_from(&self.display);
        }
        self.overwrite = true;
        self.pending_operator = Some(op);
    }

    /// Reduces the pending operation against the display value
    ///
    /// Without a parsable pending operand (or without an operator) the
    /// result is the display value itself.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let current = parse_display(&self.display);
        let Some(previous) = parse_operand(&self.pending_operand) else {
            return current;
        };
        let result = match self.pending_operator {
            Some(op) => op.apply(previous, current),
            None => current,
        };
        debug!(
            lhs = previous,
            rhs = current,
            operator = ?self.pending_operator,
            result,
            "evaluate"
        );
        result
    }

    /// Completes the pending operation; no-op when nothing is pending
    pub fn confirm_equals(&mut self) {
        let Some(op) = self.pending_operator else {
            return;
        };
        if self.pending_operand.is_empty() {
            return;
        }

        let result = format_number(self.evaluate());
        self.tape.record(
            format!("{} {} {}", self.pending_operand, op, self.display),
            result.clone(),
        );

        self.display = result;
        self.pending_operand.clear();
        self.pending_operator = None;
        self.overwrite = true;
    }

    /// Resets everything except memory and the tape
    pub fn clear(&mut self) {
        self.display = ZERO.to_string();
        self.pending_operand.clear();
        self.pending_operator = None;
        self.overwrite = true;
    }

    /// Resets the current entry only
    pub fn clear_entry(&mut self) {
        self.display = ZERO.to_string();
        self.overwrite = true;
    }

    /// Erases the last typed character; no-op in fresh mode
    pub fn backspace(&mut self) {
        if self.overwrite {
            return;
        }
        let len = self.display.chars().count();
        if len == 1 || (len == 2 && self.display.starts_with('-')) {
            self.display = ZERO.to_string();
            self.overwrite = true;
        } else {
            self.display.pop();
        }
    }

    /// Negates the display text; `0` and `NaN` are left alone
    pub fn toggle_sign(&mut self) {
        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else if self.display != ZERO && self.display != "NaN" {
            self.display.insert(0, '-');
        }
    }

    /// Applies a unary function to the display at once
    pub fn apply_unary(&mut self, op: UnaryOperator) {
        let value = op.apply(parse_display(&self.display));
        self.display = format_number(value);
        self.overwrite = true;
    }

    /// Runs a memory register operation
    pub fn memory_op(&mut self, op: MemoryOperation) {
        match op {
            MemoryOperation::Clear => self.memory = 0.0,
            MemoryOperation::Recall => self.display = format_number(self.memory),
            MemoryOperation::Add => self.memory += parse_display(&self.display),
            MemoryOperation::Subtract => self.memory -= parse_display(&self.display),
        }
        self.overwrite = true;
    }
}
