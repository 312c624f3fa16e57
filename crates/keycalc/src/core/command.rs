//! Validated input commands
//!
//! Every key, whether it comes from the keyboard, a keypad click or a batch
//! token on the command line, is turned into a [`Command`] before it reaches
//! the engine. Parsing is where invalid input is rejected; the engine only
//! ever sees well-formed commands.

use std::str::FromStr;

use crate::core::operations::{BinaryOperator, MemoryOperation, UnaryOperator};
use crate::error::{CalcError, CalcResult};

/// A single calculator key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(BinaryOperator),
    /// Equals
    Equals,
    /// Clear everything except memory
    Clear,
    /// Clear the current entry only
    ClearEntry,
    /// Erase the last typed character
    Backspace,
    /// Negate the current entry
    ToggleSign,
    /// Unary function on the display
    Unary(UnaryOperator),
    /// Memory register operation
    Memory(MemoryOperation),
}

impl Command {
    /// Creates a digit command, rejecting anything outside 0-9
    pub fn digit(d: u8) -> CalcResult<Self> {
        if d > 9 {
            return Err(CalcError::InvalidDigit(d));
        }
        Ok(Self::Digit(d))
    }

    /// Key label, as shown on the keypad
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Operator(op) => op.symbol().into(),
            Self::Equals => "=".into(),
            Self::Clear => "C".into(),
            Self::ClearEntry => "CE".into(),
            Self::Backspace => "⌫".into(),
            Self::ToggleSign => "±".into(),
            Self::Unary(op) => op.symbol().into(),
            Self::Memory(op) => op.symbol().into(),
        }
    }

    /// Parses a whitespace-separated key sequence
    ///
    /// Number literals are expanded into one key per character, so
    /// `"12.5 * 2 ="` yields `1 2 . 5 * 2 =`. Stops at the first bad token.
    pub fn parse_sequence(input: &str) -> CalcResult<Vec<Self>> {
        let mut commands = Vec::new();
        for token in input.split_whitespace() {
            if let Ok(command) = token.parse::<Self>() {
                commands.push(command);
                continue;
            }
            if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                for c in token.chars() {
                    commands.push(Self::from_char(c)?);
                }
                continue;
            }
            return Err(CalcError::unknown_token(token));
        }
        Ok(commands)
    }

    /// Maps a single character key
    pub fn from_char(c: char) -> CalcResult<Self> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let lower = token.trim().to_lowercase();
        let command = match lower.as_str() {
            d if d.len() == 1 && d.as_bytes()[0].is_ascii_digit() => {
                Self::Digit(d.as_bytes()[0] - b'0')
            }
            "." | "," => Self::Decimal,
            "+" => Self::Operator(BinaryOperator::Add),
            "-" => Self::Operator(BinaryOperator::Subtract),
            "*" | "x" | "×" => Self::Operator(BinaryOperator::Multiply),
            "/" | "÷" => Self::Operator(BinaryOperator::Divide),
            "%" | "mod" => Self::Operator(BinaryOperator::Remainder),
            "=" | "enter" => Self::Equals,
            "c" | "clear" | "ac" => Self::Clear,
            "ce" => Self::ClearEntry,
            "<-" | "bs" | "backspace" | "⌫" => Self::Backspace,
            "+/-" | "neg" | "±" => Self::ToggleSign,
            "sqrt" | "√" => Self::Unary(UnaryOperator::SquareRoot),
            "sq" | "x²" | "x^2" | "square" => Self::Unary(UnaryOperator::Square),
            "inv" | "1/x" | "reciprocal" => Self::Unary(UnaryOperator::Reciprocal),
            "mc" => Self::Memory(MemoryOperation::Clear),
            "mr" => Self::Memory(MemoryOperation::Recall),
            "m+" => Self::Memory(MemoryOperation::Add),
            "m-" => Self::Memory(MemoryOperation::Subtract),
            _ => return Err(CalcError::unknown_token(token)),
        };
        Ok(command)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
