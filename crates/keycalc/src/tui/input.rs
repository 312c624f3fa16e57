//! Keyboard input mapping
//!
//! Every key resolves to a [`KeyAction`]; calculator keys become the same
//! [`Command`]s a keypad click produces.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{BinaryOperator, Command, MemoryOperation, UnaryOperator};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator key
    Press(Command),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Terminals that report releases would otherwise press every key twice
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(Command::Memory(MemoryOperation::Clear)),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::map_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Command::Equals),
            KeyCode::Backspace => KeyAction::Press(Command::Backspace),
            KeyCode::Delete => KeyAction::Press(Command::ClearEntry),
            KeyCode::Esc => KeyAction::Press(Command::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a printable key to a calculator command
    #[must_use]
    pub fn map_char(c: char) -> Option<Command> {
        let command = match c {
            '0'..='9' => Command::Digit(c as u8 - b'0'),
            '.' | ',' => Command::Decimal,
            '+' => Command::Operator(BinaryOperator::Add),
            '-' => Command::Operator(BinaryOperator::Subtract),
            '*' | 'x' => Command::Operator(BinaryOperator::Multiply),
            '/' => Command::Operator(BinaryOperator::Divide),
            '%' => Command::Operator(BinaryOperator::Remainder),
            '=' => Command::Equals,
            'r' => Command::Unary(UnaryOperator::SquareRoot),
            's' => Command::Unary(UnaryOperator::Square),
            'i' => Command::Unary(UnaryOperator::Reciprocal),
            'n' => Command::ToggleSign,
            'm' => Command::Memory(MemoryOperation::Recall),
            'p' => Command::Memory(MemoryOperation::Add),
            'P' => Command::Memory(MemoryOperation::Subtract),
            _ => return None,
        };
        Some(command)
    }
}
