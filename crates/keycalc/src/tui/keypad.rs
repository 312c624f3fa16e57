//! Clickable keypad for the terminal calculator
//!
//! The keypad is both the pointer input surface (mouse clicks are hit-tested
//! into button commands) and visual feedback for the keyboard (the button for
//! the last key pressed is highlighted).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{BinaryOperator, Command, MemoryOperation, UnaryOperator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: String,
    /// Command sent when the button is clicked
    pub command: Command,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a button for a command, labelled the way the command prints
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self {
            label: command.label(),
            command,
            pressed: false,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.command {
            Command::Digit(_) | Command::Decimal | Command::ToggleSign => {
                Style::default().fg(Color::White)
            }
            Command::Operator(_) => Style::default().fg(Color::Yellow),
            Command::Unary(_) => Style::default().fg(Color::LightYellow),
            Command::Equals => Style::default().fg(Color::Green),
            Command::Clear | Command::ClearEntry | Command::Backspace => {
                Style::default().fg(Color::Red)
            }
            Command::Memory(_) => Style::default().fg(Color::Magenta),
        }
    }
}

/// The keypad layout - a 7x4 grid of buttons
/// ```text
/// [MC] [MR] [M+] [M-]
/// [ %] [ √] [x²] [1/x]
/// [ C] [CE] [ ⌫] [ /]
/// [ 7] [ 8] [ 9] [ *]
/// [ 4] [ 5] [ 6] [ -]
/// [ 1] [ 2] [ 3] [ +]
/// [ ±] [ 0] [ .] [ =]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let commands = [
            // Row 1: memory
            Command::Memory(MemoryOperation::Clear),
            Command::Memory(MemoryOperation::Recall),
            Command::Memory(MemoryOperation::Add),
            Command::Memory(MemoryOperation::Subtract),
            // Row 2: % and unary functions
            Command::Operator(BinaryOperator::Remainder),
            Command::Unary(UnaryOperator::SquareRoot),
            Command::Unary(UnaryOperator::Square),
            Command::Unary(UnaryOperator::Reciprocal),
            // Row 3: editing
            Command::Clear,
            Command::ClearEntry,
            Command::Backspace,
            Command::Operator(BinaryOperator::Divide),
            // Row 4: 7 8 9 *
            Command::Digit(7),
            Command::Digit(8),
            Command::Digit(9),
            Command::Operator(BinaryOperator::Multiply),
            // Row 5: 4 5 6 -
            Command::Digit(4),
            Command::Digit(5),
            Command::Digit(6),
            Command::Operator(BinaryOperator::Subtract),
            // Row 6: 1 2 3 +
            Command::Digit(1),
            Command::Digit(2),
            Command::Digit(3),
            Command::Operator(BinaryOperator::Add),
            // Row 7: ± 0 . =
            Command::ToggleSign,
            Command::Digit(0),
            Command::Decimal,
            Command::Equals,
        ];

        Self {
            buttons: commands.into_iter().map(KeypadButton::new).collect(),
            cols: 4,
            rows: 7,
        }
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Finds the button that sends `command`
    #[must_use]
    pub fn find_button(&self, command: Command) -> Option<usize> {
        self.buttons.iter().position(|b| b.command == command)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for `command`
    pub fn highlight(&mut self, command: Command) {
        self.release_all();
        if let Some(idx) = self.find_button(command) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Command of the button under a click, if any
    #[must_use]
    pub fn command_at(&self, area: Rect, x: u16, y: u16) -> Option<Command> {
        self.hit_test(area, x, y)
            .and_then(|idx| self.get_button(idx))
            .map(|btn| btn.command)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Wraps a keypad for rendering
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < self.keypad.cols as u16 || inner.height < self.keypad.rows as u16 {
            return;
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            if label_width > btn_width {
                continue;
            }
            let label_x = x + (btn_width - label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), btn_width);
            }
        }
    }
}
