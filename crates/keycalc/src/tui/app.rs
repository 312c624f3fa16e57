//! TUI application state
//!
//! Wraps the engine with what only the terminal needs: the keypad highlight,
//! panel visibility and the quit flag. Every calculator change still goes
//! through [`Calculator::apply`].

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use crate::config::CalcConfig;
use crate::core::{format_number, Calculator, Command};
use crate::tui::input::{InputHandler, KeyAction};
use crate::tui::keypad::Keypad;
use crate::tui::ui;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Calculator engine
    calculator: Calculator,
    /// Keypad with the last pressed key highlighted
    keypad: Keypad,
    /// Panel visibility and tape size
    config: CalcConfig,
    /// Keyboard mapping
    input: InputHandler,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalcConfig::default())
    }

    /// Creates a calculator app from a loaded configuration
    #[must_use]
    pub fn with_config(config: CalcConfig) -> Self {
        Self {
            calculator: Calculator::with_tape(config.tape()),
            keypad: Keypad::new(),
            config,
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// Returns the calculator engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses one calculator key
    pub fn press(&mut self, command: Command) {
        self.calculator.apply(command);
        self.keypad.highlight(command);
    }

    /// Applies a keyboard action
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(command) => self.press(command),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the keypad button under a click, if any
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Command> {
        let command = self.keypad.command_at(keypad_area, x, y)?;
        debug!(x, y, key = %command, "keypad click");
        self.press(command);
        Some(command)
    }

    /// Routes one terminal event; `screen` is the full frame area
    pub fn handle_event(&mut self, event: &Event, screen: Rect) {
        match event {
            Event::Key(key) => {
                let action = self.input.handle_key(*key);
                self.handle(action);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(area) = ui::layout(screen, &self.config).keypad {
                    self.click(area, mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    /// Starts over with a fresh calculator; memory and tape are dropped too
    pub fn reset(&mut self) {
        self.calculator = Calculator::with_tape(self.config.tape());
        self.keypad.release_all();
    }

    /// The `lhs op` line above the display, empty when nothing is pending
    #[must_use]
    pub fn pending_line(&self) -> String {
        match self.calculator.pending_operator() {
            Some(op) if !self.calculator.pending_operand().is_empty() => {
                format!("{} {op}", self.calculator.pending_operand())
            }
            _ => String::new(),
        }
    }

    /// Memory indicator, shown only while the register is non-zero
    #[must_use]
    pub fn memory_indicator(&self) -> Option<String> {
        let memory = self.calculator.memory();
        (memory != 0.0).then(|| format!("M = {}", format_number(memory)))
    }

    /// Entry mode label for the status line
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        if self.calculator.is_overwrite() {
            "FRESH"
        } else {
            "ENTRY"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BinaryOperator, MemoryOperation};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_keys(app: &mut CalculatorApp, keys: &str) {
        let screen = Rect::new(0, 0, 100, 30);
        for c in keys.chars() {
            app.handle_event(&key(c), screen);
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.calculator().display(), "0");
        assert!(!app.should_quit());
        assert!(app.keypad().buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_app_with_config_tape_capacity() {
        let app = CalculatorApp::with_config(CalcConfig::new().with_tape_capacity(2));
        assert_eq!(app.calculator().tape().capacity(), 2);
        assert_eq!(app.config().tape_capacity, 2);
    }

    // ===== Key handling =====

    #[test]
    fn test_typed_keys_reach_engine() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "12+30=");
        assert_eq!(app.calculator().display(), "42");
        assert_eq!(app.calculator().tape().len(), 1);
    }

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press(Command::Operator(BinaryOperator::Divide));
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, "/");
    }

    #[test]
    fn test_handle_quit() {
        let mut app = CalculatorApp::new();
        app.handle(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_none_is_noop() {
        let mut app = CalculatorApp::new();
        app.handle(KeyAction::None);
        assert_eq!(app.calculator().snapshot(), Calculator::new().snapshot());
    }

    #[test]
    fn test_quit_key_via_event() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "q");
        assert!(app.should_quit());
    }

    // ===== Mouse handling =====

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 26, 16);
        // Row 4 (index 3) col 2 is the 9 key
        assert_eq!(app.click(area, 14, 7), Some(Command::Digit(9)));
        assert_eq!(app.calculator().display(), "9");
    }

    #[test]
    fn test_click_outside_keypad_ignored() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.click(Rect::new(10, 10, 26, 16), 0, 0), None);
        assert_eq!(app.calculator().display(), "0");
    }

    #[test]
    fn test_mouse_event_routed_through_layout() {
        let mut app = CalculatorApp::new();
        let screen = Rect::new(0, 0, 100, 30);
        let area = ui::layout(screen, app.config()).keypad.unwrap();
        let btn_width = (area.width - 2) / 4;
        let btn_height = (area.height - 2) / 7;
        // Row 6 col 1 is the 0 key, row 5 col 0 is the 1 key
        app.handle_event(&left_click(area.x + 1, area.y + 1 + 5 * btn_height), screen);
        app.handle_event(
            &left_click(area.x + 1 + btn_width, area.y + 1 + 6 * btn_height),
            screen,
        );
        assert_eq!(app.calculator().display(), "10");
    }

    #[test]
    fn test_mouse_ignored_without_keypad() {
        let mut app = CalculatorApp::with_config(CalcConfig::new().with_keypad(false));
        let screen = Rect::new(0, 0, 100, 30);
        app.handle_event(&left_click(80, 10), screen);
        assert_eq!(app.calculator().display(), "0");
    }

    // ===== Reset =====

    #[test]
    fn test_reset_clears_everything() {
        let mut app = CalculatorApp::new();
        type_keys(&mut app, "5p2+3=");
        app.reset();
        assert_eq!(app.calculator().snapshot(), Calculator::new().snapshot());
        assert!(app.calculator().tape().is_empty());
        assert!(app.keypad().buttons().all(|b| !b.pressed));
    }

    // ===== Display helpers =====

    #[test]
    fn test_pending_line() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.pending_line(), "");
        type_keys(&mut app, "7*");
        assert_eq!(app.pending_line(), "7 *");
        type_keys(&mut app, "2=");
        assert_eq!(app.pending_line(), "");
    }

    #[test]
    fn test_memory_indicator() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.memory_indicator(), None);
        type_keys(&mut app, "2.5p");
        assert_eq!(app.memory_indicator().as_deref(), Some("M = 2.5"));
        app.press(Command::Memory(MemoryOperation::Clear));
        assert_eq!(app.memory_indicator(), None);
    }

    #[test]
    fn test_mode_label() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.mode_label(), "ENTRY");
        type_keys(&mut app, "3+");
        assert_eq!(app.mode_label(), "FRESH");
        type_keys(&mut app, "4");
        assert_eq!(app.mode_label(), "ENTRY");
    }
}
