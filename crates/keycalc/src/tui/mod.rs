//! Terminal front end for the calculator

mod app;
mod input;
mod keypad;
mod session;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use session::{run, run_app, TerminalSession};
pub use ui::{layout, render, CalculatorUI, Panels, HELP_SHORTCUTS, TITLE};
