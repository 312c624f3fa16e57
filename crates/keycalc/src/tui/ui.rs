//! TUI rendering
//!
//! [`layout`] is the single source of panel geometry: rendering uses it to
//! draw and the app uses it to hit-test mouse clicks on the keypad.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::config::CalcConfig;

/// Screen areas of every panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    /// Pending line and display
    pub display: Rect,
    /// Tape, when shown
    pub tape: Option<Rect>,
    /// Mode and memory line
    pub status: Rect,
    /// Clickable keypad, when shown
    pub keypad: Option<Rect>,
    /// Key help sidebar
    pub help: Rect,
}

/// Splits the frame into panels
#[must_use]
pub fn layout(area: Rect, config: &CalcConfig) -> Panels {
    let mut columns = vec![Constraint::Min(30)];
    if config.show_keypad {
        columns.push(Constraint::Length(26));
    }
    columns.push(Constraint::Length(24));

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(columns)
        .split(area);

    let (keypad, help) = if config.show_keypad {
        (Some(h_chunks[1]), h_chunks[2])
    } else {
        (None, h_chunks[1])
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Min(3),    // Tape
            Constraint::Length(3), // Status
        ])
        .split(h_chunks[0]);

    Panels {
        display: v_chunks[0],
        tape: config.show_tape.then_some(v_chunks[1]),
        status: v_chunks[2],
        keypad,
        help,
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();
        let display_style = if matches!(calc.display(), "NaN" | "Infinity" | "-Infinity") {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.app.pending_line(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(calc.display().to_string(), display_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let visible = usize::from(area.height.saturating_sub(2));
        let items: Vec<ListItem> = self
            .app
            .calculator()
            .tape()
            .last_n(visible)
            .into_iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.result.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Tape (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            self.app.mode_label(),
            Style::default().fg(Color::Cyan),
        )];
        if let Some(memory) = self.app.memory_indicator() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                memory,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>9}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let panels = layout(area, self.app.config());

        self.render_display(panels.display, buf);
        if let Some(tape) = panels.tape {
            self.render_tape(tape, buf);
        }
        self.render_status(panels.status, buf);
        if let Some(keypad) = panels.keypad {
            KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        }
        Self::render_help(panels.help, buf);
    }
}

/// Frame title
pub const TITLE: &str = " keycalc ";

/// Keyboard shortcuts shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/%", "Operators"),
    ("Enter =", "Equals"),
    ("Bksp", "Erase"),
    ("Del", "Clear entry"),
    ("Esc", "Clear"),
    ("r s i", "√ x² 1/x"),
    ("n", "Negate"),
    ("m", "Memory recall"),
    ("p P", "M+ M-"),
    ("Ctrl+L", "Memory clear"),
    ("q", "Quit"),
];
