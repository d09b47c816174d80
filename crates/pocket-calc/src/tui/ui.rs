//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use super::palette::Palette;

/// Width of the keypad column
const KEYPAD_WIDTH: u16 = 26;
/// Width of the help sidebar
const HELP_WIDTH: u16 = 24;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Splits the full terminal area into (main, keypad, help) columns
#[must_use]
pub fn columns(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),
            Constraint::Length(KEYPAD_WIDTH),
            Constraint::Length(HELP_WIDTH),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area the keypad occupies for a given terminal area, used for mouse hit tests
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    columns(area)[1]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    palette: Palette,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            palette: app.theme().palette(),
        }
    }

    /// Creates the main column layout: display, running total, status
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area)
            .to_vec()
    }

    fn panel(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent))
            .style(Style::default().bg(self.palette.background))
    }

    /// Renders the display panel, number right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.palette.foreground)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(self.panel(" Display "))
            .render(area, buf);
    }

    /// Renders the running-total label and memory indicator
    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                self.app.memory_indicator(),
                Style::default()
                    .fg(self.palette.memory)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                self.app.pending_display(),
                Style::default().fg(self.palette.accent),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .block(self.panel(" Running total "))
            .render(area, buf);
    }

    /// Renders memory value and theme name
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let muted = Style::default().fg(self.palette.muted);
        let items = vec![
            ListItem::new(Line::from(vec![
                Span::styled("Memory ", muted),
                Span::styled(
                    crate::core::format_number(state.memory()),
                    Style::default().fg(self.palette.memory),
                ),
            ])),
            ListItem::new(Line::from(vec![
                Span::styled("Theme  ", muted),
                Span::styled(
                    self.app.theme().name(),
                    Style::default().fg(self.palette.foreground),
                ),
            ])),
        ];
        List::new(items)
            .block(self.panel(" Status "))
            .render(area, buf);
    }

    /// Renders the keyboard shortcut sidebar
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{key:>6}"),
                        Style::default().fg(self.palette.operator),
                    ),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(self.palette.muted)),
                ]))
            })
            .collect();

        List::new(items)
            .block(self.panel(" Help "))
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.foreground))
            .style(Style::default().bg(self.palette.background))
            .render(area, buf);

        let [main_area, keypad_area, help_area] = columns(area);

        let chunks = self.create_layout(main_area);
        self.render_display(chunks[0], buf);
        self.render_pending(chunks[1], buf);
        self.render_status(chunks[2], buf);

        KeypadWidget::new(self.app.keypad(), self.palette).render(keypad_area, buf);
        self.render_help(help_area, buf);
    }
}

/// Window title
pub const TITLE: &str = " pocket-calc ";

/// Keyboard shortcuts shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("Esc", "Clear all"),
    ("Bksp", "Clear entry"),
    ("s", "Toggle sign"),
    ("m / n", "Memory + / -"),
    ("r", "Memory recall"),
    ("c", "Memory clear"),
    ("t", "Theme"),
    ("q", "Quit"),
];
