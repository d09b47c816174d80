//! Clickable keypad for the TUI calculator
//!
//! Each button carries the same [`Input`] the keyboard produces, so a click
//! and a key press reach the engine through one path.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::palette::Palette;
use crate::core::{Input, Operation};

/// What a keypad button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Feed an input to the calculator engine
    Calc(Input),
    /// Switch between the light and dark theme
    ToggleTheme,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: String,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates a button bound to a calculator input
    #[must_use]
    pub fn input(input: Input) -> Self {
        Self {
            label: input.label(),
            pressed: false,
            action: ButtonAction::Calc(input),
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::input(Input::Digit(d))
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operation) -> Self {
        Self::input(Input::Operator(op))
    }

    /// Creates the theme toggle button
    #[must_use]
    pub fn theme() -> Self {
        Self {
            label: "◐".into(),
            pressed: false,
            action: ButtonAction::ToggleTheme,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns the calculator input for this button, if it has one
    #[must_use]
    pub fn to_input(&self) -> Option<Input> {
        match self.action {
            ButtonAction::Calc(input) => Some(input),
            ButtonAction::ToggleTheme => None,
        }
    }
}

/// The keypad layout, a 6x4 grid of buttons
/// ```text
/// [MC] [MR] [M+] [M-]
/// [C ] [CE] [± ] [ /]
/// [ 7] [ 8] [ 9] [ *]
/// [ 4] [ 5] [ 6] [ -]
/// [ 1] [ 2] [ 3] [ +]
/// [ 0] [ .] [ =] [ ◐]
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
        let buttons = vec![
            KeypadButton::input(Input::MemoryClear),
            KeypadButton::input(Input::MemoryRecall),
            KeypadButton::input(Input::MemoryAdd),
            KeypadButton::input(Input::MemorySubtract),
            KeypadButton::input(Input::ClearAll),
            KeypadButton::input(Input::ClearEntry),
            KeypadButton::input(Input::ToggleSign),
            KeypadButton::operator(Operation::Divide),
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operation::Multiply),
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operation::Subtract),
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operation::Add),
            KeypadButton::digit(0),
            KeypadButton::input(Input::Decimal),
            KeypadButton::input(Input::Equals),
            KeypadButton::theme(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 6,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button bound to an action
    #[must_use]
    pub fn find_button_by_action(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
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

    /// Highlights only the button bound to `action`
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find_button_by_action(action) {
            self.press_button(idx);
        }
    }

    /// Returns the currently pressed button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
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

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border
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
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, palette: Palette) -> Self {
        Self { keypad, palette }
    }

    fn button_style(&self, btn: &KeypadButton) -> Style {
        let p = &self.palette;
        if btn.pressed {
            return Style::default()
                .fg(p.background)
                .bg(p.highlight)
                .add_modifier(Modifier::BOLD);
        }

        let fg = match btn.action {
            ButtonAction::Calc(Input::Operator(_)) => p.operator,
            ButtonAction::Calc(Input::Equals) => p.equals,
            ButtonAction::Calc(Input::ClearAll | Input::ClearEntry) => p.danger,
            ButtonAction::Calc(input) if input.is_memory() => p.memory,
            ButtonAction::Calc(Input::Digit(_) | Input::Decimal) => p.foreground,
            ButtonAction::Calc(_) | ButtonAction::ToggleTheme => p.accent,
        };
        Style::default().fg(fg).bg(p.background)
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent))
            .style(Style::default().bg(self.palette.background))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    let style = self.button_style(btn);
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
