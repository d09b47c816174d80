//! TUI application state
//!
//! The app owns the current [`CalculatorState`] value and swaps it for the
//! value returned by each transition. The theme and keypad highlight sit
//! beside it and never leak into the engine.

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::{ButtonAction, Keypad};
use crate::config::AppConfig;
use crate::core::{CalculatorState, Input};
use crate::theme::Theme;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    state: CalculatorState,
    theme: Theme,
    keypad: Keypad,
    mouse_enabled: bool,
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
        Self::with_config(&AppConfig::default())
    }

    /// Creates a calculator app from configuration
    #[must_use]
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            theme: config.theme,
            keypad: Keypad::new(),
            mouse_enabled: config.mouse,
            should_quit: false,
        }
    }

    /// Returns the current calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether keypad clicks are accepted
    #[must_use]
    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
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

    /// Applies one calculator input
    pub fn press(&mut self, input: Input) {
        let previous = std::mem::take(&mut self.state);
        self.state = previous.update(input);
        self.keypad.highlight(ButtonAction::Calc(input));
        debug!(
            ?input,
            display = self.state.display(),
            pending = ?self.state.pending_label(),
            memory = self.state.memory(),
            "transition"
        );
    }

    /// Switches between the light and dark theme
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.keypad.highlight(ButtonAction::ToggleTheme);
        debug!(theme = %self.theme, "theme toggled");
    }

    /// Performs a keypad button action
    pub fn activate(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Calc(input) => self.press(input),
            ButtonAction::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Performs a keyboard action
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Calc(input) => self.press(input),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a click at terminal position (`x`, `y`) given the keypad's area
    ///
    /// Returns true when the click landed on a button.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> bool {
        if !self.mouse_enabled {
            return false;
        }
        let action = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.action);

        match action {
            Some(action) => {
                self.activate(action);
                true
            }
            None => false,
        }
    }

    /// Text for the running-total label, empty when nothing is pending
    #[must_use]
    pub fn pending_display(&self) -> String {
        self.state.pending_label().unwrap_or_default()
    }

    /// Memory indicator, `"M"` while the register is non-zero
    #[must_use]
    pub fn memory_indicator(&self) -> &'static str {
        if self.state.has_memory() {
            "M"
        } else {
            ""
        }
    }
}
