//! Keyboard input handling
//!
//! Terminal key events are renamed to their DOM key names and run through
//! [`Input::from_key`], the same table every other input source uses.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Input;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an input to the calculator engine
    Calc(Input),
    /// Switch between the light and dark theme
    ToggleTheme,
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

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => Self::key_name(code)
                .and_then(|name| Input::from_key(&name))
                .map_or(KeyAction::None, KeyAction::Calc),
        }
    }

    /// DOM-style name of a terminal key code
    #[must_use]
    pub fn key_name(code: KeyCode) -> Option<String> {
        match code {
            KeyCode::Char(c) => Some(c.to_string()),
            KeyCode::Enter => Some("Enter".into()),
            KeyCode::Esc => Some("Escape".into()),
            KeyCode::Backspace => Some("Backspace".into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Digit and operator tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            let d = c.to_digit(10).unwrap() as u8;
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Calc(Input::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Calc(Input::Operator(op))
            );
        }
    }

    #[test]
    fn test_shifted_operator_still_maps() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('*'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Calc(Input::Operator(Operation::Multiply))
        );
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Calc(Input::Decimal)
        );
    }

    // ===== Named key tests =====

    #[test]
    fn test_handle_enter_and_equals() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Calc(Input::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Calc(Input::Equals)
        );
    }

    #[test]
    fn test_handle_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Calc(Input::ClearAll)
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Calc(Input::ClearEntry)
        );
    }

    // ===== Letter shortcut tests =====

    #[test]
    fn test_handle_letter_shortcuts() {
        let handler = InputHandler::new();
        let cases = [
            ('s', Input::ToggleSign),
            ('m', Input::MemoryAdd),
            ('n', Input::MemorySubtract),
            ('r', Input::MemoryRecall),
            ('c', Input::MemoryClear),
        ];
        for (c, input) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Calc(input)
            );
        }
    }

    #[test]
    fn test_handle_theme_toggle() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('t'))),
            KeyAction::ToggleTheme
        );
    }

    // ===== Quit tests =====

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('m'))),
            KeyAction::None
        );
    }

    // ===== Ignored input tests =====

    #[test]
    fn test_handle_unknown_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::F(1),
            KeyCode::Tab,
            KeyCode::Up,
            KeyCode::Delete,
            KeyCode::Char('x'),
            KeyCode::Char('%'),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_key_name() {
        assert_eq!(InputHandler::key_name(KeyCode::Char('7')).as_deref(), Some("7"));
        assert_eq!(InputHandler::key_name(KeyCode::Esc).as_deref(), Some("Escape"));
        assert_eq!(InputHandler::key_name(KeyCode::Home), None);
    }
}
