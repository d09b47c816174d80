//! Unified calculator driver
//!
//! Scenarios are written once against [`CalculatorDriver`] and run against
//! the bare engine and the terminal app alike.

use crate::core::{CalculatorState, Input};

/// Key names that are more than one character long
const NAMED_KEYS: [&str; 3] = ["Enter", "Escape", "Backspace"];

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_keys("2+3*4 Enter");
/// assert_eq!(driver.display(), "20");
/// ```
pub trait CalculatorDriver {
    /// Feeds one normalized input
    fn press(&mut self, input: Input);

    /// Feeds one key by its DOM name (`"7"`, `"+"`, `"Enter"`, ...)
    fn press_key(&mut self, key: &str);

    /// Current display text
    fn display(&self) -> String;

    /// Current memory register
    fn memory(&self) -> f64;

    /// Running-total label, if an operation is pending
    fn pending(&self) -> Option<String>;

    /// Returns to the start-up state, memory included
    fn reset(&mut self);

    /// Feeds a key script
    ///
    /// Whitespace separates tokens. A token naming a key (`Enter`, `Escape`,
    /// `Backspace`) is one key press; any other token is pressed one
    /// character at a time.
    fn press_keys(&mut self, script: &str) {
        for token in script.split_whitespace() {
            if NAMED_KEYS.contains(&token) {
                self.press_key(token);
            } else {
                let mut buf = [0u8; 4];
                for c in token.chars() {
                    self.press_key(c.encode_utf8(&mut buf));
                }
            }
        }
    }
}

/// Driver over a bare [`CalculatorState`]
#[derive(Debug, Default)]
pub struct EngineDriver {
    state: CalculatorState,
}

impl EngineDriver {
    /// Creates a driver at the start-up state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, input: Input) {
        self.state = std::mem::take(&mut self.state).update(input);
    }

    fn press_key(&mut self, key: &str) {
        if let Some(input) = Input::from_key(key) {
            self.press(input);
        }
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn memory(&self) -> f64 {
        self.state.memory()
    }

    fn pending(&self) -> Option<String> {
        self.state.pending_label()
    }

    fn reset(&mut self) {
        self.state = CalculatorState::new();
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::CalculatorDriver;
    use crate::core::Input;
    use crate::tui::{CalculatorApp, InputHandler};

    /// Driver that pushes terminal key events through the TUI app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        handler: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                handler: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Sends a raw terminal key event
        pub fn send(&mut self, event: KeyEvent) {
            let action = self.handler.handle_key(event);
            self.app.handle_key_action(action);
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) {
            self.app.press(input);
        }

        fn press_key(&mut self, key: &str) {
            let code = match key {
                "Enter" => KeyCode::Enter,
                "Escape" => KeyCode::Esc,
                "Backspace" => KeyCode::Backspace,
                _ => {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => KeyCode::Char(c),
                        _ => return,
                    }
                }
            };
            self.send(KeyEvent::new(code, KeyModifiers::NONE));
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn memory(&self) -> f64 {
            self.app.state().memory()
        }

        fn pending(&self) -> Option<String> {
            self.app.state().pending_label()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::new();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenarios =====
// These run against ANY CalculatorDriver implementation

/// Digits concatenate, with a lone leading zero replaced
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("1203");
    assert_eq!(driver.display(), "1203");

    driver.reset();
    driver.press_keys("007");
    assert_eq!(driver.display(), "7");
}

/// A second decimal point without digits in between changes nothing
pub fn verify_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("3.");
    let once = driver.display();
    driver.press_keys(".");
    assert_eq!(driver.display(), once);
    driver.press_keys("5.1");
    assert_eq!(driver.display(), "3.51");
}

/// Operators apply immediately, left to right
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("2+3*");
    assert_eq!(driver.display(), "5");
    driver.press_keys("4 Enter");
    assert_eq!(driver.display(), "20");

    driver.reset();
    driver.press_keys("10-4-3=");
    assert_eq!(driver.display(), "3");
}

/// Division by zero shows 0
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("5/0=");
    assert_eq!(driver.display(), "0");
}

/// Memory add, recall and clear
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("7m");
    assert_eq!(driver.memory(), 7.0);
    driver.press_keys("Escape r");
    assert_eq!(driver.display(), "7");
    driver.press_keys("c r");
    assert_eq!(driver.display(), "0");
}

/// Clear entry keeps the pending operation
pub fn verify_clear_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("5+3 Backspace");
    assert_eq!(driver.display(), "0");
    assert!(driver.pending().is_some());
    driver.press_keys("Enter");
    assert_eq!(driver.display(), "5");
}

/// Sign toggle on zero, once and twice
pub fn verify_toggle_sign<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_keys("s");
    assert_eq!(driver.display(), "0");
    driver.press_keys("4s");
    assert_eq!(driver.display(), "-4");
    driver.press_keys("s");
    assert_eq!(driver.display(), "4");
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_point(driver);
    verify_left_to_right(driver);
    verify_divide_by_zero(driver);
    verify_memory(driver);
    verify_clear_entry(driver);
    verify_toggle_sign(driver);
}
