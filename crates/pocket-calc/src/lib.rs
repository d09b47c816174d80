//! pocket-calc: a chained calculator
//!
//! Operators apply immediately to the running value, strictly left to right:
//! `2 + 3 * 4 =` shows `20`. The engine is a pure state machine; the terminal
//! frontend, configuration and logging sit around it.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let state = CalculatorState::new()
//!     .digit(2)
//!     .operator(Operation::Add)
//!     .digit(3)
//!     .operator(Operation::Multiply)
//!     .digit(4)
//!     .equals();
//! assert_eq!(state.display(), "20");
//!
//! // Key names go through the same table as the terminal keyboard
//! let state = "9/0="
//!     .chars()
//!     .filter_map(Input::from_char)
//!     .fold(CalculatorState::new(), CalculatorState::update);
//! assert_eq!(state.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, Verbosity};
    pub use crate::core::{format_number, CalculatorState, Input, Operation};
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::error::{AppError, AppResult};
    pub use crate::theme::Theme;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let state = CalculatorState::new().digit(6).operator(Operation::Multiply);
        assert_eq!(state.pending_label().as_deref(), Some("6 ×"));
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(AppConfig::default().verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_chained_evaluation() {
        let mut driver = EngineDriver::new();
        driver.press_keys("12+8/4*3=");
        assert_eq!(driver.display(), "15");
    }

    #[test]
    fn test_decimal_arithmetic() {
        let mut driver = EngineDriver::new();
        driver.press_keys("0.1+0.2=");
        assert_eq!(driver.display(), "0.30000000000000004");
    }

    #[test]
    fn test_operator_replacement_evaluates_first() {
        // Pressing a second operator right away applies the first to the
        // same value twice.
        let mut driver = EngineDriver::new();
        driver.press_keys("5+*");
        assert_eq!(driver.display(), "10");
        assert_eq!(driver.pending().as_deref(), Some("10 ×"));
    }

    #[test]
    fn test_error_type_is_reexported() {
        let err = AppError::config("bad");
        assert!(err.to_string().contains("bad"));
    }
}
