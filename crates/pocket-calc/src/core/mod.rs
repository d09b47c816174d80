//! Calculator engine
//!
//! A chained calculator: operators apply immediately to the running value,
//! strictly left to right. The engine is a set of pure transitions over
//! [`CalculatorState`], driven through [`CalculatorState::update`].

mod input;
mod number;
mod operations;
mod state;

pub use input::Input;
pub use number::{format_number, parse_display};
pub use operations::{apply_symbol, Operation};
pub use state::CalculatorState;
