//! Terminal frontend for the calculator

mod app;
mod input;
mod keypad;
mod palette;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use palette::Palette;
pub use terminal::{undo_step, SetupStep, Teardown, TerminalGuard};
pub use ui::{keypad_area, render, CalculatorUI};
