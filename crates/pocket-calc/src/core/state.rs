//! Calculator state and its transitions
//!
//! Every transition consumes the current [`CalculatorState`] and returns the
//! next one. Nothing is mutated behind the caller's back: the host owns the
//! current value and feeds it back in on the next input.

use super::input::Input;
use super::number::{format_number, parse_display};
use super::operations::Operation;

/// The complete calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    previous_value: Option<f64>,
    operation: Option<Operation>,
    waiting_for_number: bool,
    memory: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the start-up state: display `"0"`, nothing pending, memory 0
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_number: false,
            memory: 0.0,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the left operand of the pending operation
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Returns the pending operation
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Returns true when the next digit starts a new number
    #[must_use]
    pub fn is_waiting_for_number(&self) -> bool {
        self.waiting_for_number
    }

    /// Returns the memory register
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Returns true when the memory register is non-zero
    #[must_use]
    pub fn has_memory(&self) -> bool {
        self.memory != 0.0
    }

    /// Running-total text such as `"5 +"`, present while an operation is pending
    #[must_use]
    pub fn pending_label(&self) -> Option<String> {
        match (self.previous_value, self.operation) {
            (Some(value), Some(op)) => Some(format!("{} {}", format_number(value), op.glyph())),
            _ => None,
        }
    }

    /// Value currently shown on the display
    #[must_use]
    pub fn input_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Applies one input, dispatching to the matching transition
    #[must_use]
    pub fn update(self, input: Input) -> Self {
        match input {
            Input::Digit(d) => self.digit(d),
            Input::Decimal => self.decimal_point(),
            Input::Operator(op) => self.operator(op),
            Input::Equals => self.equals(),
            Input::ClearAll => self.clear_all(),
            Input::ClearEntry => self.clear_entry(),
            Input::ToggleSign => self.toggle_sign(),
            Input::MemoryAdd => self.memory_add(),
            Input::MemorySubtract => self.memory_subtract(),
            Input::MemoryRecall => self.memory_recall(),
            Input::MemoryClear => self.memory_clear(),
        }
    }

    /// Enters a digit
    ///
    /// A value above 9 is ignored.
    #[must_use]
    pub fn digit(mut self, d: u8) -> Self {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return self;
        };

        if self.waiting_for_number {
            self.display = c.to_string();
            self.waiting_for_number = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
        self
    }

    /// Enters the decimal point
    #[must_use]
    pub fn decimal_point(mut self) -> Self {
        if self.waiting_for_number {
            self.display = "0.".to_string();
            self.waiting_for_number = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self
    }

    /// Selects an operator, first evaluating any operation already pending
    #[must_use]
    pub fn operator(mut self, op: Operation) -> Self {
        let input_value = self.input_value();

        match (self.previous_value, self.operation) {
            (Some(previous), Some(pending)) => {
                let result = pending.apply(previous, input_value);
                self.display = format_number(result);
                self.previous_value = Some(result);
            }
            // A left operand without an operator cannot be built by the
            // transitions; treat it as the start of a chain.
            _ => self.previous_value = Some(input_value),
        }

        self.operation = Some(op);
        self.waiting_for_number = true;
        self
    }

    /// Evaluates the pending operation, if any
    #[must_use]
    pub fn equals(mut self) -> Self {
        let (Some(previous), Some(op)) = (self.previous_value, self.operation) else {
            return self;
        };

        let result = op.apply(previous, self.input_value());
        self.display = format_number(result);
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_number = true;
        self
    }

    /// Resets everything except the memory register
    #[must_use]
    pub fn clear_all(self) -> Self {
        Self {
            memory: self.memory,
            ..Self::new()
        }
    }

    /// Resets the display to `"0"`, keeping any pending operation
    #[must_use]
    pub fn clear_entry(mut self) -> Self {
        self.display = "0".to_string();
        self
    }

    /// Negates the displayed number; a display of `"0"` is left alone
    #[must_use]
    pub fn toggle_sign(mut self) -> Self {
        if self.display != "0" {
            self.display = format_number(-self.input_value());
        }
        self
    }

    /// Adds the displayed number to memory
    #[must_use]
    pub fn memory_add(mut self) -> Self {
        self.memory += self.input_value();
        self.waiting_for_number = true;
        self
    }

    /// Subtracts the displayed number from memory
    #[must_use]
    pub fn memory_subtract(mut self) -> Self {
        self.memory -= self.input_value();
        self.waiting_for_number = true;
        self
    }

    /// Shows the memory register on the display
    #[must_use]
    pub fn memory_recall(mut self) -> Self {
        self.display = format_number(self.memory);
        self.waiting_for_number = true;
        self
    }

    /// Zeroes the memory register
    #[must_use]
    pub fn memory_clear(mut self) -> Self {
        self.memory = 0.0;
        self
    }
}
