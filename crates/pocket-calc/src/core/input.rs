//! Normalized input events
//!
//! Keyboard keys and keypad clicks are both turned into an [`Input`] before
//! they reach the engine, so each logical operation has exactly one entry
//! point regardless of where it was triggered.

use super::operations::Operation;

/// One discrete calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A digit key, `0` through `9`
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything except memory
    ClearAll,
    /// Reset the display only
    ClearEntry,
    /// Negate the displayed number
    ToggleSign,
    /// Add the display to memory
    MemoryAdd,
    /// Subtract the display from memory
    MemorySubtract,
    /// Show the memory value
    MemoryRecall,
    /// Zero the memory register
    MemoryClear,
}

impl Input {
    /// Maps a platform key name to an input
    ///
    /// Single characters are matched literally; named keys use the DOM
    /// spelling (`Enter`, `Escape`, `Backspace`).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => return Some(Self::Equals),
            "Escape" => return Some(Self::ClearAll),
            "Backspace" => return Some(Self::ClearEntry),
            _ => {}
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Maps a single typed character to an input
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            's' => Some(Self::ToggleSign),
            'm' => Some(Self::MemoryAdd),
            'n' => Some(Self::MemorySubtract),
            'r' => Some(Self::MemoryRecall),
            'c' => Some(Self::MemoryClear),
            '+' | '-' | '*' | '/' => Operation::from_symbol(c).map(Self::Operator),
            _ => None,
        }
    }

    /// Returns the button label for this input
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".into(),
            Self::ClearAll => "C".into(),
            Self::ClearEntry => "CE".into(),
            Self::ToggleSign => "±".into(),
            Self::MemoryAdd => "M+".into(),
            Self::MemorySubtract => "M-".into(),
            Self::MemoryRecall => "MR".into(),
            Self::MemoryClear => "MC".into(),
        }
    }

    /// Returns true for inputs that only touch the memory register
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(
            self,
            Self::MemoryAdd | Self::MemorySubtract | Self::MemoryRecall | Self::MemoryClear
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== from_key tests =====

    #[test]
    fn test_digit_keys() {
        for d in 0..=9u8 {
            let key = d.to_string();
            assert_eq!(Input::from_key(&key), Some(Input::Digit(d)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(Input::from_key("+"), Some(Input::Operator(Operation::Add)));
        assert_eq!(
            Input::from_key("-"),
            Some(Input::Operator(Operation::Subtract))
        );
        assert_eq!(
            Input::from_key("*"),
            Some(Input::Operator(Operation::Multiply))
        );
        assert_eq!(Input::from_key("/"), Some(Input::Operator(Operation::Divide)));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
        assert_eq!(Input::from_key("="), Some(Input::Equals));
        assert_eq!(Input::from_key("Escape"), Some(Input::ClearAll));
        assert_eq!(Input::from_key("Backspace"), Some(Input::ClearEntry));
        assert_eq!(Input::from_key("."), Some(Input::Decimal));
    }

    #[test]
    fn test_letter_shortcuts() {
        assert_eq!(Input::from_key("s"), Some(Input::ToggleSign));
        assert_eq!(Input::from_key("m"), Some(Input::MemoryAdd));
        assert_eq!(Input::from_key("n"), Some(Input::MemorySubtract));
        assert_eq!(Input::from_key("r"), Some(Input::MemoryRecall));
        assert_eq!(Input::from_key("c"), Some(Input::MemoryClear));
    }

    #[test]
    fn test_unknown_keys() {
        for key in ["", "a", "S", "C", "%", "Tab", "ArrowUp", "12", "×"] {
            assert_eq!(Input::from_key(key), None, "{key:?} should be ignored");
        }
    }

    // ===== Label tests =====

    #[test]
    fn test_labels() {
        assert_eq!(Input::Digit(7).label(), "7");
        assert_eq!(Input::Operator(Operation::Divide).label(), "/");
        assert_eq!(Input::ClearEntry.label(), "CE");
        assert_eq!(Input::ToggleSign.label(), "±");
        assert_eq!(Input::MemorySubtract.label(), "M-");
    }

    #[test]
    fn test_labels_are_short() {
        let inputs = [
            Input::Decimal,
            Input::Equals,
            Input::ClearAll,
            Input::MemoryAdd,
            Input::MemoryRecall,
            Input::MemoryClear,
        ];
        for input in inputs {
            let label = input.label();
            assert!(!label.is_empty() && label.chars().count() <= 2);
        }
    }

    #[test]
    fn test_is_memory() {
        assert!(Input::MemoryAdd.is_memory());
        assert!(Input::MemoryClear.is_memory());
        assert!(!Input::Equals.is_memory());
        assert!(!Input::Digit(1).is_memory());
    }
}
