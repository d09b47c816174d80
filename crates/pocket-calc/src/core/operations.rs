//! Binary operations applied by the chained calculator
//!
//! Operators are applied immediately and strictly left to right; there is
//! no precedence table.

use serde::{Deserialize, Serialize};

/// Type-safe operation enum for the four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the ASCII operator symbol used by the keyboard
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the glyph shown on the running-total label
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parses an operator from its ASCII symbol or display glyph
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to `a` and `b`
    ///
    /// Division by zero yields `0` instead of an infinity or NaN.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Applies an operation given by its symbol
///
/// An unrecognized symbol returns `b` unchanged.
#[must_use]
pub fn apply_symbol(a: f64, b: f64, symbol: char) -> f64 {
    match Operation::from_symbol(symbol) {
        Some(op) => op.apply(a, b),
        None => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Symbol tests =====

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '*');
        assert_eq!(Operation::Divide.symbol(), '/');
    }

    #[test]
    fn test_operation_glyphs() {
        assert_eq!(Operation::Subtract.glyph(), '−');
        assert_eq!(Operation::Multiply.glyph(), '×');
        assert_eq!(Operation::Divide.glyph(), '÷');
        assert_eq!(format!("{}", Operation::Multiply), "×");
    }

    #[test]
    fn test_from_symbol_round_trips_every_operation() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operation::from_symbol(op.glyph()), Some(op));
        }
    }

    #[test]
    fn test_from_symbol_rejects_other_chars() {
        for c in ['%', '^', '=', 'x', '0', ' '] {
            assert_eq!(Operation::from_symbol(c), None, "{c} is not an operator");
        }
    }

    // ===== Apply tests =====

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), 42.0);
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operation::Divide.apply(20.0, 4.0), 5.0);
    }

    #[test]
    fn test_apply_divide_by_zero_is_zero() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0), 0.0);
        assert_eq!(Operation::Divide.apply(-5.0, 0.0), 0.0);
        assert_eq!(Operation::Divide.apply(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_apply_divide_by_negative_zero_is_zero() {
        let result = Operation::Divide.apply(5.0, -0.0);
        assert_eq!(result, 0.0);
        assert!(result.is_finite());
    }

    #[test]
    fn test_apply_symbol_known() {
        assert_eq!(apply_symbol(9.0, 3.0, '/'), 3.0);
        assert_eq!(apply_symbol(9.0, 3.0, '×'), 27.0);
    }

    #[test]
    fn test_apply_symbol_unknown_returns_second_operand() {
        assert_eq!(apply_symbol(9.0, 3.0, '%'), 3.0);
        assert_eq!(apply_symbol(9.0, 3.0, '^'), 3.0);
    }

    // ===== Serde tests =====

    #[test]
    fn test_operation_serializes_lowercase() {
        let yaml = serde_yaml_ng::to_string(&Operation::Multiply).unwrap();
        assert_eq!(yaml.trim(), "multiply");
    }

    proptest! {
        #[test]
        fn prop_divide_never_produces_non_finite(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert!(Operation::Divide.apply(a, b).is_finite());
        }

        #[test]
        fn prop_add_matches_native(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(Operation::Add.apply(a, b), a + b);
        }
    }
}
