//! Dispatch - button labels to engine actions
//!
//! A fixed table from logical button labels to engine operations. Labels
//! with no entry are not errors: they fall through to [`Action::Append`],
//! which treats the label as typed text. That fallthrough is how the ten
//! digit keys work without a table entry per digit, and why an unknown
//! label can never fail.

/// Arithmetic operators the engine computes with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Apply the operator.
    ///
    /// Division by zero is not special-cased: the result follows IEEE
    /// semantics and formats as `inf`/`nan` downstream.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
            BinaryOp::Power => lhs.powf(rhs),
        }
    }
}

/// Engine operation selected for a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ClearDisplay,
    AllClear,
    Pop,
    Swap,
    Percentage,
    Inverse,
    ToggleSign,
    DecimalPoint,
    Push,
    Compute(BinaryOp),
    /// Fallthrough: treat the label text as typed input.
    Append,
}

/// Resolve a button label to its action.
pub fn action_for(label: &str) -> Action {
    match label {
        "C" => Action::ClearDisplay,
        "AC" => Action::AllClear,
        "POP" => Action::Pop,
        "SWAP" => Action::Swap,
        "%" => Action::Percentage,
        "1/x" => Action::Inverse,
        "+/-" => Action::ToggleSign,
        "." => Action::DecimalPoint,
        "ENTER" => Action::Push,
        "+" => Action::Compute(BinaryOp::Add),
        "-" => Action::Compute(BinaryOp::Subtract),
        "*" => Action::Compute(BinaryOp::Multiply),
        "/" => Action::Compute(BinaryOp::Divide),
        "^" => Action::Compute(BinaryOp::Power),
        _ => Action::Append,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_labels() {
        assert_eq!(action_for("C"), Action::ClearDisplay);
        assert_eq!(action_for("AC"), Action::AllClear);
        assert_eq!(action_for("POP"), Action::Pop);
        assert_eq!(action_for("SWAP"), Action::Swap);
        assert_eq!(action_for("ENTER"), Action::Push);
    }

    #[test]
    fn test_symbol_labels() {
        assert_eq!(action_for("%"), Action::Percentage);
        assert_eq!(action_for("1/x"), Action::Inverse);
        assert_eq!(action_for("+/-"), Action::ToggleSign);
        assert_eq!(action_for("."), Action::DecimalPoint);
    }

    #[test]
    fn test_operator_labels() {
        assert_eq!(action_for("+"), Action::Compute(BinaryOp::Add));
        assert_eq!(action_for("-"), Action::Compute(BinaryOp::Subtract));
        assert_eq!(action_for("*"), Action::Compute(BinaryOp::Multiply));
        assert_eq!(action_for("/"), Action::Compute(BinaryOp::Divide));
        assert_eq!(action_for("^"), Action::Compute(BinaryOp::Power));
    }

    #[test]
    fn test_everything_else_appends() {
        for digit in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"] {
            assert_eq!(action_for(digit), Action::Append);
        }
        assert_eq!(action_for("12"), Action::Append);
        assert_eq!(action_for("enter"), Action::Append); // labels are exact
        assert_eq!(action_for(""), Action::Append);
        assert_eq!(action_for("xyz"), Action::Append);
    }

    #[test]
    fn test_operator_arithmetic() {
        assert_eq!(BinaryOp::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(BinaryOp::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(BinaryOp::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(BinaryOp::Divide.apply(5.0, 2.0), 2.5);
        assert_eq!(BinaryOp::Power.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(BinaryOp::Divide.apply(10.0, 0.0), f64::INFINITY);
        assert_eq!(BinaryOp::Divide.apply(-10.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOp::Divide.apply(0.0, 0.0).is_nan());
    }
}
