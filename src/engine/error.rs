//! Errors raised by calculator operations.

use thiserror::Error;

/// Errors that can occur when pressing a calculator button.
///
/// Every variant is recoverable: a failed operation leaves the calculator
/// exactly as it was. The `Display` text is the message a front end shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Enter a single digit from 0 to 9 (got {0:?})")]
    InvalidDigit(char),

    #[error("Choose one of the operators + - * / (got {0:?})")]
    InvalidOperator(String),

    #[error("Enter a number first")]
    MissingOperand,

    #[error("Enter a valid number (got {0:?})")]
    InvalidNumber(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Not enough values to calculate")]
    IncompleteExpression,
}

impl CalcError {
    /// Stable identifier for the failure kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDigit(_) => "invalid_digit",
            Self::InvalidOperator(_) => "invalid_operator",
            Self::MissingOperand => "missing_operand",
            Self::InvalidNumber(_) => "invalid_number",
            Self::DivisionByZero => "division_by_zero",
            Self::IncompleteExpression => "incomplete_expression",
        }
    }
}
