//! The four arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operator applied between the first and second operand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperatorKind {
    /// Every recognized operator, in keypad order.
    pub const ALL: [OperatorKind; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Symbolic token for the operator (`+`, `-`, `*`, `/`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator with plain IEEE-754 double semantics.
    ///
    /// No zero-divisor check happens here; callers reject that case first.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a token is not one of `+ - * /`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized operator token '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for OperatorKind {
    type Err = UnknownOperator;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == token)
            .ok_or_else(|| UnknownOperator(token.to_string()))
    }
}
