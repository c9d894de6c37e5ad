//! Core calculator types and logic.
//!
//! This module contains the pure pieces the engine is assembled from:
//! - Phase definitions via the `State` trait
//! - Guard predicates for operation preconditions
//! - Operators and number conversion
//! - Immutable calculation records and their history
//!
//! Nothing in this module holds mutable engine state.

mod guard;
mod history;
mod number;
mod operator;
mod state;

pub use guard::Guard;
pub use history::{CalculationHistory, CalculationRecord};
pub use number::{format_number, parse_operand};
pub use operator::{OperatorKind, UnknownOperator};
pub use state::{CalcPhase, State};
