//! Chaincalc: a button-driven calculator engine
//!
//! Chaincalc models the classic four-function calculator: type a number,
//! pick an operator, type a second number, press equals. The result can be
//! chained straight into the next expression, and every completed
//! calculation is kept in an ordered history until the calculator is reset.
//!
//! Rendering and input wiring are left to the host. The engine exposes one
//! method per button and three pull-based outputs: the display text, the
//! history and the latest notice.
//!
//! # Core Concepts
//!
//! - **Phase**: the position in the operand/operator/operand cycle, derived
//!   from the engine state via the `State` trait
//! - **Guards**: pure predicates over the phase that gate operator and
//!   equals presses
//! - **History**: immutable calculation records in chronological order
//!
//! # Example
//!
//! ```rust
//! use chaincalc::{CalcError, Calculator, OperatorKind};
//!
//! let mut calc = Calculator::new();
//! calc.input_digit('8').unwrap();
//! calc.choose_operator_symbol("/").unwrap();
//! calc.input_digit('0').unwrap();
//!
//! assert_eq!(calc.evaluate(), Err(CalcError::DivisionByZero));
//! assert!(calc.history().is_empty());
//! assert_eq!(calc.notice().unwrap().to_string(), "Error: Cannot divide by zero");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use crate::core::{
    CalcPhase, CalculationHistory, CalculationRecord, Guard, OperatorKind, State,
};
pub use crate::engine::{CalcError, Calculator, Notice};
