//! The calculator engine: the only stateful part of the crate.
//!
//! The engine owns the operand/operator/input triple and the history, and
//! exposes one method per button. Front ends pull the display text, the
//! history and the latest notice after each call.

mod calculator;
mod error;
mod notice;

pub use calculator::Calculator;
pub use error::CalcError;
pub use notice::Notice;
