//! Builder API for configuring calculators.
//!
//! `Calculator::new()` covers the common case. The builder and
//! `CalculatorConfig` exist for hosts that load settings from a config
//! document or want a different reset display.

pub mod config;
pub mod error;
pub mod machine;

pub use config::CalculatorConfig;
pub use error::BuildError;
pub use machine::CalculatorBuilder;
