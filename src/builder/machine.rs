//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::engine::Calculator;

/// Builder for constructing calculators with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Set the text shown after construction and after `reset`.
    pub fn reset_display(mut self, text: impl Into<String>) -> Self {
        self.config.reset_display = text.into();
        self
    }

    /// Log the full history as JSON after every evaluation.
    pub fn log_history(mut self, enabled: bool) -> Self {
        self.config.log_history = enabled;
        self
    }

    /// Pre-allocate room for this many history records.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Build the calculator.
    /// Returns an error if the settings are invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        Ok(Calculator::with_config(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_uses_defaults() {
        let calc = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.config(), &CalculatorConfig::default());
    }

    #[test]
    fn fluent_api_builds_calculator() {
        let calc = CalculatorBuilder::new()
            .reset_display("")
            .log_history(true)
            .history_capacity(4)
            .build()
            .unwrap();

        assert_eq!(calc.display(), "");
        assert!(calc.config().log_history);
        assert_eq!(calc.config().history_capacity, 4);
    }

    #[test]
    fn builder_validates_reset_display() {
        let result = CalculatorBuilder::new().reset_display("0.0").build();
        assert!(matches!(result, Err(BuildError::InvalidResetDisplay(_))));
    }

    #[test]
    fn builder_rejects_numeric_reset_display() {
        let result = CalculatorBuilder::new().reset_display("12").build();
        assert!(matches!(result, Err(BuildError::InvalidResetDisplay(s)) if s == "12"));
    }

    #[test]
    fn builder_accepts_loaded_config() {
        let config = CalculatorConfig::from_json(r#"{ "reset_display": "" }"#).unwrap();
        let calc = CalculatorBuilder::from_config(config).build().unwrap();
        assert_eq!(calc.display(), "");
    }
}
