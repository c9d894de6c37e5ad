//! Calculator configuration.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// Tunable settings for a calculator.
///
/// Every field has a default, so a config document only needs to name the
/// settings it changes.
///
/// # Example
///
/// ```rust
/// use chaincalc::builder::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "log_history": true }"#).unwrap();
/// assert!(config.log_history);
/// assert_eq!(config.reset_display, "0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display text shown on a fresh or reset calculator.
    pub reset_display: String,

    /// Dump the whole history as JSON at debug level after each evaluation.
    pub log_history: bool,

    /// Records to pre-allocate. The history still grows without bound.
    pub history_capacity: usize,
}

impl CalculatorConfig {
    pub const DEFAULT_RESET_DISPLAY: &'static str = "0";
    pub const DEFAULT_HISTORY_CAPACITY: usize = 16;

    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings for values the calculator cannot show.
    ///
    /// The reset display must read as "nothing entered", so only `""` and
    /// `"0"` are accepted.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !matches!(self.reset_display.as_str(), "" | "0") {
            return Err(BuildError::InvalidResetDisplay(self.reset_display.clone()));
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            reset_display: Self::DEFAULT_RESET_DISPLAY.to_string(),
            log_history: false,
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = CalculatorConfig::default();
        assert_eq!(config.reset_display, "0");
        assert!(!config.log_history);
        assert_eq!(config.history_capacity, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn empty_reset_display_is_allowed() {
        let config = CalculatorConfig::from_json(r#"{ "reset_display": "" }"#).unwrap();
        assert_eq!(config.reset_display, "");
    }

    #[test]
    fn symbol_reset_display_is_rejected() {
        let result = CalculatorConfig::from_json(r#"{ "reset_display": "--" }"#);
        assert!(matches!(result, Err(BuildError::InvalidResetDisplay(s)) if s == "--"));
    }

    #[test]
    fn numeric_reset_display_is_rejected() {
        for text in ["12", "00", "1"] {
            let json = format!(r#"{{ "reset_display": "{text}" }}"#);
            let result = CalculatorConfig::from_json(&json);
            assert!(matches!(result, Err(BuildError::InvalidResetDisplay(s)) if s == text));
        }
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = CalculatorConfig::from_json(r#"{ "log_history": "yes" }"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
