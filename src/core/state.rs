//! State trait and the calculator's phase enumeration.
//!
//! The calculator never stores its phase directly. The phase is derived
//! from the operand/operator/input triple, so it can never drift out of
//! sync with the data it describes.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: states are copied into log records
/// - `PartialEq`: guards compare states
/// - `Serialize` + `Deserialize`: states appear in serialized diagnostics
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of the calculator in the operand/operator/operand cycle.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{CalcPhase, State};
///
/// let phase = CalcPhase::derive(true, true, false);
/// assert_eq!(phase, CalcPhase::OperatorSelected);
/// assert_eq!(phase.name(), "OperatorSelected");
/// assert!(!phase.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CalcPhase {
    /// Nothing entered. Initial phase and the phase after a reset.
    Idle,
    /// Digits typed, no operator chosen yet.
    OperandPending,
    /// First operand and operator captured, awaiting the second operand.
    OperatorSelected,
    /// Second operand being typed; the expression can be evaluated.
    SecondOperandPending,
    /// A result was just computed and waits to be chained into the next expression.
    ChainReady,
}

impl CalcPhase {
    /// Derive the phase from which parts of the engine state are populated.
    pub fn derive(has_first_operand: bool, has_operator: bool, has_input: bool) -> Self {
        match (has_first_operand, has_operator, has_input) {
            (_, true, true) => Self::SecondOperandPending,
            (_, false, true) => Self::OperandPending,
            (_, true, false) => Self::OperatorSelected,
            (true, false, false) => Self::ChainReady,
            (false, false, false) => Self::Idle,
        }
    }

    /// Whether an operand is available to an operator press in this phase.
    pub fn has_operand(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl State for CalcPhase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::OperandPending => "OperandPending",
            Self::OperatorSelected => "OperatorSelected",
            Self::SecondOperandPending => "SecondOperandPending",
            Self::ChainReady => "ChainReady",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::ChainReady)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_covers_every_combination() {
        assert_eq!(CalcPhase::derive(false, false, false), CalcPhase::Idle);
        assert_eq!(
            CalcPhase::derive(false, false, true),
            CalcPhase::OperandPending
        );
        assert_eq!(
            CalcPhase::derive(true, false, true),
            CalcPhase::OperandPending
        );
        assert_eq!(
            CalcPhase::derive(true, true, false),
            CalcPhase::OperatorSelected
        );
        assert_eq!(
            CalcPhase::derive(true, true, true),
            CalcPhase::SecondOperandPending
        );
        assert_eq!(CalcPhase::derive(true, false, false), CalcPhase::ChainReady);
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(CalcPhase::Idle.name(), "Idle");
        assert_eq!(CalcPhase::OperandPending.name(), "OperandPending");
        assert_eq!(CalcPhase::OperatorSelected.name(), "OperatorSelected");
        assert_eq!(
            CalcPhase::SecondOperandPending.name(),
            "SecondOperandPending"
        );
        assert_eq!(CalcPhase::ChainReady.name(), "ChainReady");
    }

    #[test]
    fn only_chain_ready_is_final() {
        assert!(!CalcPhase::Idle.is_final());
        assert!(!CalcPhase::OperandPending.is_final());
        assert!(!CalcPhase::OperatorSelected.is_final());
        assert!(!CalcPhase::SecondOperandPending.is_final());
        assert!(CalcPhase::ChainReady.is_final());
    }

    #[test]
    fn idle_has_no_operand() {
        assert!(!CalcPhase::Idle.has_operand());
        assert!(CalcPhase::ChainReady.has_operand());
        assert!(CalcPhase::OperandPending.has_operand());
    }

    #[test]
    fn state_serializes_correctly() {
        let phase = CalcPhase::SecondOperandPending;
        let json = serde_json::to_string(&phase).unwrap();
        assert_eq!(json, "\"SecondOperandPending\"");
        let deserialized: CalcPhase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, deserialized);
    }
}
