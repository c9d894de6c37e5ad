//! Guard predicates for controlling operations.
//!
//! Guards are pure boolean functions over a state. The calculator checks
//! one before every operation that has a precondition on its phase.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that determines if an operation can run from a state.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{CalcPhase, Guard};
///
/// let ready = Guard::new(|p: &CalcPhase| matches!(p, CalcPhase::SecondOperandPending));
///
/// assert!(ready.check(&CalcPhase::SecondOperandPending));
/// assert!(!ready.check(&CalcPhase::OperatorSelected));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows the operation from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
