//! Calculation history tracking.
//!
//! Records are immutable once created. The history only ever grows by
//! appending, until the owning calculator is reset.

use super::number::format_number;
use super::operator::OperatorKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Record of a single completed evaluation.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{CalculationRecord, OperatorKind};
///
/// let record = CalculationRecord::new(7.0, OperatorKind::Add, 2.0, 9.0);
/// assert_eq!(record.to_string(), "7 + 2 = 9");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Left-hand operand
    pub first_operand: f64,
    /// Operator applied
    pub operator: OperatorKind,
    /// Right-hand operand
    pub second_operand: f64,
    /// Value produced by the evaluation
    pub result: f64,
    /// When the evaluation completed
    pub recorded_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        first_operand: f64,
        operator: OperatorKind,
        second_operand: f64,
        result: f64,
    ) -> Self {
        Self::at(first_operand, operator, second_operand, result, Utc::now())
    }

    /// Create a record with an explicit timestamp.
    pub fn at(
        first_operand: f64,
        operator: OperatorKind,
        second_operand: f64,
        result: f64,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            first_operand,
            operator,
            second_operand,
            result,
            recorded_at,
        }
    }

    /// The arithmetic part of the record, without the timestamp.
    pub fn terms(&self) -> (f64, OperatorKind, f64, f64) {
        (
            self.first_operand,
            self.operator,
            self.second_operand,
            self.result,
        )
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.first_operand),
            self.operator,
            format_number(self.second_operand),
            format_number(self.result)
        )
    }
}

/// Ordered history of completed calculations, oldest first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationHistory {
    records: Vec<CalculationRecord>,
}

impl CalculationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in chronological order.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter()
    }

    /// Iterate newest first, the order a history list shows them in.
    pub fn newest_first(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter().rev()
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }

    /// Record at `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&CalculationRecord> {
        self.records.get(index)
    }

    /// Get the sequence of results produced, in order.
    ///
    /// In a pure chain each result is the next record's first operand.
    pub fn results(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.result).collect()
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` if there are no records.
    pub fn span(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.recorded_at.signed_duration_since(first.recorded_at);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Pretty-printed JSON array of the records.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}

impl<'a> IntoIterator for &'a CalculationHistory {
    type Item = &'a CalculationRecord;
    type IntoIter = std::slice::Iter<'a, CalculationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
