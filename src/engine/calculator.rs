//! The calculator engine.

use super::error::CalcError;
use super::notice::Notice;
use crate::builder::CalculatorConfig;
use crate::core::{
    format_number, parse_operand, CalcPhase, CalculationHistory, CalculationRecord, Guard,
    OperatorKind, State,
};
use tracing::{debug, info, warn};

/// Button-driven calculator with chained results and a calculation history.
///
/// Each operation runs to completion and either succeeds or returns a
/// [`CalcError`] without touching the operand, operator, input or history.
/// Failures are also posted to [`Calculator::notice`] for display.
///
/// # Example
///
/// ```rust
/// use chaincalc::{Calculator, OperatorKind};
///
/// let mut calc = Calculator::new();
/// calc.input_digit('7').unwrap();
/// calc.choose_operator(OperatorKind::Add).unwrap();
/// calc.input_digit('2').unwrap();
/// assert_eq!(calc.evaluate().unwrap(), 9.0);
/// assert_eq!(calc.display(), "9");
///
/// // The result chains into the next expression.
/// calc.choose_operator(OperatorKind::Multiply).unwrap();
/// calc.input_digit('3').unwrap();
/// assert_eq!(calc.evaluate().unwrap(), 27.0);
/// assert_eq!(calc.history().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    current_input: String,
    first_operand: Option<f64>,
    operator: Option<OperatorKind>,
    history: CalculationHistory,
    display: String,
    notice: Option<Notice>,
    /// An operator press needs something to operate on.
    operator_guard: Guard<CalcPhase>,
    /// Equals needs both operands and an operator.
    evaluate_guard: Guard<CalcPhase>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        Self {
            current_input: String::new(),
            first_operand: None,
            operator: None,
            history: CalculationHistory::with_capacity(config.history_capacity),
            display: config.reset_display.clone(),
            notice: None,
            operator_guard: Guard::new(CalcPhase::has_operand),
            evaluate_guard: Guard::new(|p: &CalcPhase| {
                matches!(p, CalcPhase::SecondOperandPending)
            }),
            config,
        }
    }

    /// Type one digit.
    ///
    /// A lone `0` in the input is replaced rather than extended, so `0` then
    /// `5` shows `5`.
    pub fn input_digit(&mut self, digit: char) -> Result<(), CalcError> {
        self.try_input_digit(digit)
            .map_err(|err| self.reject("input_digit", err))
    }

    /// Press an operator button.
    ///
    /// Typed digits become the first operand. With nothing typed, the
    /// previous result (or previously captured operand) is kept and only the
    /// operator changes.
    pub fn choose_operator(&mut self, operator: OperatorKind) -> Result<(), CalcError> {
        self.try_choose_operator(operator)
            .map_err(|err| self.reject("choose_operator", err))
    }

    /// Press an operator given as its symbol (`+`, `-`, `*` or `/`).
    pub fn choose_operator_symbol(&mut self, token: &str) -> Result<(), CalcError> {
        token
            .parse::<OperatorKind>()
            .map_err(|err| CalcError::InvalidOperator(err.0))
            .and_then(|operator| self.try_choose_operator(operator))
            .map_err(|err| self.reject("choose_operator", err))
    }

    /// Press equals.
    ///
    /// On success the record is appended to the history, the result becomes
    /// the next first operand and is returned.
    pub fn evaluate(&mut self) -> Result<f64, CalcError> {
        self.try_evaluate().map_err(|err| self.reject("evaluate", err))
    }

    /// Clear everything, history included.
    pub fn reset(&mut self) {
        self.current_input.clear();
        self.first_operand = None;
        self.operator = None;
        self.history.clear();
        self.display.clone_from(&self.config.reset_display);
        self.notice = None;
        info!("calculator reset");
    }

    /// Text currently on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Completed calculations, oldest first.
    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// Latest result or failure message, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Current position in the operand/operator/operand cycle.
    pub fn phase(&self) -> CalcPhase {
        CalcPhase::derive(
            self.first_operand.is_some(),
            self.operator.is_some(),
            !self.current_input.is_empty(),
        )
    }

    /// Digits typed since the last operator, evaluation or reset.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn operator(&self) -> Option<OperatorKind> {
        self.operator
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn try_input_digit(&mut self, digit: char) -> Result<(), CalcError> {
        if !digit.is_ascii_digit() {
            return Err(CalcError::InvalidDigit(digit));
        }

        if self.current_input == "0" {
            self.current_input.clear();
        }
        self.current_input.push(digit);
        self.display.clone_from(&self.current_input);

        let phase = self.phase();
        debug!(
            %digit,
            input = %self.current_input,
            phase = phase.name(),
            "digit entered"
        );
        Ok(())
    }

    fn try_choose_operator(&mut self, operator: OperatorKind) -> Result<(), CalcError> {
        if !self.operator_guard.check(&self.phase()) {
            return Err(CalcError::MissingOperand);
        }

        if !self.current_input.is_empty() {
            let operand = parse_operand(&self.current_input)
                .ok_or_else(|| CalcError::InvalidNumber(self.current_input.clone()))?;
            self.first_operand = Some(operand);
        }

        self.operator = Some(operator);
        self.current_input.clear();

        debug!(
            operator = operator.symbol(),
            first = ?self.first_operand,
            "operator chosen"
        );
        Ok(())
    }

    fn try_evaluate(&mut self) -> Result<f64, CalcError> {
        if !self.evaluate_guard.check(&self.phase()) {
            return Err(CalcError::IncompleteExpression);
        }
        let (Some(first), Some(operator)) = (self.first_operand, self.operator) else {
            return Err(CalcError::IncompleteExpression);
        };

        let second = parse_operand(&self.current_input)
            .ok_or_else(|| CalcError::InvalidNumber(self.current_input.clone()))?;

        if operator == OperatorKind::Divide && second == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        let result = operator.apply(first, second);
        self.history
            .push(CalculationRecord::new(first, operator, second, result));

        self.first_operand = Some(result);
        self.operator = None;
        self.current_input.clear();
        self.display = format_number(result);
        self.notice = Some(Notice::Result(result));

        info!(
            first,
            operator = operator.symbol(),
            second,
            result,
            history_len = self.history.len(),
            "calculation completed"
        );
        if self.config.log_history {
            self.log_history();
        }

        Ok(result)
    }

    fn log_history(&self) {
        match self.history.to_json() {
            Ok(json) => debug!(history = %json, "calculation history"),
            Err(err) => warn!(error = %err, "failed to serialize calculation history"),
        }
    }

    fn reject(&mut self, operation: &'static str, err: CalcError) -> CalcError {
        let phase = self.phase();
        warn!(
            operation,
            error.kind = err.kind(),
            phase = phase.name(),
            "{err}"
        );
        self.notice = Some(Notice::Error(err.clone()));
        err
    }
}
