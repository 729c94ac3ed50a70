// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Four-function calculator state.
//!
//! Evaluation is chained left to right with no operator precedence: whenever an operator
//! or `=` arrives while an operand and an operator are pending, the pending operation is
//! applied immediately.

use crate::token::{Digit, Operator, Token};

/// Shown in place of a non-finite result (division by zero, overflow).
pub const ERROR_DISPLAY: &str = "Error";

/// Results are rounded to at most this many fractional digits before they are displayed.
pub const DISPLAY_FRACTION_DIGITS: usize = 10;

/// Digits an `f64` carries reliably. Rounding never keeps more than this in total, so
/// representation noise in the last places does not reach the display.
pub const DISPLAY_SIGNIFICANT_DIGITS: usize = 15;

const EXPONENT_LIMIT: f64 = 1e21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Yields the right-hand side. Used when an operand is pending without an operator.
    Identity,
}

impl BinaryOp {
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Identity => rhs,
        }
    }
}

impl From<Operator> for BinaryOp {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => Self::Add,
            Operator::Subtract => Self::Subtract,
            Operator::Multiply => Self::Multiply,
            Operator::Divide => Self::Divide,
        }
    }
}

/// Render a computed value for the display.
///
/// Non-finite values render as [`ERROR_DISPLAY`]. Everything else is rounded to
/// [`DISPLAY_FRACTION_DIGITS`] fractional digits, fewer when the integer part already uses
/// up [`DISPLAY_SIGNIFICANT_DIGITS`]. Trailing zeros are dropped, `-0` renders as `0`, and
/// magnitudes of `1e21` and up use exponent notation.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    if value.abs() >= EXPONENT_LIMIT {
        return format!("{value:e}");
    }

    let integer_digits = format!("{:.0}", value.abs().trunc()).len();
    let precision = DISPLAY_SIGNIFICANT_DIGITS
        .saturating_sub(integer_digits)
        .min(DISPLAY_FRACTION_DIGITS);

    let text = format!("{value:.precision$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };

    match text {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Parse display text, anything that is not a finite number counts as `0`.
#[must_use]
pub fn parse_display(display: &str) -> f64 {
    display
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending_operand: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_fresh_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_operand: false,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub const fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    #[must_use]
    pub const fn awaiting_fresh_operand(&self) -> bool {
        self.awaiting_fresh_operand
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// The display as a number.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Pure form of [`CalculatorState::apply`].
    #[must_use]
    pub fn transition(&self, token: Token) -> Self {
        let mut next = self.clone();
        next.apply(token);
        next
    }

    pub fn apply(&mut self, token: Token) {
        match token {
            Token::Digit(d) => self.enter_digit(d),
            Token::Decimal => self.enter_decimal(),
            Token::Operator(op) => self.enter_operator(op),
            Token::Equals => self.enter_equals(),
        }
    }

    fn starts_fresh_operand(&self) -> bool {
        self.awaiting_fresh_operand || self.is_error()
    }

    fn enter_digit(&mut self, digit: Digit) {
        let c = digit.as_char();

        if self.starts_fresh_operand() {
            self.display = c.to_string();
            self.awaiting_fresh_operand = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    fn enter_decimal(&mut self) {
        if self.starts_fresh_operand() {
            self.display = "0.".to_string();
            self.awaiting_fresh_operand = false;
        } else if !self.display.contains('.') {
            // "0" becomes "0.", never a bare "."
            self.display.push('.');
        }
    }

    fn enter_operator(&mut self, op: Operator) {
        let input = self.display_value();

        match self.pending_operand {
            None => self.pending_operand = Some(input),
            Some(lhs) => {
                let pending = self.pending_operator.map_or(BinaryOp::Identity, BinaryOp::from);
                match self.show_result(pending.apply(lhs, input)) {
                    Some(value) => self.pending_operand = Some(value),
                    None => return,
                }
            }
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_operand = true;
    }

    fn enter_equals(&mut self) {
        let (Some(lhs), Some(op)) = (self.pending_operand, self.pending_operator) else {
            return;
        };

        let input = self.display_value();
        let _ = self.show_result(BinaryOp::from(op).apply(lhs, input));
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_operand = true;
    }

    /// Put a computed value on the display. A non-finite value leaves the error display
    /// with nothing pending and returns `None`.
    fn show_result(&mut self, value: f64) -> Option<f64> {
        if value.is_finite() {
            self.display = format_number(value);
            return Some(value);
        }

        debug!("Calculator: non-finite result, showing error");
        self.display = ERROR_DISPLAY.to_string();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_operand = true;
        None
    }

    /// Show `value` as if it were the result of a finished calculation.
    pub fn settle(&mut self, value: &str) {
        self.display = value.to_string();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_operand = true;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Resets the display only. The pending operand, operator and fresh-operand flag
    /// survive, so the operand being typed can be corrected mid-calculation.
    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
    }
}
