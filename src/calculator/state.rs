//! Calculator session state and its input transitions.
//!
//! One [`CalculatorState`] lives for the whole session. Every button press
//! maps to one method here; each runs to completion and leaves the display
//! ready to render.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, warn};

use super::number::{format_number, parse_display};
use crate::keypad::Key;

/// Binary operators that can be left pending between operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// Apply the operator to a pending left operand and the entered value.
    ///
    /// Division yields 0 whenever the dividend is 0, before looking at the
    /// divisor. A nonzero dividend over 0 yields an infinity.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if a == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
            Self::Modulo => a % b,
            Self::Power => power(a, b),
        }
    }

    /// Glyph shown on the button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
            Self::Power => "^",
        }
    }
}

/// Unary functions applied to the current display value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScientificFn {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Negate,
}

impl ScientificFn {
    /// Transform a value. Trigonometric functions take degrees.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sqrt => value.sqrt(),
            Self::Sin => to_radians(value).sin(),
            Self::Cos => to_radians(value).cos(),
            Self::Tan => to_radians(value).tan(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
            Self::Negate => -value,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Negate => "+/-",
        }
    }
}

/// `powf` with `NaN` for a `NaN` exponent and for `±1` raised to `±∞`.
fn power(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }
    a.powf(b)
}

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Rejected input that never reached the state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a digit")]
    NotADigit(char),
}

/// Transient session state behind the display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown; `"0"` when empty.
    pub display: String,
    /// Left operand captured when an operator was chosen.
    #[serde(with = "operand_text")]
    pub pending_operand: Option<f64>,
    /// Operator waiting for its right operand.
    pub pending_operator: Option<Operator>,
    /// Next digit starts a new number instead of extending the display.
    pub awaiting_fresh_entry: bool,
}

/// Snapshots store the operand in display form so `NaN` and the
/// infinities survive formats without non-finite numbers.
mod operand_text {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_some(&format_number(*v)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let text: Option<String> = Option::deserialize(d)?;
        Ok(text.map(|t| parse_display(&t)))
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Enter one digit `0`-`9`.
    ///
    /// A lone `"0"` is replaced rather than prefixed.
    pub fn digit(&mut self, d: char) -> Result<(), InputError> {
        if !d.is_ascii_digit() {
            return Err(InputError::NotADigit(d));
        }

        if self.awaiting_fresh_entry {
            self.display = d.to_string();
            self.awaiting_fresh_entry = false;
        } else if self.display == "0" {
            self.display = d.to_string();
        } else {
            self.display.push(d);
        }

        Ok(())
    }

    /// Enter the decimal point. A second point on the same number is ignored.
    pub fn decimal_point(&mut self) {
        if self.awaiting_fresh_entry {
            self.display = "0.".to_string();
            self.awaiting_fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Choose a binary operator.
    ///
    /// An already pending operation is evaluated first against the current
    /// value, so chains evaluate strictly left to right.
    pub fn operator(&mut self, op: Operator) {
        let current = parse_display(&self.display);

        match (self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(current),
            (Some(operand), Some(pending)) => {
                let result = pending.apply(operand, current);
                self.display = format_number(result);
                self.pending_operand = Some(result);
            }
            (Some(_), None) => {}
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_entry = true;
    }

    /// Evaluate the pending operation. Does nothing when none is pending.
    pub fn equals(&mut self) {
        let (Some(operand), Some(op)) = (self.pending_operand, self.pending_operator) else {
            return;
        };

        let result = op.apply(operand, parse_display(&self.display));
        self.display = format_number(result);
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_entry = true;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop the last character, falling back to `"0"`.
    pub fn backspace(&mut self) {
        if self.display.chars().count() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    /// Replace the display with a unary transform of its value.
    ///
    /// Pending operand and operator are kept, so the result feeds the
    /// next step of a chain.
    pub fn scientific(&mut self, func: ScientificFn) {
        let value = parse_display(&self.display);
        self.display = format_number(func.apply(value));
        self.awaiting_fresh_entry = true;
    }

    /// Show a constant such as π.
    pub fn insert_constant(&mut self, value: f64) {
        self.display = format_number(value);
        self.awaiting_fresh_entry = true;
    }

    /// Handle one key press and return the display to render.
    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Digit(d) => {
                let c = char::from_digit(u32::from(d), 10).unwrap_or('?');
                if let Err(e) = self.digit(c) {
                    warn!(key = ?key, "Ignoring key: {}", e);
                }
            }
            Key::Decimal => self.decimal_point(),
            Key::Operator(op) => self.operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
            Key::Scientific(func) => self.scientific(func),
            Key::Pi => self.insert_constant(std::f64::consts::PI),
        }

        debug!(
            key = %key,
            display = %self.display,
            pending_operand = ?self.pending_operand,
            pending_operator = ?self.pending_operator,
            awaiting_fresh_entry = self.awaiting_fresh_entry,
            "Key pressed"
        );

        &self.display
    }

    /// By-value transition: the state after `key`.
    pub fn step(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    /// Run a sequence of keys from the current state.
    pub fn press_all<I>(&mut self, keys: I) -> &str
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        &self.display
    }
}
