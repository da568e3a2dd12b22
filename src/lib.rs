//! A keypad calculator.
//!
//! Key presses drive a [`CalculatorState`] that evaluates one pending binary
//! operation at a time, left to right, plus a fixed set of unary scientific
//! functions.

pub mod calculator;
pub mod config;
pub mod keypad;

pub use calculator::{CalculatorState, Operator, ScientificFn};
pub use config::Config;
pub use keypad::{Key, KeyError, parse_keys};
