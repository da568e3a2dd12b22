//! Keypad input events.
//!
//! This module provides:
//! - The [`Key`] event for every button on the keypad
//! - Parsing of button labels and typed key sequences
//! - The fixed button grid

mod parse;

pub use parse::{KeyError, parse_keys};

use crate::calculator::{Operator, ScientificFn};
use std::fmt;

/// A single button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit `0`-`9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Scientific(ScientificFn),
    /// Insert π.
    Pi,
}

impl Key {
    /// Create a digit key, or `None` if `d` is not a single decimal digit.
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Label printed on the button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::Backspace => "⌫",
            Self::Scientific(func) => func.label(),
            Self::Pi => "π",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// The button grid, top row first.
pub const LAYOUT: &[&[Key]] = &[
    &[Key::Clear, Key::Backspace],
    &[
        Key::Scientific(ScientificFn::Sqrt),
        Key::Scientific(ScientificFn::Sin),
        Key::Scientific(ScientificFn::Cos),
        Key::Scientific(ScientificFn::Log10),
    ],
    &[
        Key::Scientific(ScientificFn::Tan),
        Key::Scientific(ScientificFn::Ln),
        Key::Scientific(ScientificFn::Negate),
        Key::Pi,
    ],
    &[
        Key::Operator(Operator::Modulo),
        Key::Operator(Operator::Divide),
    ],
    &[
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Operator(Operator::Multiply),
    ],
    &[
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Operator(Operator::Subtract),
    ],
    &[
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Operator(Operator::Add),
    ],
    &[
        Key::Digit(0),
        Key::Decimal,
        Key::Operator(Operator::Power),
        Key::Equals,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Key::digit(7), Some(Key::Digit(7)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Digit(3).label(), "3");
        assert_eq!(Key::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Key::Scientific(ScientificFn::Log10).label(), "log");
        assert_eq!(Key::Pi.to_string(), "π");
    }

    #[test]
    fn test_layout_has_every_button() {
        let keys: Vec<Key> = LAYOUT.iter().flat_map(|row| row.iter().copied()).collect();

        for d in 0..=9 {
            assert!(keys.contains(&Key::Digit(d)), "missing digit {}", d);
        }
        assert!(keys.contains(&Key::Decimal));
        assert!(keys.contains(&Key::Equals));
        assert!(keys.contains(&Key::Clear));
        assert!(keys.contains(&Key::Backspace));
        assert!(keys.contains(&Key::Pi));
        assert_eq!(
            keys.iter().filter(|k| matches!(k, Key::Operator(_))).count(),
            6
        );
        assert_eq!(
            keys.iter().filter(|k| matches!(k, Key::Scientific(_))).count(),
            7
        );
    }

    #[test]
    fn test_every_label_parses_back() {
        for key in LAYOUT.iter().flat_map(|row| row.iter()) {
            assert_eq!(key.label().parse::<Key>(), Ok(*key));
        }
    }
}
