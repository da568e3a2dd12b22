//! Parsing of button labels and typed key sequences.
//!
//! A key sequence is a compact string of button presses such as `2+3*4=`
//! or `90 sin`. Digits are always one key each; words name buttons.

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

use super::Key;
use crate::calculator::{Operator, ScientificFn};

lazy_static! {
    /// Whitespace between keys.
    static ref SEPARATOR: Regex = Regex::new(r"^\s+").unwrap();

    /// One key token. `+/-` must win over `+`.
    static ref TOKEN: Regex = Regex::new(
        r"^(?:\+/-|[A-Za-z]+|\d|[.+\-−*×/÷%^=⌫√π])"
    ).unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// A label that names no button.
    #[error("unknown key '{0}'")]
    Unrecognized(String),
    /// A token inside a key sequence that names no button.
    #[error("unknown key '{token}' at offset {offset}")]
    Unknown { token: String, offset: usize },
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "." => Key::Decimal,
            "+" => Key::Operator(Operator::Add),
            "-" | "−" => Key::Operator(Operator::Subtract),
            "*" | "×" => Key::Operator(Operator::Multiply),
            "/" | "÷" => Key::Operator(Operator::Divide),
            "%" => Key::Operator(Operator::Modulo),
            "^" => Key::Operator(Operator::Power),
            "=" => Key::Equals,
            "⌫" => Key::Backspace,
            "√" => Key::Scientific(ScientificFn::Sqrt),
            "+/-" => Key::Scientific(ScientificFn::Negate),
            "π" => Key::Pi,
            _ => return parse_word(s),
        };

        Ok(key)
    }
}

/// Parse a single digit or a named button (case-insensitive).
fn parse_word(s: &str) -> Result<Key, KeyError> {
    if let [b] = s.as_bytes()
        && let Some(key) = b.checked_sub(b'0').and_then(Key::digit)
    {
        return Ok(key);
    }

    let key = match s.to_ascii_lowercase().as_str() {
        "c" | "clear" => Key::Clear,
        "back" | "bs" => Key::Backspace,
        "sqrt" => Key::Scientific(ScientificFn::Sqrt),
        "sin" => Key::Scientific(ScientificFn::Sin),
        "cos" => Key::Scientific(ScientificFn::Cos),
        "tan" => Key::Scientific(ScientificFn::Tan),
        "log" => Key::Scientific(ScientificFn::Log10),
        "ln" => Key::Scientific(ScientificFn::Ln),
        "neg" => Key::Scientific(ScientificFn::Negate),
        "pi" => Key::Pi,
        _ => return Err(KeyError::Unrecognized(s.to_string())),
    };

    Ok(key)
}

/// Split a typed key sequence into key presses.
///
/// Whitespace is ignored. The first token that names no button aborts
/// parsing with its byte offset.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, KeyError> {
    let mut keys = Vec::new();
    let mut offset = 0;

    while offset < input.len() {
        let rest = &input[offset..];

        if let Some(sep) = SEPARATOR.find(rest) {
            offset += sep.end();
            continue;
        }

        let Some(token) = TOKEN.find(rest) else {
            let token = rest.chars().next().map(String::from).unwrap_or_default();
            return Err(KeyError::Unknown { token, offset });
        };

        let key: Key = token.as_str().parse().map_err(|_| KeyError::Unknown {
            token: token.as_str().to_string(),
            offset,
        })?;

        keys.push(key);
        offset += token.end();
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_labels() {
        assert_eq!("7".parse(), Ok(Key::Digit(7)));
        assert_eq!("0".parse(), Ok(Key::Digit(0)));
        assert_eq!("9".parse(), Ok(Key::Digit(9)));
        assert_eq!("×".parse(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("*".parse(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!("−".parse(), Ok(Key::Operator(Operator::Subtract)));
        assert_eq!("+/-".parse(), Ok(Key::Scientific(ScientificFn::Negate)));
        assert_eq!("PI".parse(), Ok(Key::Pi));
        assert_eq!("Back".parse(), Ok(Key::Backspace));
    }

    #[test]
    fn test_unrecognized_label() {
        assert_eq!(
            "exp".parse::<Key>(),
            Err(KeyError::Unrecognized("exp".to_string()))
        );
        assert!("12".parse::<Key>().is_err());
        assert_eq!(
            ":".parse::<Key>(),
            Err(KeyError::Unrecognized(":".to_string()))
        );
        assert_eq!(
            "/".parse::<Key>(),
            Ok(Key::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_compact_sequence() {
        let keys = parse_keys("2+3*4=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(2),
                Key::Operator(Operator::Add),
                Key::Digit(3),
                Key::Operator(Operator::Multiply),
                Key::Digit(4),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_words_and_whitespace() {
        let keys = parse_keys(" 90 sin\tpi c ").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(9),
                Key::Digit(0),
                Key::Scientific(ScientificFn::Sin),
                Key::Pi,
                Key::Clear,
            ]
        );
    }

    #[test]
    fn test_negate_wins_over_plus() {
        let keys = parse_keys("5+/-+1").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(5),
                Key::Scientific(ScientificFn::Negate),
                Key::Operator(Operator::Add),
                Key::Digit(1),
            ]
        );
    }

    #[test]
    fn test_unicode_glyphs() {
        let keys = parse_keys("16√⌫π÷").unwrap();
        assert_eq!(keys.len(), 6);
        assert_eq!(keys[2], Key::Scientific(ScientificFn::Sqrt));
        assert_eq!(keys[3], Key::Backspace);
        assert_eq!(keys[4], Key::Pi);
        assert_eq!(keys[5], Key::Operator(Operator::Divide));
    }

    #[test]
    fn test_unknown_word_reports_offset() {
        assert_eq!(
            parse_keys("2 + foo"),
            Err(KeyError::Unknown {
                token: "foo".to_string(),
                offset: 4,
            })
        );
    }

    #[test]
    fn test_unknown_symbol_reports_offset() {
        assert_eq!(
            parse_keys("1(2"),
            Err(KeyError::Unknown {
                token: "(".to_string(),
                offset: 1,
            })
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(parse_keys(""), Ok(vec![]));
        assert_eq!(parse_keys("   "), Ok(vec![]));
    }
}
