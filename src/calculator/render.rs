//! Text readout for the terminal front end.

use super::number::{format_number, group_thousands};
use super::state::CalculatorState;
use crate::config::Config;

/// Render the display, optionally grouped and prefixed with the pending
/// operation as `operand op | display`.
pub fn render(state: &CalculatorState, config: &Config) -> String {
    let display = if config.group_digits {
        group_thousands(state.display())
    } else {
        state.display().to_string()
    };

    match (config.show_pending, state.pending_operand, state.pending_operator) {
        (true, Some(operand), Some(op)) => {
            let operand = format_number(operand);
            let operand = if config.group_digits {
                group_thousands(&operand)
            } else {
                operand
            };
            format!("{} {} | {}", operand, op.symbol(), display)
        }
        _ => display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::parse_keys;

    fn run(sequence: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        state.press_all(parse_keys(sequence).unwrap());
        state
    }

    fn config(group_digits: bool, show_pending: bool) -> Config {
        Config {
            group_digits,
            show_pending,
            ..Config::default()
        }
    }

    #[test]
    fn test_plain_display() {
        let state = run("1234567+89");
        assert_eq!(render(&state, &Config::default()), "89");
        assert_eq!(render(&run("1234567"), &Config::default()), "1234567");
    }

    #[test]
    fn test_grouped_display() {
        let config = config(true, false);
        assert_eq!(render(&run("1234567"), &config), "1,234,567");
        assert_eq!(render(&run("1234.5"), &config), "1,234.5");
        assert_eq!(render(&run("9/0="), &config), "Infinity");
    }

    #[test]
    fn test_pending_operation_shown() {
        let config = config(false, true);
        assert_eq!(render(&run("12+3"), &config), "12 + | 3");
        assert_eq!(render(&run("2+3*"), &config), "5 × | 5");
        assert_eq!(render(&run("7-"), &config), "7 − | 7");
    }

    #[test]
    fn test_pending_hidden_without_operator() {
        let config = config(false, true);
        assert_eq!(render(&run("42"), &config), "42");
        assert_eq!(render(&run("2+3="), &config), "5");
    }

    #[test]
    fn test_grouped_with_pending() {
        let config = config(true, true);
        assert_eq!(render(&run("1000*2000"), &config), "1,000 × | 2,000");
        assert_eq!(render(&run("9/0=+"), &config), "Infinity + | Infinity");
    }
}
