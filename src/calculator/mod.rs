//! Calculator core.
//!
//! This module provides functionality to:
//! - Hold the session state and apply key presses to it
//! - Format and parse the numeric display
//! - Render the text readout shown to the user
//! - Copy the display to the clipboard

mod clipboard;
mod number;
mod render;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use number::{format_number, group_thousands, parse_display};
pub use render::render;
pub use state::{CalculatorState, InputError, Operator, ScientificFn};
