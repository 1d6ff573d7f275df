//! Four-function calculator state machine backing the keypad.

mod calculator_state;

pub use calculator_state::{Calculator, Operation, MAX_OPERAND_DIGITS};
