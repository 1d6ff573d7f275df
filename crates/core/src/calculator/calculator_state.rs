use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Most digits an operand may have; `Decimal` holds 28 significant digits.
pub const MAX_OPERAND_DIGITS: usize = 28;

/// Binary operation on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply to `lhs` and `rhs`. Division by zero and overflow yield `lhs`.
    pub fn apply(&self, lhs: Decimal, rhs: Decimal) -> Decimal {
        let result = match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
            Operation::Multiply => lhs.checked_mul(rhs),
            Operation::Divide if rhs.is_zero() => None,
            Operation::Divide => lhs.checked_div(rhs),
        };
        result.unwrap_or(lhs)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            _ => Err(format!("Unknown operation: {}", s)),
        }
    }
}

/// Keypad calculator.
///
/// `display` holds the text being typed or the last result. Choosing an
/// operation stores the displayed value in `previous_value` and waits for the
/// right operand; choosing another operation before `calculate` folds the
/// pending one first, so `2 + 3 * 4 =` evaluates left to right as 20.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculator {
    display: String,
    previous_value: Option<Decimal>,
    operation: Option<Operation>,
    waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn previous_value(&self) -> Option<Decimal> {
        self.previous_value
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Whether a key is one of the four operation keys.
    pub fn is_operation(key: &str) -> bool {
        key.parse::<Operation>().is_ok()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Append a digit to the operand being typed. The display is left
    /// unchanged when the operand already has [`MAX_OPERAND_DIGITS`] digits.
    pub fn input_digit(&mut self, digit: char) -> Result<()> {
        if !digit.is_ascii_digit() {
            return Err(ValidationError::InvalidInput(format!("'{}' is not a digit", digit)).into());
        }

        if !self.waiting_for_operand
            && self.display != "0"
            && digit_count(&self.display) >= MAX_OPERAND_DIGITS
        {
            return Err(ValidationError::InvalidInput(format!(
                "operands are limited to {} digits",
                MAX_OPERAND_DIGITS
            ))
            .into());
        }

        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        Ok(())
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn input_operation(&mut self, next: Operation) {
        let input_value = self.result();

        match (self.previous_value, self.operation) {
            (None, _) => {
                self.previous_value = Some(input_value);
            }
            (Some(_), Some(_)) if self.waiting_for_operand => {}
            (Some(previous), pending) => {
                let folded = pending.map_or(input_value, |op| op.apply(previous, input_value));
                self.display = format_value(folded);
                self.previous_value = Some(folded);
            }
        }

        self.operation = Some(next);
        self.waiting_for_operand = true;
    }

    /// Evaluate the pending operation. Does nothing without one.
    pub fn calculate(&mut self) {
        let (Some(previous), Some(op)) = (self.previous_value, self.operation) else {
            return;
        };

        let value = op.apply(previous, self.result());
        self.display = format_value(value);
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = true;
    }

    pub fn backspace(&mut self) {
        if self.waiting_for_operand || self.display == "0" {
            return;
        }

        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// Numeric value of the display.
    pub fn result(&self) -> Decimal {
        parse_display(&self.display).unwrap_or(Decimal::ZERO)
    }

    /// Replace the display, e.g. with the amount from the converter.
    /// Values that are not a number `Decimal` can hold exactly are refused
    /// and the display is left as it was.
    pub fn set_display(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if parse_display(&value).is_none() {
            return Err(
                ValidationError::InvalidInput(format!("'{}' is not a valid number", value)).into(),
            );
        }
        self.display = value;
        self.waiting_for_operand = false;
        Ok(())
    }
}

fn parse_display(text: &str) -> Option<Decimal> {
    let text = text.trim().trim_end_matches('.');
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text).ok()
}

fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

fn format_value(value: Decimal) -> String {
    value.normalize().to_string()
}
