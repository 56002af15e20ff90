//! Keypad button vocabulary
//!
//! Type-safe button events; a front end maps its widgets (or terminal
//! tokens) onto these and the controller matches on them.

use crate::core::{CalcError, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operators that can be left pending between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// All pending-capable operators, in keypad column order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Keypad symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// The accumulator operation this operator resolves to
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Self::Add => Operation::Add,
            Self::Subtract => Operation::Subtract,
            Self::Multiply => Operation::Multiply,
            Self::Divide => Operation::Divide,
        }
    }
}

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Arithmetic operator
    Operator(Operator),
    /// Resolve the pending calculation (`=`)
    Equals,
    /// Reset everything (`C`)
    Clear,
    /// Flip the sign of the displayed value (`±`)
    Negate,
    /// Square root of the displayed value (`√`)
    SquareRoot,
    /// Square of the displayed value (`x²`)
    Square,
}

impl Button {
    /// Buttons in keypad order, four per row
    /// ```text
    /// [ C ] [ √ ] [ x²] [ / ]
    /// [ 7 ] [ 8 ] [ 9 ] [ * ]
    /// [ 4 ] [ 5 ] [ 6 ] [ - ]
    /// [ 1 ] [ 2 ] [ 3 ] [ + ]
    /// [ 0 ] [ . ] [ ± ] [ = ]
    /// ```
    pub const KEYPAD: [Self; 20] = [
        Self::Clear,
        Self::SquareRoot,
        Self::Square,
        Self::Operator(Operator::Divide),
        Self::Digit(7),
        Self::Digit(8),
        Self::Digit(9),
        Self::Operator(Operator::Multiply),
        Self::Digit(4),
        Self::Digit(5),
        Self::Digit(6),
        Self::Operator(Operator::Subtract),
        Self::Digit(1),
        Self::Digit(2),
        Self::Digit(3),
        Self::Operator(Operator::Add),
        Self::Digit(0),
        Self::Decimal,
        Self::Negate,
        Self::Equals,
    ];

    /// Number of keypad columns
    pub const KEYPAD_COLUMNS: usize = 4;

    /// Creates a digit button, `None` outside 0-9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the character this button appends to the operand buffer
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// Returns the keypad label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Negate => "\u{b1}".to_string(),
            Self::SquareRoot => "\u{221a}".to_string(),
            Self::Square => "x\u{b2}".to_string(),
        }
    }

    /// ASCII spellings accepted in addition to the label
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Operator(Operator::Multiply) => &["x"],
            Self::Clear => &["c", "clear"],
            Self::Negate => &["neg", "+/-"],
            Self::SquareRoot => &["sqrt"],
            Self::Square => &["sq", "x2", "x^2"],
            _ => &[],
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Button {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        Self::KEYPAD
            .into_iter()
            .find(|button| button.label() == token || button.aliases().contains(&token))
            .ok_or_else(|| CalcError::UnknownButton(token.to_string()))
    }
}
