//! Core arithmetic engine
//!
//! The [`Accumulator`] register, the error type every operation reports
//! through, and the display formatting rule shared by all front ends.

mod format;
mod operations;

pub use format::{format_number, parse_operand};
pub use operations::{Accumulator, Operands, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Divisor was exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Square root of a negative operand
    #[error("Domain error: cannot take the square root of {0}")]
    DomainError(f64),
    /// Text that does not parse as a number where an operand is required
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),
    /// Token that names no keypad button
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}

impl CalcError {
    /// Text the controller shows when this error is caught
    #[must_use]
    pub const fn display_text(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Error: Div by 0",
            Self::DomainError(_) | Self::InvalidOperand(_) | Self::UnknownButton(_) => "Error",
        }
    }
}
