//! Accumulator register and its operations
//!
//! Every binary operation has two call forms, carried by [`Operands`]:
//! operate on the stored register, or operate on two explicit values and
//! overwrite the register with the outcome.

use crate::core::{CalcError, CalcResult};
use tracing::{debug, warn};

/// Type-safe binary operation enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (^)
    Power,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Computes `lhs op rhs` without touching any register
    ///
    /// Division by an exact zero is the only failure.
    pub fn eval(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            Self::Power => Ok(lhs.powf(rhs)),
        }
    }
}

/// Call form of a binary accumulator operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// `register = register op a`
    Register(f64),
    /// `register = a op b`
    Pair(f64, f64),
}

/// Running-result calculator
///
/// Holds a single register, initialised to 0. The register always mirrors
/// the output of the last successful operation; a failed operation leaves
/// it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    result: f64,
}

impl Accumulator {
    /// Creates an accumulator with the register at 0
    #[must_use]
    pub fn new() -> Self {
        Self { result: 0.0 }
    }

    /// Creates an accumulator with a preset register
    #[must_use]
    pub fn with_register(result: f64) -> Self {
        Self { result }
    }

    /// Current register value
    #[must_use]
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Applies `op` in either call form and stores the outcome
    pub fn apply(&mut self, op: Operation, operands: Operands) -> CalcResult<f64> {
        let (lhs, rhs) = match operands {
            Operands::Register(a) => (self.result, a),
            Operands::Pair(a, b) => (a, b),
        };

        match op.eval(lhs, rhs) {
            Ok(value) => {
                debug!(
                    op = op.symbol(),
                    lhs,
                    rhs,
                    result = value,
                    "accumulator operation"
                );
                self.result = value;
                Ok(value)
            }
            Err(err) => {
                warn!(op = op.symbol(), lhs, rhs, error = %err, "accumulator operation failed");
                Err(err)
            }
        }
    }

    /// Addition
    pub fn add(&mut self, operands: Operands) -> CalcResult<f64> {
        self.apply(Operation::Add, operands)
    }

    /// Subtraction
    pub fn subtract(&mut self, operands: Operands) -> CalcResult<f64> {
        self.apply(Operation::Subtract, operands)
    }

    /// Multiplication
    pub fn multiply(&mut self, operands: Operands) -> CalcResult<f64> {
        self.apply(Operation::Multiply, operands)
    }

    /// Division; the divisor is `a` in register form and `b` in pair form
    pub fn divide(&mut self, operands: Operands) -> CalcResult<f64> {
        self.apply(Operation::Divide, operands)
    }

    /// Exponentiation; in register form the register is the base
    pub fn power(&mut self, operands: Operands) -> CalcResult<f64> {
        self.apply(Operation::Power, operands)
    }

    /// Square root of `a`, stored in the register
    pub fn square_root(&mut self, a: f64) -> CalcResult<f64> {
        if a < 0.0 {
            warn!(operand = a, "square root of negative operand");
            return Err(CalcError::DomainError(a));
        }
        self.result = a.sqrt();
        debug!(operand = a, result = self.result, "square root");
        Ok(self.result)
    }

    /// Square root of the current register
    pub fn square_root_of_register(&mut self) -> CalcResult<f64> {
        self.square_root(self.result)
    }

    /// Resets the register to 0
    pub fn clear(&mut self) -> f64 {
        debug!(previous = self.result, "accumulator cleared");
        self.result = 0.0;
        self.result
    }
}
