//! keycalc - Accumulator Calculator Engine
//!
//! A running-result calculator core in two layers:
//!
//! - [`core::Accumulator`] owns a single `f64` register and applies
//!   operations either to that register or to two explicit operands.
//! - [`controller::Controller`] is the button-driven state machine a keypad
//!   front end talks to: it buffers the operand being typed, tracks the
//!   pending operator and turns every failure into display text.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! // Explicit operands overwrite the register
//! let mut acc = Accumulator::new();
//! assert_eq!(acc.add(Operands::Pair(5.0, 3.0)), Ok(8.0));
//!
//! // Register form operates on the running result
//! assert_eq!(acc.multiply(Operands::Register(2.0)), Ok(16.0));
//!
//! // Button presses drive the same engine
//! let mut controller = Controller::new();
//! let buttons = "5 + 3 * 2 =".split_whitespace().map(|t| t.parse().unwrap());
//! let display = controller.press_all(buttons);
//! assert_eq!(display, "16");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod controller;
pub mod core;
pub mod driver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::{Button, Controller, Operator, Snapshot};
    pub use crate::core::{
        format_number, parse_operand, Accumulator, CalcError, CalcResult, Operands, Operation,
    };
    pub use crate::driver::ButtonDriver;
}
