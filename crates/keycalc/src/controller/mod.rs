//! Button-driven input controller
//!
//! A small state machine between a keypad and the [`Accumulator`]. It
//! buffers the operand being typed, remembers the operator waiting for its
//! second operand, and calls the accumulator when a press completes a
//! calculation. Every failure is caught here and turned into display text;
//! nothing propagates out of [`Controller::press`].
//!
//! Two conceptual states, tracked by `awaiting_new_entry`:
//!
//! - **typing**: digit presses append to the displayed buffer
//! - **awaiting operand**: the next digit press starts a fresh buffer
//!   (after an operator, `=`, a unary operation, `C`, or any error)

mod button;

pub use button::{Button, Operator};

use crate::core::{format_number, parse_operand, Accumulator, CalcError, CalcResult, Operands};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Display text of a freshly cleared controller
const INITIAL_DISPLAY: &str = "0";

/// Read-only view of the controller state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Text currently shown
    pub display: String,
    /// Accumulator register
    pub register: f64,
    /// Operator waiting for its second operand
    pub pending: Option<Operator>,
    /// Operand captured when the pending operator was pressed
    pub first_operand: Option<f64>,
    /// Whether the next digit starts a fresh number
    pub awaiting_new_entry: bool,
}

/// Calculator session driven by button presses
#[derive(Debug, Clone)]
pub struct Controller {
    accumulator: Accumulator,
    display: String,
    pending: Option<Operator>,
    first_operand: Option<f64>,
    awaiting_new_entry: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Creates a controller showing `0` with a zeroed register
    #[must_use]
    pub fn new() -> Self {
        Self::with_accumulator(Accumulator::new())
    }

    /// Creates a controller around an existing accumulator
    #[must_use]
    pub fn with_accumulator(accumulator: Accumulator) -> Self {
        Self {
            accumulator,
            display: INITIAL_DISPLAY.to_string(),
            pending: None,
            first_operand: None,
            awaiting_new_entry: true,
        }
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Accumulator register
    #[must_use]
    pub fn register(&self) -> f64 {
        self.accumulator.result()
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Operand captured with the pending operator
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// True when the next digit press starts a fresh number
    #[must_use]
    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// True when the display shows error text rather than a number
    #[must_use]
    pub fn is_error(&self) -> bool {
        parse_operand(&self.display).is_err()
    }

    /// Captures the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            register: self.register(),
            pending: self.pending,
            first_operand: self.first_operand,
            awaiting_new_entry: self.awaiting_new_entry,
        }
    }

    /// Handles one button press to completion
    pub fn press(&mut self, button: Button) {
        debug!(%button, display = %self.display, "button pressed");
        match button {
            Button::Digit(_) | Button::Decimal => self.enter(button),
            Button::Operator(op) => self.press_operator(op),
            Button::Equals => self.press_equals(),
            Button::Clear => self.press_clear(),
            Button::Negate => self.press_negate(),
            Button::SquareRoot => self.press_unary(|acc, value| acc.square_root(value)),
            Button::Square => {
                self.press_unary(|acc, value| acc.power(Operands::Pair(value, 2.0)));
            }
        }
    }

    /// Presses every button in order and returns the final display
    pub fn press_all<I>(&mut self, buttons: I) -> &str
    where
        I: IntoIterator<Item = Button>,
    {
        for button in buttons {
            self.press(button);
        }
        &self.display
    }

    /// Parses a keypad token and presses it
    pub fn press_token(&mut self, token: &str) -> CalcResult<&str> {
        let button: Button = token.parse()?;
        self.press(button);
        Ok(&self.display)
    }

    fn enter(&mut self, button: Button) {
        let Some(ch) = button.to_char() else {
            warn!(%button, "ignoring out-of-range digit");
            return;
        };

        if self.awaiting_new_entry {
            self.display = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            self.awaiting_new_entry = false;
        } else if ch == '.' && self.display.contains('.') {
            trace!(display = %self.display, "second decimal point ignored");
        } else {
            self.display.push(ch);
        }
        trace!(display = %self.display, "operand buffer");
    }

    fn press_operator(&mut self, op: Operator) {
        // Chained evaluation: `5 + 3 *` resolves `5 + 3` first
        if self.first_operand.is_some() && !self.awaiting_new_entry {
            self.press_equals();
        }

        match parse_operand(&self.display) {
            Ok(value) => {
                self.first_operand = Some(value);
                self.pending = Some(op);
                debug!(op = op.symbol(), first_operand = value, "operator pending");
            }
            Err(err) => self.show_error(&err),
        }
        self.awaiting_new_entry = true;
    }

    /// Resolves the pending calculation.
    ///
    /// On success the pending operator and first operand are cleared. On
    /// failure only the display and the awaiting flag change; the pending
    /// state survives, so a later `=` retries it against whatever is typed
    /// next.
    fn press_equals(&mut self) {
        let (Some(op), Some(first)) = (self.pending, self.first_operand) else {
            trace!("equals with nothing pending");
            return;
        };

        let outcome = parse_operand(&self.display).and_then(|second| {
            self.accumulator
                .apply(op.operation(), Operands::Pair(first, second))
        });

        match outcome {
            Ok(value) => {
                self.display = format_number(value);
                self.pending = None;
                self.first_operand = None;
            }
            Err(err) => self.show_error(&err),
        }
        self.awaiting_new_entry = true;
    }

    fn press_clear(&mut self) {
        self.accumulator.clear();
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = None;
        self.first_operand = None;
        self.awaiting_new_entry = true;
    }

    /// Sign flip of the typed operand; the register is not involved
    fn press_negate(&mut self) {
        match parse_operand(&self.display) {
            Ok(value) => self.display = format_number(-value),
            Err(err) => {
                self.show_error(&err);
                self.awaiting_new_entry = true;
            }
        }
    }

    fn press_unary<F>(&mut self, op: F)
    where
        F: FnOnce(&mut Accumulator, f64) -> CalcResult<f64>,
    {
        let outcome =
            parse_operand(&self.display).and_then(|value| op(&mut self.accumulator, value));

        match outcome {
            Ok(value) => self.display = format_number(value),
            Err(err) => self.show_error(&err),
        }
        self.awaiting_new_entry = true;
    }

    fn show_error(&mut self, err: &CalcError) {
        warn!(error = %err, display = %self.display, "calculation error");
        self.display = err.display_text().to_string();
    }
}
