//! Display formatting and operand parsing

use crate::core::{CalcError, CalcResult};

/// Formats a number for display
///
/// Integral values render without a fractional part (`16`, not `16.0`);
/// everything else uses the shortest decimal that round-trips.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        // + 0.0 folds negative zero into zero
        format!("{:.0}", value + 0.0)
    } else {
        format!("{value}")
    }
}

/// Parses display text as an operand
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand(text.to_string()))
}
