//! Property-based tests for the input controller
//!
//! Arbitrary press sequences must never leave the controller in a state a
//! keypad front end cannot recover from.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use keycalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any digit button (0-9)
fn digit_strategy() -> impl Strategy<Value = Button> {
    (0u8..=9u8).prop_filter_map("digit out of range", Button::digit)
}

/// Generate any pending-capable operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Generate any button press, digits weighted up so numbers get typed
fn button_strategy() -> impl Strategy<Value = Button> {
    prop_oneof![
        6 => digit_strategy(),
        1 => Just(Button::Decimal),
        2 => operator_strategy().prop_map(Button::Operator),
        1 => Just(Button::Equals),
        1 => Just(Button::Clear),
        1 => Just(Button::Negate),
        1 => Just(Button::SquareRoot),
        1 => Just(Button::Square),
    ]
}

/// Generate a press sequence long enough to reach chained and error states
fn presses() -> impl Strategy<Value = Vec<Button>> {
    prop::collection::vec(button_strategy(), 0..40)
}

fn is_known_error(display: &str) -> bool {
    display == "Error" || display == "Error: Div by 0"
}

fn type_integer(controller: &mut Controller, value: u32) {
    for ch in value.to_string().chars() {
        let digit = u8::try_from(ch.to_digit(10).unwrap()).unwrap();
        controller.press(Button::digit(digit).unwrap());
    }
}

// ===== Invariants over arbitrary sequences =====

proptest! {
    /// The display is always a number or one of the two error texts
    #[test]
    fn prop_display_parses_or_is_error(buttons in presses()) {
        let mut controller = Controller::new();
        for button in buttons {
            controller.press(button);
            let display = controller.display();
            prop_assert!(
                parse_operand(display).is_ok() || is_known_error(display),
                "unexpected display {display:?}"
            );
        }
    }

    /// A pending operator always comes with a captured first operand
    #[test]
    fn prop_pending_implies_first_operand(buttons in presses()) {
        let mut controller = Controller::new();
        for button in buttons {
            controller.press(button);
            prop_assert_eq!(controller.pending().is_some(), controller.first_operand().is_some());
        }
    }

    /// `C` restores the initial state from anywhere
    #[test]
    fn prop_clear_restores_initial_state(buttons in presses()) {
        let mut controller = Controller::new();
        controller.press_all(buttons);
        controller.press(Button::Clear);
        prop_assert_eq!(controller.snapshot(), Controller::new().snapshot());
    }

    /// After any error the next digit starts fresh input
    #[test]
    fn prop_digit_after_error_starts_fresh(
        buttons in presses(),
        digit in digit_strategy(),
    ) {
        let mut controller = Controller::new();
        controller.press_all(buttons);
        if controller.is_error() {
            controller.press(digit);
            prop_assert_eq!(controller.display(), digit.label());
        }
    }

    /// A decimal point never appears twice in the display
    #[test]
    fn prop_single_decimal_point(buttons in presses()) {
        let mut controller = Controller::new();
        for button in buttons {
            controller.press(button);
            prop_assert!(controller.display().matches('.').count() <= 1);
        }
    }

    /// Negate never touches the register or the pending operator
    #[test]
    fn prop_negate_is_operand_only(buttons in presses()) {
        let mut controller = Controller::new();
        controller.press_all(buttons);
        let before = controller.snapshot();
        controller.press(Button::Negate);
        prop_assert_eq!(controller.register().to_bits(), before.register.to_bits());
        prop_assert_eq!(controller.pending(), before.pending);
    }
}

// ===== Arithmetic through the keypad =====

proptest! {
    /// `a op b =` matches the accumulator's pair form
    #[test]
    fn prop_keypad_matches_accumulator(
        a in 0u32..10_000,
        b in 1u32..10_000,
        op in operator_strategy(),
    ) {
        let mut controller = Controller::new();
        type_integer(&mut controller, a);
        controller.press(Button::Operator(op));
        type_integer(&mut controller, b);
        controller.press(Button::Equals);

        let expected = Accumulator::new()
            .apply(op.operation(), Operands::Pair(f64::from(a), f64::from(b)))
            .unwrap();
        prop_assert_eq!(controller.display(), format_number(expected));
        prop_assert_eq!(controller.register(), expected);
    }

    /// Dividing by a typed zero is always the division error
    #[test]
    fn prop_keypad_division_by_zero(a in 0u32..10_000) {
        let mut controller = Controller::new();
        type_integer(&mut controller, a);
        controller.press(Button::Operator(Operator::Divide));
        controller.press(Button::Digit(0));
        controller.press(Button::Equals);
        prop_assert_eq!(controller.display(), "Error: Div by 0");
        prop_assert_eq!(controller.register(), 0.0);
    }

    /// Squaring then taking the root returns the typed integer
    #[test]
    fn prop_square_then_root(a in 0u32..10_000) {
        let mut controller = Controller::new();
        type_integer(&mut controller, a);
        controller.press(Button::Square);
        controller.press(Button::SquareRoot);
        prop_assert_eq!(controller.display(), a.to_string());
    }
}
