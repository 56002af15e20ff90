//! Unified Button Driver
//!
//! Write the scenario once, run it against anything that accepts button
//! presses: the in-process [`Controller`], or a front end wrapped to look
//! like one (the CLI tests drive the `keycalc` binary this way).

use crate::controller::{Button, Controller, Operator};

/// Abstract driver for keypad interactions
///
/// # Example
///
/// ```rust
/// use keycalc::controller::Controller;
/// use keycalc::driver::verify_chained_evaluation;
///
/// let mut driver = Controller::new();
/// verify_chained_evaluation(&mut driver);
/// assert_eq!(driver.display(), "16");
/// ```
pub trait ButtonDriver {
    /// Presses a single button
    fn press(&mut self, button: Button);

    /// Current display text
    fn display(&self) -> String;

    /// Current accumulator register
    fn register(&self) -> f64;

    /// Presses `C`
    fn clear(&mut self) {
        self.press(Button::Clear);
    }

    /// Presses a run of buttons in order
    fn press_sequence(&mut self, buttons: &[Button]) {
        for button in buttons {
            self.press(*button);
        }
    }
}

impl ButtonDriver for Controller {
    fn press(&mut self, button: Button) {
        Controller::press(self, button);
    }

    fn display(&self) -> String {
        Controller::display(self).to_string()
    }

    fn register(&self) -> f64 {
        Controller::register(self)
    }
}

// ===== Unified Scenario Checks =====
// These work with ANY ButtonDriver implementation

/// `5 + 3 * 2 =` shows 16: `5 + 3` resolves before the multiply
pub fn verify_chained_evaluation<D: ButtonDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence(&[
        Button::Digit(5),
        Button::Operator(Operator::Add),
        Button::Digit(3),
        Button::Operator(Operator::Multiply),
    ]);
    assert_eq!(driver.display(), "8");
    driver.press_sequence(&[Button::Digit(2), Button::Equals]);
    assert_eq!(driver.display(), "16");
    assert_eq!(driver.register(), 16.0);
}

/// `8 / 0 =` shows the division error and leaves the register alone
pub fn verify_division_by_zero<D: ButtonDriver>(driver: &mut D) {
    let before = driver.register();
    driver.press_sequence(&[
        Button::Digit(8),
        Button::Operator(Operator::Divide),
        Button::Digit(0),
        Button::Equals,
    ]);
    assert_eq!(driver.display(), "Error: Div by 0");
    assert_eq!(driver.register(), before);

    // Next digit starts fresh input
    driver.press(Button::Digit(3));
    assert_eq!(driver.display(), "3");
}

/// `1 6 √` shows 4; a negative radicand shows `Error`
pub fn verify_square_root<D: ButtonDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence(&[Button::Digit(1), Button::Digit(6), Button::SquareRoot]);
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.register(), 4.0);

    driver.press_sequence(&[Button::Digit(4), Button::Negate, Button::SquareRoot]);
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.register(), 4.0);
}

/// `x²` squares the display through the register
pub fn verify_square<D: ButtonDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence(&[Button::Digit(1), Button::Decimal, Button::Digit(5), Button::Square]);
    assert_eq!(driver.display(), "2.25");
    assert_eq!(driver.register(), 2.25);
}

/// `C` zeroes the register and shows `0`
pub fn verify_clear<D: ButtonDriver>(driver: &mut D) {
    driver.press_sequence(&[
        Button::Digit(9),
        Button::Operator(Operator::Multiply),
        Button::Digit(9),
        Button::Equals,
    ]);
    assert_eq!(driver.display(), "81");
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.register(), 0.0);
}

/// Complete verification suite
pub fn run_full_specification<D: ButtonDriver>(driver: &mut D) {
    verify_chained_evaluation(driver);
    verify_division_by_zero(driver);
    verify_square_root(driver);
    verify_square(driver);
    verify_clear(driver);
}
