//! Key-level calculator driver
//!
//! The same behaviour checks run against the bare engine and against the
//! terminal front end: a check written once against [`CalculatorDriver`]
//! proves both that the engine is right and that the front end forwards
//! every key to it unchanged.

use crate::core::{Calculator, Command, Snapshot};
use crate::error::CalcResult;

/// Abstract driver over anything that accepts calculator keys
///
/// # Example
///
/// ```rust
/// use keycalc::driver::{verify_chaining, CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// verify_chaining(&mut driver).unwrap();
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, command: Command);

    /// Presses a whitespace-separated key sequence, e.g. `"12 + 3 ="`
    fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for command in Command::parse_sequence(keys)? {
            self.press(command);
        }
        Ok(())
    }

    /// Current display text
    fn display(&self) -> String;

    /// Memory register value
    fn memory(&self) -> f64;

    /// Full observable state
    fn snapshot(&self) -> Snapshot;

    /// Starts over with a brand new calculator, memory and tape included
    fn reset(&mut self);

    /// Tape entries (newest first)
    fn tape(&self) -> Vec<TapeItem>;
}

/// A tape line as seen through a driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeItem {
    /// The operation, e.g. `3 + 4`
    pub expression: String,
    /// The rendered result
    pub result: String,
}

impl TapeItem {
    fn collect(calc: &Calculator) -> Vec<Self> {
        calc.tape()
            .iter_rev()
            .map(|entry| Self {
                expression: entry.expression.clone(),
                result: entry.result.clone(),
            })
            .collect()
    }
}

/// Headless driver over a bare [`Calculator`]
#[derive(Debug, Default)]
pub struct EngineDriver {
    calc: Calculator,
}

impl EngineDriver {
    /// Creates a driver over a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, command: Command) {
        self.calc.apply(command);
    }

    fn display(&self) -> String {
        self.calc.display().to_string()
    }

    fn memory(&self) -> f64 {
        self.calc.memory()
    }

    fn snapshot(&self) -> Snapshot {
        self.calc.snapshot()
    }

    fn reset(&mut self) {
        self.calc = Calculator::new();
    }

    fn tape(&self) -> Vec<TapeItem> {
        TapeItem::collect(&self.calc)
    }
}

/// Driver over the terminal front end
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, Command, Snapshot, TapeItem};
    use crate::tui::{CalculatorApp, KeyAction};

    /// Drives a [`CalculatorApp`] the way the event loop does
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, command: Command) {
            self.app.handle(KeyAction::Press(command));
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn memory(&self) -> f64 {
            self.app.calculator().memory()
        }

        fn snapshot(&self) -> Snapshot {
            self.app.calculator().snapshot()
        }

        fn reset(&mut self) {
            self.app.reset();
        }

        fn tape(&self) -> Vec<TapeItem> {
            TapeItem::collect(self.app.calculator())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Behaviour checks =====
// Each check resets the driver first and panics on the first mismatch.

/// Digits concatenate, leading zeros collapse, one decimal point per entry
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys("1 2 3")?;
    assert_eq!(driver.display(), "123");

    driver.reset();
    driver.press_keys("0 0 7")?;
    assert_eq!(driver.display(), "7");

    driver.reset();
    driver.press_keys("1 . . 5")?;
    assert_eq!(driver.display(), "1.5");

    driver.reset();
    driver.press_keys(". 2 5")?;
    assert_eq!(driver.display(), "0.25");
    Ok(())
}

/// Operators evaluate strictly left to right
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys("3 + 4 =")?;
    assert_eq!(driver.display(), "7");

    driver.reset();
    driver.press_keys("3 + 4 + 5 =")?;
    assert_eq!(driver.display(), "12");

    driver.reset();
    driver.press_keys("2 + 3 * 4 =")?;
    assert_eq!(driver.display(), "20");

    // A second = with nothing pending changes nothing
    driver.reset();
    driver.press_keys("9 - 2 = =")?;
    assert_eq!(driver.display(), "7");

    // A result can start the next chain
    driver.press_keys("* 3 =")?;
    assert_eq!(driver.display(), "21");
    Ok(())
}

/// IEEE-754 special values are displayed, never raised
pub fn verify_special_values<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    for (keys, expected) in [
        ("5 / 0 =", "Infinity"),
        ("5 neg / 0 =", "-Infinity"),
        ("0 / 0 =", "NaN"),
        ("7 % 0 =", "NaN"),
        ("4 neg sqrt", "NaN"),
        ("0 inv", "Infinity"),
        ("1 0 0 0 0 0 0 0 0 0 0 sq sq", "1e+40"),
    ] {
        driver.reset();
        driver.press_keys(keys)?;
        assert_eq!(driver.display(), expected, "keys: {keys}");
    }
    Ok(())
}

/// Backspace, clear entry and clear
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys("5 bs")?;
    assert_eq!(driver.display(), "0");
    driver.press_keys("bs")?;
    assert_eq!(driver.display(), "0");
    assert!(driver.snapshot().overwrite);

    driver.reset();
    driver.press_keys("1 2 . 5 bs bs")?;
    assert_eq!(driver.display(), "12");

    driver.reset();
    driver.press_keys("8 + 3 ce 4 =")?;
    assert_eq!(driver.display(), "12");

    driver.reset();
    driver.press_keys("4 m+ 7 + 2 c")?;
    let snap = driver.snapshot();
    assert_eq!(snap.display, "0");
    assert_eq!(snap.pending_operand, "");
    assert_eq!(snap.pending_operator, None);
    assert!(snap.overwrite);
    assert_eq!(snap.memory, 4.0);
    Ok(())
}

/// Memory register arithmetic and recall
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys("4 m+ mc mr")?;
    assert_eq!(driver.display(), "0");

    driver.reset();
    driver.press_keys("4 m+ 6 m+ 3 m- c mr")?;
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.memory(), 7.0);

    // A recalled value starts a fresh entry
    driver.press_keys("1")?;
    assert_eq!(driver.display(), "1");
    Ok(())
}

/// A unary key in the middle of a chain applies to the right operand only
pub fn verify_unary_mid_chain<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys("1 0 + 9 sqrt =")?;
    assert_eq!(driver.display(), "13");

    driver.reset();
    driver.press_keys("2 * 3 sq =")?;
    assert_eq!(driver.display(), "18");
    Ok(())
}

/// Completed evaluations land on the tape, newest first
pub fn verify_tape<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset();
    driver.press_keys("3 + 4 = c 6 * 7 =")?;
    let tape = driver.tape();
    assert_eq!(tape.len(), 2);
    assert_eq!(tape[0].expression, "6 * 7");
    assert_eq!(tape[0].result, "42");
    assert_eq!(tape[1].expression, "3 + 4");
    assert_eq!(tape[1].result, "7");
    Ok(())
}

/// Runs every behaviour check against one driver
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_entry(driver)?;
    verify_chaining(driver)?;
    verify_special_values(driver)?;
    verify_editing(driver)?;
    verify_memory(driver)?;
    verify_unary_mid_chain(driver)?;
    verify_tape(driver)?;
    driver.reset();
    Ok(())
}
