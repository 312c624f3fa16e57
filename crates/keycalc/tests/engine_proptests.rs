//! Property-based tests for the calculator engine
//!
//! Arbitrary key sequences must never break the display or the pending
//! operation bookkeeping, and simple chains must agree with plain f64
//! arithmetic evaluated left to right.

#![allow(clippy::unwrap_used)]

use keycalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn binary_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop::sample::select(BinaryOperator::ALL.to_vec())
}

fn unary_strategy() -> impl Strategy<Value = UnaryOperator> {
    prop::sample::select(UnaryOperator::ALL.to_vec())
}

fn memory_strategy() -> impl Strategy<Value = MemoryOperation> {
    prop::sample::select(MemoryOperation::ALL.to_vec())
}

/// Any key except the memory keys
fn non_memory_command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => digit_strategy().prop_map(Command::Digit),
        1 => Just(Command::Decimal),
        2 => binary_strategy().prop_map(Command::Operator),
        1 => Just(Command::Equals),
        1 => Just(Command::Clear),
        1 => Just(Command::ClearEntry),
        1 => Just(Command::Backspace),
        1 => Just(Command::ToggleSign),
        1 => unary_strategy().prop_map(Command::Unary),
    ]
}

/// Any key at all
fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        9 => non_memory_command_strategy(),
        1 => memory_strategy().prop_map(Command::Memory),
    ]
}

fn run(commands: &[Command]) -> Calculator {
    let mut calc = Calculator::new();
    calc.apply_all(commands.iter().copied());
    calc
}

// ===== Structural invariants =====

proptest! {
    /// The display is never empty and never holds two decimal points
    #[test]
    fn prop_display_well_formed(commands in prop::collection::vec(command_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        for command in commands {
            calc.apply(command);
            let display = calc.display();
            prop_assert!(!display.is_empty());
            prop_assert!(display.matches('.').count() <= 1, "display: {}", display);
        }
    }

    /// A pending operand and a latched operator come and go together
    #[test]
    fn prop_pending_pair_consistent(commands in prop::collection::vec(command_strategy(), 0..60)) {
        let mut calc = Calculator::new();
        for command in commands {
            calc.apply(command);
            prop_assert_eq!(
                calc.pending_operator().is_some(),
                !calc.pending_operand().is_empty()
            );
        }
    }

    /// Clear resets everything but memory
    #[test]
    fn prop_clear_keeps_memory(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut calc = run(&commands);
        let memory = calc.memory();
        calc.apply(Command::Clear);
        let snap = calc.snapshot();
        prop_assert_eq!(snap.display, "0");
        prop_assert_eq!(snap.pending_operand, "");
        prop_assert_eq!(snap.pending_operator, None);
        prop_assert!(snap.overwrite);
        prop_assert!(snap.memory == memory || (snap.memory.is_nan() && memory.is_nan()));
    }

    /// Only memory keys touch the memory register
    #[test]
    fn prop_memory_untouched_by_other_keys(
        commands in prop::collection::vec(non_memory_command_strategy(), 0..60)
    ) {
        let mut calc = Calculator::new();
        calc.apply_all(Command::parse_sequence("7 m+").unwrap());
        calc.apply_all(commands);
        prop_assert_eq!(calc.memory(), 7.0);
    }

    /// Backspace in fresh mode changes nothing
    #[test]
    fn prop_backspace_noop_when_fresh(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut calc = run(&commands);
        if calc.is_overwrite() {
            let before = calc.snapshot();
            calc.apply(Command::Backspace);
            prop_assert_eq!(calc.snapshot(), before);
        }
    }

    /// A second equals with nothing pending changes nothing
    #[test]
    fn prop_equals_idempotent(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut calc = run(&commands);
        calc.apply(Command::Equals);
        let before = calc.snapshot();
        calc.apply(Command::Equals);
        prop_assert_eq!(calc.snapshot(), before);
    }

    /// The tape grows by one per completed evaluation and never beyond capacity
    #[test]
    fn prop_tape_bounded(
        capacity in 0usize..5,
        commands in prop::collection::vec(command_strategy(), 0..80)
    ) {
        let mut calc = Calculator::with_tape(Tape::with_capacity(capacity));
        calc.apply_all(commands);
        prop_assert!(calc.tape().len() <= capacity);
    }
}

// ===== Arithmetic properties =====

proptest! {
    /// Digits typed from a fresh calculator concatenate
    #[test]
    fn prop_digits_concatenate(
        first in 1u8..=9,
        rest in prop::collection::vec(digit_strategy(), 0..14)
    ) {
        let mut calc = Calculator::new();
        let mut expected = first.to_string();
        calc.apply(Command::Digit(first));
        for d in rest {
            calc.apply(Command::Digit(d));
            expected.push(char::from(b'0' + d));
        }
        prop_assert_eq!(calc.display(), expected);
    }

    /// `a op b =` matches f64 arithmetic through the canonical formatter
    #[test]
    fn prop_single_operation(a in 0u32..100_000, op in binary_strategy(), b in 0u32..100_000) {
        let keys = format!("{a} {op} {b} =");
        let mut calc = Calculator::new();
        calc.apply_all(Command::parse_sequence(&keys).unwrap());
        let expected = format_number(op.apply(f64::from(a), f64::from(b)));
        prop_assert_eq!(calc.display(), expected);
    }

    /// Chains evaluate strictly left to right, ignoring precedence
    #[test]
    fn prop_left_to_right(
        a in 1u32..1000,
        op1 in binary_strategy(),
        b in 1u32..1000,
        op2 in binary_strategy(),
        c in 1u32..1000
    ) {
        let keys = format!("{a} {op1} {b} {op2} {c} =");
        let mut calc = Calculator::new();
        calc.apply_all(Command::parse_sequence(&keys).unwrap());

        let intermediate = format_number(op1.apply(f64::from(a), f64::from(b)));
        let lhs = parse_operand(&intermediate).unwrap();
        let expected = format_number(op2.apply(lhs, f64::from(c)));
        prop_assert_eq!(calc.display(), expected);
    }

    /// The formatter's output always parses back to the same value
    #[test]
    fn prop_format_parses_back(value in any::<f64>()) {
        let text = format_number(value);
        let parsed = parse_operand(&text).unwrap();
        if value.is_nan() {
            prop_assert!(parsed.is_nan());
        } else {
            prop_assert_eq!(parsed, value);
        }
    }
}
