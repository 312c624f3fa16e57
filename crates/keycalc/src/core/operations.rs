//! Calculator operators
//!
//! Type-safe operator enums: a binary operator waits in the pending slot for
//! its right-hand operand, a unary operator is applied to the display at
//! once, a memory operation only touches the memory register.

use serde::{Deserialize, Serialize};

/// Operator that combines the pending operand with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Remainder (%)
    Remainder,
}

impl BinaryOperator {
    /// All binary operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
    ];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
        }
    }

    /// Applies the operator with IEEE-754 semantics
    ///
    /// Division by zero yields `±Infinity` (or `NaN` for `0 / 0`), remainder
    /// by zero yields `NaN`. Nothing here fails.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Remainder => lhs % rhs,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operator applied immediately to the display value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// Square root (√)
    SquareRoot,
    /// Square (x²)
    Square,
    /// Reciprocal (1/x)
    Reciprocal,
}

impl UnaryOperator {
    /// All unary operators in keypad order
    pub const ALL: [Self; 3] = [Self::SquareRoot, Self::Square, Self::Reciprocal];

    /// Returns the key label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::SquareRoot => "√",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
        }
    }

    /// Applies the function; `√` of a negative is `NaN`, `1/0` is `Infinity`
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::SquareRoot => value.sqrt(),
            Self::Square => value * value,
            Self::Reciprocal => 1.0 / value,
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Memory register operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOperation {
    /// Memory clear (MC)
    Clear,
    /// Memory recall (MR)
    Recall,
    /// Memory add (M+)
    Add,
    /// Memory subtract (M-)
    Subtract,
}

impl MemoryOperation {
    /// All memory operations in keypad order
    pub const ALL: [Self; 4] = [Self::Clear, Self::Recall, Self::Add, Self::Subtract];

    /// Returns the key label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }
}

impl std::fmt::Display for MemoryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
