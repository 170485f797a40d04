// crates/arith-core/src/operation.rs
// ============================================================================
// Module: Operation Model
// Description: Named arithmetic operations and evaluation records.
// Purpose: Dispatch `add`/`sub`/`mul` by stable label under an overflow policy.
// Dependencies: serde, tracing, crate::arithmetic, crate::policy
// ============================================================================

//! ## Overview
//! [`Operation`] is the closed set of supported functions. Labels are stable
//! on the wire (`add`, `sub`, `mul`); parsing also accepts long aliases and
//! the infix symbols. [`Evaluation`] records one completed call for display
//! or JSON output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::trace;

use crate::arithmetic;
use crate::error::ArithmeticError;
use crate::error::ParseOperationError;
use crate::policy::OverflowPolicy;

// ============================================================================
// SECTION: Operation
// ============================================================================

/// Supported binary integer operations.
///
/// # Invariants
/// - Variants and their labels are stable for serialization and CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Addition (`a + b`).
    Add,
    /// Subtraction (`a - b`).
    Sub,
    /// Multiplication (`a * b`).
    Mul,
}

impl Operation {
    /// Ordered list of supported operations.
    pub const ALL: [Self; 3] = [Self::Add, Self::Sub, Self::Mul];

    /// Returns the canonical operation label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
        }
    }

    /// Returns the infix symbol for the operation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        }
    }

    /// Parses an operation label, alias or symbol (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ParseOperationError`] when the input is empty or unknown.
    pub fn parse(value: &str) -> Result<Self, ParseOperationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ParseOperationError::Empty);
        }
        match value.to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Self::Add),
            "sub" | "subtract" | "minus" | "-" => Ok(Self::Sub),
            "mul" | "multiply" | "times" | "*" => Ok(Self::Mul),
            _ => Err(ParseOperationError::Unknown(value.to_string())),
        }
    }

    /// Applies the operation with wrapping semantics.
    #[must_use]
    pub const fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Self::Add => arithmetic::add(lhs, rhs),
            Self::Sub => arithmetic::sub(lhs, rhs),
            Self::Mul => arithmetic::mul(lhs, rhs),
        }
    }

    /// Applies the operation under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] when `policy` is
    /// [`OverflowPolicy::Checked`] and the result does not fit in `i64`.
    pub fn apply_with(
        self,
        policy: OverflowPolicy,
        lhs: i64,
        rhs: i64,
    ) -> Result<i64, ArithmeticError> {
        trace!(
            operation = self.as_str(),
            policy = policy.as_str(),
            lhs,
            rhs,
            "dispatching operation"
        );
        match policy {
            OverflowPolicy::Wrapping => Ok(self.apply(lhs, rhs)),
            OverflowPolicy::Saturating => Ok(match self {
                Self::Add => arithmetic::saturating_add(lhs, rhs),
                Self::Sub => arithmetic::saturating_sub(lhs, rhs),
                Self::Mul => arithmetic::saturating_mul(lhs, rhs),
            }),
            OverflowPolicy::Checked => {
                let result = match self {
                    Self::Add => arithmetic::checked_add(lhs, rhs),
                    Self::Sub => arithmetic::checked_sub(lhs, rhs),
                    Self::Mul => arithmetic::checked_mul(lhs, rhs),
                };
                if let Err(err) = &result {
                    debug!(error = %err, "checked evaluation overflowed");
                }
                result
            }
        }
    }

    /// Applies the operation under `policy` and records the call.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError`] under the same conditions as [`Self::apply_with`].
    pub fn evaluate(
        self,
        policy: OverflowPolicy,
        lhs: i64,
        rhs: i64,
    ) -> Result<Evaluation, ArithmeticError> {
        let result = self.apply_with(policy, lhs, rhs)?;
        Ok(Evaluation {
            operation: self,
            lhs,
            rhs,
            result,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Record of a single completed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Operation applied.
    pub operation: Operation,
    /// Left-hand operand.
    pub lhs: i64,
    /// Right-hand operand.
    pub rhs: i64,
    /// Result under the policy used for evaluation.
    pub result: i64,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.operation.symbol();
        if self.rhs < 0 {
            write!(f, "{} {symbol} ({}) = {}", self.lhs, self.rhs, self.result)
        } else {
            write!(f, "{} {symbol} {} = {}", self.lhs, self.rhs, self.result)
        }
    }
}
