// crates/arith-core/src/error.rs
// ============================================================================
// Module: Arith Errors
// Description: Error types for checked arithmetic and operation parsing.
// Purpose: Carry enough context to render actionable diagnostics.
// Dependencies: thiserror, crate::operation
// ============================================================================

//! ## Overview
//! Plain arithmetic is total and never produces these errors. They surface
//! only from checked evaluation and from parsing operation labels supplied
//! by users.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::operation::Operation;

// ============================================================================
// SECTION: Arithmetic Errors
// ============================================================================

/// Failure raised by checked arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The exact result does not fit in `i64`.
    #[error("integer overflow evaluating {operation}({lhs}, {rhs})")]
    Overflow {
        /// Operation that overflowed.
        operation: Operation,
        /// Left-hand operand.
        lhs: i64,
        /// Right-hand operand.
        rhs: i64,
    },
}

impl ArithmeticError {
    /// Constructs an overflow error for `operation` applied to the operands.
    #[must_use]
    pub const fn overflow(operation: Operation, lhs: i64, rhs: i64) -> Self {
        Self::Overflow {
            operation,
            lhs,
            rhs,
        }
    }

    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Overflow {
                operation, ..
            } => *operation,
        }
    }
}

// ============================================================================
// SECTION: Parse Errors
// ============================================================================

/// Failure raised when an operation label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOperationError {
    /// Input was empty after trimming.
    #[error("operation label is empty")]
    Empty,
    /// Input did not match any label, alias or symbol.
    #[error("unknown operation: {0} (expected add, sub or mul)")]
    Unknown(String),
}
