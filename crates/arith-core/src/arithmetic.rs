// crates/arith-core/src/arithmetic.rs
// ============================================================================
// Module: Integer Arithmetic
// Description: Addition, subtraction and multiplication over `i64`.
// Purpose: Provide total arithmetic plus checked and saturating variants.
// Dependencies: crate::error, crate::operation
// ============================================================================

//! ## Overview
//! The plain functions wrap on overflow so they are total in every build
//! profile. Callers that need to observe overflow use the `checked_*`
//! variants; callers that need bounded results use `saturating_*`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ArithmeticError;
use crate::operation::Operation;

// ============================================================================
// SECTION: Total Arithmetic
// ============================================================================

/// Returns `a + b`, wrapping on overflow.
#[must_use]
pub const fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Returns `a - b`, wrapping on overflow.
#[must_use]
pub const fn sub(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Returns `a * b`, wrapping on overflow.
#[must_use]
pub const fn mul(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

// ============================================================================
// SECTION: Checked Arithmetic
// ============================================================================

/// Returns `a + b`.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the sum does not fit in `i64`.
pub fn checked_add(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_add(b).ok_or_else(|| ArithmeticError::overflow(Operation::Add, a, b))
}

/// Returns `a - b`.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the difference does not fit in `i64`.
pub fn checked_sub(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_sub(b).ok_or_else(|| ArithmeticError::overflow(Operation::Sub, a, b))
}

/// Returns `a * b`.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the product does not fit in `i64`.
pub fn checked_mul(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_mul(b).ok_or_else(|| ArithmeticError::overflow(Operation::Mul, a, b))
}

// ============================================================================
// SECTION: Saturating Arithmetic
// ============================================================================

/// Returns `a + b`, clamped to `i64` bounds.
#[must_use]
pub const fn saturating_add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

/// Returns `a - b`, clamped to `i64` bounds.
#[must_use]
pub const fn saturating_sub(a: i64, b: i64) -> i64 {
    a.saturating_sub(b)
}

/// Returns `a * b`, clamped to `i64` bounds.
#[must_use]
pub const fn saturating_mul(a: i64, b: i64) -> i64 {
    a.saturating_mul(b)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
