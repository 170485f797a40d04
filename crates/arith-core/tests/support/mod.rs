// crates/arith-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result alias and assertion helper for integration tests.
// ============================================================================

//! Shared helpers for `arith-core` integration tests.

/// Result alias for tests that report failures as messages.
pub type TestResult = Result<(), String>;

/// Returns an error carrying `message` when `condition` is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(message.into()) }
}
