// crates/arith-core/src/policy.rs
// ============================================================================
// Module: Overflow Policy
// Description: Selectable overflow semantics for operation dispatch.
// Purpose: Make the out-of-range behavior of `i64` arithmetic explicit.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`OverflowPolicy`] chooses between wrapping, checked and saturating
//! semantics. Wrapping is the default and matches the plain functions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Overflow handling applied when a result does not fit in `i64`.
///
/// # Invariants
/// - Variants are stable for config parsing and CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound.
    #[default]
    Wrapping,
    /// Report overflow as an error.
    Checked,
    /// Clamp to `i64::MIN` or `i64::MAX`.
    Saturating,
}

impl OverflowPolicy {
    /// Ordered list of supported policies.
    pub const ALL: [Self; 3] = [Self::Wrapping, Self::Checked, Self::Saturating];

    /// Returns the canonical policy label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wrapping => "wrapping",
            Self::Checked => "checked",
            Self::Saturating => "saturating",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
