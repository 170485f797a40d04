// crates/arith-core/src/lib.rs
// ============================================================================
// Module: Arith Core
// Description: Pure integer arithmetic with explicit overflow semantics.
// Purpose: Expose `add`, `sub`, `mul` and the operation model built on them.
// Dependencies: serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! `arith-core` provides three total, deterministic functions over `i64`
//! ([`add`], [`sub`], [`mul`]) together with checked and saturating
//! variants. The [`Operation`] enum names each function with a stable wire
//! label so callers (the CLI, config files, JSON output) can dispatch by name.
//!
//! ## Invariants
//! - The plain functions never panic; overflow wraps in two's complement.
//! - Only [`OverflowPolicy::Checked`] can produce an [`ArithmeticError`].
//!
//! ```
//! use arith_core::Operation;
//! use arith_core::add;
//! use arith_core::sub;
//!
//! assert_eq!(add(2, 8), 10);
//! assert_eq!(sub(2, 8), -6);
//! assert_eq!(Operation::Mul.apply(150, 10), 1500);
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod arithmetic;
pub mod error;
pub mod operation;
pub mod policy;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use arithmetic::add;
pub use arithmetic::checked_add;
pub use arithmetic::checked_mul;
pub use arithmetic::checked_sub;
pub use arithmetic::mul;
pub use arithmetic::saturating_add;
pub use arithmetic::saturating_mul;
pub use arithmetic::saturating_sub;
pub use arithmetic::sub;
pub use error::ArithmeticError;
pub use error::ParseOperationError;
pub use operation::Evaluation;
pub use operation::Operation;
pub use policy::OverflowPolicy;
