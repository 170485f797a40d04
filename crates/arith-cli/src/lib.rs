// crates/arith-cli/src/lib.rs
// ============================================================================
// Module: Arith CLI Library
// Description: Shared helpers for the `arith` binary.
// Purpose: Expose the message catalog and logging setup to the binary and tests.
// Dependencies: tracing-subscriber, arith-config
// ============================================================================

//! ## Overview
//! Support code for the `arith` command line. User-facing strings live in
//! [`i18n`] and are rendered through the [`t!`] macro; [`logging`] installs
//! the stderr tracing subscriber.

pub mod i18n;
pub mod logging;
