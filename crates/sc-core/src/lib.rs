//! # sc-core
//!
//! Core type aliases and error definitions shared across the schoolcal-rs
//! workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year (Gregorian, 1900–2199).
pub type Year = u16;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
