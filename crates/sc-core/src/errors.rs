//! Error types for schoolcal-rs.
//!
//! The engine has exactly two failure categories: client-input errors
//! (an unsupported country code) and caller-contract violations in the
//! date arithmetic (invalid year/month/day combinations, nonexistent
//! nth-weekday occurrences). Both are collected into a single
//! `thiserror`-derived enum.

use thiserror::Error;

/// The top-level error type used throughout schoolcal-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (target of the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: invalid components, out-of-range serial, or a
    /// weekday occurrence that does not exist in the requested month.
    #[error("date error: {0}")]
    Date(String),

    /// The requested holiday calendar country is not supported.
    ///
    /// Surfaced to the boundary as a client-input error (a rejected
    /// request), never as an empty or partial holiday set.
    #[error("unsupported country code: {0} (only US is supported)")]
    UnsupportedCountry(String),
}

impl Error {
    /// Return `true` if this error should be reported to the caller as a
    /// client-input error (HTTP 4xx) rather than an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::UnsupportedCountry(_))
    }
}

/// Shorthand `Result` type used throughout schoolcal-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sc_core::{ensure, errors::Error};
/// fn at_least_one(n: u8) -> sc_core::errors::Result<u8> {
///     ensure!(n >= 1, "n must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(at_least_one(1).is_ok());
/// assert!(at_least_one(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sc_core::{fail, errors::Error};
/// fn always_err() -> sc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
