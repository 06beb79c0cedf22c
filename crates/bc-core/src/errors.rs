//! Error types for the bankcutoff workspace.
//!
//! Every failure a caller can trigger with bad input is a variant of the
//! single `thiserror`-derived [`Error`] enum, so results can be reported as
//! a tagged value instead of a panic.  The `ensure!` and `fail!` macros are
//! the early-return helpers used throughout the parsers and the engine.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A time string did not match the strict 24-hour `HH:MM` format.
    #[error("invalid time {0:?}: expected HH:MM (24-hour), e.g. 14:35")]
    InvalidTime(String),

    /// No cutoff data exists for the requested bank / rail pair.
    #[error("no cutoff data for bank {bank:?} and rail {rail:?}")]
    UnknownCutoff {
        /// Bank identifier as supplied by the caller.
        bank: String,
        /// Rail identifier as supplied by the caller.
        rail: String,
    },

    /// A required input field was blank.
    #[error("missing input: {0} is required")]
    MissingInput(&'static str),

    /// A date string was not a real `YYYY-MM-DD` calendar date.
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// A cutoff table could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use bc_core::{ensure, errors::Error};
/// fn hour(h: u8) -> bc_core::Result<u8> {
///     ensure!(h < 24, Error::InvalidTime(format!("{h}:00")));
///     Ok(h)
/// }
/// assert!(hour(23).is_ok());
/// assert!(hour(24).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return `Err(Error::Date(...))` immediately, formatting the message.
///
/// # Example
/// ```
/// use bc_core::{fail, errors::Error};
/// fn always_err() -> bc_core::Result<()> {
///     fail!("{} is past the last supported date", "2200-01-01");
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::Date("2200-01-01 is past the last supported date".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Date(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = Error::UnknownCutoff {
            bank: "acme".into(),
            rail: "wire".into(),
        };
        assert_eq!(
            e.to_string(),
            "no cutoff data for bank \"acme\" and rail \"wire\""
        );
        assert_eq!(
            Error::MissingInput("time").to_string(),
            "missing input: time is required"
        );
        let message = Error::InvalidTime("4pm".into()).to_string();
        assert!(message.contains("HH:MM"));
    }
}
