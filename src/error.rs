//! Programmer-misuse errors
//!
//! Invalid input is never an error in this crate: it is data, carried by
//! `Validated::Invalid`. The types here describe the two ways a caller can misuse
//! a `Validated` value, and they back the panics raised in those cases.
//!
//! # Examples
//!
//! ```
//! use validated::{NoValuePresent, Validated};
//!
//! let v = Validated::<i32, &str>::invalid("missing");
//! assert_eq!(v.try_value(), Err(NoValuePresent));
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Raised when a chaining operation is attempted on a `Validated`
///
/// `Validated` accumulates the failures of independent computations. A chaining
/// operation would have to stop at the first `Invalid`, so it cannot exist without
/// breaking that accumulation. `Validated::bind` panics with this error's message.
///
/// # Examples
///
/// ```
/// use validated::NotAMonad;
///
/// assert!(NotAMonad.to_string().starts_with("Validated is not a monad"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotAMonad;

impl NotAMonad {
    /// The fixed diagnostic raised by the chaining guard
    pub const MESSAGE: &'static str = "Validated is not a monad because it would violate the monad laws: \
chaining short-circuits after the first Invalid and cannot accumulate errors from independent validations";
}

impl fmt::Display for NotAMonad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl StdError for NotAMonad {}

/// Raised when the success value of an `Invalid` is requested
///
/// Returned by `Validated::try_value`, and used as the panic message of
/// `Validated::value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoValuePresent;

impl fmt::Display for NoValuePresent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no value present")
    }
}

impl StdError for NoValuePresent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_monad_display() {
        let output = NotAMonad.to_string();
        assert_eq!(output, NotAMonad::MESSAGE);
        assert!(output.contains("not a monad"));
        assert!(output.contains("accumulate errors"));
    }

    #[test]
    fn test_no_value_present_display() {
        assert_eq!(NoValuePresent.to_string(), "no value present");
    }

    #[test]
    fn test_error_trait() {
        let _: &dyn StdError = &NotAMonad;
        let _: &dyn StdError = &NoValuePresent;
        assert!(NotAMonad.source().is_none());
        assert!(NoValuePresent.source().is_none());
    }

    #[test]
    fn test_boxed_error() {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(NoValuePresent);
        assert_eq!(boxed.to_string(), "no value present");
    }
}
