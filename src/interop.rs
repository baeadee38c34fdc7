//! Traced views of `Option` and `Result`
//!
//! Converting an `Invalid` for downstream code should record *where* the
//! conversion happened. `Option` and `Result` have nowhere to put that, so
//! `Validated::to_maybe` and `Validated::to_result` produce [`Maybe`] and
//! [`Outcome`]: the same shapes, with a [`Trace`] on the empty/failed side.
//! Both convert into their std counterpart with `From`/`Into`, and both ignore the
//! trace when compared.
//!
//! # Examples
//!
//! ```
//! use validated::{Maybe, Outcome, Validated};
//!
//! let outcome = Validated::<u16, _>::invalid("PORT is not a number").to_result();
//! let std_result: Result<u16, &str> = outcome.into();
//! assert_eq!(std_result, Err("PORT is not a number"));
//!
//! let maybe = Validated::<u16, &str>::valid(8080).to_maybe();
//! let std_option: Option<u16> = maybe.into();
//! assert_eq!(std_option, Some(8080));
//! ```

use std::hash::{Hash, Hasher};

use crate::trace::Trace;
use crate::validated::Validated;

/// An optional value whose empty case records where it became empty
#[derive(Debug, Clone, Copy)]
pub enum Maybe<T> {
    /// A present value
    Some(T),
    /// No value, and the call site that produced the absence
    None(Trace),
}

impl<T> Maybe<T> {
    /// An empty `Maybe` traced to the caller
    #[track_caller]
    #[inline]
    pub fn none() -> Self {
        Maybe::None(Trace::capture())
    }

    /// Returns `true` for `Some`
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` for `None`
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None(_))
    }

    /// The trace of a `None`
    #[inline]
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Maybe::Some(_) => None,
            Maybe::None(trace) => Some(trace),
        }
    }

    /// Point the trace of a `None` at the caller
    #[track_caller]
    #[inline]
    pub fn retrace(self) -> Self {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None(_) => Maybe::None(Trace::capture()),
        }
    }

    /// Drop the trace and return a std `Option`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None(_) => None,
        }
    }

    /// Turn back into a `Validated`, building the error for `None`
    ///
    /// The resulting `Invalid` keeps the trace of the `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::{Maybe, Validated};
    ///
    /// let v = Maybe::<i32>::none().to_validated(|| "absent");
    /// assert_eq!(v, Validated::invalid("absent"));
    /// ```
    #[inline]
    pub fn to_validated<E, F>(self, error: F) -> Validated<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(value) => Validated::Valid(value),
            Maybe::None(trace) => Validated::Invalid(error(), trace),
        }
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => a == b,
            (Maybe::None(_), Maybe::None(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_some().hash(state);
        if let Maybe::Some(value) = self {
            value.hash(state);
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[track_caller]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None(Trace::capture()),
        }
    }
}

/// A success-or-failure whose failure records where it was produced
#[derive(Debug, Clone, Copy)]
pub enum Outcome<T, E> {
    /// A successful value
    Success(T),
    /// A failure, and the call site that produced it
    Failure(E, Trace),
}

impl<T, E> Outcome<T, E> {
    /// A successful outcome
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// A failed outcome traced to the caller
    #[track_caller]
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error, Trace::capture())
    }

    /// Returns `true` for `Success`
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for `Failure`
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(..))
    }

    /// Borrow the failure's error
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error, _) => Some(error),
        }
    }

    /// The trace of a `Failure`
    #[inline]
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(_, trace) => Some(trace),
        }
    }

    /// Point the trace of a `Failure` at the caller
    #[track_caller]
    #[inline]
    pub fn retrace(self) -> Self {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error, _) => Outcome::Failure(error, Trace::capture()),
        }
    }

    /// Drop the trace and return a std `Result`
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error, _) => Err(error),
        }
    }

    /// Turn back into a `Validated`, keeping the failure's trace
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::{Outcome, Validated};
    ///
    /// let failure = Outcome::<i32, _>::failure("e");
    /// let trace = *failure.trace().unwrap();
    /// let v = failure.to_validated();
    /// assert_eq!(v, Validated::invalid("e"));
    /// assert_eq!(v.trace(), Some(&trace));
    /// ```
    #[inline]
    pub fn to_validated(self) -> Validated<T, E> {
        match self {
            Outcome::Success(value) => Validated::Valid(value),
            Outcome::Failure(error, trace) => Validated::Invalid(error, trace),
        }
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => a == b,
            (Outcome::Failure(a, _), Outcome::Failure(b, _)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Outcome::Success(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            Outcome::Failure(error, _) => {
                1u8.hash(state);
                error.hash(state);
            }
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error, Trace::capture()),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Validated<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_validated()
    }
}
