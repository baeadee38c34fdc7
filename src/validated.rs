//! The `Validated` applicative
//!
//! `Validated<T, E>` is either `Valid(T)` or `Invalid(E, Trace)`. It looks like
//! `Result`, but combining two values with [`Validated::apply`] keeps *every*
//! failure: the errors of independent `Invalid` values are merged with
//! [`Semigroup::combine`] instead of stopping at the first one.
//!
//! That accumulation is also why there is no chaining operation. A chained step
//! depends on the previous success, so it can only run after the previous step
//! succeeded, and an error in step one hides any error step two would have
//! reported. [`Validated::bind`] exists only to fail loudly with [`NotAMonad`].
//!
//! # Examples
//!
//! ## Building and transforming
//!
//! ```
//! use validated::Validated;
//!
//! let v = Validated::<_, Vec<&str>>::pure(1);
//! assert_eq!(v, Validated::Valid(1));
//! assert_eq!(v.fmap(|n| (n + 1).to_string()), Validated::Valid("2".to_string()));
//! ```
//!
//! ## Accumulating failures
//!
//! ```
//! use validated::Validated;
//!
//! fn name(raw: &str) -> Validated<String, Vec<&'static str>> {
//!     if raw.is_empty() {
//!         Validated::invalid(vec!["name is empty"])
//!     } else {
//!         Validated::valid(raw.to_string())
//!     }
//! }
//!
//! fn age(raw: i64) -> Validated<u8, Vec<&'static str>> {
//!     match u8::try_from(raw) {
//!         Ok(age) => Validated::valid(age),
//!         Err(_) => Validated::invalid(vec!["age is out of range"]),
//!     }
//! }
//!
//! let person = Validated::pure(|name: String| move |age: u8| (name, age))
//!     .apply(name(""))
//!     .apply(age(-3));
//!
//! assert_eq!(
//!     person,
//!     Validated::invalid(vec!["name is empty", "age is out of range"])
//! );
//! ```
//!
//! ## Converting for downstream code
//!
//! ```
//! use validated::{Maybe, Outcome, Validated};
//!
//! let failed = Validated::<i32, _>::invalid("missing_value");
//! let outcome = failed.to_result();
//! assert_eq!(outcome, Outcome::failure("missing_value"));
//! assert!(outcome.trace().is_some());
//!
//! assert_eq!(Validated::<_, &str>::valid(3).to_maybe(), Maybe::Some(3));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::either::Either;
use crate::error::{NoValuePresent, NotAMonad};
use crate::interop::{Maybe, Outcome};
use crate::matches::Matches;
use crate::trace::Trace;
use crate::unit::Unit;
use crate::Semigroup;

/// A value that is either valid, or invalid with an error and the trace of where
/// it was created
///
/// Equality, hashing and `Display` look only at the variant and its payload. The
/// [`Trace`] of an `Invalid` never takes part in them.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error (must implement `Semigroup` to accumulate)
#[derive(Debug, Clone, Copy)]
#[must_use]
pub enum Validated<T, E> {
    /// Successful value
    Valid(T),
    /// Failure with its error and the call site that produced it
    Invalid(E, Trace),
}

/// Lift a value (or a function, for later [`Validated::apply`]) into `Valid`
///
/// # Examples
///
/// ```
/// use validated::{pure, Validated};
///
/// let add_one = pure::<_, i32>(|x: i32| x + 1);
/// assert_eq!(add_one.apply(Validated::Valid(2)), Validated::Valid(3));
/// ```
#[inline]
pub fn pure<T, E>(value: T) -> Validated<T, E> {
    Validated::Valid(value)
}

/// Shorthand for [`Validated::valid`]
#[inline]
pub fn valid<T, E>(value: T) -> Validated<T, E> {
    Validated::Valid(value)
}

/// Shorthand for [`Validated::invalid`]; the trace points at the caller
#[track_caller]
#[inline]
pub fn invalid<T, E>(error: E) -> Validated<T, E> {
    Validated::Invalid(error, Trace::capture())
}

impl<T, E> Validated<T, E> {
    /// Create a valid value
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::<i32, String>::valid(42);
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn valid(value: T) -> Self {
        Validated::Valid(value)
    }

    /// Create an invalid value, tracing the caller's location
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::<i32, _>::invalid("too short");
    /// assert_eq!(v.trace().map(|t| t.line()), Some(line!() - 1));
    /// ```
    #[track_caller]
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validated::Invalid(error, Trace::capture())
    }

    /// The applicative unit: always `Valid`
    ///
    /// The payload may be plain data or a function waiting to be applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// assert_eq!(Validated::<_, ()>::pure(1), Validated::Valid(1));
    ///
    /// let f = Validated::<_, i32>::pure(|x: i32| x * 2);
    /// assert!(f.is_valid());
    /// ```
    #[inline]
    pub fn pure(value: T) -> Self {
        Validated::Valid(value)
    }

    /// Run a deferred producer once and wrap its result in `Valid`
    #[inline]
    pub fn pure_with<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Validated::Valid(f())
    }

    /// Check if this is `Valid`
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Check if this is `Invalid`
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validated::Invalid(..))
    }

    /// Borrow the payloads, keeping the trace
    #[inline]
    pub fn as_ref(&self) -> Validated<&T, &E> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(error, trace) => Validated::Invalid(error, *trace),
        }
    }

    /// Transform the valid value
    ///
    /// An `Invalid` is returned unchanged, trace included.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::<_, String>::valid(5);
    /// assert_eq!(v.fmap(|x| x * 2), Validated::Valid(10));
    /// ```
    #[inline]
    pub fn fmap<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(error, trace) => Validated::Invalid(error, trace),
        }
    }

    /// Transform the error
    ///
    /// This is the functor on the failure side. A `Valid` is returned unchanged.
    /// The new `Invalid` is traced to the `alt_map` call.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::<i32, _>::invalid(vec!["a", "b"]);
    /// assert_eq!(v.alt_map(|errors| errors.len()), Validated::invalid(2));
    /// ```
    #[track_caller]
    #[inline]
    pub fn alt_map<E2, F>(self, f: F) -> Validated<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(error, _) => Validated::Invalid(f(error), Trace::capture()),
        }
    }

    /// Recover from a failure
    ///
    /// A `Valid` comes back untouched as `Either::Left` and `f` is not called. An
    /// `Invalid` is discarded and the bare result of `f` is returned as
    /// `Either::Right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::{Either, Validated};
    ///
    /// let v = Validated::<i32, _>::invalid("missing_value");
    /// assert_eq!(v.or(|| "result"), Either::Right("result"));
    /// ```
    #[inline]
    pub fn or<R, F>(self, f: F) -> Either<Self, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            valid @ Validated::Valid(_) => Either::Left(valid),
            Validated::Invalid(..) => Either::Right(f()),
        }
    }

    /// Extract the valid value
    ///
    /// # Panics
    ///
    /// Panics with a [`NoValuePresent`] message if this is `Invalid`. Use
    /// [`try_value`](Self::try_value) for a non-panicking version.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// assert_eq!(Validated::<_, &str>::valid(7).value(), 7);
    /// ```
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Validated::Valid(value) => value,
            Validated::Invalid(_, _trace) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(location = %_trace, "value() called on an Invalid");
                panic!("{}: called `Validated::value()` on an `Invalid`", NoValuePresent)
            }
        }
    }

    /// Extract the valid value, or report [`NoValuePresent`]
    #[inline]
    pub fn try_value(self) -> Result<T, NoValuePresent> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(..) => Err(NoValuePresent),
        }
    }

    /// Extract the valid value or fall back to `default`
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Validated::Valid(value) => value,
            Validated::Invalid(..) => default,
        }
    }

    /// Extract the valid value or compute one from the error
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Validated::Valid(value) => value,
            Validated::Invalid(error, _) => f(error),
        }
    }

    /// Borrow the error, if any
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(error, _) => Some(error),
        }
    }

    /// Take the error, if any
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(error, _) => Some(error),
        }
    }

    /// The call site that produced this `Invalid`
    ///
    /// Set by [`invalid`](Self::invalid) and refreshed by
    /// [`alt_map`](Self::alt_map). `None` for a `Valid`.
    #[inline]
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(_, trace) => Some(trace),
        }
    }

    /// Point the trace of an `Invalid` at the caller
    ///
    /// Useful when an `Invalid` arrives from somewhere its trace means little,
    /// such as deserialization. A `Valid` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::<i32, _>::invalid("e");
    /// let line = line!() + 1;
    /// let v = v.retrace();
    /// assert_eq!(v.trace().map(|t| t.line()), Some(line));
    /// ```
    #[track_caller]
    #[inline]
    pub fn retrace(self) -> Self {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(error, _) => Validated::Invalid(error, Trace::capture()),
        }
    }

    /// Collapse both variants into one value
    #[inline]
    pub fn fold<U, F, G>(self, on_valid: F, on_invalid: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Validated::Valid(value) => on_valid(value),
            Validated::Invalid(error, _) => on_invalid(error),
        }
    }

    /// Chaining is not supported
    ///
    /// `Validated` is an applicative, not a monad: a chained step only runs after
    /// the previous one succeeded, which would drop the errors of every later,
    /// independent validation. This method never calls `f`.
    ///
    /// # Panics
    ///
    /// Always panics with the [`NotAMonad`] message, on both variants. Combine
    /// independent validations with [`apply`](Self::apply) or
    /// [`zip`](Self::zip), or convert with [`into_result`](Self::into_result) when
    /// short-circuiting is really wanted.
    ///
    /// ```should_panic
    /// use validated::Validated;
    ///
    /// let v = Validated::<_, Vec<&str>>::valid(1);
    /// let _ = v.bind(|x| Validated::valid(x + 1));
    /// ```
    #[doc(alias = "and_then")]
    #[doc(alias = "flat_map")]
    #[track_caller]
    pub fn bind<U, F>(self, _f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> Validated<U, E>,
    {
        #[cfg(feature = "tracing")]
        tracing::error!(location = %Trace::capture(), "bind attempted on Validated");
        panic!("{}", NotAMonad)
    }

    /// Convert to [`Maybe`]
    ///
    /// `Valid(x)` becomes `Maybe::Some(x)`. `Invalid` becomes `Maybe::None`
    /// traced to this conversion's call site, not to where the `Invalid` was built.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::{Maybe, Validated};
    ///
    /// let none = Validated::<i32, _>::invalid("gone").to_maybe();
    /// assert!(none.is_none());
    /// assert_eq!(none.trace().map(|t| t.line()), Some(line!() - 2));
    /// ```
    #[track_caller]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Validated::Valid(value) => Maybe::Some(value),
            Validated::Invalid(..) => {
                let trace = Trace::capture();
                #[cfg(feature = "tracing")]
                tracing::debug!(location = %trace, "Invalid converted to Maybe::None");
                Maybe::None(trace)
            }
        }
    }

    /// Convert to [`Outcome`]
    ///
    /// `Valid(x)` becomes `Outcome::Success(x)`. `Invalid(e)` becomes
    /// `Outcome::Failure(e)` traced to this conversion's call site.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::{Outcome, Validated};
    ///
    /// let failure = Validated::<i32, _>::invalid("missing_value").to_result();
    /// assert_eq!(failure, Outcome::failure("missing_value"));
    /// assert!(failure.trace().unwrap().to_string().contains(file!()));
    /// ```
    #[track_caller]
    pub fn to_result(self) -> Outcome<T, E> {
        match self {
            Validated::Valid(value) => Outcome::Success(value),
            Validated::Invalid(error, _) => {
                let trace = Trace::capture();
                #[cfg(feature = "tracing")]
                tracing::debug!(location = %trace, "Invalid converted to Outcome::Failure");
                Outcome::Failure(error, trace)
            }
        }
    }

    /// Convert to a std `Result`, dropping the trace
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// assert_eq!(Validated::<_, String>::valid(42).into_result(), Ok(42));
    /// assert_eq!(Validated::<i32, _>::invalid("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(error, _) => Err(error),
        }
    }

    /// Convert to a std `Option`, dropping the error
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Validated::Valid(value) => Some(value),
            Validated::Invalid(..) => None,
        }
    }

    /// Create from a std `Result`; an `Err` is traced to the caller
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validated::Valid(42));
    /// ```
    #[track_caller]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::Invalid(error, Trace::capture()),
        }
    }

    /// Create from a std `Option`, building the error lazily for `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::from_option(None::<u16>, || "PORT is not set");
    /// assert_eq!(v, Validated::invalid("PORT is not set"));
    /// ```
    #[track_caller]
    #[inline]
    pub fn from_option<F>(option: Option<T>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match option {
            Some(value) => Validated::Valid(value),
            None => Validated::Invalid(error(), Trace::capture()),
        }
    }

    /// Pattern-match this value against another
    ///
    /// Holds when both are `Valid` and this payload [`Matches`] the other's, or
    /// both are `Invalid` and this error matches the other's. A `Valid` never
    /// matches an `Invalid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let in_range = Validated::<_, i32>::valid(1..10);
    /// assert!(in_range.matches(&Validated::<_, i32>::valid(5)));
    /// assert!(!in_range.matches(&Validated::<_, i32>::valid(10)));
    /// assert!(!in_range.matches(&Validated::<i32, _>::invalid(5)));
    /// ```
    pub fn matches<U, E2>(&self, other: &Validated<U, E2>) -> bool
    where
        T: Matches<U>,
        E: Matches<E2>,
    {
        match (self, other) {
            (Validated::Valid(pattern), Validated::Valid(candidate)) => {
                Matches::matches(pattern, candidate)
            }
            (Validated::Invalid(pattern, _), Validated::Invalid(candidate, _)) => {
                Matches::matches(pattern, candidate)
            }
            _ => false,
        }
    }
}

impl<E> Validated<Unit, E> {
    /// A success that carries no meaningful value
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::{Unit, Validated};
    ///
    /// assert_eq!(Validated::<Unit, &str>::unit().to_string(), "Valid()");
    /// ```
    #[inline]
    pub fn unit() -> Self {
        Validated::Valid(Unit)
    }
}

impl<F, E: Semigroup> Validated<F, E> {
    /// Apply a wrapped function to a wrapped argument, accumulating failures
    ///
    /// | `self`       | `other`       | result                       |
    /// |--------------|---------------|------------------------------|
    /// | `Valid(f)`   | `Valid(a)`    | `Valid(f(a))`                |
    /// | `Valid(f)`   | `Invalid(e)`  | `Invalid(e)`                 |
    /// | `Invalid(e)` | `Valid(a)`    | `Invalid(e)`                 |
    /// | `Invalid(e1)`| `Invalid(e2)` | `Invalid(e1.combine(e2))`    |
    ///
    /// Across a chain of `apply` calls the first `Invalid` seeds the accumulated
    /// error, every later `Invalid` is combined into it, and `Valid` arguments
    /// after that are ignored. The accumulated error keeps the trace of the first
    /// `Invalid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let add_one = Validated::<_, i32>::pure(|x: i32| x + 1);
    /// assert_eq!(add_one.apply(Validated::Valid(2)), Validated::Valid(3));
    ///
    /// let add_one = Validated::<_, i32>::pure(|x: i32| x + 1);
    /// assert_eq!(add_one.apply(Validated::invalid(2)), Validated::invalid(2));
    ///
    /// let failed = Validated::<fn(i32) -> i32, i32>::invalid(1);
    /// assert_eq!(failed.apply(Validated::invalid(2)), Validated::invalid(3));
    /// ```
    pub fn apply<A, B>(self, other: Validated<A, E>) -> Validated<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match (self, other) {
            (Validated::Valid(f), Validated::Valid(a)) => Validated::Valid(f(a)),
            (Validated::Valid(_), Validated::Invalid(error, trace)) => {
                Validated::Invalid(error, trace)
            }
            (Validated::Invalid(error, trace), Validated::Valid(_)) => {
                Validated::Invalid(error, trace)
            }
            (Validated::Invalid(e1, trace), Validated::Invalid(e2, _)) => {
                Validated::Invalid(e1.combine(e2), trace)
            }
        }
    }
}

impl<T, E: Semigroup> Validated<T, E> {
    /// Pair two independent validations, accumulating failures like `apply`
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v1 = Validated::<_, Vec<&str>>::valid(1);
    /// let v2 = Validated::<_, Vec<&str>>::valid("two");
    /// assert_eq!(v1.zip(v2), Validated::Valid((1, "two")));
    ///
    /// let v1 = Validated::<i32, _>::invalid(vec!["error1"]);
    /// let v2 = Validated::<i32, _>::invalid(vec!["error2"]);
    /// assert_eq!(v1.zip(v2), Validated::invalid(vec!["error1", "error2"]));
    /// ```
    pub fn zip<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        self.fmap(|a| move |b: U| (a, b)).apply(other)
    }

    /// Collect many validations, accumulating every failure in order
    ///
    /// Returns `Valid` with all values when every item is valid. Otherwise returns
    /// the combined errors, traced to the first `Invalid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let all = Validated::sequence(vec![
    ///     Validated::<_, Vec<&str>>::valid(1),
    ///     Validated::valid(2),
    /// ]);
    /// assert_eq!(all, Validated::Valid(vec![1, 2]));
    ///
    /// let some_failed = Validated::sequence(vec![
    ///     Validated::<i32, _>::invalid(vec!["error1"]),
    ///     Validated::valid(2),
    ///     Validated::invalid(vec!["error2"]),
    /// ]);
    /// assert_eq!(some_failed, Validated::invalid(vec!["error1", "error2"]));
    /// ```
    pub fn sequence<I>(validations: I) -> Validated<Vec<T>, E>
    where
        I: IntoIterator<Item = Validated<T, E>>,
    {
        validations.into_iter().collect()
    }
}

impl<T, E: Semigroup> FromIterator<Validated<T, E>> for Validated<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Validated<T, E>>>(iter: I) -> Self {
        let mut acc = Validated::Valid(Vec::new());
        for item in iter {
            acc = match (acc, item) {
                (Validated::Valid(mut values), Validated::Valid(value)) => {
                    values.push(value);
                    Validated::Valid(values)
                }
                (Validated::Valid(_), Validated::Invalid(error, trace)) => {
                    Validated::Invalid(error, trace)
                }
                (invalid @ Validated::Invalid(..), Validated::Valid(_)) => invalid,
                (Validated::Invalid(e1, trace), Validated::Invalid(e2, _)) => {
                    Validated::Invalid(e1.combine(e2), trace)
                }
            };
        }
        acc
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Validated<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => a == b,
            (Validated::Invalid(a, _), Validated::Invalid(b, _)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Validated<T, E> {}

impl<T: Hash, E: Hash> Hash for Validated<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Validated::Valid(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            Validated::Invalid(error, _) => {
                1u8.hash(state);
                error.hash(state);
            }
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validated<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validated::Valid(value) => write!(f, "Valid({})", value),
            Validated::Invalid(error, _) => write!(f, "Invalid({})", error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validated<T, E> {
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        Validated::from_result(result)
    }
}

impl<T, E> From<Validated<T, E>> for Result<T, E> {
    fn from(validated: Validated<T, E>) -> Self {
        validated.into_result()
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_to_result_logs_conversion() {
        let _ = Validated::<i32, _>::invalid("missing").to_result();
        assert!(logs_contain("Invalid converted to Outcome::Failure"));
    }

    #[traced_test]
    #[test]
    fn test_to_maybe_logs_conversion() {
        let _ = Validated::<i32, _>::invalid("missing").to_maybe();
        assert!(logs_contain("Invalid converted to Maybe::None"));
    }

    #[traced_test]
    #[test]
    fn test_valid_conversion_is_silent() {
        let _ = Validated::<_, &str>::valid(1).to_result();
        assert!(!logs_contain("converted"));
    }

    #[traced_test]
    #[test]
    fn test_bind_logs_before_panicking() {
        let result = std::panic::catch_unwind(|| {
            Validated::<_, Vec<&str>>::valid(1).bind(|x| Validated::valid(x + 1))
        });
        assert!(result.is_err());
        assert!(logs_contain("bind attempted on Validated"));
    }
}
