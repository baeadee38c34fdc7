//! A neutral sum type for "kept or recovered" results
//!
//! `Validated::or` has to return the receiver untouched when it is `Valid` and the
//! bare recovery value when it is `Invalid`. Those are two different types, so
//! `or` returns an [`Either`]: `Left` holds the untouched `Validated`, `Right`
//! holds whatever the recovery closure produced.
//!
//! Neither side of `Either` implies failure.
//!
//! # Examples
//!
//! ```rust
//! use validated::{Either, Validated};
//!
//! let valid = Validated::<_, &str>::valid(1);
//! assert_eq!(valid.or(|| 0), Either::Left(Validated::Valid(1)));
//!
//! let invalid = Validated::<i32, _>::invalid("missing_value");
//! assert_eq!(invalid.or(|| "result"), Either::Right("result"));
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Example
///
/// ```rust
/// use validated::Either;
///
/// let kept: Either<i32, &str> = Either::left(42);
/// let summary = kept.fold(|n| format!("kept {}", n), |s| format!("recovered {}", s));
/// assert_eq!(summary, "kept 42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the left value if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validated::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.into_left(), Some(42));
    /// assert_eq!(right.into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Transform the left value, leaving a Right untouched.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, leaving a Left untouched.
    #[inline]
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Fold both variants into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validated::{Either, Validated};
    ///
    /// let port = Validated::<u16, _>::invalid("PORT is not a number")
    ///     .or(|| 8080)
    ///     .fold(|kept| kept.value(), |recovered| recovered);
    /// assert_eq!(port, 8080);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Convert to a Result (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<T> Either<T, T> {
    /// Extract the value when both sides share a type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validated::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::left(1).into_inner(), 1);
    /// assert_eq!(Either::<i32, i32>::right(2).into_inner(), 2);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(v) | Either::Right(v) => v,
        }
    }
}
