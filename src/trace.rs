//! Call-site traces for failures
//!
//! A [`Trace`] records where an `Invalid` value (or a failed conversion of one)
//! was produced. Capture is explicit: nothing records a trace unless it calls
//! [`Trace::capture`], and the snapshot is a single frame, the source location of
//! the nearest caller that is not itself marked `#[track_caller]`.
//!
//! # Examples
//!
//! ```
//! use validated::Trace;
//!
//! let trace = Trace::capture();
//! assert_eq!(trace.line(), line!() - 1);
//! assert!(trace.to_string().contains(file!()));
//! ```

use std::fmt;
use std::panic::Location;

/// A point-in-time snapshot of the call site that produced a failure
///
/// Traces compare by location. They are informational only: the types that carry
/// them (`Validated`, `Maybe`, `Outcome`) leave the trace out of their own equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trace {
    location: &'static Location<'static>,
}

impl Trace {
    /// Capture the location of the caller
    ///
    /// Because this function is `#[track_caller]`, calling it from another
    /// `#[track_caller]` function reports that function's caller instead. This is
    /// how `Validated::invalid`, `to_maybe` and `to_result` point at user code.
    ///
    /// # Examples
    ///
    /// ```
    /// use validated::Trace;
    ///
    /// #[track_caller]
    /// fn where_am_i() -> Trace {
    ///     Trace::capture()
    /// }
    ///
    /// let trace = where_am_i();
    /// assert_eq!(trace.line(), line!() - 1);
    /// ```
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Trace {
            location: Location::caller(),
        }
    }

    /// The source file of the captured call site
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// The line of the captured call site
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// The column of the captured call site
    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// The underlying std location
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location)
    }
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trace({})", self.location)
    }
}
