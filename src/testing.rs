//! Testing utilities for code that returns `Validated`
//!
//! Assertion macros that print the offending payload on failure, and (with the
//! `proptest` feature) an `Arbitrary` implementation so `Validated` values can be
//! generated in property tests.
//!
//! # Examples
//!
//! ```rust
//! use validated::{Validated, assert_invalid, assert_valid};
//!
//! let ok = Validated::<_, Vec<String>>::valid(42);
//! assert_valid!(ok);
//!
//! let bad = Validated::<i32, _>::invalid(vec!["error".to_string()]);
//! assert_invalid!(bad);
//! ```

/// Assert that a `Validated` is `Valid`.
///
/// Panics with the error if it is `Invalid`.
///
/// # Example
///
/// ```rust
/// use validated::{Validated, assert_valid};
///
/// assert_valid!(Validated::<_, Vec<String>>::valid(42));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Valid(_) => {}
            $crate::Validated::Invalid(e, trace) => {
                panic!("Expected Valid, got Invalid: {:?} (created at {})", e, trace);
            }
        }
    };
}

/// Assert that a `Validated` is `Invalid`.
///
/// Panics with the value if it is `Valid`.
///
/// # Example
///
/// ```rust
/// use validated::{Validated, assert_invalid};
///
/// assert_invalid!(Validated::<i32, _>::invalid("error"));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Invalid(..) => {}
            $crate::Validated::Valid(v) => {
                panic!("Expected Invalid, got Valid: {:?}", v);
            }
        }
    };
}

/// Assert that a `Validated` is `Invalid` with a specific error.
///
/// # Example
///
/// ```rust
/// use validated::{Validated, assert_invalid_error};
///
/// let v = Validated::<i32, _>::invalid(vec!["error1", "error2"]);
/// assert_invalid_error!(v, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_invalid_error {
    ($validated:expr, $expected:expr) => {
        match $validated {
            $crate::Validated::Invalid(errors, _) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validated::Valid(v) => {
                panic!(
                    "Expected Invalid with error {:?}, got Valid: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Validated<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(crate::Validated::valid),
            any_with::<E>(e_params).prop_map(|e| crate::Validated::invalid(e)),
        ]
        .boxed()
    }
}
