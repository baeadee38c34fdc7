//! Semigroup capability for accumulated errors
//!
//! `Validated::apply` merges the errors of two `Invalid` values with
//! [`Semigroup::combine`]. The bound is checked at compile time: an error type
//! without a `Semigroup` impl simply cannot be used with `apply`, `zip` or
//! `sequence`.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Provided instances
//!
//! - `Vec<T>` appends.
//! - `String` concatenates.
//! - Primitive integers add with wrapping arithmetic. Wrapping addition is
//!   associative for every input, so accumulation never panics on overflow.
//! - Tuples of up to 12 semigroups combine component-wise.
//!
//! # Examples
//!
//! ```
//! use validated::Semigroup;
//!
//! assert_eq!(vec!["a"].combine(vec!["b"]), vec!["a", "b"]);
//! assert_eq!(1i32.combine(2), 3);
//! assert_eq!((vec![1], 10u8).combine((vec![2], 5)), (vec![1, 2], 15));
//! ```
//!
//! A domain error type opts in by implementing the trait:
//!
//! ```
//! use validated::{Semigroup, Validated};
//!
//! #[derive(Debug, PartialEq)]
//! struct FieldErrors(Vec<&'static str>);
//!
//! impl Semigroup for FieldErrors {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//!
//! let name = Validated::<String, _>::invalid(FieldErrors(vec!["name is blank"]));
//! let age = Validated::<u8, _>::invalid(FieldErrors(vec!["age is negative"]));
//! let user = Validated::pure(|name: String| move |age: u8| (name, age))
//!     .apply(name)
//!     .apply(age);
//!
//! assert_eq!(
//!     user.into_error(),
//!     Some(FieldErrors(vec!["name is blank", "age is negative"]))
//! );
//! ```

/// A type with an associative binary operation
///
/// `combine` takes both operands by value. Clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another, associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

macro_rules! impl_semigroup_int {
    ($($t:ty),+) => {
        $(
            impl Semigroup for $t {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )+
    };
}

impl_semigroup_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10, 10 T11);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6, 6 T7, 7 T8, 8 T9, 9 T10, 10 T11, 11 T12);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vec_combine() {
        assert_eq!(vec!["name"].combine(vec!["age"]), vec!["name", "age"]);
    }

    #[test]
    fn test_vec_combine_empty() {
        let empty: Vec<&str> = vec![];
        assert_eq!(empty.combine(vec!["age"]), vec!["age"]);
    }

    #[test]
    fn test_string_combine() {
        assert_eq!("missing ".to_string().combine("value".to_string()), "missing value");
    }

    #[test]
    fn test_integer_combine_adds() {
        assert_eq!(1i32.combine(2), 3);
        assert_eq!(40u64.combine(2), 42);
        assert_eq!((-5i8).combine(3), -2);
    }

    #[test]
    fn test_integer_combine_wraps() {
        assert_eq!(u8::MAX.combine(1), 0);
        assert_eq!(i32::MAX.combine(1), i32::MIN);
    }

    #[test]
    fn test_tuple_combine() {
        let t1 = (vec!["a"], "x".to_string(), 1usize);
        let t2 = (vec!["b"], "y".to_string(), 2usize);
        assert_eq!(t1.combine(t2), (vec!["a", "b"], "xy".to_string(), 3));
    }

    #[test]
    fn test_chained_combines() {
        let result = vec![1].combine(vec![2]).combine(vec![3]).combine(vec![4]);
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    proptest! {
        #[test]
        fn prop_vec_associative(
            a in prop::collection::vec(any::<u8>(), 0..8),
            b in prop::collection::vec(any::<u8>(), 0..8),
            c in prop::collection::vec(any::<u8>(), 0..8),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_string_associative(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_i64_associative(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
        }

        #[test]
        fn prop_tuple_associative(
            a in (any::<i32>(), ".{0,4}"),
            b in (any::<i32>(), ".{0,4}"),
            c in (any::<i32>(), ".{0,4}"),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
