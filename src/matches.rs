//! Pattern-match delegation
//!
//! `Validated::matches` compares two `Validated` values by asking the receiver's
//! payload whether it matches the other payload. What "match" means is up to the
//! payload type, through the [`Matches`] trait:
//!
//! - literals (integers, `bool`, `char`, strings) match by equality,
//! - ranges match by membership,
//! - a `regex::Regex` matches strings it finds a match in (feature `regex`),
//! - [`Satisfies`] wraps any predicate closure.
//!
//! `str` has an inherent `matches` method, so string payloads are best called
//! through the trait path, `Matches::matches(&pattern, &candidate)`.
//!
//! # Examples
//!
//! ```
//! use validated::{Matches, Satisfies};
//!
//! assert!(5i32.matches(&5));
//! assert!((1..10).matches(&5));
//! assert!(!(1..10).matches(&10));
//! assert!(Matches::matches(&"ok", &"ok"));
//! assert!(Satisfies(|n: &i32| n % 2 == 0).matches(&4));
//! ```

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A payload that can test whether a candidate matches it
pub trait Matches<C: ?Sized> {
    /// Returns `true` if `candidate` matches this pattern
    fn matches(&self, candidate: &C) -> bool;
}

macro_rules! impl_matches_literal {
    ($($t:ty),+) => {
        $(
            impl Matches<$t> for $t {
                #[inline]
                fn matches(&self, candidate: &$t) -> bool {
                    self == candidate
                }
            }
        )+
    };
}

impl_matches_literal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String, str
);

impl<'a, 'b> Matches<&'b str> for &'a str {
    #[inline]
    fn matches(&self, candidate: &&'b str) -> bool {
        *self == *candidate
    }
}

impl<'a> Matches<String> for &'a str {
    #[inline]
    fn matches(&self, candidate: &String) -> bool {
        *self == candidate.as_str()
    }
}

impl<'b> Matches<&'b str> for String {
    #[inline]
    fn matches(&self, candidate: &&'b str) -> bool {
        self.as_str() == *candidate
    }
}

impl<T: PartialOrd> Matches<T> for Range<T> {
    #[inline]
    fn matches(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

impl<T: PartialOrd> Matches<T> for RangeInclusive<T> {
    #[inline]
    fn matches(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

impl<T: PartialOrd> Matches<T> for RangeFrom<T> {
    #[inline]
    fn matches(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

impl<T: PartialOrd> Matches<T> for RangeTo<T> {
    #[inline]
    fn matches(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

impl<T: PartialOrd> Matches<T> for RangeToInclusive<T> {
    #[inline]
    fn matches(&self, candidate: &T) -> bool {
        self.contains(candidate)
    }
}

impl<T: ?Sized> Matches<T> for RangeFull {
    #[inline]
    fn matches(&self, _candidate: &T) -> bool {
        true
    }
}

#[cfg(feature = "regex")]
mod regex_impl {
    use super::Matches;
    use regex::Regex;

    impl Matches<str> for Regex {
        #[inline]
        fn matches(&self, candidate: &str) -> bool {
            self.is_match(candidate)
        }
    }

    impl Matches<String> for Regex {
        #[inline]
        fn matches(&self, candidate: &String) -> bool {
            self.is_match(candidate)
        }
    }

    impl<'a> Matches<&'a str> for Regex {
        #[inline]
        fn matches(&self, candidate: &&'a str) -> bool {
            self.is_match(candidate)
        }
    }
}

/// A predicate closure used as a pattern
///
/// # Examples
///
/// ```
/// use validated::{Matches, Satisfies};
///
/// let short = Satisfies(|s: &String| s.len() < 4);
/// assert!(short.matches(&"abc".to_string()));
/// assert!(!short.matches(&"abcd".to_string()));
/// ```
#[derive(Clone, Copy)]
pub struct Satisfies<F>(pub F);

impl<C: ?Sized, F: Fn(&C) -> bool> Matches<C> for Satisfies<F> {
    #[inline]
    fn matches(&self, candidate: &C) -> bool {
        (self.0)(candidate)
    }
}

impl<F> std::fmt::Debug for Satisfies<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Satisfies(<fn>)")
    }
}
