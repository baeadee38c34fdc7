//! # Validated
//!
//! An applicative `Validated` type that collects *every* failure of independent
//! validations instead of stopping at the first one.
//!
//! ## Quick Example
//!
//! ```rust
//! use validated::Validated;
//!
//! fn validate_email(email: &str) -> Validated<String, Vec<String>> {
//!     if email.contains('@') {
//!         Validated::valid(email.to_string())
//!     } else {
//!         Validated::invalid(vec!["Email must contain @".to_string()])
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validated<i32, Vec<String>> {
//!     if age >= 18 {
//!         Validated::valid(age)
//!     } else {
//!         Validated::invalid(vec!["Must be 18 or older".to_string()])
//!     }
//! }
//!
//! let signup = Validated::pure(|email: String| move |age: i32| (email, age))
//!     .apply(validate_email("user.example.com"))
//!     .apply(validate_age(15));
//!
//! match signup {
//!     Validated::Valid((email, age)) => println!("{} is {} years old", email, age),
//!     Validated::Invalid(errors, trace) => {
//!         assert_eq!(errors.len(), 2);
//!         println!("{:?} (first failure at {})", errors, trace);
//!     }
//! }
//! ```
//!
//! ## What is deliberately missing
//!
//! `Validated` is not a monad. Chaining a dependent step would stop at the first
//! failure and lose the rest, so [`Validated::bind`] always panics with
//! [`NotAMonad`]. Convert with [`Validated::into_result`] when short-circuiting is
//! what you want.
//!
//! ## Features
//!
//! - `regex` (default): `Matches` for `regex::Regex` payloads
//! - `serde`: `Serialize`/`Deserialize` for `Validated`, `Maybe` and `Outcome`
//! - `tracing`: emit events on failure conversions and misuse
//! - `proptest`: `Arbitrary` for `Validated`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod interop;
pub mod matches;
pub mod semigroup;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
pub mod trace;
pub mod unit;
pub mod validated;

// Re-exports
pub use either::Either;
pub use error::{NoValuePresent, NotAMonad};
pub use interop::{Maybe, Outcome};
pub use matches::{Matches, Satisfies};
pub use semigroup::Semigroup;
pub use trace::Trace;
pub use unit::{Unit, UNIT};
pub use validated::{invalid, pure, valid, Validated};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::interop::{Maybe, Outcome};
    pub use crate::matches::Matches;
    pub use crate::semigroup::Semigroup;
    pub use crate::trace::Trace;
    pub use crate::unit::Unit;
    pub use crate::validated::{invalid, pure, valid, Validated};
}
