//! The unit sentinel
//!
//! [`Unit`] marks a success that carries no meaningful value. It renders as the
//! empty string, so `Validated::unit()` displays as `Valid()`.

use std::fmt;

/// A singleton "no meaningful value" marker
///
/// # Examples
///
/// ```
/// use validated::{Unit, Validated};
///
/// let saved = Validated::<Unit, &str>::unit();
/// assert_eq!(saved.to_string(), "Valid()");
/// assert_eq!(Unit::from(()), Unit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unit;

/// The one `Unit` value
pub const UNIT: Unit = Unit;

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

impl fmt::Display for Unit {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_displays_empty() {
        assert_eq!(UNIT.to_string(), "");
    }

    #[test]
    fn test_unit_round_trips_through_unit_tuple() {
        let marker: Unit = ().into();
        assert_eq!(marker, UNIT);
        let _: () = marker.into();
    }
}
