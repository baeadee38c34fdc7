//! Serde support (feature-gated)
//!
//! `Validated`, `Maybe` and `Outcome` serialize as externally tagged enums
//! without their traces:
//!
//! ```text
//! {"Valid": 42}            {"Invalid": ["name is empty"]}
//! {"Some": 42}             "None"
//! {"Success": 42}          {"Failure": "e"}
//! ```
//!
//! A trace only means something in the process that captured it, so it is not
//! written out. A deserialized failure carries a fixed marker trace that points
//! into this module, the same for every deserialized value. Call `retrace()` on
//! the result to point it at your own call site.
//!
//! # Example
//!
//! ```rust,ignore
//! use validated::Validated;
//!
//! let v = Validated::<i32, Vec<String>>::invalid(vec!["name is empty".into()]);
//! let json = serde_json::to_string(&v).unwrap();
//! assert_eq!(json, r#"{"Invalid":["name is empty"]}"#);
//!
//! let back: Validated<i32, Vec<String>> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, v);
//! ```

use serde::de::{self, Deserializer, EnumAccess, VariantAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

use crate::interop::{Maybe, Outcome};
use crate::trace::Trace;
use crate::validated::Validated;

const VALIDATED_VARIANTS: &[&str] = &["Valid", "Invalid"];
const MAYBE_VARIANTS: &[&str] = &["Some", "None"];
const OUTCOME_VARIANTS: &[&str] = &["Success", "Failure"];

impl<T: Serialize, E: Serialize> Serialize for Validated<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Validated::Valid(value) => {
                serializer.serialize_newtype_variant("Validated", 0, "Valid", value)
            }
            Validated::Invalid(error, _) => {
                serializer.serialize_newtype_variant("Validated", 1, "Invalid", error)
            }
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Some(value) => serializer.serialize_newtype_variant("Maybe", 0, "Some", value),
            Maybe::None(_) => serializer.serialize_unit_variant("Maybe", 1, "None"),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Success(value) => {
                serializer.serialize_newtype_variant("Outcome", 0, "Success", value)
            }
            Outcome::Failure(error, _) => {
                serializer.serialize_newtype_variant("Outcome", 1, "Failure", error)
            }
        }
    }
}

/// Variant tag shared by the three two-variant enums.
enum Tag {
    First,
    Second,
}

struct TagVisitor(&'static [&'static str]);

impl<'de> Visitor<'de> for TagVisitor {
    type Value = Tag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "one of {:?}", self.0)
    }

    fn visit_u64<Er: de::Error>(self, v: u64) -> Result<Tag, Er> {
        match v {
            0 => Ok(Tag::First),
            1 => Ok(Tag::Second),
            _ => Err(de::Error::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<Tag, Er> {
        if v == self.0[0] {
            Ok(Tag::First)
        } else if v == self.0[1] {
            Ok(Tag::Second)
        } else {
            Err(de::Error::unknown_variant(v, self.0))
        }
    }
}

struct TagSeed(&'static [&'static str]);

impl<'de> de::DeserializeSeed<'de> for TagSeed {
    type Value = Tag;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Tag, D::Error> {
        deserializer.deserialize_identifier(TagVisitor(self.0))
    }
}

struct ValidatedVisitor<T, E>(PhantomData<(T, E)>);

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Visitor<'de> for ValidatedVisitor<T, E> {
    type Value = Validated<T, E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a Valid or Invalid variant")
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
        let (tag, variant) = data.variant_seed(TagSeed(VALIDATED_VARIANTS))?;
        match tag {
            Tag::First => variant.newtype_variant().map(Validated::Valid),
            Tag::Second => {
                let error = variant.newtype_variant()?;
                Ok(Validated::Invalid(error, Trace::capture()))
            }
        }
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Validated<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_enum("Validated", VALIDATED_VARIANTS, ValidatedVisitor(PhantomData))
    }
}

struct MaybeVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for MaybeVisitor<T> {
    type Value = Maybe<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a Some or None variant")
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
        let (tag, variant) = data.variant_seed(TagSeed(MAYBE_VARIANTS))?;
        match tag {
            Tag::First => variant.newtype_variant().map(Maybe::Some),
            Tag::Second => {
                variant.unit_variant()?;
                Ok(Maybe::None(Trace::capture()))
            }
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_enum("Maybe", MAYBE_VARIANTS, MaybeVisitor(PhantomData))
    }
}

struct OutcomeVisitor<T, E>(PhantomData<(T, E)>);

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Visitor<'de> for OutcomeVisitor<T, E> {
    type Value = Outcome<T, E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a Success or Failure variant")
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
        let (tag, variant) = data.variant_seed(TagSeed(OUTCOME_VARIANTS))?;
        match tag {
            Tag::First => variant.newtype_variant().map(Outcome::Success),
            Tag::Second => {
                let error = variant.newtype_variant()?;
                Ok(Outcome::Failure(error, Trace::capture()))
            }
        }
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_enum("Outcome", OUTCOME_VARIANTS, OutcomeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_validated() {
        let valid = Validated::<i32, Vec<String>>::valid(42);
        assert_eq!(serde_json::to_string(&valid).unwrap(), r#"{"Valid":42}"#);

        let invalid = Validated::<i32, Vec<String>>::invalid(vec!["name is empty".into()]);
        assert_eq!(
            serde_json::to_string(&invalid).unwrap(),
            r#"{"Invalid":["name is empty"]}"#
        );
    }

    #[test]
    fn test_deserialize_validated() {
        let valid: Validated<i32, String> = serde_json::from_str(r#"{"Valid":42}"#).unwrap();
        assert_eq!(valid, Validated::Valid(42));

        let invalid: Validated<i32, String> =
            serde_json::from_str(r#"{"Invalid":"too short"}"#).unwrap();
        assert_eq!(invalid, Validated::invalid("too short".to_string()));
        assert!(invalid.trace().is_some());
    }

    #[test]
    fn test_deserialized_failure_can_be_retraced() {
        let invalid: Validated<i32, String> =
            serde_json::from_str(r#"{"Invalid":"x"}"#).unwrap();
        assert!(invalid.trace().unwrap().file().ends_with("serde_impl.rs"));

        let line = line!() + 1;
        let invalid = invalid.retrace();
        assert_eq!(invalid.trace().unwrap().line(), line);

        let failure: Outcome<i32, String> = serde_json::from_str(r#"{"Failure":"x"}"#).unwrap();
        let line = line!() + 1;
        let failure = failure.retrace();
        assert_eq!(failure.trace().unwrap().line(), line);
    }

    #[test]
    fn test_deserialize_unknown_variant_fails() {
        let result: Result<Validated<i32, String>, _> = serde_json::from_str(r#"{"Ok":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_maybe_round_trip() {
        let some = Maybe::Some(3);
        let json = serde_json::to_string(&some).unwrap();
        assert_eq!(json, r#"{"Some":3}"#);
        assert_eq!(serde_json::from_str::<Maybe<i32>>(&json).unwrap(), some);

        let none = Maybe::<i32>::none();
        let json = serde_json::to_string(&none).unwrap();
        assert_eq!(json, r#""None""#);
        assert!(serde_json::from_str::<Maybe<i32>>(&json).unwrap().is_none());
    }

    #[test]
    fn test_outcome_round_trip() {
        let failure = Outcome::<i32, String>::failure("e".to_string());
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"Failure":"e"}"#);
        let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }
}
