//! Conversions to traced and std types, and payload matching, as seen from a caller

use validated::prelude::*;
use validated::{NotAMonad, Satisfies};

fn parse_port(raw: &str) -> Validated<u16, String> {
    Validated::from_result(raw.parse::<u16>().map_err(|e| e.to_string()))
}

#[test]
fn test_to_result_traces_conversion_site() {
    let invalid = parse_port("not a port");
    let built_at = *invalid.trace().unwrap();

    let line = line!() + 1;
    let outcome = invalid.to_result();
    let trace = outcome.trace().unwrap();

    assert!(trace.file().ends_with("interop_integration.rs"));
    assert_eq!(trace.line(), line);
    assert_ne!(trace.line(), built_at.line());
}

#[test]
fn test_to_maybe_traces_conversion_site() {
    let line = line!() + 1;
    let maybe = Validated::<i32, _>::invalid("missing_value").to_maybe();
    assert_eq!(maybe.trace().map(Trace::line), Some(line));
    assert!(maybe.trace().unwrap().to_string().contains("interop_integration.rs"));
}

#[test]
fn test_valid_conversions_carry_value() {
    assert_eq!(parse_port("8080").to_result(), Outcome::success(8080));
    assert_eq!(parse_port("8080").to_maybe(), Maybe::Some(8080));
}

#[test]
fn test_outcome_feeds_question_mark() {
    fn port_plus_one(raw: &str) -> Result<u16, String> {
        let port: Result<u16, String> = parse_port(raw).to_result().into();
        Ok(port? + 1)
    }

    assert_eq!(port_plus_one("79"), Ok(80));
    assert!(port_plus_one("http").is_err());
}

#[test]
fn test_from_option_traces_caller() {
    let line = line!() + 1;
    let v = Validated::<i32, _>::from_option(None, || "absent");
    assert_eq!(v.trace().unwrap().line(), line);
}

#[test]
fn test_bind_panics_with_fixed_message() {
    let result = std::panic::catch_unwind(|| {
        Validated::<_, Vec<String>>::valid(1).bind(|x| Validated::valid(x + 1))
    });
    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert_eq!(message, NotAMonad::MESSAGE);
}

#[test]
fn test_matches_literals_and_ranges() {
    let status = Validated::<u16, u16>::invalid(404);
    assert!(Validated::<u16, _>::invalid(400..500).matches(&status));
    assert!(!Validated::<u16, _>::invalid(500..=599).matches(&status));
    assert!(Validated::<u16, u16>::invalid(404).matches(&status));
    assert!(!Validated::<_, u16>::valid(404..405).matches(&status));
}

#[test]
fn test_matches_predicate() {
    let even = Validated::<_, i32>::valid(Satisfies(|n: &i32| n % 2 == 0));
    assert!(even.matches(&Validated::<_, i32>::valid(10)));
    assert!(!even.matches(&Validated::<_, i32>::valid(7)));
}

#[cfg(feature = "regex")]
#[test]
fn test_matches_regex_error() {
    let pattern = regex::Regex::new("^missing_").unwrap();
    let expected = Validated::<i32, _>::invalid(pattern);
    assert!(expected.matches(&Validated::<i32, _>::invalid("missing_value")));
    assert!(!expected.matches(&Validated::<i32, _>::invalid("bad_value")));
}
