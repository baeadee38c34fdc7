//! Tests and examples for the assertion macros
//!
//! Demonstrates how code that returns `Validated` is usually tested.

use validated::prelude::*;
use validated::{assert_invalid, assert_invalid_error, assert_valid};

#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: i32,
}

#[derive(Debug, Clone, PartialEq)]
struct Config {
    min_age: i32,
}

impl Config {
    fn test_config() -> Self {
        Self { min_age: 18 }
    }
}

fn validate_email(email: &str) -> Validated<String, Vec<String>> {
    if email.contains('@') && email.contains('.') {
        Validated::valid(email.to_string())
    } else {
        Validated::invalid(vec!["Email must contain @ and .".to_string()])
    }
}

fn validate_age(age: i32, config: &Config) -> Validated<i32, Vec<String>> {
    if age >= config.min_age {
        Validated::valid(age)
    } else {
        Validated::invalid(vec![format!("Must be {} or older", config.min_age)])
    }
}

fn validate_user(email: &str, age: i32) -> Validated<User, Vec<String>> {
    let config = Config::test_config();
    Validated::pure(|email: String| move |age: i32| User { email, age })
        .apply(validate_email(email))
        .apply(validate_age(age, &config))
}

#[test]
fn test_assert_valid_with_valid_email() {
    assert_valid!(validate_email("user@example.com"));
}

#[test]
fn test_assert_invalid_with_invalid_email() {
    assert_invalid!(validate_email("invalid"));
}

#[test]
fn test_assert_invalid_error_with_specific_error() {
    assert_invalid_error!(
        validate_email("invalid"),
        vec!["Email must contain @ and .".to_string()]
    );
}

#[test]
fn test_accumulating_multiple_errors() {
    let result = validate_user("invalid", 15);
    assert_invalid!(result.clone());

    match result {
        Validated::Invalid(errors, trace) => {
            assert_eq!(errors.len(), 2);
            assert!(errors.contains(&"Email must contain @ and .".to_string()));
            assert!(errors.contains(&"Must be 18 or older".to_string()));
            assert!(trace.file().ends_with("testing_utilities.rs"));
        }
        Validated::Valid(user) => panic!("Expected Invalid, got {:?}", user),
    }
}

#[test]
fn test_successful_user_validation() {
    let result = validate_user("user@example.com", 25);
    assert_valid!(result.clone());
    assert_eq!(
        result.value(),
        User {
            email: "user@example.com".to_string(),
            age: 25,
        }
    );
}

#[test]
fn test_collecting_validations() {
    let emails = ["a@example.com", "nope", "b@example.com", "also nope"];
    let all: Validated<Vec<String>, Vec<String>> =
        emails.iter().map(|e| validate_email(e)).collect();
    assert_invalid_error!(
        all,
        vec![
            "Email must contain @ and .".to_string(),
            "Email must contain @ and .".to_string(),
        ]
    );
}

#[test]
#[should_panic(expected = "Expected Valid, got Invalid")]
fn test_assert_valid_reports_failure() {
    assert_valid!(validate_user("invalid", 15));
}
