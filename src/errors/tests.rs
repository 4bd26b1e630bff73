//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            token: ")".to_string(),
        },
        Position(10, Rc::new("test.ks".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedExpression {
            token: ")".to_string()
        }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedFunctionName {
            token: "(".to_string(),
        },
        Position(42, Rc::new("test.ks".to_string())),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.ks");
}

#[test]
fn test_error_display_is_the_message() {
    let error = Error::new(
        ErrorImpl::ExpectedCloseParenInPrototype {
            token: "1".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.to_string(), "Expected ')' in prototype, found \"1\"");
}

#[test]
fn test_argument_separator_message() {
    let error = Error::new(
        ErrorImpl::ExpectedArgumentSeparator {
            token: "y".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "ExpectedArgumentSeparator");
    assert!(error.to_string().starts_with("Expected ')' or ',' in argument list"));
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.to_string(), "invalid number literal: \"1.2.3\"");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep {
            token: "(".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "nesting too deep at \"(\"");
}
