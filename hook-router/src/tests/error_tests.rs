//! Error tests - codes, classification and conversions

use proptest::prelude::*;

use crate::{RouterError, RouterErrorCode};

fn all_codes() -> Vec<RouterErrorCode> {
    vec![
        RouterErrorCode::HandlerNotFound,
        RouterErrorCode::ControllerNotFound,
        RouterErrorCode::UnsupportedVerb,
        RouterErrorCode::InvalidPattern,
        RouterErrorCode::ConfigError,
        RouterErrorCode::NotFound,
        RouterErrorCode::BadRequest,
        RouterErrorCode::PersistenceError,
        RouterErrorCode::SerializationError,
        RouterErrorCode::InternalError,
    ]
}

fn code_strategy() -> impl Strategy<Value = RouterErrorCode> {
    prop::sample::select(all_codes())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[test]
fn test_handler_not_found_names_both() {
    let err = RouterError::handler_not_found("missing", "SomeController");
    assert_eq!(err.code, RouterErrorCode::HandlerNotFound);
    assert_eq!(
        err.message,
        "Method 'missing' not found in controller 'SomeController'"
    );
    assert_eq!(
        err.details,
        Some(serde_json::json!({"action": "missing", "controller": "SomeController"}))
    );
    assert_eq!(
        err.to_string(),
        "[HANDLER_NOT_FOUND] Method 'missing' not found in controller 'SomeController'"
    );
}

#[test]
fn test_serialized_shape() {
    let err = RouterError::not_found("No admin page 'x'");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"code": "NOT_FOUND", "message": "No admin page 'x'"})
    );
}

#[test]
fn test_sanitize_hides_infrastructure_detail() {
    let err = RouterError::persistence("disk full at /var/lib/options.json")
        .with_cause("ENOSPC")
        .sanitize();
    assert_eq!(err.message, "An internal error occurred");
    assert!(err.cause.is_none());

    let kept = RouterError::bad_request("Parameter 'id' is not valid")
        .with_cause("parse")
        .sanitize();
    assert_eq!(kept.message, "Parameter 'id' is not valid");
    assert_eq!(kept.cause.as_deref(), Some("parse"));
}

#[test]
fn test_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(
        RouterError::from(json_err).code,
        RouterErrorCode::SerializationError
    );

    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    assert_eq!(RouterError::from(io_err).code, RouterErrorCode::PersistenceError);
}

#[test]
fn test_invalid_pattern_names_the_pattern() {
    let err = RouterError::invalid_pattern("shop/{id}", "compiled regex exceeds size limit");
    assert_eq!(err.code, RouterErrorCode::InvalidPattern);
    assert!(err.code.is_configuration_error());
    assert!(err.message.contains("shop/{id}"));
    assert_eq!(err.cause.as_deref(), Some("compiled regex exceeds size limit"));
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    /// Codes serialize to the same string `as_str` reports.
    #[test]
    fn prop_code_serializes_as_str(code in code_strategy()) {
        let json = serde_json::to_string(&code).unwrap();
        prop_assert_eq!(json, format!("\"{}\"", code.as_str()));
        prop_assert_eq!(code.to_string(), code.as_str());
    }

    /// No code is both a configuration error and a request error.
    #[test]
    fn prop_classification_is_disjoint(code in code_strategy()) {
        prop_assert!(!(code.is_configuration_error() && code.is_request_error()));
    }

    /// Messages and causes survive serialization.
    #[test]
    fn prop_error_round_trip(
        code in code_strategy(),
        message in "[a-zA-Z0-9 ']{0,40}",
        cause in proptest::option::of("[a-z ]{1,20}"),
    ) {
        let mut err = RouterError::new(code, message.clone());
        if let Some(cause) = &cause {
            err = err.with_cause(cause.clone());
        }

        let restored: RouterError =
            serde_json::from_str(&serde_json::to_string(&err).unwrap()).unwrap();
        prop_assert_eq!(restored.code, code);
        prop_assert_eq!(restored.message, message);
        prop_assert_eq!(restored.cause, cause);
    }
}
