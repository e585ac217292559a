//! Tests for error module

use routeclean::RouteCleanError;

#[test]
fn test_malformed_record_display() {
    let err = RouteCleanError::MalformedRecord {
        line: 42,
        reason: "invalid float literal".to_string(),
    };
    assert!(err.to_string().contains("line 42"));
    assert!(err.to_string().contains("invalid float literal"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: RouteCleanError = io_err.into();
    assert!(matches!(err, RouteCleanError::Io(_)));
}
