use redline_core::errors::{ExError, ExErrorKind, RedlineError};

#[test]
fn test_invalid_utf8_maps_to_encoding_kind() {
    let err = RedlineError::InvalidUtf8 {
        side: "old".to_string(),
        valid_up_to: 7,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidEncoding);
    assert_eq!(ex_err.code(), "ERR_INVALID_ENCODING");
    assert_eq!(ex_err.side(), Some("old"));
    assert!(ex_err.message().contains("offset 7"));
}

#[test]
fn test_read_failure_keeps_path() {
    let err = RedlineError::ReadFailed {
        path: "/tmp/missing.txt".to_string(),
        reason: "No such file or directory".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.path(), Some("/tmp/missing.txt"));
    assert!(ex_err.message().contains("No such file"));
}

#[test]
fn test_config_and_serialization_are_distinct() {
    let config: ExError = RedlineError::InvalidConfig {
        reason: "bad".to_string(),
    }
    .into();
    let serialization: ExError = RedlineError::Serialization {
        reason: "bad".to_string(),
    }
    .into();

    assert_eq!(config.code(), "ERR_INVALID_CONFIG");
    assert_eq!(serialization.code(), "ERR_SERIALIZATION");
    assert_ne!(config.kind(), serialization.kind());
}

#[test]
fn test_error_kind_code_mapping() {
    // Codes are part of the log schema and must not drift
    let kinds = vec![
        (ExErrorKind::InvalidEncoding, "ERR_INVALID_ENCODING"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_display_includes_op_and_side() {
    let ex_err = ExError::new(ExErrorKind::InvalidEncoding)
        .with_op("compute_diff_bytes")
        .with_side("new")
        .with_message("document is not valid UTF-8");

    let rendered = ex_err.to_string();
    assert!(rendered.starts_with("[ERR_INVALID_ENCODING] in operation 'compute_diff_bytes'"));
    assert!(rendered.contains("(side: new)"));
}
