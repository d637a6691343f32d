use std::path::PathBuf;

use super::*;

#[test]
fn error_display_malformed_diff() {
    let err = DiffSlocError::MalformedDiff {
        line_number: 3,
        line: "+orphan".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("line 3"));
    assert!(message.contains("+orphan"));
}

#[test]
fn error_display_empty_input() {
    let err = DiffSlocError::EmptyInput;
    assert!(err.to_string().contains("No file header"));
}

#[test]
fn error_display_config() {
    let err = DiffSlocError::Config("unknown language 'cobol'".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: unknown language 'cobol'"
    );
}

#[test]
fn error_display_file_read() {
    let err = DiffSlocError::FileRead {
        path: PathBuf::from("changes.patch"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("changes.patch"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        DiffSlocError::MalformedDiff {
            line_number: 1,
            line: "-x".to_string(),
        }
        .error_type(),
        "MalformedDiff"
    );
    assert_eq!(
        DiffSlocError::MissingFileName {
            line_number: 1,
            line: "Index: ".to_string(),
        }
        .error_type(),
        "MalformedDiff"
    );
    assert_eq!(DiffSlocError::EmptyInput.error_type(), "EmptyInput");
    assert_eq!(
        DiffSlocError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        DiffSlocError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn config_errors_are_classified() {
    assert!(DiffSlocError::Config("bad".to_string()).is_config_error());
    assert!(!DiffSlocError::EmptyInput.is_config_error());
    assert!(
        !DiffSlocError::MalformedDiff {
            line_number: 1,
            line: "+".to_string(),
        }
        .is_config_error()
    );
}

#[test]
fn suggestion_file_read_not_found() {
    let err = DiffSlocError::FileRead {
        path: PathBuf::from("missing.patch"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.suggestion().unwrap().contains("path exists"));
}

#[test]
fn suggestion_absent_for_io() {
    let err = DiffSlocError::Io(std::io::Error::other("broken pipe"));
    assert!(err.suggestion().is_none());
}

#[test]
fn config_read_is_a_config_error() {
    let err = DiffSlocError::ConfigRead {
        path: PathBuf::from("custom.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.is_config_error());
    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("custom.toml"));
}
