//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid cylinder request: {0}")]
    InvalidRequest(String),

    #[error("Invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeekRequest;
    use crate::validation::validate_input;

    #[test]
    fn test_validation_message_joins_errors() {
        let request = SeekRequest::new(vec![300], 250).with_max_cylinder(199);
        let err = Error::Validation(validate_input(&request).unwrap_err());
        assert_eq!(
            err.to_string(),
            "Invalid input: Head position 250 exceeds max cylinder 199; \
             Request #1 (300) is outside 0-199"
        );
    }

    #[test]
    fn test_unknown_algorithm_message() {
        let err = "zigzag".parse::<crate::models::Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown algorithm: zigzag");
    }
}
