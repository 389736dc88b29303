//! Input validation for seek requests.
//!
//! The sequencing engine trusts its input. Callers run these checks before
//! sequencing to reject:
//! - A head outside `0..=max_cylinder`
//! - Requests outside `0..=max_cylinder`
//! - More than [`MAX_REQUESTS`] requests
//! - An empty request set

use crate::models::{SeekRequest, MAX_REQUESTS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Head lies beyond the last cylinder.
    HeadOutOfRange,
    /// A request lies beyond the last cylinder.
    RequestOutOfRange,
    /// More requests than the simulator accepts.
    TooManyRequests,
    /// Nothing to sequence.
    EmptyRequestSet,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a request set before sequencing.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(request: &SeekRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.head > request.max_cylinder {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!(
                "Head position {} exceeds max cylinder {}",
                request.head, request.max_cylinder
            ),
        ));
    }

    if request.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRequestSet,
            "Add or generate requests first",
        ));
    }

    if request.len() > MAX_REQUESTS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyRequests,
            format!(
                "{} requests exceed the limit of {MAX_REQUESTS}",
                request.len()
            ),
        ));
    }

    for (i, &cylinder) in request.requests.iter().enumerate() {
        if cylinder > request.max_cylinder {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestOutOfRange,
                format!(
                    "Request #{} ({cylinder}) is outside 0-{}",
                    i + 1,
                    request.max_cylinder
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
