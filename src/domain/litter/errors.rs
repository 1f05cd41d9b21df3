//! Breeding lifecycle error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Validation | 400 |
//! | InvalidState | 409 |
//! | Conflict | 409 |
//! | Store | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, FieldErrors, ValidationError};

/// Kind of record a lookup failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Dog,
    Litter,
    Puppy,
    Event,
}

impl RecordKind {
    fn label(&self) -> &'static str {
        match self {
            RecordKind::Dog => "Dog",
            RecordKind::Litter => "Litter",
            RecordKind::Puppy => "Puppy",
            RecordKind::Event => "Event",
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            RecordKind::Dog => ErrorCode::DogNotFound,
            RecordKind::Litter => ErrorCode::LitterNotFound,
            RecordKind::Puppy => ErrorCode::PuppyNotFound,
            RecordKind::Event => ErrorCode::EventNotFound,
        }
    }
}

/// Errors raised by the breeding lifecycle and fact-log operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreedingError {
    /// A referenced record does not exist for the caller's tenant.
    NotFound { kind: RecordKind, id: String },
    /// One or more preconditions on the input failed.
    Validation(FieldErrors),
    /// The litter's status does not allow the operation.
    InvalidState(String),
    /// A concurrent write touched the same record; the caller may retry.
    Conflict(String),
    /// Storage failure not otherwise classified.
    Store(String),
}

impl BreedingError {
    pub fn not_found(kind: RecordKind, id: impl ToString) -> Self {
        BreedingError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BreedingError::Validation(FieldErrors::single(field, message))
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        BreedingError::InvalidState(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BreedingError::NotFound { kind, .. } => kind.code(),
            BreedingError::Validation(_) => ErrorCode::ValidationFailed,
            BreedingError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            BreedingError::Conflict(_) => ErrorCode::Conflict,
            BreedingError::Store(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BreedingError::NotFound { kind, id } => format!("{} not found: {}", kind.label(), id),
            BreedingError::Validation(errors) => format!("Validation failed: {}", errors),
            BreedingError::InvalidState(msg) => format!("Invalid state: {}", msg),
            BreedingError::Conflict(msg) => format!("Concurrent update: {}", msg),
            BreedingError::Store(msg) => format!("Storage error: {}", msg),
        }
    }

    /// Suggested HTTP status for callers exposing this error over REST.
    pub fn http_status(&self) -> u16 {
        match self {
            BreedingError::NotFound { .. } => 404,
            BreedingError::Validation(_) => 400,
            BreedingError::InvalidState(_) | BreedingError::Conflict(_) => 409,
            BreedingError::Store(_) => 500,
        }
    }

    /// Returns true if retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BreedingError::Conflict(_))
    }
}

impl std::fmt::Display for BreedingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BreedingError {}

impl From<DomainError> for BreedingError {
    fn from(err: DomainError) -> Self {
        let id = err.details.get("id").cloned().unwrap_or_default();
        match err.code {
            ErrorCode::DogNotFound => BreedingError::not_found(RecordKind::Dog, id),
            ErrorCode::LitterNotFound => BreedingError::not_found(RecordKind::Litter, id),
            ErrorCode::PuppyNotFound => BreedingError::not_found(RecordKind::Puppy, id),
            ErrorCode::EventNotFound => BreedingError::not_found(RecordKind::Event, id),
            ErrorCode::ValidationFailed => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "input".to_string());
                BreedingError::validation(field, err.message)
            }
            ErrorCode::InvalidStateTransition => BreedingError::InvalidState(err.message),
            ErrorCode::Conflict => BreedingError::Conflict(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => BreedingError::Store(err.message),
        }
    }
}

impl From<FieldErrors> for BreedingError {
    fn from(errors: FieldErrors) -> Self {
        BreedingError::Validation(errors)
    }
}

impl From<ValidationError> for BreedingError {
    fn from(err: ValidationError) -> Self {
        BreedingError::Validation(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_kind_in_code_and_message() {
        let err = BreedingError::not_found(RecordKind::Litter, "abc");
        assert_eq!(err.code(), ErrorCode::LitterNotFound);
        assert_eq!(err.message(), "Litter not found: abc");
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn conflict_is_retryable_and_maps_to_409() {
        let err = BreedingError::from(DomainError::conflict("litter changed"));
        assert!(matches!(err, BreedingError::Conflict(_)));
        assert!(err.is_retryable());
        assert_eq!(err.http_status(), 409);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = BreedingError::from(DomainError::database("connection reset"));
        assert!(matches!(err, BreedingError::Store(_)));
        assert!(!err.is_retryable());
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn domain_validation_keeps_field() {
        let err = BreedingError::from(DomainError::validation("identifier", "duplicate"));
        match err {
            BreedingError::Validation(errors) => {
                assert_eq!(errors.get("identifier"), Some("duplicate"))
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_state_transition_maps_to_invalid_state() {
        let err = BreedingError::from(DomainError::new(
            ErrorCode::InvalidStateTransition,
            "already born",
        ));
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
        assert_eq!(err.http_status(), 409);
    }

    #[test]
    fn not_found_domain_error_uses_id_detail() {
        let err = BreedingError::from(
            DomainError::new(ErrorCode::DogNotFound, "missing").with_detail("id", "dog-1"),
        );
        assert_eq!(err, BreedingError::not_found(RecordKind::Dog, "dog-1"));
    }
}
