//! Pedigree query errors.

use crate::domain::foundation::{DogId, DomainError, ErrorCode};

/// Errors raised by the genealogy queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PedigreeError {
    /// The subject dog does not exist for the caller's tenant.
    NotFound(DogId),
    /// Storage failure while walking the graph.
    Store(String),
}

impl PedigreeError {
    pub fn not_found(id: DogId) -> Self {
        PedigreeError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PedigreeError::NotFound(_) => ErrorCode::DogNotFound,
            PedigreeError::Store(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PedigreeError::NotFound(id) => format!("Dog not found: {}", id),
            PedigreeError::Store(msg) => format!("Storage error: {}", msg),
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            PedigreeError::NotFound(_) => 404,
            PedigreeError::Store(_) => 500,
        }
    }
}

impl std::fmt::Display for PedigreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PedigreeError {}

impl From<DomainError> for PedigreeError {
    fn from(err: DomainError) -> Self {
        let id = err
            .details
            .get("id")
            .and_then(|id| id.parse::<DogId>().ok());
        match (err.code, id) {
            (ErrorCode::DogNotFound, Some(id)) => PedigreeError::NotFound(id),
            _ => PedigreeError::Store(err.message),
        }
    }
}
