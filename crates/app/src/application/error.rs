//! Service layer error types
//!
//! Two independent failure families reach the submission service: local
//! validation failures (deterministic, detected before any I/O) and opaque
//! persistence failures. Both are captured as values so the host UI has a
//! single place to render "something went wrong".

use thiserror::Error;

use promovote_domain::CreationFailure;
use promovote_ports::outbound::PersistenceError;

/// Why a submission attempt ended in the error state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    /// The wizard data could not be turned into a valid promo code
    #[error("validation failed: {0}")]
    Validation(#[from] CreationFailure),

    /// The persistence backend rejected or failed the write
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_validation_failures() {
        let err: SubmissionError = CreationFailure::EmptyCode.into();
        assert!(matches!(err, SubmissionError::Validation(_)));
        assert!(err.to_string().contains("promo code cannot be empty"));
    }

    #[test]
    fn wraps_persistence_failures() {
        let err: SubmissionError = PersistenceError::new("write timed out").into();
        assert!(matches!(err, SubmissionError::Persistence(_)));
        assert!(err.to_string().contains("write timed out"));
    }
}
