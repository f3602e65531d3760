//! Persistence port - durable storage for validated promo codes

use async_trait::async_trait;
use thiserror::Error;

use promovote_domain::{PromoCode, PromoCodeId};

/// Opaque failure reported by the persistence backend.
///
/// The submission core surfaces this verbatim for the host to render; it
/// never inspects or retries on its own.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct PersistenceError(pub String);

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Durable storage for validated promo codes.
///
/// One call per submission attempt, one terminal result; no partial or
/// streaming responses. Timeout policy belongs to the adapter behind this
/// trait, not to the submission core.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait PersistencePort: Send + Sync {
    /// Store the promo code, returning its identity on success.
    async fn submit(&self, promo: &PromoCode) -> Result<PromoCodeId, PersistenceError>;
}
