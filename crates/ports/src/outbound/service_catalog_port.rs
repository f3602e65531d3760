//! Service catalog port - advisory autocomplete for service names
//!
//! Entirely optional: the wizard functions with this port absent or
//! failing, and service names fall back to free-text entry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A service-name suggestion from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSuggestion {
    pub name: String,
    /// How many codes the catalog already lists for this service
    pub code_count: u32,
}

/// Opaque failure from the catalog backend.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("catalog lookup failed: {0}")]
pub struct CatalogError(pub String);

/// Prefix search over known service names.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait ServiceCatalogPort: Send + Sync {
    /// Up to `limit` suggestions matching the prefix.
    async fn suggest(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ServiceSuggestion>, CatalogError>;
}
