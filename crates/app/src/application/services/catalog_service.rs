//! Catalog service - advisory service-name autocomplete
//!
//! A thin, failure-swallowing facade over [`ServiceCatalogPort`]. The
//! wizard never depends on it: an absent port, a blank prefix, or a
//! backend failure all degrade to an empty suggestion list.

use std::sync::Arc;

use promovote_domain::common::is_blank;
use promovote_ports::outbound::{ServiceCatalogPort, ServiceSuggestion};

/// How many suggestions to request when the caller does not say.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Autocomplete provider for the wizard's service-name step.
pub struct CatalogService {
    catalog: Option<Arc<dyn ServiceCatalogPort>>,
}

impl CatalogService {
    pub fn new(catalog: Option<Arc<dyn ServiceCatalogPort>>) -> Self {
        Self { catalog }
    }

    /// A service with no backend; every lookup yields nothing.
    pub fn disabled() -> Self {
        Self { catalog: None }
    }

    /// Suggestions for the given prefix, or an empty list.
    ///
    /// Blank prefixes are not forwarded to the backend, and backend
    /// failures are logged and swallowed.
    pub async fn suggestions(&self, prefix: &str) -> Vec<ServiceSuggestion> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };
        if is_blank(prefix) {
            return Vec::new();
        }
        match catalog.suggest(prefix.trim(), DEFAULT_SUGGESTION_LIMIT).await {
            Ok(suggestions) => suggestions,
            Err(error) => {
                tracing::debug!(%error, "service catalog lookup failed; suggestions suppressed");
                Vec::new()
            }
        }
    }
}
