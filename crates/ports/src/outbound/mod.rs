//! Outbound ports - interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to interact with external
//! systems without depending on concrete implementations.

pub mod auth_port;
pub mod persistence_port;
pub mod service_catalog_port;

pub use auth_port::{AuthState, AuthenticatedUser, AuthenticationPort};
pub use persistence_port::{PersistenceError, PersistencePort};
pub use service_catalog_port::{CatalogError, ServiceCatalogPort, ServiceSuggestion};

// Re-export mocks for convenience
#[cfg(feature = "testing")]
pub use auth_port::MockAuthenticationPort;
#[cfg(feature = "testing")]
pub use persistence_port::MockPersistencePort;
#[cfg(feature = "testing")]
pub use service_catalog_port::MockServiceCatalogPort;
