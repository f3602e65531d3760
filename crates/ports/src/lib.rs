//! Port definitions for the submission core.
//!
//! Concrete bindings (document-store writes, auth SDK calls, catalog
//! queries) live in adapter crates; the application layer depends only on
//! the traits defined here.

pub mod outbound;
