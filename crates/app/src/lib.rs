//! Application layer for the promo-code submission wizard.
//!
//! Library-level state machine meant to be embedded in a UI shell: the
//! host renders state, feeds user intent in through
//! [`SubmissionService::dispatch`] and [`SubmissionService::submit`], and
//! listens for one-shot [`AppSignal`]s.

pub mod application;

pub use application::error::SubmissionError;
pub use application::services::submission_service::{
    AppSignal, SubmissionAction, SubmissionState,
};
pub use application::services::{CatalogService, SubmissionService};
