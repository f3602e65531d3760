//! Application layer - orchestration of the submission wizard

pub mod error;
pub mod services;

pub use error::SubmissionError;
