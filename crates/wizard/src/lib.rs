//! Multi-step submission wizard: working data, step graph, and flow state.
//!
//! The wizard is deliberately split in three layers:
//! - [`data::SubmissionWizardData`] holds raw, unvalidated form input;
//! - [`step`] defines the canonical step chain and each step's completion
//!   predicate as a static, data-driven table;
//! - [`flow::WizardFlowState`] composes the two and derives navigation and
//!   submit permissions, so no call site re-derives step logic.

pub mod data;
pub mod flow;
pub mod step;

pub use data::{DiscountKind, SubmissionWizardData};
pub use flow::WizardFlowState;
pub use step::{StepDescriptor, WizardStep, STEPS};
