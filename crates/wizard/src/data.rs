//! Working data for the submission wizard
//!
//! Deliberately permissive: every field holds whatever the user typed, one
//! field per eventual entity attribute plus UI-only scratch fields (one raw
//! input per discount kind, so switching kinds does not lose what was
//! typed). Validation lives in the step graph and the entity constructor,
//! not here.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which discount shape the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    Percentage,
    FixedAmount,
}

/// Immutable working data for one wizard session.
///
/// Every edit produces a new value (`with_*` methods); observers holding a
/// prior snapshot never see it change underneath them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionWizardData {
    pub service_name: String,
    pub code: String,
    pub discount_kind: Option<DiscountKind>,
    /// Raw user input for the percentage variant
    pub percentage_input: String,
    /// Raw user input for the fixed-amount variant
    pub fixed_amount_input: String,
    /// Raw user input for the minimum order amount
    pub minimum_order_input: String,
    pub first_use_only: bool,
    pub one_time_use: bool,
    pub description: String,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
}

impl SubmissionWizardData {
    /// Fresh wizard data with the start date defaulted to today.
    pub fn new() -> Self {
        Self::starting_on(Utc::now().date_naive())
    }

    /// Fresh wizard data with an explicit start date (injectable for tests).
    pub fn starting_on(start: NaiveDate) -> Self {
        Self {
            service_name: String::new(),
            code: String::new(),
            discount_kind: None,
            percentage_input: String::new(),
            fixed_amount_input: String::new(),
            minimum_order_input: String::new(),
            first_use_only: false,
            one_time_use: false,
            description: String::new(),
            starts_on: start,
            ends_on: None,
        }
    }

    pub fn with_service_name(self, service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..self
        }
    }

    pub fn with_code(self, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..self
        }
    }

    pub fn with_discount_kind(self, discount_kind: Option<DiscountKind>) -> Self {
        Self {
            discount_kind,
            ..self
        }
    }

    pub fn with_percentage_input(self, percentage_input: impl Into<String>) -> Self {
        Self {
            percentage_input: percentage_input.into(),
            ..self
        }
    }

    pub fn with_fixed_amount_input(self, fixed_amount_input: impl Into<String>) -> Self {
        Self {
            fixed_amount_input: fixed_amount_input.into(),
            ..self
        }
    }

    pub fn with_minimum_order_input(self, minimum_order_input: impl Into<String>) -> Self {
        Self {
            minimum_order_input: minimum_order_input.into(),
            ..self
        }
    }

    pub fn with_first_use_only(self, first_use_only: bool) -> Self {
        Self {
            first_use_only,
            ..self
        }
    }

    pub fn with_one_time_use(self, one_time_use: bool) -> Self {
        Self {
            one_time_use,
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    pub fn with_starts_on(self, starts_on: NaiveDate) -> Self {
        Self { starts_on, ..self }
    }

    pub fn with_ends_on(self, ends_on: Option<NaiveDate>) -> Self {
        Self { ends_on, ..self }
    }
}

impl Default for SubmissionWizardData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, n).unwrap()
    }

    #[test]
    fn fresh_data_is_empty_except_start_date() {
        let data = SubmissionWizardData::starting_on(day(1));
        assert!(data.service_name.is_empty());
        assert!(data.code.is_empty());
        assert!(data.discount_kind.is_none());
        assert!(data.ends_on.is_none());
        assert_eq!(data.starts_on, day(1));
    }

    #[test]
    fn new_defaults_start_to_today() {
        let data = SubmissionWizardData::new();
        assert_eq!(data.starts_on, Utc::now().date_naive());
    }

    #[test]
    fn with_updaters_copy_not_mutate() {
        let original = SubmissionWizardData::starting_on(day(1));
        let edited = original.clone().with_service_name("Netflix");
        assert!(original.service_name.is_empty());
        assert_eq!(edited.service_name, "Netflix");
        // unrelated fields carried over
        assert_eq!(edited.starts_on, original.starts_on);
    }

    #[test]
    fn switching_kind_keeps_both_raw_inputs() {
        let data = SubmissionWizardData::starting_on(day(1))
            .with_discount_kind(Some(DiscountKind::Percentage))
            .with_percentage_input("20")
            .with_discount_kind(Some(DiscountKind::FixedAmount))
            .with_fixed_amount_input("300");
        assert_eq!(data.percentage_input, "20");
        assert_eq!(data.fixed_amount_input, "300");
        assert_eq!(data.discount_kind, Some(DiscountKind::FixedAmount));
    }
}
