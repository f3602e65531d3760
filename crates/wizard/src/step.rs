//! Step graph for the submission wizard
//!
//! The canonical step sequence and each step's completion predicate live in
//! one static table. Edges are explicit (`previous`/`next` per row) rather
//! than computed from ordinals, and predicates are plain function pointers
//! over [`SubmissionWizardData`], so the graph can be unit-tested without
//! any UI in the loop.

use promovote_domain::{
    Discount, MAX_CODE_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_SERVICE_NAME_LENGTH,
};
use serde::{Deserialize, Serialize};

use crate::data::{DiscountKind, SubmissionWizardData};

/// One named stage of the submission wizard, ordered 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Which service the code belongs to
    Service,
    /// The promo code itself
    Code,
    /// Discount kind and value
    Discount,
    /// Minimum order amount to qualify
    MinimumOrder,
    /// Validity window (start and end dates)
    Validity,
    /// Eligibility toggles (first use, one-time use)
    Usage,
    /// Free-text description
    Description,
}

/// One row of the wizard's step table.
#[derive(Debug, Clone, Copy)]
pub struct StepDescriptor {
    pub step: WizardStep,
    /// 1-based position in the chain
    pub ordinal: usize,
    /// Required steps gate submission; optional ones may be skipped
    pub required: bool,
    /// Pure completion predicate, no I/O
    pub can_proceed: fn(&SubmissionWizardData) -> bool,
    pub previous: Option<WizardStep>,
    pub next: Option<WizardStep>,
}

/// The canonical step chain. A single linear path: every step appears
/// exactly once, boundary rows have no predecessor/successor.
pub static STEPS: [StepDescriptor; 7] = [
    StepDescriptor {
        step: WizardStep::Service,
        ordinal: 1,
        required: true,
        can_proceed: service_filled,
        previous: None,
        next: Some(WizardStep::Code),
    },
    StepDescriptor {
        step: WizardStep::Code,
        ordinal: 2,
        required: true,
        can_proceed: code_filled,
        previous: Some(WizardStep::Service),
        next: Some(WizardStep::Discount),
    },
    StepDescriptor {
        step: WizardStep::Discount,
        ordinal: 3,
        required: true,
        can_proceed: discount_valid,
        previous: Some(WizardStep::Code),
        next: Some(WizardStep::MinimumOrder),
    },
    StepDescriptor {
        step: WizardStep::MinimumOrder,
        ordinal: 4,
        required: true,
        can_proceed: minimum_order_valid,
        previous: Some(WizardStep::Discount),
        next: Some(WizardStep::Validity),
    },
    StepDescriptor {
        step: WizardStep::Validity,
        ordinal: 5,
        required: true,
        can_proceed: validity_window_valid,
        previous: Some(WizardStep::MinimumOrder),
        next: Some(WizardStep::Usage),
    },
    StepDescriptor {
        step: WizardStep::Usage,
        ordinal: 6,
        required: false,
        can_proceed: usage_flags_valid,
        previous: Some(WizardStep::Validity),
        next: Some(WizardStep::Description),
    },
    StepDescriptor {
        step: WizardStep::Description,
        ordinal: 7,
        required: false,
        can_proceed: description_within_limit,
        previous: Some(WizardStep::Usage),
        next: None,
    },
];

// Both predicates mirror the `ServiceName`/`CodeValue` constructors, so a
// value that satisfies the step also satisfies the entity.
fn service_filled(data: &SubmissionWizardData) -> bool {
    let trimmed = data.service_name.trim();
    !trimmed.is_empty() && trimmed.len() <= MAX_SERVICE_NAME_LENGTH
}

fn code_filled(data: &SubmissionWizardData) -> bool {
    let trimmed = data.code.trim();
    !trimmed.is_empty() && trimmed.len() <= MAX_CODE_LENGTH
}

fn discount_valid(data: &SubmissionWizardData) -> bool {
    match data.discount_kind {
        Some(DiscountKind::Percentage) => Discount::parse_percentage(&data.percentage_input).is_ok(),
        Some(DiscountKind::FixedAmount) => {
            Discount::parse_fixed_amount(&data.fixed_amount_input).is_ok()
        }
        None => false,
    }
}

fn minimum_order_valid(data: &SubmissionWizardData) -> bool {
    data.minimum_order_input
        .trim()
        .parse::<f64>()
        .map(|v| v.is_finite() && v > 0.0)
        .unwrap_or(false)
}

fn validity_window_valid(data: &SubmissionWizardData) -> bool {
    data.ends_on.is_some_and(|end| end > data.starts_on)
}

// Toggles have no invalid combination
fn usage_flags_valid(_data: &SubmissionWizardData) -> bool {
    true
}

fn description_within_limit(data: &SubmissionWizardData) -> bool {
    data.description.trim().len() <= MAX_DESCRIPTION_LENGTH
}

impl WizardStep {
    /// The table row for this step.
    pub fn descriptor(self) -> &'static StepDescriptor {
        match self {
            Self::Service => &STEPS[0],
            Self::Code => &STEPS[1],
            Self::Discount => &STEPS[2],
            Self::MinimumOrder => &STEPS[3],
            Self::Validity => &STEPS[4],
            Self::Usage => &STEPS[5],
            Self::Description => &STEPS[6],
        }
    }

    /// Successor in the chain; `None` at the last step (callers treat this
    /// as a no-op, never an error).
    pub fn next(self) -> Option<WizardStep> {
        self.descriptor().next
    }

    /// Predecessor in the chain; `None` at the first step.
    pub fn previous(self) -> Option<WizardStep> {
        self.descriptor().previous
    }

    /// 1-based position in the chain.
    pub fn ordinal(self) -> usize {
        self.descriptor().ordinal
    }

    /// Whether this step gates submission.
    pub fn is_required(self) -> bool {
        self.descriptor().required
    }

    /// Whether the user can move forward from this step with the given data.
    pub fn can_proceed(self, data: &SubmissionWizardData) -> bool {
        (self.descriptor().can_proceed)(data)
    }

    /// The entry step of the wizard.
    pub fn first() -> WizardStep {
        WizardStep::Service
    }

    /// The required step with the highest ordinal.
    pub fn last_required() -> WizardStep {
        STEPS
            .iter()
            .filter(|d| d.required)
            .map(|d| d.step)
            .last()
            .unwrap_or(WizardStep::Service)
    }

    /// All steps in chain order.
    pub fn all() -> impl Iterator<Item = WizardStep> {
        STEPS.iter().map(|d| d.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, n).unwrap()
    }

    fn empty_data() -> SubmissionWizardData {
        SubmissionWizardData::starting_on(day(1))
    }

    mod chain {
        use super::*;

        #[test]
        fn descriptor_rows_agree_with_their_step() {
            for step in WizardStep::all() {
                assert_eq!(step.descriptor().step, step);
            }
        }

        #[test]
        fn ordinals_are_one_based_and_increasing() {
            for (index, descriptor) in STEPS.iter().enumerate() {
                assert_eq!(descriptor.ordinal, index + 1);
            }
        }

        #[test]
        fn forward_walk_covers_every_step_once() {
            let mut visited = vec![WizardStep::first()];
            let mut current = WizardStep::first();
            while let Some(next) = current.next() {
                assert!(!visited.contains(&next), "cycle at {:?}", next);
                visited.push(next);
                current = next;
            }
            assert_eq!(visited.len(), STEPS.len());
        }

        #[test]
        fn backward_walk_covers_every_step_once() {
            let mut current = WizardStep::Description;
            let mut count = 1;
            while let Some(previous) = current.previous() {
                current = previous;
                count += 1;
            }
            assert_eq!(count, STEPS.len());
            assert_eq!(current, WizardStep::first());
        }

        #[test]
        fn next_then_previous_round_trips() {
            for step in WizardStep::all() {
                if let Some(next) = step.next() {
                    assert_eq!(next.previous(), Some(step));
                }
            }
        }

        #[test]
        fn boundaries_have_no_edge() {
            assert_eq!(WizardStep::Service.previous(), None);
            assert_eq!(WizardStep::Description.next(), None);
        }

        #[test]
        fn last_required_is_validity() {
            assert_eq!(WizardStep::last_required(), WizardStep::Validity);
        }

        #[test]
        fn trailing_steps_are_optional() {
            assert!(!WizardStep::Usage.is_required());
            assert!(!WizardStep::Description.is_required());
            for step in [
                WizardStep::Service,
                WizardStep::Code,
                WizardStep::Discount,
                WizardStep::MinimumOrder,
                WizardStep::Validity,
            ] {
                assert!(step.is_required(), "{:?} should be required", step);
            }
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn service_requires_non_blank_name() {
            assert!(!WizardStep::Service.can_proceed(&empty_data()));
            assert!(!WizardStep::Service.can_proceed(&empty_data().with_service_name("   ")));
            assert!(WizardStep::Service.can_proceed(&empty_data().with_service_name("Netflix")));
        }

        #[test]
        fn code_requires_non_blank_code() {
            assert!(!WizardStep::Code.can_proceed(&empty_data()));
            assert!(WizardStep::Code.can_proceed(&empty_data().with_code("SAVE20")));
        }

        #[test]
        fn service_and_code_respect_length_caps() {
            assert!(WizardStep::Service.can_proceed(&empty_data().with_service_name("a".repeat(200))));
            assert!(!WizardStep::Service.can_proceed(&empty_data().with_service_name("a".repeat(201))));
            assert!(WizardStep::Code.can_proceed(&empty_data().with_code("A".repeat(64))));
            assert!(!WizardStep::Code.can_proceed(&empty_data().with_code("A".repeat(65))));
        }

        #[test]
        fn discount_requires_kind_and_valid_value() {
            let data = empty_data();
            assert!(!WizardStep::Discount.can_proceed(&data));

            let percentage = data
                .clone()
                .with_discount_kind(Some(DiscountKind::Percentage));
            assert!(!WizardStep::Discount.can_proceed(&percentage));
            assert!(
                WizardStep::Discount.can_proceed(&percentage.clone().with_percentage_input("20"))
            );
            assert!(
                !WizardStep::Discount.can_proceed(&percentage.clone().with_percentage_input("120"))
            );
            assert!(!WizardStep::Discount.can_proceed(&percentage.with_percentage_input("abc")));

            let fixed = data.with_discount_kind(Some(DiscountKind::FixedAmount));
            assert!(WizardStep::Discount.can_proceed(&fixed.clone().with_fixed_amount_input("300")));
            assert!(!WizardStep::Discount.can_proceed(&fixed.with_fixed_amount_input("0")));
        }

        #[test]
        fn discount_ignores_the_other_kinds_input() {
            // A garbage fixed-amount field must not block a valid percentage.
            let data = empty_data()
                .with_discount_kind(Some(DiscountKind::Percentage))
                .with_percentage_input("15")
                .with_fixed_amount_input("garbage");
            assert!(WizardStep::Discount.can_proceed(&data));
        }

        #[test]
        fn minimum_order_requires_positive_number() {
            assert!(!WizardStep::MinimumOrder.can_proceed(&empty_data()));
            assert!(!WizardStep::MinimumOrder
                .can_proceed(&empty_data().with_minimum_order_input("0")));
            assert!(!WizardStep::MinimumOrder
                .can_proceed(&empty_data().with_minimum_order_input("-5")));
            assert!(!WizardStep::MinimumOrder
                .can_proceed(&empty_data().with_minimum_order_input("abc")));
            assert!(WizardStep::MinimumOrder
                .can_proceed(&empty_data().with_minimum_order_input(" 5000 ")));
        }

        #[test]
        fn validity_requires_end_after_start() {
            assert!(!WizardStep::Validity.can_proceed(&empty_data()));
            assert!(!WizardStep::Validity.can_proceed(&empty_data().with_ends_on(Some(day(1)))));
            assert!(WizardStep::Validity.can_proceed(&empty_data().with_ends_on(Some(day(30)))));
        }

        #[test]
        fn usage_is_always_satisfiable() {
            assert!(WizardStep::Usage.can_proceed(&empty_data()));
            assert!(WizardStep::Usage.can_proceed(&empty_data().with_first_use_only(true)));
        }

        #[test]
        fn description_accepts_empty_and_caps_length() {
            assert!(WizardStep::Description.can_proceed(&empty_data()));
            assert!(WizardStep::Description
                .can_proceed(&empty_data().with_description("a".repeat(2000))));
            assert!(!WizardStep::Description
                .can_proceed(&empty_data().with_description("a".repeat(2001))));
        }
    }
}
