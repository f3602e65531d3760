//! Wizard flow state - derived navigation and submit permissions
//!
//! Composes the current step with the working data and answers "where can
//! the user go" and "is submission allowed" without re-deriving step logic
//! at each call site. All transitions return a new state; navigation at a
//! boundary is a silent no-op, never an error.

use serde::{Deserialize, Serialize};

use crate::data::SubmissionWizardData;
use crate::step::{WizardStep, STEPS};

/// Current step plus working data for one wizard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardFlowState {
    current: WizardStep,
    data: SubmissionWizardData,
}

impl WizardFlowState {
    /// Start a session on the first step with the given data.
    pub fn new(data: SubmissionWizardData) -> Self {
        Self {
            current: WizardStep::first(),
            data,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn data(&self) -> &SubmissionWizardData {
        &self.data
    }

    /// True when the user may move forward: the current step is satisfied
    /// (or optional) and a successor exists.
    pub fn can_go_next(&self) -> bool {
        (self.current.can_proceed(&self.data) || !self.current.is_required())
            && self.current.next().is_some()
    }

    /// True unless the session sits on the first step.
    pub fn can_go_previous(&self) -> bool {
        self.current.previous().is_some()
    }

    /// True when the entity may be submitted from the current position.
    ///
    /// Three conditions, all required:
    /// - every required step at or before the current position satisfies its
    ///   own predicate;
    /// - the current step itself satisfies its predicate;
    /// - the current position is at or past the last required step.
    ///
    /// The position rule is deliberate: submission is allowed from an
    /// optional trailing step without visiting it, but never from a position
    /// earlier than the last required step. A backward jump past the last
    /// required step disables submission until the user navigates forward
    /// again, even if the underlying data is already complete.
    pub fn can_submit(&self) -> bool {
        let here = self.current.ordinal();
        if here < WizardStep::last_required().ordinal() {
            return false;
        }
        if !self.current.can_proceed(&self.data) {
            return false;
        }
        STEPS
            .iter()
            .filter(|d| d.required && d.ordinal <= here)
            .all(|d| (d.can_proceed)(&self.data))
    }

    /// Same step, new data (copy, not mutate).
    pub fn update_data(&self, data: SubmissionWizardData) -> Self {
        Self {
            current: self.current,
            data,
        }
    }

    /// Follow the `next` edge; unchanged at the last step.
    pub fn move_to_next(&self) -> Self {
        match self.current.next() {
            Some(next) => Self {
                current: next,
                data: self.data.clone(),
            },
            None => self.clone(),
        }
    }

    /// Follow the `previous` edge; unchanged at the first step.
    pub fn move_to_previous(&self) -> Self {
        match self.current.previous() {
            Some(previous) => Self {
                current: previous,
                data: self.data.clone(),
            },
            None => self.clone(),
        }
    }

    /// Unconditional jump (progress-indicator tap). Does not re-validate;
    /// permissions are re-derived lazily on the next query.
    pub fn move_to_step(&self, step: WizardStep) -> Self {
        Self {
            current: step,
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DiscountKind;
    use chrono::NaiveDate;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, n).unwrap()
    }

    /// Data satisfying every required step.
    fn complete_data() -> SubmissionWizardData {
        SubmissionWizardData::starting_on(day(1))
            .with_service_name("Netflix")
            .with_code("SAVE20")
            .with_discount_kind(Some(DiscountKind::Percentage))
            .with_percentage_input("20")
            .with_minimum_order_input("5000")
            .with_ends_on(Some(day(30)))
    }

    fn at(step: WizardStep, data: SubmissionWizardData) -> WizardFlowState {
        WizardFlowState::new(data).move_to_step(step)
    }

    mod navigation {
        use super::*;

        #[test]
        fn starts_on_first_step() {
            let state = WizardFlowState::new(complete_data());
            assert_eq!(state.current_step(), WizardStep::Service);
            assert!(!state.can_go_previous());
        }

        #[test]
        fn next_blocked_until_required_step_satisfied() {
            let state = WizardFlowState::new(SubmissionWizardData::starting_on(day(1)));
            assert!(!state.can_go_next());

            let state = state.update_data(state.data().clone().with_service_name("Netflix"));
            assert!(state.can_go_next());
        }

        #[test]
        fn optional_step_allows_next_without_data() {
            let state = at(WizardStep::Usage, SubmissionWizardData::starting_on(day(1)));
            assert!(state.can_go_next());
        }

        #[test]
        fn next_then_previous_round_trips_everywhere() {
            for step in WizardStep::all() {
                if step.next().is_none() {
                    continue;
                }
                let state = at(step, complete_data());
                let round_trip = state.move_to_next().move_to_previous();
                assert_eq!(round_trip.current_step(), step);
            }
        }

        #[test]
        fn move_past_last_step_is_a_noop() {
            let state = at(WizardStep::Description, complete_data());
            let moved = state.move_to_next();
            assert_eq!(moved, state);
        }

        #[test]
        fn move_before_first_step_is_a_noop() {
            let state = WizardFlowState::new(complete_data());
            let moved = state.move_to_previous();
            assert_eq!(moved, state);
        }

        #[test]
        fn no_next_from_last_step() {
            let state = at(WizardStep::Description, complete_data());
            assert!(!state.can_go_next());
        }

        #[test]
        fn update_data_keeps_position() {
            let state = at(WizardStep::Validity, complete_data());
            let updated = state.update_data(state.data().clone().with_code("OTHER"));
            assert_eq!(updated.current_step(), WizardStep::Validity);
            assert_eq!(updated.data().code, "OTHER");
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn submittable_iff_at_or_past_last_required_with_valid_data() {
            // With fully valid data, position alone decides.
            for step in WizardStep::all() {
                let state = at(step, complete_data());
                let expected = step.ordinal() >= WizardStep::last_required().ordinal();
                assert_eq!(state.can_submit(), expected, "at {:?}", step);
            }
        }

        #[test]
        fn submittable_from_optional_trailing_steps_without_visiting_them() {
            assert!(at(WizardStep::Usage, complete_data()).can_submit());
            assert!(at(WizardStep::Description, complete_data()).can_submit());
        }

        #[test]
        fn one_broken_required_field_blocks_submit_everywhere() {
            let data = complete_data().with_minimum_order_input("0");
            for step in WizardStep::all() {
                assert!(!at(step, data.clone()).can_submit(), "at {:?}", step);
            }
        }

        #[test]
        fn empty_code_blocks_submit() {
            let data = complete_data().with_code("");
            assert!(!WizardStep::Code.can_proceed(&data));
            assert!(!at(WizardStep::Validity, data).can_submit());
        }

        #[test]
        fn overlong_code_blocks_submit() {
            // Codes the entity constructor would reject as too long must
            // not be submittable either.
            let data = complete_data().with_code("A".repeat(65));
            assert!(!at(WizardStep::Validity, data).can_submit());
        }

        #[test]
        fn jump_before_last_required_blocks_submit() {
            // Data is complete, but the position rule still applies after a
            // backward jump.
            let state = at(WizardStep::Validity, complete_data());
            assert!(state.can_submit());

            let jumped_back = state.move_to_step(WizardStep::Code);
            assert!(!jumped_back.can_submit());

            let returned = jumped_back.move_to_step(WizardStep::Validity);
            assert!(returned.can_submit());
        }

        #[test]
        fn invalid_current_optional_step_blocks_submit() {
            let data = complete_data().with_description("a".repeat(2001));
            let state = at(WizardStep::Description, data);
            assert!(!state.can_submit());
        }

        #[test]
        fn end_date_equal_to_start_blocks_submit() {
            let data = complete_data().with_ends_on(Some(day(1)));
            assert!(!at(WizardStep::Validity, data).can_submit());
        }
    }

    mod persistence {
        use super::*;

        /// Session state survives a serialize/deserialize cycle, so a host
        /// can stash an in-progress wizard and restore it later.
        #[test]
        fn session_round_trips_through_json() {
            let state = at(WizardStep::Validity, complete_data());
            let json = serde_json::to_string(&state).unwrap();
            let restored: WizardFlowState = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, state);
            assert!(restored.can_submit());
        }
    }
}
