//! Submission service - orchestrates the promo-code submission wizard
//!
//! Owns the wizard flow state, mirrors the authentication signal, and
//! drives the submission lifecycle (`Idle -> Submitting -> Success |
//! Error`) against the persistence port. All state transitions are
//! serialized through `&mut self`; [`SubmissionService::submit`] holds the
//! borrow across its await, so no other operation can interleave with an
//! in-flight submission - there are no locks and no internal parallelism.
//!
//! Host integration mirrors the session service pattern: one-shot
//! [`AppSignal`]s flow out over an unbounded channel handed over at
//! construction, and auth updates flow in through
//! [`SubmissionAction::AuthChanged`], typically fed from
//! [`SubmissionService::forward_auth_changes`].

use std::sync::Arc;

use futures_channel::mpsc;

use promovote_domain::{
    CreationFailure, Discount, DiscountError, NewPromoCode, PromoCode, PromoCodeId, UserId,
};
use promovote_ports::outbound::{
    AuthState, AuthenticationPort, PersistenceError, PersistencePort,
};
use promovote_wizard::{DiscountKind, SubmissionWizardData, WizardFlowState, WizardStep};

use crate::application::error::SubmissionError;

/// Lifecycle of one submission attempt.
///
/// `Success` and `Error` are terminal for the attempt. `Error` is not
/// sticky: a fresh `submit()` re-validates and re-attempts from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success(PromoCodeId),
    Error(SubmissionError),
}

/// One-shot notifications emitted to the host shell, never polled state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppSignal {
    /// A promo code was durably stored
    Submitted(PromoCodeId),
    /// The host should leave the wizard screen
    NavigateBack,
}

/// Synchronous transitions accepted by [`SubmissionService::dispatch`].
#[derive(Debug, Clone)]
pub enum SubmissionAction {
    /// A field edit replaced the working data (copy-on-write)
    FieldEdited(SubmissionWizardData),
    NextRequested,
    PreviousRequested,
    /// Progress-indicator tap: unconditional jump to a step
    JumpRequested(WizardStep),
    /// The auth provider reported a new state
    AuthChanged(AuthState),
}

/// Top-level controller for one wizard session.
pub struct SubmissionService {
    flow: WizardFlowState,
    auth: AuthState,
    submission: SubmissionState,
    persistence: Arc<dyn PersistencePort>,
    signals: mpsc::UnboundedSender<AppSignal>,
}

impl SubmissionService {
    /// Create a session on the first step with fresh data.
    ///
    /// Returns the service plus the receiver for its one-shot signals.
    pub fn new(
        persistence: Arc<dyn PersistencePort>,
    ) -> (Self, mpsc::UnboundedReceiver<AppSignal>) {
        Self::with_data(persistence, SubmissionWizardData::new())
    }

    /// Create a session with explicit initial data (injectable for tests).
    pub fn with_data(
        persistence: Arc<dyn PersistencePort>,
        data: SubmissionWizardData,
    ) -> (Self, mpsc::UnboundedReceiver<AppSignal>) {
        let (signals, receiver) = mpsc::unbounded();
        let service = Self {
            flow: WizardFlowState::new(data),
            auth: AuthState::Loading,
            submission: SubmissionState::Idle,
            persistence,
            signals,
        };
        (service, receiver)
    }

    /// Bridge an auth port's callback signal into a channel the host loop
    /// can drain and feed back via [`SubmissionAction::AuthChanged`].
    ///
    /// The current state is delivered first, then every subsequent change.
    pub fn forward_auth_changes(
        port: &dyn AuthenticationPort,
    ) -> mpsc::UnboundedReceiver<AuthState> {
        let (tx, rx) = mpsc::unbounded();
        let _ = tx.unbounded_send(port.current());
        port.on_auth_change(Box::new(move |state| {
            let _ = tx.unbounded_send(state);
        }));
        rx
    }

    pub fn current_step(&self) -> WizardStep {
        self.flow.current_step()
    }

    pub fn data(&self) -> &SubmissionWizardData {
        self.flow.data()
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting)
    }

    /// Forward navigation permission; forced false while submitting.
    pub fn can_go_next(&self) -> bool {
        !self.is_submitting() && self.flow.can_go_next()
    }

    /// Backward navigation permission; forced false while submitting.
    pub fn can_go_previous(&self) -> bool {
        !self.is_submitting() && self.flow.can_go_previous()
    }

    /// Submit permission: wizard-level readiness plus an authenticated
    /// user. Only the `Idle` and `Error` states accept a submission, so
    /// this is false while in flight and stays false after success (the
    /// session is spent; hosts disable the button off this query).
    pub fn can_submit(&self) -> bool {
        matches!(
            self.submission,
            SubmissionState::Idle | SubmissionState::Error(_)
        ) && self.auth.is_authenticated()
            && self.flow.can_submit()
    }

    /// Apply a synchronous transition.
    ///
    /// Wizard mutations are ignored while a submission is in flight; auth
    /// updates are always applied. De-authentication blocks submission but
    /// never discards wizard data - the in-progress entry survives a
    /// re-login.
    pub fn dispatch(&mut self, action: SubmissionAction) {
        match action {
            SubmissionAction::AuthChanged(state) => {
                if self.auth.is_authenticated() && !state.is_authenticated() {
                    tracing::warn!("user signed out mid-wizard; submission blocked until re-login");
                }
                self.auth = state;
            }
            _ if self.is_submitting() => {}
            SubmissionAction::FieldEdited(data) => {
                self.flow = self.flow.update_data(data);
            }
            SubmissionAction::NextRequested => {
                if self.can_go_next() {
                    self.flow = self.flow.move_to_next();
                }
            }
            SubmissionAction::PreviousRequested => {
                if self.can_go_previous() {
                    self.flow = self.flow.move_to_previous();
                }
            }
            SubmissionAction::JumpRequested(step) => {
                self.flow = self.flow.move_to_step(step);
            }
        }
    }

    /// Drive one submission attempt end to end.
    ///
    /// A no-op unless the wizard is submittable, the user is
    /// authenticated, and no attempt is in flight (duplicate UI-driven
    /// submit events cannot start two submissions). The entity constructor
    /// is re-run here even though the UI should never enable submit on
    /// invalid data, so a flow bug cannot reach the persistence port with
    /// an invalid entity.
    pub async fn submit(&mut self) {
        let Some(promo) = self.begin_submit() else {
            return;
        };
        let result = self.persistence.submit(&promo).await;
        self.finish_submit(result);
    }

    /// Guard and validate; on success the state is `Submitting` and the
    /// entity to persist is returned.
    fn begin_submit(&mut self) -> Option<PromoCode> {
        match self.submission {
            SubmissionState::Idle | SubmissionState::Error(_) => {}
            SubmissionState::Submitting | SubmissionState::Success(_) => return None,
        }
        if !self.can_submit() {
            tracing::debug!("submit requested while not submittable; ignoring");
            return None;
        }
        let author_id = self.auth.user().map(|user| user.id)?;

        match build_entity(self.flow.data(), author_id) {
            Ok(promo) => {
                tracing::info!(id = %promo.id, "submitting promo code");
                self.submission = SubmissionState::Submitting;
                Some(promo)
            }
            Err(failure) => {
                tracing::warn!(%failure, "wizard data failed entity validation at submit");
                self.submission = SubmissionState::Error(SubmissionError::Validation(failure));
                None
            }
        }
    }

    /// Apply the terminal persistence result.
    fn finish_submit(&mut self, result: Result<PromoCodeId, PersistenceError>) {
        match result {
            Ok(id) => {
                tracing::info!(%id, "promo code submitted");
                self.submission = SubmissionState::Success(id.clone());
                let _ = self.signals.unbounded_send(AppSignal::Submitted(id));
                let _ = self.signals.unbounded_send(AppSignal::NavigateBack);
            }
            Err(error) => {
                tracing::warn!(%error, "promo code submission failed");
                self.submission = SubmissionState::Error(SubmissionError::Persistence(error));
            }
        }
    }
}

/// Map completed wizard data onto the domain constructor.
///
/// Unparsable numeric input folds onto values the constructor rejects, so
/// the constructor's failure ordering stays authoritative.
fn build_entity(
    data: &SubmissionWizardData,
    author_id: UserId,
) -> Result<PromoCode, CreationFailure> {
    let discount = match data.discount_kind {
        Some(DiscountKind::Percentage) => Discount::parse_percentage(&data.percentage_input)?,
        Some(DiscountKind::FixedAmount) => Discount::parse_fixed_amount(&data.fixed_amount_input)?,
        None => return Err(CreationFailure::Discount(DiscountError::KindNotSelected)),
    };
    let minimum_order_amount = data
        .minimum_order_input
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0);
    // A missing end date collapses onto the start date, which the
    // constructor rejects as an invalid range.
    let valid_until = data.ends_on.unwrap_or(data.starts_on);

    PromoCode::create(NewPromoCode {
        code: data.code.clone(),
        service_name: data.service_name.clone(),
        discount,
        minimum_order_amount,
        valid_from: data.starts_on,
        valid_until,
        author_id,
        first_use_only: data.first_use_only,
        one_time_use: data.one_time_use,
        description: promovote_domain::common::none_if_blank(&data.description),
    })
}
