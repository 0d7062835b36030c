use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;
use voyage_core::{
    BookingView, CardInputState, ConfirmParams, ConfirmedIntent, GatewayError, Notice,
    PaymentGateway, PaymentIntentRequest, PaymentIntentStatus, Route, Router, TravelerForm,
};

use crate::outcome::{
    Outcome, BOOKED, CONNECTION_FAILED, MISSING_INFO, PAYMENT_NOT_COMPLETED, SESSION_NOT_CREATED,
};

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Fixed price charged for every booking
    pub intent: PaymentIntentRequest,
    pub confirmation_route: Route,
    /// Upper bound on intent creation plus confirmation
    pub attempt_timeout: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            intent: PaymentIntentRequest::default(),
            confirmation_route: Route::TripHome,
            attempt_timeout: Duration::from_secs(60),
        }
    }
}

/// Why an attempt stopped after the busy state was entered.
#[derive(Debug)]
enum AttemptFailure {
    NoSession,
    Declined(String),
    NotCompleted(PaymentIntentStatus),
    Network(GatewayError),
}

impl From<GatewayError> for AttemptFailure {
    fn from(err: GatewayError) -> Self {
        AttemptFailure::Network(err)
    }
}

/// Holds the view busy for as long as it lives.
struct BusyGuard<'a> {
    view: &'a dyn BookingView,
}

impl<'a> BusyGuard<'a> {
    fn enter(view: &'a dyn BookingView) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

/// Runs one booking submission: local checks, intent creation, confirmation, then reporting.
///
/// Holds no state between attempts. Client secrets live only for the duration of the attempt
/// that created them.
pub struct SubmissionWorkflow {
    gateway: Arc<dyn PaymentGateway>,
    router: Arc<dyn Router>,
    config: WorkflowConfig,
}

impl SubmissionWorkflow {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        router: Arc<dyn Router>,
        config: WorkflowConfig,
    ) -> Self {
        Self {
            gateway,
            router,
            config,
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Check the form and card without touching the network.
    pub fn check_preconditions(form: &TravelerForm, card: &CardInputState) -> Result<(), String> {
        if !card.is_complete {
            return Err("card details are incomplete".to_string());
        }
        if form.name.is_empty() {
            return Err("traveler name is required".to_string());
        }
        if form.email.is_empty() {
            return Err("traveler email is required".to_string());
        }
        Ok(())
    }

    /// Submit the booking. Reports exactly one notice to `view` and, on success, navigates once.
    ///
    /// The caller must not call this again while `view` is busy.
    pub async fn submit(
        &self,
        form: &TravelerForm,
        card: &CardInputState,
        view: &dyn BookingView,
    ) -> Outcome {
        let attempt_id = Uuid::new_v4();
        let span = info_span!("booking_submit", %attempt_id);

        async move {
            if let Err(reason) = Self::check_preconditions(form, card) {
                info!("Booking rejected before payment: {}", reason);
                view.show_notice(Notice::new("Missing Info", MISSING_INFO));
                return Outcome::ValidationFailed(reason);
            }

            let _busy = BusyGuard::enter(view);

            let attempt = self.run_attempt(form);
            let result = match tokio::time::timeout(self.config.attempt_timeout, attempt).await {
                Ok(result) => result,
                Err(_) => Err(AttemptFailure::Network(GatewayError::Timeout)),
            };

            self.report(result, view)
        }
        .instrument(span)
        .await
    }

    async fn run_attempt(&self, form: &TravelerForm) -> Result<ConfirmedIntent, AttemptFailure> {
        // 1. Create the intent on the payment server
        let created = self.gateway.create_intent(&self.config.intent).await?;
        let client_secret = created.usable_secret().ok_or(AttemptFailure::NoSession)?;

        // 2. Confirm with the card in the input widget
        let params = ConfirmParams::card(form.billing_details());
        let confirmed = self.gateway.confirm(client_secret, &params).await?;

        if let Some(decline) = confirmed.error {
            return Err(AttemptFailure::Declined(decline.message));
        }
        match confirmed.payment_intent {
            Some(intent) if intent.status.is_completed() => Ok(intent),
            Some(intent) => Err(AttemptFailure::NotCompleted(intent.status)),
            None => Err(AttemptFailure::Network(GatewayError::Decode(
                "confirmation returned neither a payment intent nor an error".to_string(),
            ))),
        }
    }

    fn report(
        &self,
        result: Result<ConfirmedIntent, AttemptFailure>,
        view: &dyn BookingView,
    ) -> Outcome {
        match result {
            Ok(intent) => {
                info!(intent_id = ?intent.id, status = ?intent.status, "Trip booked");
                view.show_notice(Notice::new("Success!", BOOKED));
                self.router.navigate_to(self.config.confirmation_route);
                Outcome::Success
            }
            Err(AttemptFailure::NoSession) => {
                warn!("Payment server returned no client secret");
                view.show_notice(Notice::new("Server Error", SESSION_NOT_CREATED));
                Outcome::GatewayRejected(SESSION_NOT_CREATED.to_string())
            }
            Err(AttemptFailure::Declined(message)) => {
                warn!("Payment declined: {}", message);
                view.show_notice(Notice::new("Payment Failed", message.clone()));
                Outcome::GatewayRejected(message)
            }
            Err(AttemptFailure::NotCompleted(status)) => {
                warn!(?status, "Payment intent left incomplete");
                view.show_notice(Notice::new("Payment Failed", PAYMENT_NOT_COMPLETED));
                Outcome::GatewayRejected(PAYMENT_NOT_COMPLETED.to_string())
            }
            Err(AttemptFailure::Network(err)) => {
                error!("Booking attempt failed: {}", err);
                view.show_notice(Notice::new("Error", CONNECTION_FAILED));
                Outcome::NetworkError
            }
        }
    }
}
