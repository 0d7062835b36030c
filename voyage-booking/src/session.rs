use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use voyage_core::{BookingView, CardInputState, Notice, TravelerForm};
use voyage_shared::format_minor_units;

use crate::outcome::Outcome;
use crate::workflow::SubmissionWorkflow;

pub const SUBMIT_LABEL: &str = "Confirm & Pay";

/// Where the booking screen shows its alerts.
pub trait NoticeSink: Send + Sync {
    fn alert(&self, notice: &Notice);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the submit gate for one attempt and opens it when the attempt ends, however it ends.
struct SubmitClaim<'a>(&'a AtomicBool);

impl Drop for SubmitClaim<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// State behind the booking screen: the traveler form, the last card-widget event and the
/// loading flag.
///
/// Fields can be edited at any time, including while an attempt is in flight; each attempt
/// works on a snapshot taken when it starts.
///
/// `in_flight` gates reentry and is owned by `submit` alone. `loading` is the busy flag the
/// workflow toggles through [`BookingView::set_busy`]; clearing it never reopens the gate.
pub struct BookingSession {
    form: Mutex<TravelerForm>,
    card: Mutex<CardInputState>,
    in_flight: AtomicBool,
    loading: AtomicBool,
    sink: Arc<dyn NoticeSink>,
}

impl BookingSession {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self {
            form: Mutex::new(TravelerForm::new()),
            card: Mutex::new(CardInputState::default()),
            in_flight: AtomicBool::new(false),
            loading: AtomicBool::new(false),
            sink,
        }
    }

    pub fn form(&self) -> TravelerForm {
        lock(&self.form).clone()
    }

    /// Apply a text-field change, e.g. `session.update_form(|f| f.set_name("Ada"))`.
    pub fn update_form<R>(&self, edit: impl FnOnce(&mut TravelerForm) -> R) -> R {
        let mut form = lock(&self.form);
        edit(&mut *form)
    }

    pub fn card_state(&self) -> CardInputState {
        lock(&self.card).clone()
    }

    /// Card widget change event.
    pub fn set_card_state(&self, card: CardInputState) {
        *lock(&self.card) = card;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) || self.loading.load(Ordering::SeqCst)
    }

    /// `None` while busy: the screen shows a progress indicator instead of the label.
    pub fn submit_label(&self) -> Option<&'static str> {
        if self.is_loading() {
            None
        } else {
            Some(SUBMIT_LABEL)
        }
    }

    pub fn total_label(&self, workflow: &SubmissionWorkflow) -> String {
        let intent = &workflow.config().intent;
        format_minor_units(intent.amount, &intent.currency)
    }

    /// Submit the current form. Returns `None` without doing anything if an attempt is
    /// already in flight.
    pub async fn submit(&self, workflow: &SubmissionWorkflow) -> Option<Outcome> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Ignoring submit while a booking attempt is in flight");
            return None;
        }
        let _claim = SubmitClaim(&self.in_flight);

        let form = self.form();
        let card = self.card_state();
        let outcome = workflow.submit(&form, &card, self).await;

        // A completed booking discards what was entered
        if outcome.is_success() {
            *lock(&self.form) = TravelerForm::new();
            *lock(&self.card) = CardInputState::default();
        }
        Some(outcome)
    }
}

impl BookingView for BookingSession {
    fn set_busy(&self, busy: bool) {
        self.loading.store(busy, Ordering::SeqCst);
    }

    fn show_notice(&self, notice: Notice) {
        self.sink.alert(&notice);
    }
}
