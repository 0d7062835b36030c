use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use voyage_booking::{BookingSession, NoticeSink, SubmissionWorkflow, WorkflowConfig};
use voyage_core::{Route, Router};
use voyage_infra::{CardConfirmer, Config, HostedGateway, HttpIntentClient};

pub mod error;
pub mod navigation;
pub mod telemetry;

pub use error::AppError;
pub use navigation::NavigationStack;

/// The wired-up application: navigation plus the booking workflow behind the payment
/// gateway.
///
/// The host supplies the card SDK binding, already initialised with
/// [`App::publishable_key`].
pub struct App {
    config: Config,
    navigation: Arc<NavigationStack>,
    workflow: SubmissionWorkflow,
}

impl App {
    pub fn bootstrap(config: Config, confirmer: Arc<dyn CardConfirmer>) -> Result<Self, AppError> {
        config.validate()?;

        let intents = HttpIntentClient::new(
            config.server.intent_endpoint(),
            config.server.request_timeout(),
        )?;
        let gateway = Arc::new(HostedGateway::new(intents, confirmer));
        let navigation = Arc::new(NavigationStack::new());

        let workflow = SubmissionWorkflow::new(
            gateway,
            navigation.clone(),
            WorkflowConfig {
                intent: config.booking.intent_request(),
                confirmation_route: config.booking.confirmation_route()?,
                attempt_timeout: config.booking.attempt_timeout(),
            },
        );

        info!(
            "Voyage ready, payment server at {}",
            config.server.intent_endpoint()
        );

        Ok(Self {
            config,
            navigation,
            workflow,
        })
    }

    /// Load configuration from `config/` and the environment, then bootstrap.
    pub fn from_env(confirmer: Arc<dyn CardConfirmer>) -> anyhow::Result<Self> {
        let config = Config::load().context("Failed to load config")?;
        Self::bootstrap(config, confirmer).context("Failed to start app")
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn publishable_key(&self) -> &str {
        self.config.gateway.publishable_key.expose()
    }

    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    pub fn workflow(&self) -> &SubmissionWorkflow {
        &self.workflow
    }

    /// Enter the booking screen with an empty form.
    pub fn open_booking(&self, sink: Arc<dyn NoticeSink>) -> BookingSession {
        self.navigation.navigate_to(Route::Booking);
        BookingSession::new(sink)
    }
}
