use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use voyage_core::{PaymentIntentRequest, Route};
use voyage_shared::Masked;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub booking: BookingRules,
}

/// Where the payment-intent server lives.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Scheme and address, e.g. `http://192.168.1.20`
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub publishable_key: Masked<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingRules {
    #[serde(default = "default_amount")]
    pub amount_minor_units: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_confirmation_route")]
    pub confirmation_route: String,
    #[serde(default = "default_attempt_timeout_secs")]
    pub attempt_timeout_secs: u64,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            amount_minor_units: default_amount(),
            currency: default_currency(),
            confirmation_route: default_confirmation_route(),
            attempt_timeout_secs: default_attempt_timeout_secs(),
        }
    }
}

fn default_port() -> u16 { 3000 }
fn default_timeout_secs() -> u64 { 30 }
fn default_amount() -> i64 { 65900 }
fn default_currency() -> String { "usd".to_string() }
fn default_confirmation_route() -> String { Route::TripHome.to_string() }
fn default_attempt_timeout_secs() -> u64 { 60 }

impl ServerConfig {
    pub fn intent_endpoint(&self) -> String {
        format!("{}:{}/create-payment-intent", self.host.trim_end_matches('/'), self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl BookingRules {
    pub fn intent_request(&self) -> PaymentIntentRequest {
        PaymentIntentRequest::new(self.amount_minor_units, &self.currency)
    }

    pub fn confirmation_route(&self) -> Result<Route, ConfigError> {
        self.confirmation_route.parse().map_err(ConfigError::Invalid)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_dir("config")
    }

    pub fn load_from_dir(dir: &str) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `VOYAGE__SERVER__HOST=http://10.0.2.2` sets `server.host`
            .add_source(config::Environment::with_prefix("VOYAGE").separator("__"));

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        if self.server.timeout_secs == 0 {
            return Err(ConfigError::Invalid("server.timeout_secs must be positive".into()));
        }
        if self.gateway.publishable_key.expose().trim().is_empty() {
            return Err(ConfigError::Invalid("gateway.publishable_key must not be empty".into()));
        }
        if self.booking.attempt_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "booking.attempt_timeout_secs must be positive".into(),
            ));
        }
        self.booking
            .intent_request()
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("booking price: {}", e)))?;
        self.booking.confirmation_route()?;
        Ok(())
    }
}
