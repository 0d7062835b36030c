pub mod app_config;
pub mod gateway;
pub mod intent_client;

pub use app_config::{Config, ConfigError};
pub use gateway::{CardConfirmer, HostedGateway};
pub use intent_client::HttpIntentClient;
