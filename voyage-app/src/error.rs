use voyage_core::GatewayError;
use voyage_infra::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to set up payment gateway: {0}")]
    Gateway(#[from] GatewayError),
}
