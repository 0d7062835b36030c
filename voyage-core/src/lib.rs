pub mod form;
pub mod navigation;
pub mod payment;
pub mod view;

pub use form::{CardInputState, TravelerForm};
pub use navigation::{Route, Router};
pub use payment::{
    BillingDetails, ConfirmParams, ConfirmResponse, ConfirmedIntent, GatewayDecline, GatewayError,
    PaymentGateway, PaymentIntentRequest, PaymentIntentResponse, PaymentIntentStatus,
};
pub use view::{BookingView, Notice};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
