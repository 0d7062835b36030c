use serde::Serialize;

pub const MISSING_INFO: &str = "Please fill in traveler details and card info.";
pub const SESSION_NOT_CREATED: &str = "Payment session not created.";
pub const PAYMENT_NOT_COMPLETED: &str = "Payment was not completed.";
pub const CONNECTION_FAILED: &str = "Could not connect to server.";
pub const BOOKED: &str = "Your trip is booked.";

/// Terminal result of one submission attempt. None of these are retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum Outcome {
    Success,
    /// Input was incomplete; no network call was made
    ValidationFailed(String),
    /// The payment server or card processor turned the payment down
    GatewayRejected(String),
    /// Transport failure, timeout, or an unreadable response
    NetworkError,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}
