use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};
use voyage_core::{GatewayError, PaymentIntentRequest, PaymentIntentResponse};

/// Creates payment intents on the booking server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpIntentClient {
    endpoint: String,
    client: Client,
}

impl HttpIntentClient {
    /// `endpoint` is the full `/create-payment-intent` URL; `timeout` bounds each request.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_http_error(error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Timeout
        } else if error.is_connect() {
            GatewayError::Transport(format!("Connection error: {}", error))
        } else {
            GatewayError::Transport(format!("HTTP error: {}", error))
        }
    }

    /// POST the fixed amount and currency, returning whatever the server sent back.
    ///
    /// The body is decoded regardless of status: a server that fails without a `clientSecret`
    /// yields an empty response, which callers treat as "session not created".
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn create_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, GatewayError> {
        debug!(amount = request.amount, currency = %request.currency, "Creating payment intent");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(Self::map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Payment server answered {}", status);
        }

        let body = response.bytes().await.map_err(Self::map_http_error)?;
        serde_json::from_slice::<PaymentIntentResponse>(&body).map_err(|e| {
            GatewayError::Decode(format!("Failed to parse response ({}): {}", status, e))
        })
    }
}
