use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use voyage_shared::Masked;

/// Body of the create-payment-intent call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    /// Minor units, e.g. cents
    pub amount: i64,
    /// ISO-4217, lower-case on the wire
    pub currency: String,
}

impl PaymentIntentRequest {
    pub fn new(amount: i64, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_ascii_lowercase(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.amount <= 0 {
            return Err(format!("amount must be positive, got {}", self.amount));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("invalid currency code {:?}", self.currency));
        }
        Ok(())
    }
}

impl Default for PaymentIntentRequest {
    /// The single trip product: $659.00
    fn default() -> Self {
        Self::new(65900, "usd")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    #[serde(default)]
    pub client_secret: Option<Masked<String>>,
}

impl PaymentIntentResponse {
    /// The client secret, if the server returned a non-empty one.
    pub fn usable_secret(&self) -> Option<&str> {
        self.client_secret
            .as_ref()
            .map(|s| s.expose().as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethodType {
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmParams {
    pub payment_method_type: PaymentMethodType,
    pub billing_details: BillingDetails,
}

impl ConfirmParams {
    pub fn card(billing_details: BillingDetails) -> Self {
        Self {
            payment_method_type: PaymentMethodType::Card,
            billing_details,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    #[serde(alias = "RequiresPaymentMethod")]
    RequiresPaymentMethod,
    #[serde(alias = "RequiresConfirmation")]
    RequiresConfirmation,
    #[serde(alias = "RequiresAction")]
    RequiresAction,
    #[serde(alias = "Processing")]
    Processing,
    #[serde(alias = "RequiresCapture")]
    RequiresCapture,
    #[serde(alias = "Canceled")]
    Canceled,
    #[serde(alias = "Succeeded")]
    Succeeded,
}

impl PaymentIntentStatus {
    /// The charge went through or is settling on the provider side.
    pub fn is_completed(self) -> bool {
        matches!(
            self,
            PaymentIntentStatus::Succeeded
                | PaymentIntentStatus::Processing
                | PaymentIntentStatus::RequiresCapture
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedIntent {
    #[serde(default)]
    pub id: Option<String>,
    pub status: PaymentIntentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayDecline {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Result of a confirmation call: either a payment intent or an error object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    #[serde(default)]
    pub payment_intent: Option<ConfirmedIntent>,
    #[serde(default)]
    pub error: Option<GatewayDecline>,
}

impl ConfirmResponse {
    pub fn succeeded(id: &str) -> Self {
        Self {
            payment_intent: Some(ConfirmedIntent {
                id: Some(id.to_string()),
                status: PaymentIntentStatus::Succeeded,
            }),
            error: None,
        }
    }

    pub fn declined(message: &str) -> Self {
        Self {
            payment_intent: None,
            error: Some(GatewayDecline {
                message: message.to_string(),
                code: None,
            }),
        }
    }
}

/// Failures talking to the gateway, as opposed to the gateway declining.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    #[error("card SDK failure: {0}")]
    Sdk(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Ask the payment server for a new intent for a fixed amount
    async fn create_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, GatewayError>;

    /// Confirm the intent identified by `client_secret` with the card in the input widget
    async fn confirm(
        &self,
        client_secret: &str,
        params: &ConfirmParams,
    ) -> Result<ConfirmResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_request_wire_format() {
        let body = serde_json::to_value(PaymentIntentRequest::default()).unwrap();
        assert_eq!(body, json!({ "amount": 65900, "currency": "usd" }));
    }

    #[test]
    fn test_intent_request_validation() {
        assert!(PaymentIntentRequest::default().validate().is_ok());
        assert!(PaymentIntentRequest::new(0, "usd").validate().is_err());
        assert!(PaymentIntentRequest::new(100, "us").validate().is_err());
        assert!(PaymentIntentRequest::new(100, "u$d").validate().is_err());
        assert_eq!(PaymentIntentRequest::new(100, "EUR").currency, "eur");
    }

    #[test]
    fn test_usable_secret() {
        let ok: PaymentIntentResponse =
            serde_json::from_value(json!({ "clientSecret": "secret_abc" })).unwrap();
        assert_eq!(ok.usable_secret(), Some("secret_abc"));

        let missing: PaymentIntentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.usable_secret(), None);

        let empty: PaymentIntentResponse =
            serde_json::from_value(json!({ "clientSecret": "" })).unwrap();
        assert_eq!(empty.usable_secret(), None);

        let null: PaymentIntentResponse =
            serde_json::from_value(json!({ "clientSecret": null, "error": "boom" })).unwrap();
        assert_eq!(null.usable_secret(), None);
    }

    #[test]
    fn test_confirm_params_wire_format() {
        let params = ConfirmParams::card(BillingDetails {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
        });
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({
                "paymentMethodType": "Card",
                "billingDetails": {
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "phone": "555-0100"
                }
            })
        );
    }

    #[test]
    fn test_confirm_response_accepts_sdk_spellings() {
        let sdk: ConfirmResponse = serde_json::from_value(json!({
            "paymentIntent": { "id": "pi_1", "status": "Succeeded" }
        }))
        .unwrap();
        assert_eq!(sdk.payment_intent.unwrap().status, PaymentIntentStatus::Succeeded);

        let api: ConfirmResponse = serde_json::from_value(json!({
            "paymentIntent": { "status": "requires_action" }
        }))
        .unwrap();
        assert!(!api.payment_intent.unwrap().status.is_completed());

        let declined: ConfirmResponse = serde_json::from_value(json!({
            "error": { "message": "Your card was declined.", "code": "Failed" }
        }))
        .unwrap();
        assert_eq!(declined.error.unwrap().message, "Your card was declined.");
    }
}
