use std::sync::Arc;

use async_trait::async_trait;
use voyage_core::{
    ConfirmParams, ConfirmResponse, GatewayError, PaymentGateway, PaymentIntentRequest,
    PaymentIntentResponse,
};

use crate::intent_client::HttpIntentClient;

/// Binding to the vendor card SDK, supplied by the host application.
///
/// The SDK reads card data from its own input widget; only the client secret and billing
/// details cross this boundary.
#[async_trait]
pub trait CardConfirmer: Send + Sync {
    async fn confirm_payment(
        &self,
        client_secret: &str,
        params: &ConfirmParams,
    ) -> Result<ConfirmResponse, GatewayError>;
}

/// Payment gateway backed by our own intent server plus the vendor SDK for confirmation.
pub struct HostedGateway {
    intents: HttpIntentClient,
    confirmer: Arc<dyn CardConfirmer>,
}

impl HostedGateway {
    pub fn new(intents: HttpIntentClient, confirmer: Arc<dyn CardConfirmer>) -> Self {
        Self { intents, confirmer }
    }
}

#[async_trait]
impl PaymentGateway for HostedGateway {
    async fn create_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse, GatewayError> {
        self.intents.create_intent(request).await
    }

    async fn confirm(
        &self,
        client_secret: &str,
        params: &ConfirmParams,
    ) -> Result<ConfirmResponse, GatewayError> {
        self.confirmer.confirm_payment(client_secret, params).await
    }
}
