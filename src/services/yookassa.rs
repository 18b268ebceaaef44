// src/services/yookassa.rs
//! YooKassa payment gateway client
//!
//! Creates payments against the YooKassa v3 API and returns the
//! gateway-assigned payment id plus the confirmation (redirect) URL.
//! When shop credentials are not configured the service reports itself
//! as unconfigured and the payment handler falls back to test mode.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

const YOOKASSA_API_URL: &str = "https://api.yookassa.ru/v3/payments";

#[derive(Debug, Error)]
pub enum YookassaError {
    #[error("YooKassa credentials not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Gateway error: {0}")]
    GatewayError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Shop credentials issued by YooKassa
#[derive(Debug, Clone)]
struct YookassaConfig {
    shop_id: String,
    secret_key: String,
}

pub struct YookassaService {
    client: Client,
    config: Option<YookassaConfig>,
}

#[derive(Serialize)]
struct AmountBody {
    value: String,
    currency: String,
}

#[derive(Serialize)]
struct ConfirmationBody {
    #[serde(rename = "type")]
    kind: String,
    return_url: String,
}

#[derive(Serialize)]
struct CreatePaymentBody {
    amount: AmountBody,
    confirmation: ConfirmationBody,
    capture: bool,
    description: String,
    metadata: serde_json::Value,
}

#[derive(Deserialize)]
struct ConfirmationResponse {
    confirmation_url: String,
}

#[derive(Deserialize)]
struct CreatePaymentResponse {
    id: String,
    confirmation: ConfirmationResponse,
}

/// Result of a successful payment creation at the gateway
#[derive(Debug, Clone)]
pub struct CreatedPayment {
    /// Gateway-assigned payment identifier (distinct from our record id)
    pub payment_id: String,
    /// URL the user must be redirected to for confirmation
    pub confirmation_url: String,
}

impl YookassaService {
    pub fn new(client: Client, shop_id: Option<String>, secret_key: Option<String>) -> Self {
        let config = match (shop_id, secret_key) {
            (Some(shop_id), Some(secret_key)) if !shop_id.is_empty() && !secret_key.is_empty() => {
                Some(YookassaConfig { shop_id, secret_key })
            }
            _ => None,
        };

        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Create a payment at the gateway and return its id and redirect URL
    pub async fn create_payment(
        &self,
        amount: f64,
        description: &str,
        return_url: &str,
        user_id: &str,
    ) -> Result<CreatedPayment, YookassaError> {
        let config = self.config.as_ref().ok_or(YookassaError::NotConfigured)?;

        let body = CreatePaymentBody {
            amount: AmountBody {
                value: format!("{:.2}", amount),
                currency: "RUB".to_string(),
            },
            confirmation: ConfirmationBody {
                kind: "redirect".to_string(),
                return_url: return_url.to_string(),
            },
            capture: true,
            description: description.to_string(),
            metadata: serde_json::json!({ "userId": user_id }),
        };

        let idempotence_key = Uuid::new_v4().to_string();

        debug!(
            amount = %format!("{:.2}", amount),
            idempotence_key = %idempotence_key,
            "Creating payment at YooKassa"
        );

        let response = self
            .client
            .post(YOOKASSA_API_URL)
            .basic_auth(&config.shop_id, Some(&config.secret_key))
            .header("Idempotence-Key", &idempotence_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| YookassaError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "YooKassa payment creation failed");
            return Err(YookassaError::GatewayError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let payment = response
            .json::<CreatePaymentResponse>()
            .await
            .map_err(|e| YookassaError::SerializationError(e.to_string()))?;

        info!(
            gateway_payment_id = %payment.id,
            "Payment created at YooKassa"
        );

        Ok(CreatedPayment {
            payment_id: payment.id,
            confirmation_url: payment.confirmation.confirmation_url,
        })
    }
}
