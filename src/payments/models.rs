//! Payment data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status of a freshly created payment
pub const STATUS_PENDING: &str = "pending";
/// Status after the gateway confirms the payment
pub const STATUS_SUCCEEDED: &str = "succeeded";

/// The only webhook event type that mutates state
pub const EVENT_PAYMENT_SUCCEEDED: &str = "payment.succeeded";

/// Fixed plan label applied on activation
pub const MONTHLY_PLAN: &str = "Месячная";
/// Subscription window length in days
pub const SUBSCRIPTION_DAYS: i64 = 30;

/// Payment database model
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct Payment {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    /// Identifier assigned by the gateway, distinct from our record id.
    /// Test-mode payments reuse the record id here so the webhook path
    /// stays exercisable without gateway credentials.
    #[serde(rename = "paymentId")]
    pub gateway_payment_id: Option<String>,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Payment creation request body
#[derive(Deserialize, Debug)]
pub struct CreatePaymentRequest {
    pub amount: f64,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub plan: String,
    #[serde(rename = "returnUrl")]
    pub return_url: Option<String>,
}

/// Webhook event envelope sent by the gateway
///
/// Only `event` and `object.id` matter; everything else is ignored.
#[derive(Deserialize, Debug)]
pub struct WebhookEnvelope {
    pub event: String,
    pub object: WebhookPaymentObject,
}

#[derive(Deserialize, Debug)]
pub struct WebhookPaymentObject {
    pub id: String,
}
