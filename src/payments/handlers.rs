//! Payment handlers

use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::models::{
    CreatePaymentRequest, Payment, WebhookEnvelope, EVENT_PAYMENT_SUCCEEDED, MONTHLY_PLAN,
    STATUS_PENDING, STATUS_SUCCEEDED, SUBSCRIPTION_DAYS,
};
use crate::common::{generate_payment_id, ApiError, AppState, Validator};
use crate::users::User;

/// POST /api/create-payment
/// Creates a pending payment and returns the redirect URL for confirmation
///
/// With YooKassa credentials configured the payment is created at the
/// gateway first and persisted with the gateway-assigned id. Without
/// credentials a local test payment is stored and the response carries
/// `"test": true`.
///
/// # Request Body
/// ```json
/// {
///   "amount": 500,
///   "userId": "U_K7NP3X2Q8M",
///   "plan": "Месячная",
///   "returnUrl": "https://academycg.online/payment-success"
/// }
/// ```
pub async fn create_payment(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = payload.validate(&payload);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let description = format!("Оплата подписки - {}", payload.plan);
    let return_url = payload
        .return_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| format!("{}/payment-success", state.frontend_url));

    let record_id = generate_payment_id();

    if state.yookassa_service.is_configured() {
        let created = state
            .yookassa_service
            .create_payment(payload.amount, &description, &return_url, &payload.user_id)
            .await
            .map_err(|e| ApiError::PaymentError(e.to_string()))?;

        insert_payment(
            &state.db,
            &record_id,
            &payload.user_id,
            payload.amount,
            &description,
            &created.payment_id,
        )
        .await
        .map_err(|e| ApiError::PaymentError(e.to_string()))?;

        info!(
            payment_id = %record_id,
            gateway_payment_id = %created.payment_id,
            user_id = %payload.user_id,
            "Payment created via gateway"
        );

        Ok(Json(serde_json::json!({
            "success": true,
            "paymentId": created.payment_id,
            "redirectUrl": created.confirmation_url,
        })))
    } else {
        // Test mode: the record id stands in for the gateway id so the
        // webhook path can still be exercised end to end.
        insert_payment(
            &state.db,
            &record_id,
            &payload.user_id,
            payload.amount,
            &description,
            &record_id,
        )
        .await
        .map_err(|e| ApiError::PaymentError(e.to_string()))?;

        info!(
            payment_id = %record_id,
            user_id = %payload.user_id,
            "Test payment created (gateway not configured)"
        );

        Ok(Json(serde_json::json!({
            "success": true,
            "paymentId": record_id,
            "redirectUrl": return_url,
            "test": true,
        })))
    }
}

async fn insert_payment(
    db: &SqlitePool,
    id: &str,
    user_id: &str,
    amount: f64,
    description: &str,
    gateway_payment_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO payments (id, user_id, amount, currency, status, gateway_payment_id, description, created_at) \
         VALUES (?, ?, ?, 'RUB', ?, ?, ?, datetime('now'))",
    )
    .bind(id)
    .bind(user_id)
    .bind(amount)
    .bind(STATUS_PENDING)
    .bind(gateway_payment_id)
    .bind(description)
    .execute(db)
    .await?;

    Ok(())
}

/// Subscription activation produced by a successful webhook event
#[derive(Debug)]
pub struct ActivatedSubscription {
    pub user_id: String,
    pub telegram_id: Option<String>,
    pub plan: String,
    pub end_date: String,
}

/// POST /api/webhook/yookassa
/// Gateway callback; always acknowledges unless the store itself fails
///
/// The gateway may send the body as JSON or raw text, so the handler takes
/// the raw body and parses it itself. Only `payment.succeeded` mutates
/// state; every other event, unparsable body, or unknown gateway payment
/// id is acknowledged with an empty 200 and no state change.
pub async fn yookassa_webhook(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    body: String,
) -> StatusCode {
    let state = state_lock.read().await.clone();

    let envelope: WebhookEnvelope = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(error = %e, "Unparsable webhook body, acknowledging without action");
            return StatusCode::OK;
        }
    };

    if envelope.event != EVENT_PAYMENT_SUCCEEDED {
        debug!(event = %envelope.event, "Ignoring webhook event type");
        return StatusCode::OK;
    }

    match apply_successful_payment(&state.db, &envelope.object.id).await {
        Ok(Some(activated)) => {
            info!(
                user_id = %activated.user_id,
                gateway_payment_id = %envelope.object.id,
                end_date = %activated.end_date,
                "Subscription activated"
            );
            notify_subscription_activated(&state, activated);
            StatusCode::OK
        }
        Ok(None) => {
            warn!(
                gateway_payment_id = %envelope.object.id,
                "Webhook referenced no activatable payment, acknowledging"
            );
            StatusCode::OK
        }
        Err(e) => {
            error!(
                error = %e,
                gateway_payment_id = %envelope.object.id,
                "Store error while applying webhook"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Apply a `payment.succeeded` event inside one transaction
///
/// Both writes (payment status, user subscription) commit together, so a
/// crash mid-update never leaves a succeeded payment with an inactive
/// subscription. Returns `None` when no payment matches the gateway id or
/// the payment's user reference points nowhere.
pub async fn apply_successful_payment(
    db: &SqlitePool,
    gateway_payment_id: &str,
) -> Result<Option<ActivatedSubscription>, sqlx::Error> {
    let mut tx = db.begin().await?;

    let payment: Option<Payment> =
        sqlx::query_as("SELECT * FROM payments WHERE gateway_payment_id = ?")
            .bind(gateway_payment_id)
            .fetch_optional(&mut *tx)
            .await?;

    let payment = match payment {
        Some(payment) => payment,
        None => return Ok(None),
    };

    sqlx::query("UPDATE payments SET status = ? WHERE id = ?")
        .bind(STATUS_SUCCEEDED)
        .bind(&payment.id)
        .execute(&mut *tx)
        .await?;

    // The payment-to-user reference is not FK-enforced; a dangling
    // reference still marks the payment succeeded.
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(&payment.user_id)
        .fetch_optional(&mut *tx)
        .await?;

    let user = match user {
        Some(user) => user,
        None => {
            warn!(
                user_id = %payment.user_id,
                payment_id = %payment.id,
                "Payment owner not found, marking payment succeeded only"
            );
            tx.commit().await?;
            return Ok(None);
        }
    };

    let start = Utc::now();
    let end = start + Duration::days(SUBSCRIPTION_DAYS);
    let end_date = end.to_rfc3339();

    sqlx::query(
        "UPDATE users SET subscription_active = 1, subscription_plan = ?, \
         subscription_start = ?, subscription_end = ? WHERE id = ?",
    )
    .bind(MONTHLY_PLAN)
    .bind(start.to_rfc3339())
    .bind(&end_date)
    .bind(&user.id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(ActivatedSubscription {
        user_id: user.id,
        telegram_id: user.telegram_id,
        plan: MONTHLY_PLAN.to_string(),
        end_date,
    }))
}

/// Fire-and-forget Telegram notification with bounded retry
///
/// Runs after the transaction committed; failures are logged and swallowed,
/// never surfaced to the gateway.
fn notify_subscription_activated(state: &AppState, activated: ActivatedSubscription) {
    let chat_id = match activated.telegram_id {
        Some(chat_id) => chat_id,
        None => return,
    };

    if !state.telegram_service.is_configured() {
        return;
    }

    let telegram = state.telegram_service.clone();
    let user_id = activated.user_id;
    let text = format!(
        "✅ Подписка активирована! План: {}, действует до {}",
        activated.plan, activated.end_date
    );

    tokio::spawn(async move {
        const MAX_ATTEMPTS: u32 = 3;

        for attempt in 1..=MAX_ATTEMPTS {
            match telegram.send_message(&chat_id, &text).await {
                Ok(()) => {
                    debug!(user_id = %user_id, attempt, "Subscription notification sent");
                    return;
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        user_id = %user_id,
                        attempt,
                        "Subscription notification attempt failed"
                    );
                }
            }
            if attempt < MAX_ATTEMPTS {
                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            }
        }
        warn!(user_id = %user_id, "Giving up on subscription notification");
    });
}
