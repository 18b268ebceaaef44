//! User data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
///
/// `password_hash` never leaves the process; API responses are built from
/// the projection returned by [`User::subscription`] plus explicit fields.
#[derive(FromRow, Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    // Write-only until a login flow exists; never serialized
    #[allow(dead_code)]
    pub password_hash: String,
    pub telegram_id: Option<String>,
    pub subscription_active: bool,
    pub subscription_plan: Option<String>,
    pub subscription_start: Option<String>,
    pub subscription_end: Option<String>,
    pub created_at: Option<String>,
}

/// Subscription window projection for API responses
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subscription {
    pub active: bool,
    pub plan: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

impl User {
    /// Subscription window as exposed on the wire
    pub fn subscription(&self) -> Subscription {
        Subscription {
            active: self.subscription_active,
            plan: self.subscription_plan.clone(),
            start_date: self.subscription_start.clone(),
            end_date: self.subscription_end.clone(),
        }
    }
}

/// Registration request body
#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
