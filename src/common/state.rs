// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::{TelegramService, YookassaService};

/// Application state containing database pool, services, and configuration
///
/// Constructed once in main and injected into handlers; the services hold
/// clones of the process-wide reqwest client.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Base URL of the frontend, used for default payment return urls
    pub frontend_url: String,
    pub yookassa_service: Arc<YookassaService>,
    pub telegram_service: Arc<TelegramService>,
}
