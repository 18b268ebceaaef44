//! External service clients
//!
//! Each collaborator (payment gateway, Telegram bot) gets its own client
//! with a thiserror error enum. Clients share the process-wide reqwest
//! Client held in AppState.

pub mod telegram;
pub mod yookassa;

pub use telegram::TelegramService;
pub use yookassa::YookassaService;
