//! # Payments Module
//!
//! This module handles the payment flow:
//! - Payment creation through the YooKassa gateway (or local test mode)
//! - The gateway webhook that marks payments succeeded and activates
//!   the owning user's subscription

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::payments_routes;
