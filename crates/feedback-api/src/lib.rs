pub mod error;
pub mod feedbacks;
pub mod health;
pub mod listing;
pub mod notify;
pub mod render;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use feedback_db::Database;

use crate::notify::TelegramNotifier;

pub type AppState = Arc<AppStateInner>;

/// Dependencies handed to every handler. Built once at startup.
pub struct AppStateInner {
    pub db: Database,
    /// `None` when messaging credentials are not configured.
    pub notifier: Option<TelegramNotifier>,
}

/// All routes of the service, without transport layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(listing::list_feedbacks))
        .route("/api/feedbacks", post(feedbacks::submit_feedback))
        .route("/health", get(health::health))
        .with_state(state)
}
