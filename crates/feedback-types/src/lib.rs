//! Shared types for the feedback service.
//!
//! `models` holds the persisted record as the rest of the system sees it,
//! `api` the request/response bodies of the HTTP surface, and `pagination`
//! the page arithmetic used by the listing view.

pub mod api;
pub mod models;
pub mod pagination;

pub use api::{ErrorResponse, FeedbackSubmission, HealthResponse, SubmitResponse};
pub use models::{Feedback, FeedbackStatus};
pub use pagination::{PAGE_SIZE, Pagination, parse_page};
