use anyhow::Context;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::warn;

use feedback_db::models::FeedbackRow;
use feedback_types::{Feedback, FeedbackStatus, Pagination, parse_page};

use crate::AppState;
use crate::error::ApiError;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Kept as text: a non-numeric page falls back to 1 instead of rejecting.
    pub page: Option<String>,
}

/// GET / — one page of feedbacks, newest first, rendered as HTML.
pub async fn list_feedbacks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let mut pagination = Pagination::new(parse_page(query.page.as_deref()), 0);
    let (limit, offset) = (pagination.page_size, pagination.offset());

    let db = state.clone();
    let (rows, total) = tokio::task::spawn_blocking(move || {
        let rows = db.db.list_feedbacks(limit, offset)?;
        let total = db.db.count_feedbacks()?;
        Ok::<_, anyhow::Error>((rows, total))
    })
    .await
    .context("spawn_blocking join error")?
    .context("Failed to load feedbacks")?;

    let feedbacks: Vec<Feedback> = rows.into_iter().map(to_feedback).collect();
    pagination.total = total;

    Ok(Html(render::feedback_page(&feedbacks, &pagination)))
}

fn to_feedback(row: FeedbackRow) -> Feedback {
    let status = row.status.parse().unwrap_or_else(|e| {
        warn!("Corrupt status on feedback {}: {}", row.id, e);
        FeedbackStatus::Pending
    });

    Feedback {
        id: row.id,
        app_id: row.app_id,
        version: row.version,
        content: row.content,
        contact: row.contact,
        device_info: row.device_info,
        location: row.location,
        status,
        created_at: row.created_at,
    }
}
