use anyhow::Context;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bytes::Bytes;
use serde_json::Value;
use tracing::{info, warn};

use feedback_db::models::NewFeedback;
use feedback_types::{FeedbackSubmission, SubmitResponse};

use crate::AppState;
use crate::error::ApiError;
use crate::notify::compose_message;

const MISSING_FIELDS: &str = "Missing required fields: appId and content are required.";

/// POST /api/feedbacks — validate, store, then notify without waiting.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that a malformed body takes the generic 500 path instead of an extractor
/// rejection.
pub async fn submit_feedback(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let submission: FeedbackSubmission =
        serde_json::from_slice(&body).context("Failed to parse feedback body")?;

    let record = validate(submission)?;

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let row = record.clone();
    let id = tokio::task::spawn_blocking(move || db.db.insert_feedback(&row))
        .await
        .context("spawn_blocking join error")?
        .context("Failed to insert feedback")?;

    info!("Stored feedback {} from {}", id, record.app_id);

    if let Some(notifier) = state.notifier.clone() {
        let text = compose_message(
            &record.app_id,
            record.version.as_deref(),
            record.contact.as_deref(),
            &record.content,
        );
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&text).await {
                warn!("Feedback {} notification failed: {:#}", id, e);
            }
        });
    }

    Ok((StatusCode::CREATED, Json(SubmitResponse { success: true })))
}

/// Check required fields and turn the submission into the row to insert.
///
/// `appId` and `content` must be non-empty strings; falsy values count as
/// missing. Falsy optional values (`null`, `false`, `0`, `""`) are stored as
/// NULL, other non-string `version`/`contact` values as their JSON text.
fn validate(submission: FeedbackSubmission) -> Result<NewFeedback, ApiError> {
    let (Some(app_id), Some(content)) = (
        required_text(submission.app_id),
        required_text(submission.content),
    ) else {
        return Err(ApiError::Validation(MISSING_FIELDS.into()));
    };

    Ok(NewFeedback {
        app_id,
        version: optional_text(submission.version),
        content,
        contact: optional_text(submission.contact),
        device_info: to_json_text(submission.device_info)?,
        location: to_json_text(submission.location)?,
    })
}

fn required_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn optional_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(value) if is_truthy(&value) => Some(value.to_string()),
        _ => None,
    }
}

fn to_json_text(value: Option<Value>) -> Result<Option<String>, ApiError> {
    match value {
        Some(value) if is_truthy(&value) => {
            let text = serde_json::to_string(&value).context("Failed to serialize JSON field")?;
            Ok(Some(text))
        }
        _ => Ok(None),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
