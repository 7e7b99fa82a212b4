//! Database row types. These map directly to SQLite rows and stay independent
//! of the wire types in feedback-types.

/// Values bound, in order, to the feedback insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub app_id: String,
    pub version: Option<String>,
    pub content: String,
    pub contact: Option<String>,
    pub device_info: Option<String>,
    pub location: Option<String>,
}

pub struct FeedbackRow {
    pub id: i64,
    pub app_id: String,
    pub version: Option<String>,
    pub content: String,
    pub contact: Option<String>,
    pub device_info: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub created_at: i64,
}
