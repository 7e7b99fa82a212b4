use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Processing state of a feedback record.
///
/// Records are always created as `Pending`. Moving one to `Processed`
/// happens outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    Processed,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown feedback status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for FeedbackStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processed" => Ok(Self::Processed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A stored feedback record, using the external field names.
///
/// `device_info` and `location` stay in their serialized text form; nothing
/// in this service parses them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub app_id: String,
    pub version: Option<String>,
    pub content: String,
    pub contact: Option<String>,
    pub device_info: Option<String>,
    pub location: Option<String>,
    pub status: FeedbackStatus,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Feedback {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}
