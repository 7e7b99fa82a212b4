use serde::{Deserialize, Serialize};
use serde_json::Value;

// -- Submissions --

/// Body of `POST /api/feedbacks`.
///
/// Every field is kept as a loose JSON value so that a missing or wrongly
/// typed field reaches validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub app_id: Option<Value>,
    pub version: Option<Value>,
    pub content: Option<Value>,
    pub contact: Option<Value>,
    pub device_info: Option<Value>,
    pub location: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// -- Health --

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_accepts_camel_case_fields() {
        let sub: FeedbackSubmission = serde_json::from_str(
            r#"{"appId":"com.example.app","content":"Hi","deviceInfo":{"os":"android"},"location":null}"#,
        )
        .unwrap();

        assert_eq!(sub.app_id.unwrap(), "com.example.app");
        assert_eq!(sub.content.unwrap(), "Hi");
        assert_eq!(sub.device_info.unwrap()["os"], "android");
        assert!(sub.location.is_none());
        assert!(sub.version.is_none());
    }

    #[test]
    fn loosely_typed_fields_still_deserialize() {
        let sub: FeedbackSubmission =
            serde_json::from_str(r#"{"appId":0,"content":false,"version":2,"contact":12345}"#)
                .unwrap();

        assert_eq!(sub.app_id.unwrap(), 0);
        assert_eq!(sub.content.unwrap(), false);
        assert_eq!(sub.version.unwrap(), 2);
        assert_eq!(sub.contact.unwrap(), 12345);
    }

    #[test]
    fn empty_object_is_a_valid_submission_body() {
        let sub: FeedbackSubmission = serde_json::from_str("{}").unwrap();
        assert!(sub.app_id.is_none());
        assert!(sub.content.is_none());
    }
}
