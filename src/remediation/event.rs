use serde::Deserialize;
use serde_json::Value;

use crate::error::RemediationError;

/// Invocation payload of a remediation request, naming the bucket to lock down.
#[derive(Debug, Deserialize)]
pub struct RemediationEvent {
    #[serde(rename = "BucketName")]
    bucket_name: String,
}

impl RemediationEvent {
    /// Extracts the bucket name from the raw payload. A missing field, a
    /// non-string value, or an empty string is rejected as an invalid event.
    pub fn parse(payload: Value) -> Result<Self, RemediationError> {
        let event: Self = serde_json::from_value(payload)
            .map_err(|e| RemediationError::InvalidEvent(e.to_string()))?;
        if event.bucket_name.is_empty() {
            return Err(RemediationError::InvalidEvent(
                "BucketName must be a non-empty string".to_string(),
            ));
        }
        Ok(event)
    }

    pub fn get_bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bucket_name() {
        let event = RemediationEvent::parse(json!({"BucketName": "my-data-bucket"})).unwrap();
        assert_eq!(event.get_bucket_name(), "my-data-bucket");
    }

    #[test]
    fn ignores_unrelated_fields() {
        let event = RemediationEvent::parse(json!({
            "BucketName": "my-data-bucket",
            "RequestId": "3f8c7e19",
        }))
        .unwrap();
        assert_eq!(event.get_bucket_name(), "my-data-bucket");
    }

    #[test]
    fn rejects_missing_bucket_name() {
        let result = RemediationEvent::parse(json!({}));
        assert!(matches!(result, Err(RemediationError::InvalidEvent(_))));
    }

    #[test]
    fn rejects_non_string_bucket_name() {
        let result = RemediationEvent::parse(json!({"BucketName": 42}));
        assert!(matches!(result, Err(RemediationError::InvalidEvent(_))));
    }

    #[test]
    fn rejects_empty_bucket_name() {
        let result = RemediationEvent::parse(json!({"BucketName": ""}));
        assert!(matches!(result, Err(RemediationError::InvalidEvent(_))));
    }

    #[test]
    fn rejects_non_object_payload() {
        let result = RemediationEvent::parse(json!("my-data-bucket"));
        assert!(matches!(result, Err(RemediationError::InvalidEvent(_))));
    }
}
