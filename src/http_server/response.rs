//! # Response Formatting
//!
//! The uniform JSON envelope: `{"success": true, "data": ..., "message"?: ...}`
//! on success, `{"success": false, "message": ...}` on failure.

use serde::Serialize;

/// Success envelope wrapping a payload.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Failure envelope; carries only the client-facing message.
#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub message: String,
}

impl FailureEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_serialization() {
        let envelope = Envelope::new(json!([{"id": "1"}]));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"][0]["id"], "1");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_success_envelope_with_message() {
        let envelope = Envelope::with_message(json!(1), "new album created");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["message"], "new album created");
    }

    #[test]
    fn test_failure_envelope_serialization() {
        let envelope = FailureEnvelope::new("album not found");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "album not found");
    }
}
