//! HTTP DTOs for form endpoints.
//!
//! Forms, responses, analytics and summaries serialize themselves; the types
//! here cover request bodies and the envelopes the domain has no type for.

use serde::{Deserialize, Serialize};

use crate::domain::form::Form;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start a new draft.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftRequest {
    #[serde(default)]
    pub author_id: Option<String>,
}

/// Request to generate a form from a topic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFormRequest {
    pub topic: String,
    /// Draft to fill in place of a new one.
    #[serde(default)]
    pub draft: Option<Form>,
    #[serde(default)]
    pub author_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Shareable link to a form's respondent view.
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub url: String,
}

/// Error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_omits_empty_details() {
        let err = ErrorResponse::not_found("Form", "f-404");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Form not found: f-404");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn generate_request_accepts_bare_topic() {
        let req: GenerateFormRequest =
            serde_json::from_str(r#"{"topic": "Workshop feedback"}"#).unwrap();
        assert_eq!(req.topic, "Workshop feedback");
        assert!(req.draft.is_none());
        assert!(req.author_id.is_none());
    }

    #[test]
    fn generate_request_carries_a_draft() {
        let json = r#"{
            "topic": "Course review",
            "authorId": "ada",
            "draft": {"id": "f1", "createdAt": 1700000000000}
        }"#;
        let req: GenerateFormRequest = serde_json::from_str(json).unwrap();

        let draft = req.draft.unwrap();
        assert_eq!(draft.id().as_str(), "f1");
        assert!(draft.questions().is_empty());
        assert_eq!(req.author_id.as_deref(), Some("ada"));
    }
}
