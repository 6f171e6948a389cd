//! AI-written feedback summary.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Narrative synthesis of a form's responses.
///
/// Deserialization is strict about shape: every field must be present with
/// the right JSON type. The sentiment score is kept as returned; use
/// [`FeedbackSummary::sentiment`] for a value clamped to 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub sentiment_score: f64,
}

impl FeedbackSummary {
    pub fn sentiment(&self) -> Percentage {
        if self.sentiment_score.is_nan() {
            return Percentage::ZERO;
        }
        Percentage::new(self.sentiment_score.round().clamp(0.0, 100.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_payload() {
        let json = r#"{
            "summary": "Well received.",
            "strengths": ["pace"],
            "weaknesses": ["room"],
            "sentimentScore": 82.4
        }"#;
        let summary: FeedbackSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.strengths, vec!["pace"]);
        assert_eq!(summary.sentiment().value(), 82);
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"summary": "x", "strengths": [], "sentimentScore": 10}"#;
        assert!(serde_json::from_str::<FeedbackSummary>(json).is_err());
    }

    #[test]
    fn sentiment_is_clamped() {
        let mut summary = FeedbackSummary {
            summary: String::new(),
            strengths: vec![],
            weaknesses: vec![],
            sentiment_score: 140.0,
        };
        assert_eq!(summary.sentiment(), Percentage::HUNDRED);

        summary.sentiment_score = -3.0;
        assert_eq!(summary.sentiment(), Percentage::ZERO);
    }
}
