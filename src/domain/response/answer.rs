//! Answer values given by respondents.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// A single answer value.
///
/// Stored untagged, exactly as the respondent's client sent it: a string
/// for text, choice and yes/no answers, a number for ratings. Booleans are
/// accepted for compatibility with older records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl AnswerValue {
    /// Returns the text if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// True for the empty string, which counts as "not answered".
    pub fn is_blank(&self) -> bool {
        matches!(self, AnswerValue::Text(s) if s.is_empty())
    }

    /// True if this is the number `rating` exactly.
    pub fn is_rating(&self, rating: u8) -> bool {
        self.as_f64().map_or(false, |v| v == f64::from(rating))
    }

    /// True if this is the string `text` exactly (case-sensitive).
    pub fn is_text(&self, text: &str) -> bool {
        self.as_text() == Some(text)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Flag(b) => write!(f, "{}", b),
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        AnswerValue::Number(n.into())
    }
}

impl From<u8> for AnswerValue {
    fn from(n: u8) -> Self {
        AnswerValue::Number(n.into())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Flag(b)
    }
}

/// One response value to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: QuestionId, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id,
            value: value.into(),
        }
    }
}
