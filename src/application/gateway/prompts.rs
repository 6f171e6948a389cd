//! Prompts and response schemas for the feedback gateway.
//!
//! Schemas use the provider's OpenAPI-subset type names.

use serde_json::{json, Value};

use crate::domain::analytics::FeedbackDigest;
use crate::domain::form::{QuestionType, GENERATED_QUESTION_COUNT};

pub const FORM_DESIGNER_INSTRUCTION: &str =
    "You design short, clear feedback forms for events and courses.";

pub const FEEDBACK_ANALYST_INSTRUCTION: &str =
    "You analyse collected feedback and report on it honestly and concisely.";

/// Prompt asking for a form skeleton about `topic`.
pub fn form_structure_prompt(topic: &str) -> String {
    let types: Vec<&str> = QuestionType::ALL.iter().map(QuestionType::as_str).collect();
    format!(
        "Generate a feedback form structure for: {}. Include a title, a description, \
         and exactly {} relevant questions with types ({}). \
         Give MULTIPLE_CHOICE questions an options list.",
        topic.trim(),
        GENERATED_QUESTION_COUNT,
        types.join(", ")
    )
}

/// Prompt asking for a narrative summary of the digest.
pub fn summary_prompt(digest: &FeedbackDigest, data: &str) -> String {
    format!(
        "Summarize the following feedback for the event \"{}\". \
         Identify key strengths, weaknesses, and a sentiment score (0-100).\n\n\
         Each entry lists a question, its type and one answer per response \
         (null where the respondent skipped it).\n\nData:\n{}",
        digest.form_title, data
    )
}

pub fn form_structure_schema() -> Value {
    let types: Vec<&str> = QuestionType::ALL.iter().map(QuestionType::as_str).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": { "type": "STRING" },
                        "type": { "type": "STRING", "enum": types },
                        "required": { "type": "BOOLEAN" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["label", "type", "required"]
                }
            }
        },
        "required": ["title", "description", "questions"]
    })
}

pub fn summary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
            "sentimentScore": { "type": "NUMBER" }
        },
        "required": ["summary", "strengths", "weaknesses", "sentimentScore"]
    })
}
