//! Aggregation engine - per-question statistics for chart rendering.
//!
//! Aggregates are derived from a form and its responses on demand and never
//! persisted. The engine reads both inputs and allocates a fresh result, so
//! repeated calls on the same inputs yield identical output.

use serde::Serialize;

use crate::domain::form::{Form, Question, QuestionType};
use crate::domain::foundation::{FormId, Percentage, QuestionId};
use crate::domain::response::{AnswerValue, FormResponse};

/// Rating buckets, inclusive.
pub const RATING_SCALE: std::ops::RangeInclusive<u8> = 1..=5;

/// Literal yes/no answer values.
pub const YES: &str = "Yes";
pub const NO: &str = "No";

/// Analytics for one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAnalytics {
    pub form_id: FormId,
    /// Number of responses considered.
    pub total_responses: usize,
    /// Share of responses submitted under a name.
    pub attributed: Percentage,
    /// One summary per question, in form order.
    pub questions: Vec<QuestionSummary>,
}

impl FormAnalytics {
    /// Summary for a question, by id.
    pub fn summary_for(&self, question_id: &QuestionId) -> Option<&QuestionSummary> {
        self.questions.iter().find(|s| &s.question_id == question_id)
    }
}

/// Statistics for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub question_id: QuestionId,
    pub label: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Responses that carry an answer for this question.
    pub answered: usize,
    pub breakdown: Breakdown,
}

/// Type-specific breakdown of a question's answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Breakdown {
    /// Non-empty text answers in response order.
    Text { answers: Vec<String> },
    /// Count per rating 1..=5.
    Rating { buckets: Vec<RatingBucket> },
    /// Count per current option, in option order.
    Choice { options: Vec<OptionCount> },
    /// Yes/No counts with their share of all responses.
    YesNo { yes: ShareCount, no: ShareCount },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionCount {
    pub option: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShareCount {
    pub count: usize,
    pub percentage: Percentage,
}

impl Breakdown {
    /// Rating count for a bucket; 0 for other breakdowns.
    pub fn rating_count(&self, rating: u8) -> usize {
        match self {
            Breakdown::Rating { buckets } => buckets
                .iter()
                .find(|b| b.rating == rating)
                .map_or(0, |b| b.count),
            _ => 0,
        }
    }

    /// Count for an option; 0 for other breakdowns or unknown options.
    pub fn option_count(&self, option: &str) -> usize {
        match self {
            Breakdown::Choice { options } => options
                .iter()
                .find(|o| o.option == option)
                .map_or(0, |o| o.count),
            _ => 0,
        }
    }
}

/// Computes analytics for `form` over `responses`.
///
/// Responses are expected to belong to the form; answers whose question no
/// longer exists are ignored, and a response without an answer for a
/// question contributes nothing to that question's breakdown.
pub fn aggregate_form(form: &Form, responses: &[FormResponse]) -> FormAnalytics {
    let attributed = responses
        .iter()
        .filter(|r| r.respondent().is_attributed())
        .count();

    FormAnalytics {
        form_id: form.id().clone(),
        total_responses: responses.len(),
        attributed: Percentage::of(attributed, responses.len()),
        questions: form
            .questions()
            .iter()
            .map(|q| summarize_question(q, responses))
            .collect(),
    }
}

/// Computes the summary for one question.
pub fn summarize_question(question: &Question, responses: &[FormResponse]) -> QuestionSummary {
    let values: Vec<&AnswerValue> = responses
        .iter()
        .filter_map(|r| r.answer_for(question.id()))
        .collect();

    let breakdown = match question.question_type() {
        QuestionType::Text => Breakdown::Text {
            answers: values
                .iter()
                .filter(|v| !v.is_blank())
                .map(|v| v.to_string())
                .collect(),
        },
        QuestionType::Rating => Breakdown::Rating {
            buckets: RATING_SCALE
                .map(|rating| RatingBucket {
                    rating,
                    count: values.iter().filter(|v| v.is_rating(rating)).count(),
                })
                .collect(),
        },
        QuestionType::MultipleChoice => Breakdown::Choice {
            options: question
                .options()
                .iter()
                .map(|option| OptionCount {
                    option: option.clone(),
                    count: values.iter().filter(|v| v.is_text(option)).count(),
                })
                .collect(),
        },
        QuestionType::YesNo => {
            let share = |literal: &str| {
                let count = values.iter().filter(|v| v.is_text(literal)).count();
                ShareCount {
                    count,
                    percentage: Percentage::of(count, responses.len()),
                }
            };
            Breakdown::YesNo {
                yes: share(YES),
                no: share(NO),
            }
        }
    };

    QuestionSummary {
        question_id: question.id().clone(),
        label: question.label().to_string(),
        question_type: question.question_type(),
        answered: values.len(),
        breakdown,
    }
}
