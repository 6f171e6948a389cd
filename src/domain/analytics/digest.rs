//! Unaggregated per-question answers, the input to feedback summarization.

use serde::Serialize;

use crate::domain::form::{Form, QuestionType};
use crate::domain::foundation::FormId;
use crate::domain::response::{AnswerValue, FormResponse};

/// Raw answers for every question of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDigest {
    #[serde(skip)]
    pub form_id: FormId,
    pub form_title: String,
    pub questions: Vec<QuestionDigest>,
}

/// One question's answers, one slot per response.
///
/// A response that skipped the question leaves `None`, serialized as `null`,
/// so slots line up across questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDigest {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub answers: Vec<Option<AnswerValue>>,
}

impl FeedbackDigest {
    pub fn from_form(form: &Form, responses: &[FormResponse]) -> Self {
        let questions = form
            .questions()
            .iter()
            .map(|q| QuestionDigest {
                question: q.label().to_string(),
                question_type: q.question_type(),
                answers: responses
                    .iter()
                    .map(|r| r.answer_for(q.id()).cloned())
                    .collect(),
            })
            .collect();

        Self {
            form_id: form.id().clone(),
            form_title: form.title().to_string(),
            questions,
        }
    }

    /// Number of responses each question slot list covers.
    pub fn response_count(&self) -> usize {
        self.questions.first().map_or(0, |q| q.answers.len())
    }

    /// Compact JSON for embedding in a prompt.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.questions)
    }
}
