//! FormResponse - one respondent's submission to one form.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::form::Form;
use crate::domain::foundation::{FormId, QuestionId, ResponseId, Timestamp};

use super::{Answer, AnswerValue, Respondent, SubmissionError};

/// What a respondent hands in: their answers and attribution choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSubmission {
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub respondent_name: Respondent,
}

impl ResponseSubmission {
    pub fn new(respondent: Respondent) -> Self {
        Self {
            answers: Vec::new(),
            respondent_name: respondent,
        }
    }

    /// Adds an answer (builder style).
    pub fn answer(mut self, question_id: QuestionId, value: impl Into<AnswerValue>) -> Self {
        self.answers.push(Answer::new(question_id, value));
        self
    }
}

/// A stored submission.
///
/// Append-only: once created it is never modified, only removed together
/// with its form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    id: ResponseId,
    form_id: FormId,
    #[serde(default)]
    answers: Vec<Answer>,
    submitted_at: Timestamp,
    #[serde(default)]
    respondent_name: Respondent,
}

impl FormResponse {
    /// Reconstitutes a response from its parts without validation.
    pub fn new(
        id: ResponseId,
        form_id: FormId,
        answers: Vec<Answer>,
        submitted_at: Timestamp,
        respondent: Respondent,
    ) -> Self {
        Self {
            id,
            form_id,
            answers,
            submitted_at,
            respondent_name: respondent,
        }
    }

    /// Validates a submission against the form and builds the response.
    ///
    /// Every answer must name a question on the form, no question may be
    /// answered twice, and every required question needs an answer that is
    /// not the empty string.
    pub fn submit(
        id: ResponseId,
        form: &Form,
        submission: ResponseSubmission,
        submitted_at: Timestamp,
    ) -> Result<Self, SubmissionError> {
        let mut answered = HashSet::new();
        for answer in &submission.answers {
            if form.question(&answer.question_id).is_none() {
                return Err(SubmissionError::UnknownQuestion(answer.question_id.clone()));
            }
            if !answered.insert(&answer.question_id) {
                return Err(SubmissionError::DuplicateAnswer(answer.question_id.clone()));
            }
        }

        for question in form.questions().iter().filter(|q| q.is_required()) {
            let has_answer = submission
                .answers
                .iter()
                .any(|a| &a.question_id == question.id() && !a.value.is_blank());
            if !has_answer {
                return Err(SubmissionError::RequiredQuestionUnanswered {
                    question_id: question.id().clone(),
                    label: question.label().to_string(),
                });
            }
        }

        Ok(Self::new(
            id,
            form.id().clone(),
            submission.answers,
            submitted_at,
            submission.respondent_name,
        ))
    }

    pub fn id(&self) -> &ResponseId {
        &self.id
    }

    pub fn form_id(&self) -> &FormId {
        &self.form_id
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }

    pub fn respondent(&self) -> &Respondent {
        &self.respondent_name
    }

    /// The value given for a question, if any.
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .find(|a| &a.question_id == question_id)
            .map(|a| &a.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{Question, QuestionType};

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s)
    }

    fn form() -> Form {
        Form::new(FormId::new("f1"), None, Timestamp::from_millis(0).unwrap())
            .with_title("Meetup")
            .with_question(
                Question::new(qid("q1"), QuestionType::Rating).with_label("How was it?"),
            )
            .with_question(
                Question::new(qid("q2"), QuestionType::Text)
                    .with_label("Anything else?")
                    .with_required(false),
            )
    }

    fn submit(submission: ResponseSubmission) -> Result<FormResponse, SubmissionError> {
        FormResponse::submit(
            ResponseId::new("r1"),
            &form(),
            submission,
            Timestamp::from_millis(10).unwrap(),
        )
    }

    #[test]
    fn submit_accepts_complete_answers() {
        let response = submit(
            ResponseSubmission::new(Respondent::named("Ada"))
                .answer(qid("q1"), 5_i64)
                .answer(qid("q2"), "Great venue"),
        )
        .unwrap();

        assert_eq!(response.form_id().as_str(), "f1");
        assert_eq!(response.answers().len(), 2);
        assert_eq!(response.answer_for(&qid("q1")), Some(&AnswerValue::from(5_i64)));
        assert!(response.respondent().is_attributed());
    }

    #[test]
    fn submit_allows_optional_questions_to_be_skipped() {
        let response =
            submit(ResponseSubmission::default().answer(qid("q1"), 3_i64)).unwrap();
        assert!(response.answer_for(&qid("q2")).is_none());
        assert_eq!(response.respondent(), &Respondent::Anonymous);
    }

    #[test]
    fn submit_rejects_missing_required_answer() {
        let err = submit(ResponseSubmission::default().answer(qid("q2"), "hi")).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::RequiredQuestionUnanswered {
                question_id: qid("q1"),
                label: "How was it?".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Question \"How was it?\" is required");
    }

    #[test]
    fn submit_treats_empty_string_as_unanswered() {
        let err = submit(ResponseSubmission::default().answer(qid("q1"), "")).unwrap_err();
        assert!(matches!(err, SubmissionError::RequiredQuestionUnanswered { .. }));
    }

    #[test]
    fn submit_rejects_answers_to_unknown_questions() {
        let err = submit(
            ResponseSubmission::default()
                .answer(qid("q1"), 4_i64)
                .answer(qid("ghost"), "boo"),
        )
        .unwrap_err();
        assert_eq!(err, SubmissionError::UnknownQuestion(qid("ghost")));
    }

    #[test]
    fn submit_rejects_duplicate_answers() {
        let err = submit(
            ResponseSubmission::default()
                .answer(qid("q1"), 4_i64)
                .answer(qid("q1"), 2_i64),
        )
        .unwrap_err();
        assert_eq!(err, SubmissionError::DuplicateAnswer(qid("q1")));
        assert_eq!(err.question_id(), &qid("q1"));
    }

    #[test]
    fn response_serializes_in_storage_layout() {
        let response = submit(ResponseSubmission::default().answer(qid("q1"), 4_i64)).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], "r1");
        assert_eq!(value["formId"], "f1");
        assert_eq!(value["submittedAt"], 10);
        assert_eq!(value["respondentName"], "Anonymous");
        assert_eq!(value["answers"][0]["questionId"], "q1");
        assert_eq!(value["answers"][0]["value"], 4);
    }

    #[test]
    fn response_without_respondent_name_loads_as_anonymous() {
        let json = r#"{"id":"r2","formId":"f1","answers":[],"submittedAt":1}"#;
        let response: FormResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.respondent(), &Respondent::Anonymous);
    }
}
