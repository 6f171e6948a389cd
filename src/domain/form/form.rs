//! Form aggregate - an evaluation template made of ordered questions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{AuthorId, FormId, QuestionId, Timestamp};

use super::{FormError, Question, QuestionType, QuestionUpdate};

/// An evaluation template.
///
/// # Invariants
///
/// - `id` is fixed at creation; saving an edited form replaces the record
///   stored under the same id.
/// - `created_at` is set once and survives every edit.
/// - `questions` keep their order through save and load; that order is
///   both the display order and the analytics order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    id: FormId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    questions: Vec<Question>,
    created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author_id: Option<AuthorId>,
    #[serde(default)]
    is_published: bool,
}

impl Form {
    /// Creates an empty, unpublished draft.
    pub fn new(id: FormId, author_id: Option<AuthorId>, created_at: Timestamp) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            questions: Vec::new(),
            created_at,
            author_id,
            is_published: false,
        }
    }

    /// Sets the title (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a fully-built question (builder style).
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> &FormId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn author_id(&self) -> Option<&AuthorId> {
        self.author_id.as_ref()
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Path fragment that opens this form for respondents.
    pub fn share_path(&self) -> String {
        format!("#/form/{}", self.id)
    }

    // ───────────────────────────────────────────────────────────────
    // Editing
    // ───────────────────────────────────────────────────────────────

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Toggles the informational published flag. Unpublished forms stay
    /// reachable by direct link.
    pub fn set_published(&mut self, published: bool) {
        self.is_published = published;
    }

    /// Appends a new question with builder defaults and returns it.
    pub fn add_question(&mut self, id: QuestionId, question_type: QuestionType) -> &Question {
        self.questions.push(Question::new(id, question_type));
        &self.questions[self.questions.len() - 1]
    }

    /// Applies a partial update to one question.
    pub fn update_question(
        &mut self,
        id: &QuestionId,
        update: QuestionUpdate,
    ) -> Result<&Question, FormError> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id() == id)
            .ok_or_else(|| FormError::QuestionNotFound(id.clone()))?;
        update.apply(question);
        Ok(&*question)
    }

    /// Removes a question. Answers already collected for it stay in
    /// storage and are ignored by analytics.
    pub fn remove_question(&mut self, id: &QuestionId) -> Result<Question, FormError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id() == id)
            .ok_or_else(|| FormError::QuestionNotFound(id.clone()))?;
        Ok(self.questions.remove(index))
    }

    /// Replaces the whole question list, keeping the given order.
    pub fn replace_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
    }

    /// Carries the creation time and author of the stored record over to
    /// an edited copy, so a full-record save cannot rewrite them.
    pub fn adopt_origin(&mut self, stored: &Form) {
        self.created_at = stored.created_at;
        self.author_id = stored.author_id.clone();
    }

    /// Checks the rules a form must satisfy before it is saved.
    ///
    /// Empty question labels are allowed.
    pub fn validate_for_save(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id()) {
                return Err(FormError::DuplicateQuestionId(question.id().clone()));
            }
        }
        Ok(())
    }
}

/// Full share link for a form: `{base}/#/form/{id}`.
pub fn share_url(base_url: &str, form_id: &FormId) -> String {
    format!("{}/#/form/{}", base_url.trim_end_matches('/'), form_id)
}
