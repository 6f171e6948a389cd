//! Form skeletons produced by the generation gateway.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

use super::{Form, Question, QuestionType, DEFAULT_CHOICE_OPTION};

/// Number of questions requested from the generator.
pub const GENERATED_QUESTION_COUNT: usize = 5;

/// A generated form skeleton: title, description and typed questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedForm {
    pub title: String,
    pub description: String,
    pub questions: Vec<GeneratedQuestion>,
}

/// A generated question, not yet given an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub label: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl GeneratedQuestion {
    /// Normalizes the options list to the question type.
    ///
    /// Choice questions without usable options get the builder's
    /// placeholder option; other types drop any options they carry.
    /// Returns true if anything was changed.
    pub fn normalize(&mut self) -> bool {
        if self.question_type.has_options() {
            let usable = self
                .options
                .as_ref()
                .map_or(false, |o| o.iter().any(|opt| !opt.trim().is_empty()));
            if usable {
                return false;
            }
            self.options = Some(vec![DEFAULT_CHOICE_OPTION.to_string()]);
            true
        } else {
            self.options.take().is_some()
        }
    }

    /// Builds a domain question under the given id.
    pub fn into_question(self, id: QuestionId) -> Question {
        let question = Question::new(id, self.question_type)
            .with_label(self.label)
            .with_required(self.required);
        match self.options {
            Some(options) => question.with_options(options),
            None => question,
        }
    }
}

impl GeneratedForm {
    /// Replaces the draft's title, description and questions with this
    /// skeleton. Each question gets a fresh id from `next_id`; the form's
    /// own id, creation time, author and published flag are untouched.
    pub fn apply_to<F>(self, form: &mut Form, mut next_id: F)
    where
        F: FnMut() -> QuestionId,
    {
        form.set_title(self.title);
        form.set_description(self.description);
        let questions = self
            .questions
            .into_iter()
            .map(|q| q.into_question(next_id()))
            .collect();
        form.replace_questions(questions);
    }
}
