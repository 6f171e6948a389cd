//! Question definitions and the closed set of question types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{QuestionId, ValidationError};

/// Option seeded into a new multiple-choice question.
pub const DEFAULT_CHOICE_OPTION: &str = "Option 1";

/// The kinds of question a form can ask.
///
/// Closed set: the renderer and the aggregation engine match on it
/// exhaustively, so a new variant must be handled in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// Free-text answer.
    Text,
    /// Whole-number rating from 1 to 5.
    Rating,
    /// One of the question's options.
    MultipleChoice,
    /// Literal "Yes" or "No".
    YesNo,
}

impl QuestionType {
    /// All question types, in builder palette order.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Text,
        QuestionType::Rating,
        QuestionType::MultipleChoice,
        QuestionType::YesNo,
    ];

    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Text => "TEXT",
            QuestionType::Rating => "RATING",
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::YesNo => "YES_NO",
        }
    }

    /// Returns true if questions of this type carry an options list.
    pub fn has_options(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("type", format!("unknown question type '{}'", s))
            })
    }
}

/// One field definition within a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "type")]
    question_type: QuestionType,
    #[serde(default)]
    label: String,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl Question {
    /// Creates a question with builder defaults: empty label, required,
    /// and a single placeholder option for multiple choice.
    pub fn new(id: QuestionId, question_type: QuestionType) -> Self {
        Self {
            id,
            question_type,
            label: String::new(),
            required: true,
            options: default_options_for(question_type),
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets whether an answer is mandatory.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the options list. Ignored for types without options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.question_type.has_options() {
            self.options = Some(options.into_iter().map(Into::into).collect());
        }
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Options in display order; empty for types without options.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub(crate) fn set_options(&mut self, options: Vec<String>) {
        if self.question_type.has_options() {
            self.options = Some(options);
        }
    }

    /// Changes the type, seeding or clearing options to match.
    pub(crate) fn set_type(&mut self, question_type: QuestionType) {
        if self.question_type == question_type {
            return;
        }
        self.question_type = question_type;
        if question_type.has_options() {
            if self.options.as_ref().map_or(true, |o| o.is_empty()) {
                self.options = default_options_for(question_type);
            }
        } else {
            self.options = None;
        }
    }
}

fn default_options_for(question_type: QuestionType) -> Option<Vec<String>> {
    question_type
        .has_options()
        .then(|| vec![DEFAULT_CHOICE_OPTION.to_string()])
}

/// Partial update applied to a question in the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdate {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

impl QuestionUpdate {
    pub(crate) fn apply(self, question: &mut Question) {
        // Type first so that an accompanying options list lands on the
        // new type rather than being cleared by it.
        if let Some(question_type) = self.question_type {
            question.set_type(question_type);
        }
        if let Some(label) = self.label {
            question.set_label(label);
        }
        if let Some(required) = self.required {
            question.set_required(required);
        }
        if let Some(options) = self.options {
            question.set_options(options);
        }
    }
}
