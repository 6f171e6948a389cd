//! Strongly-typed identifier value objects.
//!
//! Record ids are opaque strings: they are minted by an `IdGenerator`
//! (UUIDs in production, predictable sequences in tests) and persisted
//! verbatim, so ids written by earlier versions always load back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

opaque_id!(
    /// Unique identifier for a form. Stable across edits.
    FormId,
    "form_id"
);

opaque_id!(
    /// Unique identifier for a question within a form.
    QuestionId,
    "question_id"
);

opaque_id!(
    /// Unique identifier for a submitted response.
    ResponseId,
    "response_id"
);

/// Author identifier (typically from the sign-in collaborator).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Creates a new AuthorId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("author_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_id_displays_inner_value() {
        let id = FormId::new("f1");
        assert_eq!(id.to_string(), "f1");
        assert_eq!(id.as_str(), "f1");
    }

    #[test]
    fn form_id_parses_and_trims() {
        let id: FormId = "  abc-123 ".parse().unwrap();
        assert_eq!(id, FormId::new("abc-123"));
    }

    #[test]
    fn form_id_rejects_blank_input() {
        let result = "   ".parse::<FormId>();
        assert_eq!(result, Err(ValidationError::empty_field("form_id")));
    }

    #[test]
    fn question_id_serializes_as_plain_string() {
        let id = QuestionId::new("q1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q1\"");

        let back: QuestionId = serde_json::from_str("\"q1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn response_id_from_str_slice() {
        let id: ResponseId = "r-9".into();
        assert_eq!(id.as_str(), "r-9");
    }

    #[test]
    fn author_id_rejects_empty() {
        assert!(AuthorId::new("").is_err());
        assert!(AuthorId::new("   ").is_err());
        assert_eq!(AuthorId::new("user_1").unwrap().as_str(), "user_1");
    }
}
