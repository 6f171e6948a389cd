//! Respondent attribution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored name meaning "do not attribute".
pub const ANONYMOUS_SENTINEL: &str = "Anonymous";

/// Who submitted a response, as far as the respondent chose to say.
///
/// Persisted as the `respondentName` string: the sentinel for anonymous
/// submissions, the given name otherwise. A missing, null, blank or
/// sentinel value all load as [`Respondent::Anonymous`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Respondent {
    #[default]
    Anonymous,
    Named(String),
}

impl Respondent {
    /// Builds a respondent from a free-text name; blank means anonymous.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == ANONYMOUS_SENTINEL {
            Respondent::Anonymous
        } else {
            Respondent::Named(trimmed.to_string())
        }
    }

    /// True if the response may be attributed to a named person.
    pub fn is_attributed(&self) -> bool {
        matches!(self, Respondent::Named(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Respondent::Anonymous => None,
            Respondent::Named(name) => Some(name),
        }
    }
}

impl From<Option<String>> for Respondent {
    fn from(value: Option<String>) -> Self {
        value.map_or(Respondent::Anonymous, Respondent::named)
    }
}

impl From<Respondent> for Option<String> {
    fn from(value: Respondent) -> Self {
        match value {
            Respondent::Anonymous => Some(ANONYMOUS_SENTINEL.to_string()),
            Respondent::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for Respondent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Respondent::Anonymous => f.write_str(ANONYMOUS_SENTINEL),
            Respondent::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_sentinel_names_are_anonymous() {
        assert_eq!(Respondent::named(""), Respondent::Anonymous);
        assert_eq!(Respondent::named("   "), Respondent::Anonymous);
        assert_eq!(Respondent::named("Anonymous"), Respondent::Anonymous);
        assert_eq!(Respondent::named(" Ada "), Respondent::Named("Ada".to_string()));
    }

    #[test]
    fn anonymous_serializes_as_sentinel() {
        let json = serde_json::to_string(&Respondent::Anonymous).unwrap();
        assert_eq!(json, "\"Anonymous\"");
    }

    #[test]
    fn null_and_sentinel_deserialize_as_anonymous() {
        let from_null: Respondent = serde_json::from_str("null").unwrap();
        let from_sentinel: Respondent = serde_json::from_str("\"Anonymous\"").unwrap();
        let named: Respondent = serde_json::from_str("\"Grace\"").unwrap();

        assert_eq!(from_null, Respondent::Anonymous);
        assert_eq!(from_sentinel, Respondent::Anonymous);
        assert!(named.is_attributed());
        assert_eq!(named.name(), Some("Grace"));
    }
}
