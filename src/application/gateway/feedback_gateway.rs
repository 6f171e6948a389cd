//! FeedbackGateway - schema-constrained requests to the AI provider.
//!
//! Two operations, each one provider call: generating a form skeleton from a
//! topic, and summarizing collected feedback. The decoded payload must match
//! the domain shape exactly; anything else fails the call.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::domain::analytics::{FeedbackDigest, FeedbackSummary};
use crate::domain::form::{GeneratedForm, GENERATED_QUESTION_COUNT};
use crate::ports::{AIProvider, CompletionRequest};

use super::prompts;
use super::GatewayError;

/// Gateway to the external generative-text service.
///
/// A second request with the same key while the first is still running is
/// refused with [`GatewayError::AlreadyInProgress`].
#[derive(Clone)]
pub struct FeedbackGateway {
    provider: Option<Arc<dyn AIProvider>>,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

/// Marks a key busy until dropped.
struct InFlight {
    keys: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        lock(&self.keys).remove(&self.key);
    }
}

fn lock(keys: &Mutex<HashSet<String>>) -> MutexGuard<'_, HashSet<String>> {
    keys.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FeedbackGateway {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// A gateway without a provider; every call fails with `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Asks for a form skeleton about `topic`.
    ///
    /// Unknown question types fail decoding. Choice questions without
    /// options are given a placeholder option and other types lose any
    /// options they carry.
    pub async fn generate_form_structure(&self, topic: &str) -> Result<GeneratedForm, GatewayError> {
        let request = CompletionRequest::new(prompts::form_structure_prompt(topic), trace_id())
            .with_system_prompt(prompts::FORM_DESIGNER_INSTRUCTION)
            .with_response_schema(prompts::form_structure_schema());

        let key = format!("generate:{}", topic.trim());
        let mut form: GeneratedForm = self.request_json(key, request, "form structure").await?;

        if form.questions.len() != GENERATED_QUESTION_COUNT {
            tracing::warn!(
                expected = GENERATED_QUESTION_COUNT,
                actual = form.questions.len(),
                "Generated form has an unexpected number of questions"
            );
        }
        for (index, question) in form.questions.iter_mut().enumerate() {
            if question.normalize() {
                tracing::warn!(
                    index,
                    question_type = %question.question_type,
                    "Coerced options of generated question"
                );
            }
        }

        Ok(form)
    }

    /// Asks for a narrative summary of the digest.
    pub async fn summarize_feedback(
        &self,
        digest: &FeedbackDigest,
    ) -> Result<FeedbackSummary, GatewayError> {
        let data = digest
            .to_json()
            .map_err(|e| GatewayError::malformed("summary request", e.to_string()))?;
        let request = CompletionRequest::new(prompts::summary_prompt(digest, &data), trace_id())
            .with_system_prompt(prompts::FEEDBACK_ANALYST_INSTRUCTION)
            .with_response_schema(prompts::summary_schema());

        let key = format!("summarize:{}", digest.form_id);
        self.request_json(key, request, "feedback summary").await
    }

    fn begin(&self, key: String) -> Result<InFlight, GatewayError> {
        let mut keys = lock(&self.in_flight);
        if !keys.insert(key.clone()) {
            return Err(GatewayError::AlreadyInProgress { key });
        }
        Ok(InFlight {
            keys: Arc::clone(&self.in_flight),
            key,
        })
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        key: String,
        request: CompletionRequest,
        expected: &'static str,
    ) -> Result<T, GatewayError> {
        let provider = self.provider.as_ref().ok_or(GatewayError::NotConfigured)?;
        let _in_flight = self.begin(key)?;
        let trace_id = request.trace_id.clone();

        let response = provider.complete(request).await.map_err(|e| {
            tracing::error!(trace_id = %trace_id, error = %e, "AI provider call failed");
            GatewayError::Provider(e)
        })?;

        let text = response
            .content
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                tracing::error!(trace_id = %trace_id, finish_reason = ?response.finish_reason, "AI response had no text");
                GatewayError::EmptyResponse
            })?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(trace_id = %trace_id, error = %e, expected, "AI response did not match schema");
            GatewayError::malformed(expected, e.to_string())
        })
    }
}

fn trace_id() -> String {
    Uuid::new_v4().to_string()
}
