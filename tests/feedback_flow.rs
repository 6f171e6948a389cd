//! End-to-end feedback flow over the application handlers.
//!
//! Wires real storage adapters (in-memory and file-backed) with the mock AI
//! provider and walks a form from draft to summary.

use std::sync::Arc;

use serde_json::json;

use feedback_forms::adapters::ai::MockAIProvider;
use feedback_forms::adapters::ids::SequentialIdGenerator;
use feedback_forms::adapters::storage::{FileKeyValueStore, FormStore, InMemoryKeyValueStore};
use feedback_forms::application::handlers::{
    AnalyticsError, CreateDraftCommand, CreateDraftHandler, DeleteFormCommand, DeleteFormHandler,
    GenerateFormCommand, GenerateFormHandler, GetFormAnalyticsHandler, GetFormAnalyticsQuery,
    ListFormsHandler, SaveFormCommand, SaveFormHandler, SubmitResponseCommand,
    SubmitResponseHandler, SummarizeFeedbackCommand, SummarizeFeedbackHandler,
};
use feedback_forms::application::FeedbackGateway;
use feedback_forms::domain::analytics::Breakdown;
use feedback_forms::domain::form::{Form, Question, QuestionType};
use feedback_forms::domain::foundation::{FormId, QuestionId, Timestamp};
use feedback_forms::domain::response::{Respondent, ResponseSubmission};
use feedback_forms::ports::{FormRepository, IdGenerator, KeyValueStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    repository: Arc<dyn FormRepository>,
    ids: Arc<dyn IdGenerator>,
    provider: MockAIProvider,
}

impl Harness {
    fn over(backend: Arc<dyn KeyValueStore>, provider: MockAIProvider) -> Self {
        Self {
            repository: Arc::new(FormStore::new(backend)),
            ids: Arc::new(SequentialIdGenerator::new("id-")),
            provider,
        }
    }

    fn in_memory(provider: MockAIProvider) -> Self {
        Self::over(Arc::new(InMemoryKeyValueStore::new()), provider)
    }

    fn gateway(&self) -> FeedbackGateway {
        FeedbackGateway::new(Arc::new(self.provider.clone()))
    }

    fn save(&self, form: Form) -> Form {
        SaveFormHandler::new(self.repository.clone())
            .handle(SaveFormCommand { form })
            .unwrap()
            .form
    }

    fn submit(&self, form_id: &str, submission: ResponseSubmission) {
        SubmitResponseHandler::new(self.repository.clone(), self.ids.clone())
            .handle(SubmitResponseCommand {
                form_id: FormId::new(form_id),
                submission,
            })
            .unwrap();
    }
}

fn rating_form(id: &str) -> Form {
    Form::new(FormId::new(id), None, Timestamp::from_millis(0).unwrap())
        .with_title("Session feedback")
        .with_question(
            Question::new(QuestionId::new("q1"), QuestionType::Rating)
                .with_label("Overall")
                .with_required(false),
        )
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn unanswered_rating_contributes_nothing() {
    let h = Harness::in_memory(MockAIProvider::new());
    h.save(rating_form("f1"));

    h.submit(
        "f1",
        ResponseSubmission::default().answer(QuestionId::new("q1"), 4_i64),
    );
    h.submit("f1", ResponseSubmission::default());

    let analytics = GetFormAnalyticsHandler::new(h.repository.clone())
        .handle(GetFormAnalyticsQuery {
            form_id: FormId::new("f1"),
        })
        .unwrap();

    assert_eq!(analytics.total_responses, 2);
    let q1 = analytics.summary_for(&QuestionId::new("q1")).unwrap();
    match &q1.breakdown {
        Breakdown::Rating { buckets } => {
            let counts: Vec<(u8, usize)> = buckets.iter().map(|b| (b.rating, b.count)).collect();
            assert_eq!(counts, vec![(1, 0), (2, 0), (3, 0), (4, 1), (5, 0)]);
        }
        other => panic!("expected rating breakdown, got {:?}", other),
    }
}

#[tokio::test]
async fn draft_to_summary() {
    let provider = MockAIProvider::new()
        .with_json_response(json!({
            "title": "Workshop Feedback",
            "description": "How did the workshop go?",
            "questions": [
                {"label": "How useful was it?", "type": "RATING", "required": true},
                {"label": "Favourite part", "type": "MULTIPLE_CHOICE", "required": true,
                 "options": ["Talks", "Labs"]},
                {"label": "Would you come back?", "type": "YES_NO", "required": true},
                {"label": "Anything else?", "type": "TEXT", "required": false},
                {"label": "Pace", "type": "RATING", "required": false}
            ]
        }))
        .with_json_response(json!({
            "summary": "Attendees enjoyed the labs.",
            "strengths": ["Hands-on labs"],
            "weaknesses": ["Pace"],
            "sentimentScore": 82
        }));
    let h = Harness::in_memory(provider);

    let draft = CreateDraftHandler::new(h.ids.clone()).handle(CreateDraftCommand::default());
    let draft_id = draft.id().clone();
    let mut form = GenerateFormHandler::new(h.gateway(), h.ids.clone())
        .handle(GenerateFormCommand {
            topic: "Rust workshop".to_string(),
            draft: Some(draft),
            author_id: None,
        })
        .await
        .unwrap();
    assert_eq!(form.id(), &draft_id);
    assert_eq!(form.questions().len(), 5);

    form.set_published(true);
    let form = h.save(form);
    let ids: Vec<QuestionId> = form.questions().iter().map(|q| q.id().clone()).collect();

    h.submit(
        form.id().as_str(),
        ResponseSubmission::new(Respondent::named("Grace"))
            .answer(ids[0].clone(), 5_i64)
            .answer(ids[1].clone(), "Labs")
            .answer(ids[2].clone(), "Yes")
            .answer(ids[3].clone(), "More labs please"),
    );
    h.submit(
        form.id().as_str(),
        ResponseSubmission::default()
            .answer(ids[0].clone(), 4_i64)
            .answer(ids[1].clone(), "Labs")
            .answer(ids[2].clone(), "No"),
    );

    let analytics = GetFormAnalyticsHandler::new(h.repository.clone())
        .handle(GetFormAnalyticsQuery {
            form_id: form.id().clone(),
        })
        .unwrap();
    assert_eq!(analytics.attributed.value(), 50);
    assert_eq!(analytics.questions[1].breakdown.option_count("Labs"), 2);
    match &analytics.questions[2].breakdown {
        Breakdown::YesNo { yes, no } => {
            assert_eq!((yes.count, no.count), (1, 1));
            assert_eq!(yes.percentage.value(), 50);
        }
        other => panic!("expected yes/no breakdown, got {:?}", other),
    }

    let summary = SummarizeFeedbackHandler::new(h.repository.clone(), h.gateway())
        .handle(SummarizeFeedbackCommand {
            form_id: form.id().clone(),
        })
        .await
        .unwrap();
    assert_eq!(summary.strengths, vec!["Hands-on labs".to_string()]);
    assert_eq!(summary.sentiment().value(), 82);

    let calls = h.provider.get_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].prompt.contains("More labs please"));
}

#[tokio::test]
async fn summary_requires_responses() {
    let h = Harness::in_memory(MockAIProvider::new());
    h.save(rating_form("f1"));

    let err = SummarizeFeedbackHandler::new(h.repository.clone(), h.gateway())
        .handle(SummarizeFeedbackCommand {
            form_id: FormId::new("f1"),
        })
        .await
        .unwrap_err();

    assert_eq!(err, AnalyticsError::NoResponses(FormId::new("f1")));
    assert_eq!(h.provider.call_count(), 0);
}

#[test]
fn delete_cascades_to_responses() {
    let h = Harness::in_memory(MockAIProvider::new());
    h.save(rating_form("f1"));
    h.save(rating_form("f2"));
    h.submit("f1", ResponseSubmission::default().answer(QuestionId::new("q1"), 3_i64));
    h.submit("f2", ResponseSubmission::default().answer(QuestionId::new("q1"), 5_i64));

    DeleteFormHandler::new(h.repository.clone())
        .handle(DeleteFormCommand {
            form_id: FormId::new("f1"),
        })
        .unwrap();

    let listed = ListFormsHandler::new(h.repository.clone()).handle().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].form.id().as_str(), "f2");
    assert_eq!(listed[0].response_count, 1);
    assert!(h
        .repository
        .list_responses_for_form(&FormId::new("f1"))
        .unwrap()
        .is_empty());
}

#[test]
fn file_backend_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let h = Harness::over(
            Arc::new(FileKeyValueStore::new(dir.path())),
            MockAIProvider::new(),
        );
        h.save(rating_form("f1"));
        h.submit("f1", ResponseSubmission::default().answer(QuestionId::new("q1"), 2_i64));
    }

    let reopened = FormStore::new(Arc::new(FileKeyValueStore::new(dir.path())));
    let forms = reopened.list_forms().unwrap();
    assert_eq!(forms, vec![rating_form("f1")]);
    assert_eq!(reopened.list_responses().unwrap().len(), 1);
}
