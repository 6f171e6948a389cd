//! Integration tests for the HTTP API.
//!
//! Drives the fully layered router with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use feedback_forms::adapters::ai::MockAIProvider;
use feedback_forms::adapters::http::{build_app, FormsAppState};
use feedback_forms::adapters::ids::SequentialIdGenerator;
use feedback_forms::adapters::storage::{FormStore, InMemoryKeyValueStore};
use feedback_forms::application::FeedbackGateway;
use feedback_forms::config::ServerConfig;

fn app(provider: &MockAIProvider) -> Router {
    let state = FormsAppState {
        repository: Arc::new(FormStore::new(Arc::new(InMemoryKeyValueStore::new()))),
        ids: Arc::new(SequentialIdGenerator::new("id-")),
        gateway: FeedbackGateway::new(Arc::new(provider.clone())),
        public_base_url: "https://forms.example.com".to_string(),
    };
    build_app(state, &ServerConfig::default())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn author_builds_collects_and_summarizes() {
    let provider = MockAIProvider::new().with_json_response(json!({
        "summary": "Respondents are split on the venue.",
        "strengths": ["Speakers"],
        "weaknesses": ["Venue"],
        "sentimentScore": 55.4
    }));
    let app = app(&provider);

    let (status, mut draft) = call(
        &app,
        Method::POST,
        "/api/forms/drafts",
        Some(json!({"authorId": "ada"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(draft["authorId"], "ada");
    let id = draft["id"].as_str().unwrap().to_string();

    draft["title"] = json!("Conference");
    draft["questions"] = json!([
        {"id": "venue", "type": "YES_NO", "label": "Did you like the venue?", "required": true},
        {"id": "notes", "type": "TEXT", "label": "Notes", "required": false}
    ]);
    let (status, _) = call(&app, Method::PUT, &format!("/api/forms/{}", id), Some(draft)).await;
    assert_eq!(status, StatusCode::CREATED);

    for (answer, name) in [("Yes", "Grace"), ("Yes", ""), ("Yes", ""), ("No", "Linus")] {
        let (status, _) = call(
            &app,
            Method::POST,
            &format!("/api/forms/{}/responses", id),
            Some(json!({
                "answers": [{"questionId": "venue", "value": answer}],
                "respondentName": name
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, analytics) =
        call(&app, Method::GET, &format!("/api/forms/{}/analytics", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let venue = &analytics["questions"][0]["breakdown"];
    assert_eq!(venue["kind"], "yesNo");
    assert_eq!(venue["yes"]["percentage"], 75);
    assert_eq!(venue["no"]["percentage"], 25);

    let (status, summary) =
        call(&app, Method::POST, &format!("/api/forms/{}/summary", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["weaknesses"], json!(["Venue"]));

    let (_, listing) = call(&app, Method::GET, "/api/forms", None).await;
    assert_eq!(listing[0]["responseCount"], 4);
}

#[tokio::test]
async fn provider_failure_surfaces_as_bad_gateway() {
    let provider = MockAIProvider::new().with_empty_response();
    let app = app(&provider);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/forms/generate",
        Some(json!({"topic": "Team offsite"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "AI_FAILURE");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn blank_topic_is_rejected_before_the_provider() {
    let provider = MockAIProvider::new();
    let app = app(&provider);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/forms/generate",
        Some(json!({"topic": "  "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}
