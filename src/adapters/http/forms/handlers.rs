//! HTTP handlers for form endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::gateway::{FeedbackGateway, GatewayError};
use crate::application::handlers::{
    AnalyticsError, CreateDraftCommand, CreateDraftHandler, DeleteFormCommand, DeleteFormHandler,
    FormCommandError, GenerateFormCommand, GenerateFormHandler, GetFormAnalyticsHandler,
    GetFormAnalyticsQuery, GetFormHandler, GetFormQuery, ListFormsHandler, ListResponsesHandler,
    ListResponsesQuery, SaveFormCommand, SaveFormHandler, SubmitResponseCommand,
    SubmitResponseHandler, SummarizeFeedbackCommand, SummarizeFeedbackHandler,
};
use crate::domain::form::{share_url, Form};
use crate::domain::foundation::{AuthorId, FormId};
use crate::domain::response::ResponseSubmission;
use crate::ports::{FormRepository, IdGenerator, StorageError};

use super::dto::{CreateDraftRequest, ErrorResponse, GenerateFormRequest, ShareLinkResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct FormsAppState {
    pub repository: Arc<dyn FormRepository>,
    pub ids: Arc<dyn IdGenerator>,
    pub gateway: FeedbackGateway,
    /// Base URL share links point at.
    pub public_base_url: String,
}

impl FormsAppState {
    pub fn create_draft_handler(&self) -> CreateDraftHandler {
        CreateDraftHandler::new(self.ids.clone())
    }

    pub fn save_form_handler(&self) -> SaveFormHandler {
        SaveFormHandler::new(self.repository.clone())
    }

    pub fn delete_form_handler(&self) -> DeleteFormHandler {
        DeleteFormHandler::new(self.repository.clone())
    }

    pub fn get_form_handler(&self) -> GetFormHandler {
        GetFormHandler::new(self.repository.clone())
    }

    pub fn list_forms_handler(&self) -> ListFormsHandler {
        ListFormsHandler::new(self.repository.clone())
    }

    pub fn generate_form_handler(&self) -> GenerateFormHandler {
        GenerateFormHandler::new(self.gateway.clone(), self.ids.clone())
    }

    pub fn submit_response_handler(&self) -> SubmitResponseHandler {
        SubmitResponseHandler::new(self.repository.clone(), self.ids.clone())
    }

    pub fn list_responses_handler(&self) -> ListResponsesHandler {
        ListResponsesHandler::new(self.repository.clone())
    }

    pub fn analytics_handler(&self) -> GetFormAnalyticsHandler {
        GetFormAnalyticsHandler::new(self.repository.clone())
    }

    pub fn summarize_handler(&self) -> SummarizeFeedbackHandler {
        SummarizeFeedbackHandler::new(self.repository.clone(), self.gateway.clone())
    }

    fn require_form(&self, form_id: &FormId) -> Result<Form, FormsApiError> {
        self.get_form_handler()
            .handle(GetFormQuery {
                form_id: form_id.clone(),
            })?
            .ok_or_else(|| FormsApiError::NotFound(form_id.to_string()))
    }
}

fn parse_author(author_id: Option<String>) -> Result<Option<AuthorId>, FormCommandError> {
    author_id
        .map(AuthorId::new)
        .transpose()
        .map_err(FormCommandError::from)
}

// ════════════════════════════════════════════════════════════════════════════════
// Form Builder
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/forms/drafts - Start a new unsaved draft
pub async fn create_draft(
    State(state): State<FormsAppState>,
    request: Option<Json<CreateDraftRequest>>,
) -> Result<impl IntoResponse, FormsApiError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let cmd = CreateDraftCommand {
        author_id: parse_author(request.author_id)?,
    };

    let form = state.create_draft_handler().handle(cmd);
    Ok((StatusCode::CREATED, Json(form)))
}

/// GET /api/forms - Dashboard listing with response counts
pub async fn list_forms(
    State(state): State<FormsAppState>,
) -> Result<impl IntoResponse, FormsApiError> {
    let forms = state.list_forms_handler().handle()?;
    Ok(Json(forms))
}

/// GET /api/forms/:id - Fetch one form
pub async fn get_form(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, FormsApiError> {
    let form = state.require_form(&FormId::new(form_id))?;
    Ok(Json(form))
}

/// PUT /api/forms/:id - Save a form as a whole record
pub async fn save_form(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
    Json(form): Json<Form>,
) -> Result<impl IntoResponse, FormsApiError> {
    let expected = FormId::new(form_id);
    if form.id() != &expected {
        return Err(FormCommandError::IdMismatch {
            expected,
            actual: form.id().clone(),
        }
        .into());
    }

    let result = state.save_form_handler().handle(SaveFormCommand { form })?;
    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(result.form)))
}

/// DELETE /api/forms/:id - Delete a form and its responses
pub async fn delete_form(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, FormsApiError> {
    state.delete_form_handler().handle(DeleteFormCommand {
        form_id: FormId::new(form_id),
    })?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/forms/:id/share - Link for respondents
pub async fn share_link(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, FormsApiError> {
    let form = state.require_form(&FormId::new(form_id))?;
    Ok(Json(ShareLinkResponse {
        url: share_url(&state.public_base_url, form.id()),
    }))
}

/// POST /api/forms/generate - Fill a draft from a topic description
pub async fn generate_form(
    State(state): State<FormsAppState>,
    Json(request): Json<GenerateFormRequest>,
) -> Result<impl IntoResponse, FormsApiError> {
    let cmd = GenerateFormCommand {
        topic: request.topic,
        draft: request.draft,
        author_id: parse_author(request.author_id)?,
    };

    let form = state.generate_form_handler().handle(cmd).await?;
    Ok(Json(form))
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/forms/:id/responses - Submit answers
pub async fn submit_response(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
    Json(submission): Json<ResponseSubmission>,
) -> Result<impl IntoResponse, FormsApiError> {
    let response = state.submit_response_handler().handle(SubmitResponseCommand {
        form_id: FormId::new(form_id),
        submission,
    })?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/forms/:id/responses - Responses in submission order
pub async fn list_responses(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, FormsApiError> {
    let responses = state.list_responses_handler().handle(ListResponsesQuery {
        form_id: FormId::new(form_id),
    })?;
    Ok(Json(responses))
}

// ════════════════════════════════════════════════════════════════════════════════
// Analytics
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/forms/:id/analytics - Per-question statistics
pub async fn get_analytics(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, FormsApiError> {
    let analytics = state.analytics_handler().handle(GetFormAnalyticsQuery {
        form_id: FormId::new(form_id),
    })?;
    Ok(Json(analytics))
}

/// POST /api/forms/:id/summary - AI summary of the responses
pub async fn summarize_feedback(
    State(state): State<FormsAppState>,
    Path(form_id): Path<String>,
) -> Result<impl IntoResponse, FormsApiError> {
    let summary = state
        .summarize_handler()
        .handle(SummarizeFeedbackCommand {
            form_id: FormId::new(form_id),
        })
        .await?;
    Ok(Json(summary))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum FormsApiError {
    BadRequest(ErrorResponse),
    NotFound(String),
    Conflict(String),
    Unprocessable(String),
    BadGateway(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<StorageError> for FormsApiError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Storage failure");
        FormsApiError::Internal(err.to_string())
    }
}

impl From<GatewayError> for FormsApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::AlreadyInProgress { .. } => FormsApiError::Conflict(err.to_string()),
            GatewayError::NotConfigured => FormsApiError::ServiceUnavailable(err.to_string()),
            other => FormsApiError::BadGateway(other.to_string()),
        }
    }
}

impl From<FormCommandError> for FormsApiError {
    fn from(err: FormCommandError) -> Self {
        match err {
            FormCommandError::NotFound(id) => FormsApiError::NotFound(id.to_string()),
            FormCommandError::Submission(e) => FormsApiError::BadRequest(
                ErrorResponse::new("INVALID_SUBMISSION", e.to_string())
                    .with_details(json!({ "questionId": e.question_id().as_str() })),
            ),
            FormCommandError::IdMismatch { .. }
            | FormCommandError::Validation(_)
            | FormCommandError::Form(_) => {
                FormsApiError::BadRequest(ErrorResponse::bad_request(err.to_string()))
            }
            FormCommandError::Storage(e) => e.into(),
            FormCommandError::Gateway(e) => e.into(),
        }
    }
}

impl From<AnalyticsError> for FormsApiError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::NotFound(id) => FormsApiError::NotFound(id.to_string()),
            AnalyticsError::NoResponses(_) => FormsApiError::Unprocessable(err.to_string()),
            AnalyticsError::Storage(e) => e.into(),
            AnalyticsError::Gateway(e) => e.into(),
        }
    }
}

impl IntoResponse for FormsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            FormsApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            FormsApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Form", &id))
            }
            FormsApiError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorResponse::new("IN_PROGRESS", msg))
            }
            FormsApiError::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("NO_RESPONSES", msg),
            ),
            FormsApiError::BadGateway(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::new("AI_FAILURE", msg))
            }
            FormsApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("AI_NOT_CONFIGURED", msg),
            ),
            FormsApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
