//! Route configuration for form endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_draft, delete_form, generate_form, get_analytics, get_form, list_forms,
    list_responses, save_form, share_link, submit_response, summarize_feedback, FormsAppState,
};

/// Creates the forms router with all endpoints.
///
/// Routes:
/// - `GET /api/forms` - List forms with response counts
/// - `POST /api/forms/drafts` - Start a new draft
/// - `POST /api/forms/generate` - Fill a draft from a topic via AI
/// - `GET|PUT|DELETE /api/forms/:id` - Fetch, save or delete a form
/// - `GET /api/forms/:id/share` - Respondent link
/// - `GET|POST /api/forms/:id/responses` - List or submit responses
/// - `GET /api/forms/:id/analytics` - Aggregated statistics
/// - `POST /api/forms/:id/summary` - AI summary of the feedback
pub fn forms_router() -> Router<FormsAppState> {
    Router::new()
        .route("/api/forms", get(list_forms))
        .route("/api/forms/drafts", post(create_draft))
        .route("/api/forms/generate", post(generate_form))
        .route(
            "/api/forms/:id",
            get(get_form).put(save_form).delete(delete_form),
        )
        .route("/api/forms/:id/share", get(share_link))
        .route(
            "/api/forms/:id/responses",
            get(list_responses).post(submit_response),
        )
        .route("/api/forms/:id/analytics", get(get_analytics))
        .route("/api/forms/:id/summary", post(summarize_feedback))
}
