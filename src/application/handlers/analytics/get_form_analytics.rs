//! GetFormAnalyticsHandler - per-question statistics for a form.

use std::sync::Arc;

use crate::application::handlers::AnalyticsError;
use crate::domain::analytics::{aggregate_form, FormAnalytics};
use crate::domain::foundation::FormId;
use crate::ports::FormRepository;

#[derive(Debug, Clone)]
pub struct GetFormAnalyticsQuery {
    pub form_id: FormId,
}

pub struct GetFormAnalyticsHandler {
    repository: Arc<dyn FormRepository>,
}

impl GetFormAnalyticsHandler {
    pub fn new(repository: Arc<dyn FormRepository>) -> Self {
        Self { repository }
    }

    pub fn handle(&self, query: GetFormAnalyticsQuery) -> Result<FormAnalytics, AnalyticsError> {
        let form = self
            .repository
            .find_form(&query.form_id)?
            .ok_or_else(|| AnalyticsError::NotFound(query.form_id.clone()))?;
        let responses = self.repository.list_responses_for_form(&query.form_id)?;

        Ok(aggregate_form(&form, &responses))
    }
}
