//! ListFormsHandler - dashboard listing of forms with response counts.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::form::Form;
use crate::domain::foundation::FormId;
use crate::ports::{FormRepository, StorageError};

/// A form and how many responses it has collected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOverview {
    pub form: Form,
    pub response_count: usize,
}

pub struct ListFormsHandler {
    repository: Arc<dyn FormRepository>,
}

impl ListFormsHandler {
    pub fn new(repository: Arc<dyn FormRepository>) -> Self {
        Self { repository }
    }

    /// All forms in storage order.
    pub fn handle(&self) -> Result<Vec<FormOverview>, StorageError> {
        let mut counts: HashMap<FormId, usize> = HashMap::new();
        for response in self.repository.list_responses()? {
            *counts.entry(response.form_id().clone()).or_default() += 1;
        }

        Ok(self
            .repository
            .list_forms()?
            .into_iter()
            .map(|form| {
                let response_count = counts.get(form.id()).copied().unwrap_or(0);
                FormOverview {
                    form,
                    response_count,
                }
            })
            .collect())
    }
}
