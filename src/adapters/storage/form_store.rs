//! Form Store - the forms/responses repository over any key-value backend.
//!
//! Each collection is one JSON array stored under its own key. Every write
//! loads the collection, changes it and stores the whole array back, under
//! a process-wide lock so concurrent requests do not lose each other's
//! writes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::form::Form;
use crate::domain::foundation::FormId;
use crate::domain::response::FormResponse;
use crate::ports::{FormRepository, KeyValueStore, StorageError};

/// Storage key of the forms collection.
pub const FORMS_KEY: &str = "forms";

/// Storage key of the responses collection.
pub const RESPONSES_KEY: &str = "responses";

/// Repository for forms and responses backed by a [`KeyValueStore`].
pub struct FormStore {
    backend: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl FormStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self, key: &str) -> Result<MutexGuard<'_, ()>, StorageError> {
        self.write_lock
            .lock()
            .map_err(|_| StorageError::io(key, "write lock poisoned"))
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        match self.backend.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!(key, error = %e, "Stored collection is not valid JSON");
                StorageError::corrupt(key, e.to_string())
            }),
        }
    }

    fn store<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)
            .map_err(|e| StorageError::serialization(key, e.to_string()))?;
        self.backend.set(key, &raw)?;
        tracing::debug!(key, records = items.len(), "Persisted collection");
        Ok(())
    }
}

impl FormRepository for FormStore {
    fn list_forms(&self) -> Result<Vec<Form>, StorageError> {
        self.load(FORMS_KEY)
    }

    fn find_form(&self, id: &FormId) -> Result<Option<Form>, StorageError> {
        Ok(self
            .list_forms()?
            .into_iter()
            .find(|form| form.id() == id))
    }

    fn save_form(&self, form: &Form) -> Result<(), StorageError> {
        let _guard = self.lock(FORMS_KEY)?;
        let mut forms: Vec<Form> = self.load(FORMS_KEY)?;

        match forms.iter_mut().find(|stored| stored.id() == form.id()) {
            Some(stored) => *stored = form.clone(),
            None => forms.push(form.clone()),
        }

        self.store(FORMS_KEY, &forms)
    }

    fn delete_form(&self, id: &FormId) -> Result<(), StorageError> {
        let _guard = self.lock(FORMS_KEY)?;

        // Responses go first so an interrupted delete never leaves orphans.
        let responses: Vec<FormResponse> = self.load(RESPONSES_KEY)?;
        let before = responses.len();
        let kept: Vec<FormResponse> = responses
            .into_iter()
            .filter(|r| r.form_id() != id)
            .collect();
        if kept.len() != before {
            self.store(RESPONSES_KEY, &kept)?;
        }

        let forms: Vec<Form> = self.load(FORMS_KEY)?;
        let count = forms.len();
        let remaining: Vec<Form> = forms.into_iter().filter(|f| f.id() != id).collect();
        if remaining.len() != count {
            self.store(FORMS_KEY, &remaining)?;
        }

        tracing::debug!(
            form_id = %id,
            responses_removed = before - kept.len(),
            form_removed = remaining.len() != count,
            "Deleted form"
        );
        Ok(())
    }

    fn list_responses(&self) -> Result<Vec<FormResponse>, StorageError> {
        self.load(RESPONSES_KEY)
    }

    fn list_responses_for_form(&self, form_id: &FormId) -> Result<Vec<FormResponse>, StorageError> {
        Ok(self
            .list_responses()?
            .into_iter()
            .filter(|r| r.form_id() == form_id)
            .collect())
    }

    fn save_response(&self, response: &FormResponse) -> Result<(), StorageError> {
        let _guard = self.lock(RESPONSES_KEY)?;
        let mut responses: Vec<FormResponse> = self.load(RESPONSES_KEY)?;
        responses.push(response.clone());
        self.store(RESPONSES_KEY, &responses)
    }
}
