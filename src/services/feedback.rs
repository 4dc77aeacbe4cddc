//! Feedback service: newest-first listing and dated submissions

use crate::core::error::Result;
use crate::core::service::{DataService, Patch};
use crate::entities::{Feedback, FeedbackSubmission};
use crate::storage::InMemoryDataService;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};

/// Feedback collection with ticket-specific behaviour on top of the
/// generic in-memory store
#[derive(Clone, Default)]
pub struct FeedbackService {
    inner: InMemoryDataService<Feedback>,
}

impl FeedbackService {
    pub fn new(inner: InMemoryDataService<Feedback>) -> Self {
        Self { inner }
    }

    /// Submit a ticket dated today
    pub async fn submit(&self, submission: FeedbackSubmission) -> Result<Feedback> {
        self.submit_on(submission, Local::now().date_naive()).await
    }

    /// Submit a ticket dated `today`: title and description are trimmed and
    /// must not be blank, status starts as pending
    pub async fn submit_on(
        &self,
        submission: FeedbackSubmission,
        today: NaiveDate,
    ) -> Result<Feedback> {
        self.inner.create(submission.into_feedback(today)).await
    }

    pub fn len(&self) -> Result<usize> {
        self.inner.len()
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.inner.is_empty()
    }
}

#[async_trait]
impl DataService<Feedback> for FeedbackService {
    async fn create(&self, entity: Feedback) -> Result<Feedback> {
        self.inner.create(entity).await
    }

    async fn get(&self, id: &str) -> Result<Option<Feedback>> {
        self.inner.get(id).await
    }

    /// Newest first; tickets from the same day keep submission order
    async fn list(&self) -> Result<Vec<Feedback>> {
        let mut tickets = self.inner.list().await?;
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    async fn update(&self, id: &str, patch: Patch) -> Result<Option<Feedback>> {
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.inner.delete(id).await
    }

    async fn search(&self, field: &str, value: &str) -> Result<Vec<Feedback>> {
        self.inner.search(field, value).await
    }
}
