use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, CandidateContact, ReviewStatus};
use super::evaluation::Report;

/// Stored application: who applied, how they scored, and the text reviewers see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub contact: CandidateContact,
    pub report: Report,
    pub rendered_report: String,
    pub status: ReviewStatus,
    pub received_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id.clone(),
            status: self.status.label(),
            score: self.report.score,
            priority: self.report.priority.label(),
            report: self.rendered_report.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hook (e-mail to the partnerships inbox, chat webhooks, ...).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationNotice {
    pub template: String,
    pub application_id: ApplicationId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Response body for submit and lookup endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub status: &'static str,
    pub score: u32,
    pub priority: &'static str,
    pub report: String,
}
