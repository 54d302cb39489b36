use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::ReportConfig;

use super::domain::{ApplicationId, PartnershipSubmission, ReviewStatus};
use super::evaluation::{evaluate, Flag, Strength};
use super::intake::{IntakeGuard, IntakeRejection};
use super::report::{PlainTextRenderer, RenderError, ReportRenderer};
use super::repository::{
    ApplicationNotice, ApplicationRecord, ApplicationRepository, NotificationPublisher,
    RepositoryError,
};

pub const RECEIVED_TEMPLATE: &str = "partnership_application_received";

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("pv-{id:06}"))
}

/// Evaluated but unsaved submission, returned by [`PartnerVettingService::preview`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportPreview {
    pub score: u32,
    pub priority: &'static str,
    pub flags: Vec<Flag>,
    pub strengths: Vec<Strength>,
    pub report: String,
}

/// Service composing intake validation, the evaluator, rendering, storage, and notifications.
pub struct PartnerVettingService<R, N> {
    guard: IntakeGuard,
    repository: Arc<R>,
    notifier: Arc<N>,
    renderer: Arc<dyn ReportRenderer>,
}

impl<R, N> PartnerVettingService<R, N>
where
    R: ApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, report_config: ReportConfig) -> Self {
        Self::with_renderer(
            repository,
            notifier,
            Arc::new(PlainTextRenderer::new(report_config)),
        )
    }

    pub fn with_renderer(
        repository: Arc<R>,
        notifier: Arc<N>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            notifier,
            renderer,
        }
    }

    /// Validate, score, store, and announce a new application.
    pub fn submit(
        &self,
        submission: PartnershipSubmission,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let submission = self.guard.check(submission)?;
        let report = evaluate(&submission.application);
        let rendered_report = self.renderer.render(&submission.contact, &report)?;

        let status = if report.is_rejected() {
            ReviewStatus::AutoRejected
        } else {
            ReviewStatus::PendingReview
        };

        let record = ApplicationRecord {
            id: next_application_id(),
            received_at: report.generated_at,
            contact: submission.contact,
            report,
            rendered_report,
            status,
        };

        let stored = self.repository.insert(record)?;
        info!(
            application_id = %stored.id,
            score = stored.report.score,
            priority = stored.report.priority.label(),
            status = stored.status.label(),
            "partnership application evaluated"
        );

        if let Err(err) = self.notifier.publish(received_notice(&stored)) {
            warn!(application_id = %stored.id, error = %err, "notification dispatch failed");
        }

        Ok(stored)
    }

    /// Score a submission without storing it or notifying anyone.
    pub fn preview(
        &self,
        submission: PartnershipSubmission,
    ) -> Result<ReportPreview, ApplicationServiceError> {
        let submission = self.guard.check(submission)?;
        let report = evaluate(&submission.application);
        let rendered = self.renderer.render(&submission.contact, &report)?;

        Ok(ReportPreview {
            score: report.score,
            priority: report.priority.label(),
            flags: report.flags,
            strengths: report.strengths,
            report: rendered,
        })
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

fn received_notice(record: &ApplicationRecord) -> ApplicationNotice {
    let mut details = BTreeMap::new();
    details.insert("candidate".to_string(), record.contact.full_name.clone());
    details.insert("email".to_string(), record.contact.email.clone());
    details.insert("score".to_string(), record.report.score.to_string());
    details.insert(
        "priority".to_string(),
        record.report.priority.label().to_string(),
    );
    details.insert("status".to_string(), record.status.label().to_string());
    details.insert("report".to_string(), record.rendered_report.clone());

    ApplicationNotice {
        template: RECEIVED_TEMPLATE.to_string(),
        application_id: record.id.clone(),
        details,
    }
}

/// Error raised by the vetting service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
