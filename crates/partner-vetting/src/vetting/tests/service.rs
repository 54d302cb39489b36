use std::sync::Arc;

use super::common::*;
use crate::config::ReportConfig;
use crate::vetting::domain::{ApplicationId, ReviewStatus};
use crate::vetting::evaluation::Priority;
use crate::vetting::repository::{ApplicationRepository, RepositoryError};
use crate::vetting::service::RECEIVED_TEMPLATE;
use crate::vetting::{ApplicationServiceError, PartnerVettingService};

#[test]
fn submit_stores_scored_record_and_notifies() {
    let (service, repository, notifier) = build_service();

    let record = service.submit(submission()).expect("submission succeeds");

    assert!(record.id.0.starts_with("pv-"));
    assert_eq!(record.status, ReviewStatus::PendingReview);
    assert_eq!(record.report.score, FAVORABLE_SCORE);
    assert_eq!(record.report.priority, Priority::High);
    assert!(record.rendered_report.contains("Candidate: Jordan Rivera"));

    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.rendered_report, record.rendered_report);

    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, RECEIVED_TEMPLATE);
    assert_eq!(events[0].application_id, record.id);
    assert_eq!(
        events[0].details.get("priority").map(String::as_str),
        Some("HIGH")
    );
}

#[test]
fn unconfirmed_applicants_are_auto_rejected() {
    let (service, _, notifier) = build_service();

    let record = service
        .submit(unconfirmed_submission())
        .expect("submission succeeds");

    assert_eq!(record.status, ReviewStatus::AutoRejected);
    assert_eq!(record.report.score, 0);
    assert_eq!(
        notifier.events()[0].details.get("status").map(String::as_str),
        Some("auto_rejected")
    );
}

#[test]
fn submit_propagates_intake_rejections() {
    let (service, repository, notifier) = build_service();

    match service.submit(invalid_contact_submission()) {
        Err(ApplicationServiceError::Intake(rejection)) => {
            assert_eq!(rejection.errors.len(), 2)
        }
        other => panic!("expected intake rejection, got {other:?}"),
    }
    assert_eq!(repository.len(), 0);
    assert!(notifier.events().is_empty());
}

#[test]
fn notification_failures_do_not_fail_submission() {
    let repository = Arc::new(MemoryRepository::default());
    let service = PartnerVettingService::new(
        repository.clone(),
        Arc::new(OfflineNotifier),
        ReportConfig::default(),
    );

    let record = service.submit(submission()).expect("stored despite notifier");

    assert!(repository.fetch(&record.id).expect("fetch").is_some());
}

#[test]
fn submit_propagates_repository_conflicts() {
    let service = PartnerVettingService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifier::default()),
        ReportConfig::default(),
    );

    match service.submit(submission()) {
        Err(ApplicationServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn preview_scores_without_storing() {
    let (service, repository, notifier) = build_service();

    let preview = service.preview(submission()).expect("preview succeeds");

    assert_eq!(preview.score, FAVORABLE_SCORE);
    assert_eq!(preview.priority, "HIGH");
    assert!(preview.flags.is_empty());
    assert!(!preview.strengths.is_empty());
    assert!(preview.report.contains("Score: 172"));
    assert_eq!(repository.len(), 0);
    assert!(notifier.events().is_empty());
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service();

    match service.get(&ApplicationId("missing".to_string())) {
        Err(ApplicationServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn recent_returns_stored_records() {
    let (service, _, _) = build_service();
    service.submit(submission()).expect("first");
    service.submit(unconfirmed_submission()).expect("second");

    let recent = service.recent(10).expect("recent succeeds");
    assert_eq!(recent.len(), 2);
    assert_eq!(service.recent(1).expect("recent succeeds").len(), 1);
}

#[test]
fn status_view_echoes_report() {
    let (service, _, _) = build_service();
    let record = service.submit(submission()).expect("submission succeeds");

    let view = record.status_view();

    assert_eq!(view.application_id, record.id);
    assert_eq!(view.status, "pending_review");
    assert_eq!(view.score, FAVORABLE_SCORE);
    assert_eq!(view.priority, "HIGH");
    assert_eq!(view.report, record.rendered_report);
}
