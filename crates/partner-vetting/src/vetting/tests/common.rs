use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::config::ReportConfig;
use crate::vetting::domain::{
    Application, ApplicationId, CandidateContact, EquityAcceptance, EquityExpectation,
    ExperienceYears, FinancialSituation, PartnershipSubmission, PartnershipType, Skill,
    TimeCommitment,
};
use crate::vetting::repository::{
    ApplicationNotice, ApplicationRecord, ApplicationRepository, NotificationError,
    NotificationPublisher, RepositoryError,
};
use crate::vetting::{application_router, PartnerVettingService};

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Equity candidate who hits every positive bucket.
pub(super) fn favorable_application() -> Application {
    Application {
        confirmed_understanding: true,
        partnership_type: PartnershipType::Equity,
        equity_acceptance: EquityAcceptance::FullyComfortable,
        equity_expectation: EquityExpectation::FiveToTen,
        monthly_revenue_share_usd: None,
        upfront_fee_usd: None,
        monthly_fee_usd: None,
        business_description: None,
        financial_situation: FinancialSituation::Stable,
        experience_years: ExperienceYears::TenPlus,
        time_commitment: TimeCommitment::FullTime,
        skills: BTreeSet::from([Skill::Tech, Skill::ProductStrategy]),
        previous_companies: Some("Shopify, Stripe".to_string()),
        value_proposition: Some("Scaled two marketplaces past $10M ARR".to_string()),
        network: Some("Creator economy founders and angels".to_string()),
        why_now: Some("Just exited my last company".to_string()),
        platform_tool_experience: Some("Built internal tooling on similar platforms".to_string()),
        creator_entrepreneur_experience: Some("Ran a 200k subscriber channel".to_string()),
        growth_vision: Some("Own partnerships and self-serve growth".to_string()),
    }
}

/// Score of [`favorable_application`]: 10 + 25 + 15 + 20 + 30 + 20 + 17 + 35.
pub(super) const FAVORABLE_SCORE: u32 = 172;

pub(super) fn hybrid_application(monthly_revenue_share_usd: Option<f64>) -> Application {
    Application {
        partnership_type: PartnershipType::Hybrid,
        equity_acceptance: EquityAcceptance::PrefersHybrid,
        monthly_revenue_share_usd,
        ..favorable_application()
    }
}

/// Monetary candidate with nothing filled in and every weak bucket selected.
pub(super) fn empty_monetary_application() -> Application {
    Application {
        confirmed_understanding: true,
        partnership_type: PartnershipType::MonetaryBusiness,
        equity_acceptance: EquityAcceptance::Unset,
        equity_expectation: EquityExpectation::Unset,
        monthly_revenue_share_usd: None,
        upfront_fee_usd: None,
        monthly_fee_usd: None,
        business_description: Some("   ".to_string()),
        financial_situation: FinancialSituation::NeedsIncome,
        experience_years: ExperienceYears::ZeroToTwo,
        time_commitment: TimeCommitment::PartTime,
        skills: BTreeSet::new(),
        previous_companies: None,
        value_proposition: None,
        network: None,
        why_now: None,
        platform_tool_experience: None,
        creator_entrepreneur_experience: None,
        growth_vision: None,
    }
}

pub(super) fn contact() -> CandidateContact {
    CandidateContact {
        full_name: "Jordan Rivera".to_string(),
        email: "jordan@example.com".to_string(),
        phone: Some("+1 555 0100".to_string()),
        location: Some("Austin, TX".to_string()),
        linkedin_url: None,
    }
}

pub(super) fn submission() -> PartnershipSubmission {
    PartnershipSubmission {
        contact: contact(),
        application: favorable_application(),
    }
}

pub(super) fn unconfirmed_submission() -> PartnershipSubmission {
    let mut submission = submission();
    submission.application.confirmed_understanding = false;
    submission
}

pub(super) fn invalid_contact_submission() -> PartnershipSubmission {
    let mut submission = submission();
    submission.contact.full_name = "  ".to_string();
    submission.contact.email = "not-an-email".to_string();
    submission
}

pub(super) fn build_service() -> (
    PartnerVettingService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service =
        PartnerVettingService::new(repository.clone(), notifier.clone(), ReportConfig::default());
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<ApplicationNotice>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<ApplicationNotice> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotifier {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct OfflineNotifier;

impl NotificationPublisher for OfflineNotifier {
    fn publish(&self, _notice: ApplicationNotice) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl ApplicationRepository for ConflictRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn application_router_with_service(
    service: PartnerVettingService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    application_router(Arc::new(service))
}
