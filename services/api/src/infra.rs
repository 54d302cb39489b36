use metrics_exporter_prometheus::PrometheusHandle;
use partner_vetting::vetting::{
    ApplicationId, ApplicationNotice, ApplicationRecord, ApplicationRepository,
    NotificationError, NotificationPublisher, RepositoryError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl InMemoryApplicationRepository {
    fn records(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ApplicationId, ApplicationRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let mut records: Vec<ApplicationRecord> = self.records()?.values().cloned().collect();
        records.sort_by(|a, b| {
            b.received_at
                .cmp(&a.received_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        records.truncate(limit);
        Ok(records)
    }
}

/// Writes notices to the log; stands in for the partnerships inbox.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LoggingNotificationPublisher;

impl NotificationPublisher for LoggingNotificationPublisher {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotificationError> {
        info!(
            template = %notice.template,
            application_id = %notice.application_id,
            score = notice.details.get("score").map(String::as_str).unwrap_or("-"),
            priority = notice.details.get("priority").map(String::as_str).unwrap_or("-"),
            "partnership notice dispatched"
        );
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct RecordingNotificationPublisher {
    events: Arc<Mutex<Vec<ApplicationNotice>>>,
}

impl RecordingNotificationPublisher {
    pub(crate) fn events(&self) -> Vec<ApplicationNotice> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl NotificationPublisher for RecordingNotificationPublisher {
    fn publish(&self, notice: ApplicationNotice) -> Result<(), NotificationError> {
        self.events
            .lock()
            .map_err(|_| NotificationError::Transport("notice buffer poisoned".to_string()))?
            .push(notice);
        Ok(())
    }
}
