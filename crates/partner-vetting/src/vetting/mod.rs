//! Partnership application vetting: intake guard, scoring rules, report rendering, and the
//! storage/notification ports the submission endpoint depends on.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, CandidateContact, EquityAcceptance, EquityExpectation,
    ExperienceYears, FinancialSituation, FreeTextField, PartnershipSubmission, PartnershipType,
    ReviewStatus, Skill, TimeCommitment,
};
pub use evaluation::{
    evaluate, evaluate_at, Check, Flag, FlagCode, Priority, Report, ScoreAdjustment, Severity,
    Strength,
};
pub use intake::{FieldError, IntakeGuard, IntakeRejection};
pub use report::{JsonRenderer, PlainTextRenderer, RenderError, ReportRenderer};
pub use repository::{
    ApplicationNotice, ApplicationRecord, ApplicationRepository, ApplicationStatusView,
    NotificationError, NotificationPublisher, RepositoryError,
};
pub use router::application_router;
pub use service::{ApplicationServiceError, PartnerVettingService, ReportPreview};
