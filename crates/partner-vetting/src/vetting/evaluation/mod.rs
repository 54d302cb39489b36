mod findings;
mod policy;
mod rules;
mod skills;

pub use findings::{format_usd, Flag, FlagCode, Severity, Strength};
pub use policy::{Priority, HIGH_PRIORITY_THRESHOLD, MEDIUM_PRIORITY_THRESHOLD};
pub use skills::{skill_weight, total_weight, SKILL_WEIGHTS};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Application, FreeTextField};
use rules::{compensation_summary, score_application};

/// Scored check a point adjustment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Gate,
    EquityAcceptance,
    RevenueShare,
    EquityExpectation,
    Fees,
    BusinessDescription,
    FinancialSituation,
    Experience,
    TimeCommitment,
    Skills,
    FreeText(FreeTextField),
}

/// Nominal point change recorded before the zero floor is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAdjustment {
    pub check: Check,
    pub points: i32,
}

/// Evaluation output: score, tier, and the observations that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub score: u32,
    pub priority: Priority,
    pub flags: Vec<Flag>,
    pub strengths: Vec<Strength>,
    pub adjustments: Vec<ScoreAdjustment>,
    pub compensation_summary: String,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// True when the candidate failed the understanding gate and nothing else was scored.
    pub fn is_rejected(&self) -> bool {
        self.flags
            .iter()
            .any(|flag| flag.code == FlagCode::UnconfirmedUnderstanding)
    }

    pub fn deal_breakers(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter().filter(|flag| flag.is_deal_breaker())
    }

    /// Sum of the nominal adjustments recorded for the given checks.
    pub fn points_for(&self, checks: &[Check]) -> i32 {
        self.adjustments
            .iter()
            .filter(|adjustment| checks.contains(&adjustment.check))
            .map(|adjustment| adjustment.points)
            .sum()
    }
}

/// Score an application, stamping the report with the current time.
pub fn evaluate(application: &Application) -> Report {
    evaluate_at(application, Utc::now())
}

pub fn evaluate_at(application: &Application, generated_at: DateTime<Utc>) -> Report {
    let sheet = score_application(application);

    Report {
        score: sheet.score,
        priority: Priority::from_score(sheet.score),
        flags: sheet.flags,
        strengths: sheet.strengths,
        adjustments: sheet.adjustments,
        compensation_summary: compensation_summary(application),
        generated_at,
    }
}
