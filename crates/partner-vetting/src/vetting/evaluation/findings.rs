use serde::{Deserialize, Serialize};

use super::super::domain::{
    EquityExpectation, ExperienceYears, FreeTextField, Skill, TimeCommitment,
};

/// Marker attached to each flag so reviewers can triage at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    DealBreaker,
    Warning,
    Caution,
}

impl Severity {
    pub const fn marker(self) -> &'static str {
        match self {
            Severity::DealBreaker => "DEAL-BREAKER",
            Severity::Warning => "WARNING",
            Severity::Caution => "CAUTION",
        }
    }
}

/// Keyed identifier for a negative observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagCode {
    UnconfirmedUnderstanding,
    NeedsImmediatePayment,
    ConditionalEquityAcceptance,
    EquityAcceptanceUnset,
    RevenueShareMissing,
    EquityExpectationTooHigh { bucket: EquityExpectation },
    EquityExpectationUnset,
    FeesMissing,
    BusinessDescriptionMissing,
    LimitedRunway,
    NeedsIncome,
    FinancialsUndisclosed,
    LimitedExperience,
    PartTimeCommitment,
    CommitmentNeedsClarification,
    NoSkills,
    AnswerMissing { field: FreeTextField },
}

impl FlagCode {
    pub fn message(&self) -> String {
        match self {
            FlagCode::UnconfirmedUnderstanding => {
                "Did not confirm understanding of the equity-based opportunity".to_string()
            }
            FlagCode::NeedsImmediatePayment => "Needs immediate payment".to_string(),
            FlagCode::ConditionalEquityAcceptance => {
                "Accepts equity only with conditions".to_string()
            }
            FlagCode::EquityAcceptanceUnset => "Equity acceptance not specified".to_string(),
            FlagCode::RevenueShareMissing => "Monthly Revenue Share not specified".to_string(),
            FlagCode::EquityExpectationTooHigh { bucket } => {
                format!("High equity expectation ({})", bucket.label())
            }
            FlagCode::EquityExpectationUnset => "Equity expectation not specified".to_string(),
            FlagCode::FeesMissing => "Neither upfront nor monthly fee specified".to_string(),
            FlagCode::BusinessDescriptionMissing => "Business description not provided".to_string(),
            FlagCode::LimitedRunway => "Limited financial runway".to_string(),
            FlagCode::NeedsIncome => "Needs income from this role".to_string(),
            FlagCode::FinancialsUndisclosed => "Financial situation not disclosed".to_string(),
            FlagCode::LimitedExperience => "Limited experience (0-2 years)".to_string(),
            FlagCode::PartTimeCommitment => "Part-time commitment only".to_string(),
            FlagCode::CommitmentNeedsClarification => {
                "Flexible time commitment needs clarification".to_string()
            }
            FlagCode::NoSkills => "No skills selected".to_string(),
            FlagCode::AnswerMissing { field } => format!("{}: not provided", field.label()),
        }
    }
}

/// A negative observation tagged with its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub code: FlagCode,
    pub severity: Severity,
}

impl Flag {
    pub fn new(code: FlagCode, severity: Severity) -> Self {
        Self { code, severity }
    }

    pub fn is_deal_breaker(&self) -> bool {
        self.severity == Severity::DealBreaker
    }

    pub fn message(&self) -> String {
        self.code.message()
    }
}

/// Keyed identifier for a positive observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    ConfirmedUnderstanding,
    ComfortableWithEquity,
    OpenToHybrid,
    RevenueShareSpecified { monthly_usd: f64 },
    ReasonableEquityExpectation { bucket: EquityExpectation },
    FeesSpecified {
        upfront_usd: Option<f64>,
        monthly_usd: Option<f64>,
    },
    BusinessDescribed,
    FinanciallyStable,
    Experienced { years: ExperienceYears },
    Committed { commitment: TimeCommitment },
    Skilled { skills: Vec<Skill>, weight: u32 },
    AnswerProvided { field: FreeTextField },
}

impl Strength {
    pub fn message(&self) -> String {
        match self {
            Strength::ConfirmedUnderstanding => {
                "Confirmed understanding of the equity-based opportunity".to_string()
            }
            Strength::ComfortableWithEquity => "Fully comfortable with equity".to_string(),
            Strength::OpenToHybrid => "Open to a hybrid arrangement".to_string(),
            Strength::RevenueShareSpecified { monthly_usd } => {
                format!("Monthly revenue share: {}", format_usd(*monthly_usd))
            }
            Strength::ReasonableEquityExpectation { bucket } => match bucket {
                EquityExpectation::Negotiable => "Equity expectation is negotiable".to_string(),
                other => format!("Reasonable equity expectation ({})", other.label()),
            },
            Strength::FeesSpecified {
                upfront_usd,
                monthly_usd,
            } => {
                let mut parts = Vec::new();
                if let Some(amount) = upfront_usd {
                    parts.push(format!("upfront {}", format_usd(*amount)));
                }
                if let Some(amount) = monthly_usd {
                    parts.push(format!("monthly {}", format_usd(*amount)));
                }
                format!("Fees specified: {}", parts.join(", "))
            }
            Strength::BusinessDescribed => "Business description provided".to_string(),
            Strength::FinanciallyStable => "Financially stable".to_string(),
            Strength::Experienced { years } => format!("Experience: {}", years.label()),
            Strength::Committed { commitment } => {
                format!("Time commitment: {}", commitment.label())
            }
            Strength::Skilled { skills, weight } => {
                let names: Vec<&str> = skills.iter().map(|skill| skill.label()).collect();
                format!("Skills ({}): {}", weight, names.join(", "))
            }
            Strength::AnswerProvided { field } => format!("{}: provided", field.label()),
        }
    }
}

/// `$1,250` or `$1,250.50`. Works on the decimal rendering, so no magnitude is truncated.
pub fn format_usd(amount: f64) -> String {
    let rendered = format!("{:.2}", amount.abs());
    let (digits, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && rendered.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    if fraction == "00" {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction}")
    }
}
