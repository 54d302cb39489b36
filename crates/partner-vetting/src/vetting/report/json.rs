use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::config::ReportConfig;

use super::super::domain::CandidateContact;
use super::super::evaluation::{FlagCode, Report, Severity};
use super::{RenderError, ReportRenderer};

#[derive(Debug, Clone, Serialize)]
pub struct FlagLine {
    pub code: FlagCode,
    pub severity: Severity,
    pub message: String,
}

/// Serializable projection of a report for API consumers that render their own UI.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView<'a> {
    pub candidate: &'a CandidateContact,
    pub score: u32,
    pub priority: &'static str,
    pub compensation_summary: &'a str,
    pub flags: Vec<FlagLine>,
    pub strengths: Vec<String>,
    pub generated_at: DateTime<FixedOffset>,
    pub zone_label: &'a str,
}

impl<'a> ReportView<'a> {
    pub fn new(
        config: &'a ReportConfig,
        contact: &'a CandidateContact,
        report: &'a Report,
    ) -> Self {
        Self {
            candidate: contact,
            score: report.score,
            priority: report.priority.label(),
            compensation_summary: &report.compensation_summary,
            flags: report
                .flags
                .iter()
                .map(|flag| FlagLine {
                    code: flag.code,
                    severity: flag.severity,
                    message: flag.message(),
                })
                .collect(),
            strengths: report.strengths.iter().map(|s| s.message()).collect(),
            generated_at: report.generated_at.with_timezone(&config.utc_offset),
            zone_label: &config.zone_label,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    config: ReportConfig,
}

impl JsonRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, contact: &CandidateContact, report: &Report) -> Result<String, RenderError> {
        let view = ReportView::new(&self.config, contact, report);
        Ok(serde_json::to_string_pretty(&view)?)
    }
}
