use crate::config::ReportConfig;

use super::super::domain::CandidateContact;
use super::super::evaluation::Report;
use super::{RenderError, ReportRenderer};

const TITLE: &str = "PARTNERSHIP APPLICATION VETTING REPORT";

/// Clipboard-friendly plain text block shown to reviewers and attached to notifications.
#[derive(Debug, Clone, Default)]
pub struct PlainTextRenderer {
    config: ReportConfig,
}

impl PlainTextRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn render_text(&self, contact: &CandidateContact, report: &Report) -> String {
        let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len())];

        lines.push(format!("Candidate: {}", contact.full_name.trim()));
        lines.push(format!("Email: {}", contact.email.trim()));
        for (label, value) in [
            ("Phone", &contact.phone),
            ("Location", &contact.location),
            ("LinkedIn", &contact.linkedin_url),
        ] {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                lines.push(format!("{label}: {value}"));
            }
        }

        lines.push(String::new());
        lines.push(format!("Score: {}", report.score));
        lines.push(format!("Priority: {}", report.priority.label()));
        lines.push(format!("Compensation: {}", report.compensation_summary));

        lines.push(String::new());
        lines.push(format!("Flags ({}):", report.flags.len()));
        if report.flags.is_empty() {
            lines.push("- none".to_string());
        }
        for flag in &report.flags {
            lines.push(format!("- [{}] {}", flag.severity.marker(), flag.message()));
        }

        lines.push(String::new());
        lines.push(format!("Strengths ({}):", report.strengths.len()));
        if report.strengths.is_empty() {
            lines.push("- none".to_string());
        }
        for strength in &report.strengths {
            lines.push(format!("- {}", strength.message()));
        }

        lines.push(String::new());
        lines.push(format!("Generated: {}", self.timestamp(report)));

        lines.join("\n")
    }

    fn timestamp(&self, report: &Report) -> String {
        let local = report.generated_at.with_timezone(&self.config.utc_offset);
        format!(
            "{} {}",
            local.format("%Y-%m-%d %H:%M:%S"),
            self.config.zone_label
        )
    }
}

impl ReportRenderer for PlainTextRenderer {
    fn render(&self, contact: &CandidateContact, report: &Report) -> Result<String, RenderError> {
        Ok(self.render_text(contact, report))
    }
}
