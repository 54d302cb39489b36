//! Renderings of an evaluated report. Renderers only project a [`Report`]; they never rescore.

mod json;
mod text;

pub use json::{FlagLine, JsonRenderer, ReportView};
pub use text::PlainTextRenderer;

use super::domain::CandidateContact;
use super::evaluation::Report;

/// Output format seam so new renderings can be added without touching the scoring rules.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, contact: &CandidateContact, report: &Report) -> Result<String, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
