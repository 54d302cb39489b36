use std::fmt;

use serde::Serialize;

use super::domain::{FreeTextField, PartnershipSubmission};

pub const MAX_TEXT_LEN: usize = 4000;
pub const MAX_CONTACT_LEN: usize = 320;
/// Largest dollar figure accepted for any fee or revenue share.
pub const MAX_AMOUNT_USD: f64 = 1e12;

/// A single field-level problem reported back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found in a submission, collected rather than short-circuited.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("submission rejected: {}", summarize(.errors))]
pub struct IntakeRejection {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Normalizes and validates form submissions before they reach the evaluator.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn check(
        &self,
        mut submission: PartnershipSubmission,
    ) -> Result<PartnershipSubmission, IntakeRejection> {
        let mut errors = Vec::new();

        let contact = &mut submission.contact;
        contact.full_name = contact.full_name.trim().to_string();
        contact.email = contact.email.trim().to_string();
        for value in [
            &mut contact.phone,
            &mut contact.location,
            &mut contact.linkedin_url,
        ] {
            normalize(value);
        }

        if contact.full_name.is_empty() {
            errors.push(FieldError::new("contact.full_name", "is required"));
        } else if contact.full_name.chars().count() > MAX_CONTACT_LEN {
            errors.push(FieldError::new("contact.full_name", "is too long"));
        }

        for (field, value) in [
            ("contact.phone", &contact.phone),
            ("contact.location", &contact.location),
            ("contact.linkedin_url", &contact.linkedin_url),
        ] {
            if value
                .as_deref()
                .is_some_and(|text| text.chars().count() > MAX_CONTACT_LEN)
            {
                errors.push(FieldError::new(field, "is too long"));
            }
        }

        if contact.email.is_empty() {
            errors.push(FieldError::new("contact.email", "is required"));
        } else if !looks_like_email(&contact.email) {
            errors.push(FieldError::new(
                "contact.email",
                "must be a valid email address",
            ));
        }

        let application = &mut submission.application;
        for (field, amount) in [
            (
                "application.monthly_revenue_share_usd",
                application.monthly_revenue_share_usd,
            ),
            ("application.upfront_fee_usd", application.upfront_fee_usd),
            ("application.monthly_fee_usd", application.monthly_fee_usd),
        ] {
            match amount {
                Some(value) if !value.is_finite() || value < 0.0 => {
                    errors.push(FieldError::new(field, "must be a non-negative amount"));
                }
                Some(value) if value > MAX_AMOUNT_USD => {
                    errors.push(FieldError::new(field, "must be at most $1,000,000,000,000"));
                }
                _ => {}
            }
        }

        normalize(&mut application.business_description);
        check_length(
            "application.business_description",
            application.business_description.as_deref(),
            &mut errors,
        );

        for field in FreeTextField::ALL {
            let value = application.free_text_mut(field);
            normalize(value);
            let name = format!("application.{}", field_key(field));
            check_length(&name, value.as_deref(), &mut errors);
        }

        if errors.is_empty() {
            Ok(submission)
        } else {
            Err(IntakeRejection { errors })
        }
    }
}

fn normalize(value: &mut Option<String>) {
    *value = value
        .take()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
}

fn check_length(field: &str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    if value.map(|text| text.chars().count() > MAX_TEXT_LEN).unwrap_or(false) {
        errors.push(FieldError::new(
            field,
            format!("must be at most {MAX_TEXT_LEN} characters"),
        ));
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().count() > MAX_CONTACT_LEN || value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split('.')
                    .filter(|label| !label.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn field_key(field: FreeTextField) -> &'static str {
    match field {
        FreeTextField::PreviousCompanies => "previous_companies",
        FreeTextField::ValueProposition => "value_proposition",
        FreeTextField::Network => "network",
        FreeTextField::WhyNow => "why_now",
        FreeTextField::PlatformToolExperience => "platform_tool_experience",
        FreeTextField::CreatorEntrepreneurExperience => "creator_entrepreneur_experience",
        FreeTextField::GrowthVision => "growth_vision",
    }
}
