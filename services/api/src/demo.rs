use crate::infra::{InMemoryApplicationRepository, RecordingNotificationPublisher};
use clap::{Args, ValueEnum};
use partner_vetting::config::{AppConfig, ReportConfig};
use partner_vetting::error::AppError;
use partner_vetting::vetting::{
    evaluate, Application, CandidateContact, EquityAcceptance, EquityExpectation,
    ExperienceYears, FinancialSituation, IntakeGuard, JsonRenderer, PartnerVettingService,
    PartnershipSubmission, PartnershipType, PlainTextRenderer, ReportRenderer, Skill,
    TimeCommitment,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to a JSON document holding `contact` and `application`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output format for the rendered report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub(crate) format: ReportFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Drop the revenue share from the hybrid candidate to show the penalty path
    #[arg(long)]
    pub(crate) without_revenue_share: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.input)?;
    let rendered = render_submission(&raw, args.format, &config.report)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_submission(
    raw: &str,
    format: ReportFormat,
    config: &ReportConfig,
) -> Result<String, AppError> {
    let submission: PartnershipSubmission = serde_json::from_str(raw)?;
    let submission = IntakeGuard.check(submission)?;
    let report = evaluate(&submission.application);

    let renderer: Box<dyn ReportRenderer> = match format {
        ReportFormat::Text => Box::new(PlainTextRenderer::new(config.clone())),
        ReportFormat::Json => Box::new(JsonRenderer::new(config.clone())),
    };
    Ok(renderer.render(&submission.contact, &report)?)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    println!("Partnership vetting demo");
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notifier = Arc::new(RecordingNotificationPublisher::default());
    let service = PartnerVettingService::new(repository, notifier.clone(), config.report);

    let revenue_share = if args.without_revenue_share {
        None
    } else {
        Some(750.0)
    };
    let record = match service.submit(demo_submission(revenue_share)) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };

    let view = record.status_view();
    println!(
        "- Received application {} -> status {} (score {}, {})",
        view.application_id, view.status, view.score, view.priority
    );
    println!("  Score breakdown:");
    for adjustment in &record.report.adjustments {
        println!("    - {:?}: {:+}", adjustment.check, adjustment.points);
    }
    println!("\n{}", record.rendered_report);

    match service.get(&record.id) {
        Ok(stored) => match serde_json::to_string_pretty(&stored.status_view()) {
            Ok(json) => println!("\nStatus payload:\n{}", json),
            Err(err) => println!("\nStatus payload unavailable: {}", err),
        },
        Err(err) => println!("\nRepository lookup failed: {}", err),
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("\nNotifications: none dispatched");
    } else {
        println!("\nNotifications:");
        for notice in events {
            println!(
                "  - template={} -> {}",
                notice.template, notice.application_id
            );
        }
    }

    Ok(())
}

fn demo_submission(monthly_revenue_share_usd: Option<f64>) -> PartnershipSubmission {
    PartnershipSubmission {
        contact: CandidateContact {
            full_name: "Morgan Ellis".to_string(),
            email: "morgan.ellis@example.com".to_string(),
            phone: Some("+1 555 0142".to_string()),
            location: Some("Denver, CO".to_string()),
            linkedin_url: None,
        },
        application: Application {
            confirmed_understanding: true,
            partnership_type: PartnershipType::Hybrid,
            equity_acceptance: EquityAcceptance::PrefersHybrid,
            equity_expectation: EquityExpectation::TenToFifteen,
            monthly_revenue_share_usd,
            upfront_fee_usd: None,
            monthly_fee_usd: None,
            business_description: None,
            financial_situation: FinancialSituation::SomeRunway,
            experience_years: ExperienceYears::SixToTen,
            time_commitment: TimeCommitment::Substantial,
            skills: BTreeSet::from([Skill::Sales, Skill::Partnerships, Skill::Marketing]),
            previous_companies: Some("Led channel sales at a payments startup".to_string()),
            value_proposition: Some("Reseller network across the Mountain West".to_string()),
            network: Some("Regional agency owners and coaches".to_string()),
            why_now: Some("Ready to commit to one product".to_string()),
            platform_tool_experience: None,
            creator_entrepreneur_experience: Some("Ran a paid community".to_string()),
            growth_vision: Some("Partner program with tiered commissions".to_string()),
        },
    }
}
