use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the candidate wants to be compensated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnershipType {
    Equity,
    Hybrid,
    MonetaryBusiness,
}

impl PartnershipType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equity => "Equity partnership",
            Self::Hybrid => "Hybrid (equity + revenue share)",
            Self::MonetaryBusiness => "Monetary business partnership",
        }
    }

    pub const fn is_equity_based(self) -> bool {
        matches!(self, Self::Equity | Self::Hybrid)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquityAcceptance {
    FullyComfortable,
    WithConditions,
    PrefersHybrid,
    NeedsImmediatePayment,
    #[default]
    Unset,
}

impl EquityAcceptance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullyComfortable => "fully comfortable with equity",
            Self::WithConditions => "comfortable with conditions",
            Self::PrefersHybrid => "prefers a hybrid arrangement",
            Self::NeedsImmediatePayment => "needs immediate payment",
            Self::Unset => "not specified",
        }
    }
}

/// Equity stake the candidate expects, as offered on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquityExpectation {
    Under1,
    OneToTwo,
    TwoToFive,
    FiveToTen,
    TenToFifteen,
    FifteenToTwenty,
    TwentyToTwentyFive,
    TwentyFivePlus,
    Negotiable,
    #[default]
    Unset,
}

impl EquityExpectation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under1 => "under 1%",
            Self::OneToTwo => "1-2%",
            Self::TwoToFive => "2-5%",
            Self::FiveToTen => "5-10%",
            Self::TenToFifteen => "10-15%",
            Self::FifteenToTwenty => "15-20%",
            Self::TwentyToTwentyFive => "20-25%",
            Self::TwentyFivePlus => "25%+",
            Self::Negotiable => "negotiable",
            Self::Unset => "not specified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialSituation {
    Stable,
    SomeRunway,
    NeedsIncome,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceYears {
    ZeroToTwo,
    ThreeToFive,
    SixToTen,
    TenPlus,
}

impl ExperienceYears {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ZeroToTwo => "0-2 years",
            Self::ThreeToFive => "3-5 years",
            Self::SixToTen => "6-10 years",
            Self::TenPlus => "10+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeCommitment {
    PartTime,
    Substantial,
    FullTime,
    Flexible,
}

impl TimeCommitment {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PartTime => "part-time",
            Self::Substantial => "substantial (20-30 hrs/week)",
            Self::FullTime => "full-time",
            Self::Flexible => "flexible",
        }
    }
}

/// Closed skill catalog offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    ProductStrategy,
    Tech,
    #[serde(rename = "ai")]
    AI,
    BusinessDevelopment,
    Partnerships,
    DataAnalysis,
    Sales,
    Finance,
    Fundraising,
    Marketing,
    Ecommerce,
    #[serde(rename = "seo")]
    SEO,
    #[serde(rename = "crm")]
    CRM,
    ProjectManagement,
    Legal,
    Copywriting,
    Community,
    VideoEditing,
    GraphicDesign,
    #[serde(rename = "hr")]
    HR,
}

impl Skill {
    pub const ALL: [Skill; 20] = [
        Skill::ProductStrategy,
        Skill::Tech,
        Skill::AI,
        Skill::BusinessDevelopment,
        Skill::Partnerships,
        Skill::DataAnalysis,
        Skill::Sales,
        Skill::Finance,
        Skill::Fundraising,
        Skill::Marketing,
        Skill::Ecommerce,
        Skill::SEO,
        Skill::CRM,
        Skill::ProjectManagement,
        Skill::Legal,
        Skill::Copywriting,
        Skill::Community,
        Skill::VideoEditing,
        Skill::GraphicDesign,
        Skill::HR,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::ProductStrategy => "Product Strategy",
            Skill::Tech => "Tech",
            Skill::AI => "AI",
            Skill::BusinessDevelopment => "Business Development",
            Skill::Partnerships => "Partnerships",
            Skill::DataAnalysis => "Data Analysis",
            Skill::Sales => "Sales",
            Skill::Finance => "Finance",
            Skill::Fundraising => "Fundraising",
            Skill::Marketing => "Marketing",
            Skill::Ecommerce => "E-commerce",
            Skill::SEO => "SEO",
            Skill::CRM => "CRM",
            Skill::ProjectManagement => "Project Management",
            Skill::Legal => "Legal",
            Skill::Copywriting => "Copywriting",
            Skill::Community => "Community",
            Skill::VideoEditing => "Video Editing",
            Skill::GraphicDesign => "Graphic Design",
            Skill::HR => "HR",
        }
    }
}

/// Open-ended answers checked for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeTextField {
    PreviousCompanies,
    ValueProposition,
    Network,
    WhyNow,
    PlatformToolExperience,
    CreatorEntrepreneurExperience,
    GrowthVision,
}

impl FreeTextField {
    pub const ALL: [FreeTextField; 7] = [
        FreeTextField::PreviousCompanies,
        FreeTextField::ValueProposition,
        FreeTextField::Network,
        FreeTextField::WhyNow,
        FreeTextField::PlatformToolExperience,
        FreeTextField::CreatorEntrepreneurExperience,
        FreeTextField::GrowthVision,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::PreviousCompanies => "Previous companies",
            Self::ValueProposition => "Value proposition",
            Self::Network => "Network",
            Self::WhyNow => "Why now",
            Self::PlatformToolExperience => "Platform/tool experience",
            Self::CreatorEntrepreneurExperience => "Creator/entrepreneur experience",
            Self::GrowthVision => "Growth vision",
        }
    }
}

/// One candidate's answers, as handed to the evaluator after intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub confirmed_understanding: bool,
    pub partnership_type: PartnershipType,
    #[serde(default)]
    pub equity_acceptance: EquityAcceptance,
    #[serde(default)]
    pub equity_expectation: EquityExpectation,
    #[serde(default)]
    pub monthly_revenue_share_usd: Option<f64>,
    #[serde(default)]
    pub upfront_fee_usd: Option<f64>,
    #[serde(default)]
    pub monthly_fee_usd: Option<f64>,
    #[serde(default)]
    pub business_description: Option<String>,
    pub financial_situation: FinancialSituation,
    pub experience_years: ExperienceYears,
    pub time_commitment: TimeCommitment,
    #[serde(default)]
    pub skills: BTreeSet<Skill>,
    #[serde(default)]
    pub previous_companies: Option<String>,
    #[serde(default)]
    pub value_proposition: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub why_now: Option<String>,
    #[serde(default)]
    pub platform_tool_experience: Option<String>,
    #[serde(default)]
    pub creator_entrepreneur_experience: Option<String>,
    #[serde(default)]
    pub growth_vision: Option<String>,
}

impl Application {
    pub fn free_text(&self, field: FreeTextField) -> Option<&str> {
        let value = match field {
            FreeTextField::PreviousCompanies => &self.previous_companies,
            FreeTextField::ValueProposition => &self.value_proposition,
            FreeTextField::Network => &self.network,
            FreeTextField::WhyNow => &self.why_now,
            FreeTextField::PlatformToolExperience => &self.platform_tool_experience,
            FreeTextField::CreatorEntrepreneurExperience => &self.creator_entrepreneur_experience,
            FreeTextField::GrowthVision => &self.growth_vision,
        };
        value.as_deref()
    }

    pub(crate) fn free_text_mut(&mut self, field: FreeTextField) -> &mut Option<String> {
        match field {
            FreeTextField::PreviousCompanies => &mut self.previous_companies,
            FreeTextField::ValueProposition => &mut self.value_proposition,
            FreeTextField::Network => &mut self.network,
            FreeTextField::WhyNow => &mut self.why_now,
            FreeTextField::PlatformToolExperience => &mut self.platform_tool_experience,
            FreeTextField::CreatorEntrepreneurExperience => {
                &mut self.creator_entrepreneur_experience
            }
            FreeTextField::GrowthVision => &mut self.growth_vision,
        }
    }
}

/// Contact details echoed on the rendered report. Never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateContact {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

/// Raw form payload accepted by the intake endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnershipSubmission {
    pub contact: CandidateContact,
    pub application: Application,
}

/// Review state tracked for stored applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    PendingReview,
    AutoRejected,
}

impl ReviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ReviewStatus::PendingReview => "pending_review",
            ReviewStatus::AutoRejected => "auto_rejected",
        }
    }
}

/// Returns the trimmed text when it carries any non-whitespace content.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
