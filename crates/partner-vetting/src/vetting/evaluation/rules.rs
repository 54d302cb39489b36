use super::super::domain::{
    non_blank, Application, EquityAcceptance, EquityExpectation, ExperienceYears,
    FinancialSituation, FreeTextField, PartnershipType, TimeCommitment,
};
use super::findings::{format_usd, Flag, FlagCode, Severity, Strength};
use super::skills::total_weight;
use super::{Check, ScoreAdjustment};

const GATE_POINTS: i32 = 10;
const FREE_TEXT_POINTS: i32 = 5;
const FEE_POINTS: i32 = 5;

/// Running tally. Every penalty saturates at zero as soon as it is applied.
#[derive(Debug, Default)]
pub(crate) struct ScoreSheet {
    pub score: u32,
    pub flags: Vec<Flag>,
    pub strengths: Vec<Strength>,
    pub adjustments: Vec<ScoreAdjustment>,
}

impl ScoreSheet {
    fn apply(&mut self, check: Check, points: i32) {
        if points == 0 {
            return;
        }
        self.adjustments.push(ScoreAdjustment { check, points });
        self.score = if points > 0 {
            self.score.saturating_add(points.unsigned_abs())
        } else {
            self.score.saturating_sub(points.unsigned_abs())
        };
    }

    fn flag(&mut self, code: FlagCode, severity: Severity) {
        self.flags.push(Flag::new(code, severity));
    }

    fn strength(&mut self, strength: Strength) {
        self.strengths.push(strength);
    }
}

pub(crate) fn score_application(application: &Application) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();

    if !application.confirmed_understanding {
        sheet.flag(FlagCode::UnconfirmedUnderstanding, Severity::DealBreaker);
        return sheet;
    }
    sheet.apply(Check::Gate, GATE_POINTS);
    sheet.strength(Strength::ConfirmedUnderstanding);

    match application.partnership_type {
        PartnershipType::Equity | PartnershipType::Hybrid => {
            score_equity_acceptance(application, &mut sheet);
            score_equity_expectation(application.equity_expectation, &mut sheet);
        }
        PartnershipType::MonetaryBusiness => score_monetary_terms(application, &mut sheet),
    }

    score_financial_situation(application.financial_situation, &mut sheet);
    score_experience(application.experience_years, &mut sheet);
    score_time_commitment(application.time_commitment, &mut sheet);
    score_skills(application, &mut sheet);

    for field in FreeTextField::ALL {
        score_free_text(application, field, &mut sheet);
    }

    sheet
}

fn score_equity_acceptance(application: &Application, sheet: &mut ScoreSheet) {
    match application.equity_acceptance {
        EquityAcceptance::NeedsImmediatePayment => {
            sheet.apply(Check::EquityAcceptance, -50);
            sheet.flag(FlagCode::NeedsImmediatePayment, Severity::DealBreaker);
        }
        EquityAcceptance::FullyComfortable => {
            sheet.apply(Check::EquityAcceptance, 25);
            sheet.strength(Strength::ComfortableWithEquity);
        }
        EquityAcceptance::WithConditions => {
            sheet.apply(Check::EquityAcceptance, 10);
            sheet.flag(FlagCode::ConditionalEquityAcceptance, Severity::Caution);
        }
        EquityAcceptance::PrefersHybrid => {
            sheet.apply(Check::EquityAcceptance, 5);
            sheet.strength(Strength::OpenToHybrid);

            if application.partnership_type == PartnershipType::Hybrid {
                match positive_amount(application.monthly_revenue_share_usd) {
                    Some(monthly_usd) => {
                        sheet.strength(Strength::RevenueShareSpecified { monthly_usd })
                    }
                    None => {
                        sheet.apply(Check::RevenueShare, -15);
                        sheet.flag(FlagCode::RevenueShareMissing, Severity::Warning);
                    }
                }
            }
        }
        EquityAcceptance::Unset => sheet.flag(FlagCode::EquityAcceptanceUnset, Severity::Caution),
    }
}

fn score_equity_expectation(bucket: EquityExpectation, sheet: &mut ScoreSheet) {
    let too_high = FlagCode::EquityExpectationTooHigh { bucket };
    match bucket {
        EquityExpectation::TwentyFivePlus => {
            sheet.apply(Check::EquityExpectation, -40);
            sheet.flag(too_high, Severity::DealBreaker);
        }
        EquityExpectation::TwentyToTwentyFive => {
            sheet.apply(Check::EquityExpectation, -20);
            sheet.flag(too_high, Severity::Warning);
        }
        EquityExpectation::FifteenToTwenty => {
            sheet.apply(Check::EquityExpectation, -10);
            sheet.flag(too_high, Severity::Caution);
        }
        EquityExpectation::TenToFifteen => {
            sheet.apply(Check::EquityExpectation, 5);
            sheet.strength(Strength::ReasonableEquityExpectation { bucket });
        }
        EquityExpectation::Under1
        | EquityExpectation::OneToTwo
        | EquityExpectation::TwoToFive
        | EquityExpectation::FiveToTen => {
            sheet.apply(Check::EquityExpectation, 15);
            sheet.strength(Strength::ReasonableEquityExpectation { bucket });
        }
        EquityExpectation::Negotiable => {
            sheet.apply(Check::EquityExpectation, 10);
            sheet.strength(Strength::ReasonableEquityExpectation { bucket });
        }
        EquityExpectation::Unset => sheet.flag(FlagCode::EquityExpectationUnset, Severity::Caution),
    }
}

fn score_monetary_terms(application: &Application, sheet: &mut ScoreSheet) {
    let upfront_usd = positive_amount(application.upfront_fee_usd);
    let monthly_usd = positive_amount(application.monthly_fee_usd);

    if upfront_usd.is_none() && monthly_usd.is_none() {
        sheet.apply(Check::Fees, -30);
        sheet.flag(FlagCode::FeesMissing, Severity::Warning);
    } else {
        let present = [upfront_usd, monthly_usd].iter().flatten().count() as i32;
        sheet.apply(Check::Fees, FEE_POINTS * present);
        sheet.strength(Strength::FeesSpecified {
            upfront_usd,
            monthly_usd,
        });
    }

    if non_blank(application.business_description.as_deref()).is_some() {
        sheet.apply(Check::BusinessDescription, 15);
        sheet.strength(Strength::BusinessDescribed);
    } else {
        sheet.apply(Check::BusinessDescription, -25);
        sheet.flag(FlagCode::BusinessDescriptionMissing, Severity::Warning);
    }
}

fn score_financial_situation(situation: FinancialSituation, sheet: &mut ScoreSheet) {
    match situation {
        FinancialSituation::Stable => {
            sheet.apply(Check::FinancialSituation, 20);
            sheet.strength(Strength::FinanciallyStable);
        }
        FinancialSituation::SomeRunway => {
            sheet.apply(Check::FinancialSituation, 8);
            sheet.flag(FlagCode::LimitedRunway, Severity::Caution);
        }
        FinancialSituation::NeedsIncome => {
            sheet.apply(Check::FinancialSituation, -20);
            sheet.flag(FlagCode::NeedsIncome, Severity::Warning);
        }
        FinancialSituation::PreferNotToSay => {
            sheet.flag(FlagCode::FinancialsUndisclosed, Severity::Caution)
        }
    }
}

fn score_experience(years: ExperienceYears, sheet: &mut ScoreSheet) {
    let points = match years {
        ExperienceYears::TenPlus => 30,
        ExperienceYears::SixToTen => 20,
        ExperienceYears::ThreeToFive => 10,
        ExperienceYears::ZeroToTwo => {
            sheet.apply(Check::Experience, -10);
            sheet.flag(FlagCode::LimitedExperience, Severity::Caution);
            return;
        }
    };
    sheet.apply(Check::Experience, points);
    sheet.strength(Strength::Experienced { years });
}

fn score_time_commitment(commitment: TimeCommitment, sheet: &mut ScoreSheet) {
    match commitment {
        TimeCommitment::FullTime | TimeCommitment::Substantial => {
            let points = if commitment == TimeCommitment::FullTime {
                20
            } else {
                10
            };
            sheet.apply(Check::TimeCommitment, points);
            sheet.strength(Strength::Committed { commitment });
        }
        TimeCommitment::PartTime => {
            sheet.apply(Check::TimeCommitment, -10);
            sheet.flag(FlagCode::PartTimeCommitment, Severity::Warning);
        }
        TimeCommitment::Flexible => {
            sheet.flag(FlagCode::CommitmentNeedsClarification, Severity::Caution)
        }
    }
}

fn score_skills(application: &Application, sheet: &mut ScoreSheet) {
    if application.skills.is_empty() {
        sheet.apply(Check::Skills, -5);
        sheet.flag(FlagCode::NoSkills, Severity::Caution);
        return;
    }

    let weight = total_weight(&application.skills);
    sheet.apply(Check::Skills, weight as i32);
    sheet.strength(Strength::Skilled {
        skills: application.skills.iter().copied().collect(),
        weight,
    });
}

fn score_free_text(application: &Application, field: FreeTextField, sheet: &mut ScoreSheet) {
    if non_blank(application.free_text(field)).is_some() {
        sheet.apply(Check::FreeText(field), FREE_TEXT_POINTS);
        sheet.strength(Strength::AnswerProvided { field });
    } else {
        sheet.apply(Check::FreeText(field), -FREE_TEXT_POINTS);
        sheet.flag(FlagCode::AnswerMissing { field }, Severity::Caution);
    }
}

/// One-line description of whichever compensation branch the candidate filled in.
pub(crate) fn compensation_summary(application: &Application) -> String {
    let mut parts = vec![application.partnership_type.label().to_string()];

    match application.partnership_type {
        PartnershipType::Equity | PartnershipType::Hybrid => {
            parts.push(format!(
                "expectation: {}",
                application.equity_expectation.label()
            ));
            parts.push(format!(
                "acceptance: {}",
                application.equity_acceptance.label()
            ));
            if application.partnership_type == PartnershipType::Hybrid {
                parts.push(format!(
                    "monthly revenue share: {}",
                    describe_amount(application.monthly_revenue_share_usd)
                ));
            }
        }
        PartnershipType::MonetaryBusiness => {
            parts.push(format!(
                "upfront fee: {}",
                describe_amount(application.upfront_fee_usd)
            ));
            parts.push(format!(
                "monthly fee: {}",
                describe_amount(application.monthly_fee_usd)
            ));
        }
    }

    parts.join(" | ")
}

fn describe_amount(amount: Option<f64>) -> String {
    positive_amount(amount)
        .map(format_usd)
        .unwrap_or_else(|| "not specified".to_string())
}

fn positive_amount(amount: Option<f64>) -> Option<f64> {
    amount.filter(|value| value.is_finite() && *value > 0.0)
}
