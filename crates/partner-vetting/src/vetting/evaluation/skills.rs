use super::super::domain::Skill;

/// Points contributed by each skill in the catalog.
pub const SKILL_WEIGHTS: [(Skill, u32); 20] = [
    (Skill::Tech, 9),
    (Skill::ProductStrategy, 8),
    (Skill::AI, 8),
    (Skill::BusinessDevelopment, 7),
    (Skill::Partnerships, 7),
    (Skill::DataAnalysis, 7),
    (Skill::Sales, 7),
    (Skill::Finance, 7),
    (Skill::Fundraising, 7),
    (Skill::Marketing, 6),
    (Skill::Ecommerce, 6),
    (Skill::Legal, 6),
    (Skill::SEO, 5),
    (Skill::CRM, 5),
    (Skill::ProjectManagement, 5),
    (Skill::Copywriting, 4),
    (Skill::Community, 4),
    (Skill::VideoEditing, 3),
    (Skill::GraphicDesign, 3),
    (Skill::HR, 3),
];

pub fn skill_weight(skill: Skill) -> u32 {
    SKILL_WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == skill)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}

pub fn total_weight<'a>(skills: impl IntoIterator<Item = &'a Skill>) -> u32 {
    skills.into_iter().map(|skill| skill_weight(*skill)).sum()
}
