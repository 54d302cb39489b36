use serde::{Deserialize, Serialize};

pub const HIGH_PRIORITY_THRESHOLD: u32 = 70;
pub const MEDIUM_PRIORITY_THRESHOLD: u32 = 40;

/// Review tier derived from the final score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn from_score(score: u32) -> Self {
        if score >= HIGH_PRIORITY_THRESHOLD {
            Priority::High
        } else if score >= MEDIUM_PRIORITY_THRESHOLD {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}
