use serde::{Deserialize, Serialize};

use super::projects::ProjectResponse;
use super::skills::SkillResponse;
use super::{about, contact, education, experience};

/// Featured skills shown on the landing page.
pub const SUMMARY_SKILL_LIMIT: u64 = 8;
/// Featured, published projects shown on the landing page.
pub const SUMMARY_PROJECT_LIMIT: u64 = 6;
/// Most recent experience entries (by default ordering).
pub const SUMMARY_EXPERIENCE_LIMIT: u64 = 3;

/// Read-only snapshot behind `GET /api/summary`.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub about: Option<about::Model>,
    pub contact: Option<contact::Model>,
    pub featured_skills: Vec<SkillResponse>,
    pub featured_projects: Vec<ProjectResponse>,
    pub recent_experience: Vec<experience::Model>,
    pub education: Vec<education::Model>,
}

/// Counts behind `GET /api/summary/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioStats {
    /// Published projects only.
    pub total_projects: u64,
    pub featured_projects: u64,
    pub total_skills: u64,
    pub featured_skills: u64,
    pub total_experience: u64,
    pub current_experience: u64,
    pub total_education: u64,
    pub current_education: u64,
}
