//! Core data model: candidates, jobs, and every derived scoring artifact
//!
//! All of these are plain serde data. Scores are derived, stateless, and
//! recomputed on every call from the candidate's current platform snapshot;
//! nothing here is cached or incrementally updated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A candidate with linked coding-platform profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    /// Anonymized alias shown to recruiters before reveal.
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub leetcode: LeetCodeProfile,
    #[serde(default)]
    pub github: GitHubProfile,
    #[serde(default)]
    pub linkedin: LinkedInProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeetCodeProfile {
    pub problems_solved: u32,
    #[serde(default)]
    pub easy_solved: u32,
    #[serde(default)]
    pub medium_solved: u32,
    #[serde(default)]
    pub hard_solved: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub contest_rating: u32,
    #[serde(default)]
    pub streak_days: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubProfile {
    #[serde(default)]
    pub total_repos: u32,
    /// Repos pre-tagged as pertinent to the candidate's claimed domain.
    /// The engine never filters these itself.
    #[serde(default)]
    pub relevant_repos: Vec<Repo>,
    #[serde(default)]
    pub commits_last_month: u32,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub commits_last_month: u32,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkedInProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub internships: Vec<Internship>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub posts_last_month: u32,
    /// Engagement score 0-100 as reported by the source snapshot.
    #[serde(default)]
    pub engagement_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Internship {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub skills_used: Vec<String>,
}

/// A job posting as the engine sees it: skill lists plus a role type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub role_type: RoleType,
}

/// Closed set of role categories. Each carries a weight triple over the
/// three platform sub-scores (see `config::ScoringConfig`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "SDE")]
    Sde,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Full-Stack")]
    FullStack,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
}

impl RoleType {
    pub const ALL: [RoleType; 5] = [
        RoleType::Sde,
        RoleType::Ai,
        RoleType::DataAnalyst,
        RoleType::FullStack,
        RoleType::MlEngineer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleType::Ai => "AI",
            RoleType::Sde => "SDE",
            RoleType::DataAnalyst => "Data Analyst",
            RoleType::FullStack => "Full-Stack",
            RoleType::MlEngineer => "ML Engineer",
        }
    }
}

impl std::fmt::Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-platform sub-scores, each 0-100. Always a fresh snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformScores {
    pub leetcode: u32,
    pub github: u32,
    pub linkedin: u32,
}

impl PlatformScores {
    pub fn max_platform(&self) -> Platform {
        // Ties resolve in declaration order: LeetCode, GitHub, LinkedIn.
        let mut best = (Platform::LeetCode, self.leetcode);
        if self.github > best.1 {
            best = (Platform::GitHub, self.github);
        }
        if self.linkedin > best.1 {
            best = (Platform::LinkedIn, self.linkedin);
        }
        best.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    LeetCode,
    GitHub,
    LinkedIn,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Platform::LeetCode => "LeetCode",
            Platform::GitHub => "GitHub",
            Platform::LinkedIn => "LinkedIn",
        };
        f.write_str(s)
    }
}

/// One row of a ranking: identity, scores, skill match, and a dense rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub name: String,
    pub scores: PlatformScores,
    pub overall_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub summary: String,
    /// 1-based dense rank assigned by sorted position.
    pub rank: u32,
}

/// Three-way eligibility decision with its dashboard color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "APPLY")]
    Apply,
    #[serde(rename = "IMPROVE")]
    Improve,
    #[serde(rename = "NOT_READY")]
    NotReady,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Apply => "APPLY",
            Decision::Improve => "IMPROVE",
            Decision::NotReady => "NOT_READY",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Decision::Apply => "green",
            Decision::Improve => "yellow",
            Decision::NotReady => "red",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single skill with the candidate's estimated 0-100 proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub skill: String,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub fit_percentage: u32,
    pub decision: Decision,
    pub decision_color: String,
    pub scores: PlatformScores,
    /// Skills at level >= 70, sorted descending by level.
    pub strengths: Vec<SkillLevel>,
    /// Skills at 30..70, sorted descending by level.
    pub weaknesses: Vec<SkillLevel>,
    /// Skills below 30, sorted descending by level.
    pub missing: Vec<SkillLevel>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GapPriority {
    #[serde(rename = "CRITICAL")]
    Critical,
    #[serde(rename = "IMPORTANT")]
    Important,
    #[serde(rename = "POLISH")]
    Polish,
}

impl GapPriority {
    pub fn label(&self) -> &'static str {
        match self {
            GapPriority::Critical => "CRITICAL",
            GapPriority::Important => "IMPORTANT",
            GapPriority::Polish => "POLISH",
        }
    }
}

impl std::fmt::Display for GapPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub required_level: u32,
    pub current_level: u32,
    /// required_level - current_level, floored at zero.
    pub gap: u32,
    pub priority: GapPriority,
    /// Week-range estimate, e.g. "3-4 weeks".
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub skill: String,
    pub priority: GapPriority,
    pub tasks: Vec<String>,
    pub resources: Vec<String>,
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    /// Rounded sum of the step week-range midpoints, e.g. "7 weeks".
    /// "0 weeks" when there is nothing to improve.
    pub total_estimated_time: String,
    pub steps: Vec<RoadmapStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformReasoning {
    pub leetcode: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationData {
    pub candidate_id: String,
    pub candidate_name: String,
    pub rank: u32,
    pub overall_score: u32,
    pub scores: PlatformScores,
    /// Rounded point contribution of each platform to the composite.
    pub contributions: PlatformScores,
    pub reasoning: PlatformReasoning,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub narrative: String,
}

/// Pre-computed 0-100 signals from the external intelligence layer.
///
/// Their internal computation is opaque here; a missing value means the
/// composite falls back to the legacy platform weighting for that share.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AuxiliarySignals {
    pub trust: Option<f64>,
    pub dna: Option<f64>,
    pub trajectory: Option<f64>,
}

/// Caller-supplied weights for the auxiliary signals. Each weight is the
/// share of the final composite that signal takes when present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AuxWeights {
    pub trust: f64,
    pub dna: f64,
    pub trajectory: f64,
}
