//! Platform scoring: three independent sub-scores plus the composite
//!
//! Each platform score is an additively-capped multi-factor formula, not a
//! single normalized metric: every sub-term has its own ceiling so no single
//! strong signal can saturate the score on its own.

pub mod composite;
pub mod github;
pub mod leetcode;
pub mod linkedin;

pub use composite::{overall_score, overall_score_with_aux};
pub use github::score_github;
pub use leetcode::score_leetcode;
pub use linkedin::score_linkedin;

use crate::model::{Candidate, PlatformScores};
use crate::taxonomy::SkillTaxonomy;

/// Compute all three sub-scores for one candidate against the target skills.
pub fn score_platforms(
    candidate: &Candidate,
    target_skills: &[String],
    taxonomy: &SkillTaxonomy,
) -> PlatformScores {
    PlatformScores {
        leetcode: score_leetcode(&candidate.leetcode, taxonomy),
        github: score_github(&candidate.github, target_skills, taxonomy),
        linkedin: score_linkedin(&candidate.linkedin, target_skills, taxonomy),
    }
}
