//! GitHub sub-score

use crate::model::GitHubProfile;
use crate::taxonomy::SkillTaxonomy;

/// Relevance (40) + stars (15) + activity (20) + project count (15) +
/// language diversity (10).
///
/// A candidate with no relevant repos takes the activity-only short path and
/// cannot exceed 20 regardless of raw commit volume.
pub fn score_github(
    profile: &GitHubProfile,
    target_skills: &[String],
    taxonomy: &SkillTaxonomy,
) -> u32 {
    if profile.relevant_repos.is_empty() {
        return (profile.commits_last_month as f64 / 2.0).min(20.0).round() as u32;
    }

    let mut relevance = 0.0;
    for repo in &profile.relevant_repos {
        if repo.topics.is_empty() {
            continue;
        }
        let matched = repo
            .topics
            .iter()
            .filter(|topic| {
                target_skills
                    .iter()
                    .any(|skill| taxonomy.skills_overlap(topic, skill))
            })
            .count();
        relevance += matched as f64 / repo.topics.len() as f64 * 15.0;
    }
    let relevance_term = relevance.min(40.0);

    let total_stars: u32 = profile.relevant_repos.iter().map(|r| r.stars).sum();
    let stars_term = (total_stars as f64 / 10.0).min(15.0);

    let activity_term = (profile.commits_last_month as f64 / 5.0).min(20.0);
    let projects_term = (profile.relevant_repos.len() as f64 * 5.0).min(15.0);
    let languages_term = (profile.languages.len() as f64 * 3.0).min(10.0);

    let total = relevance_term + stars_term + activity_term + projects_term + languages_term;
    total.min(100.0).round() as u32
}
