//! Ranking engine: score a candidate pool, sort, assign dense ranks

use crate::config::ScoringConfig;
use crate::model::{Candidate, PlatformScores, RankedCandidate, RoleType};
use crate::scoring::{overall_score, score_platforms};
use crate::taxonomy::SkillTaxonomy;
use log::debug;

/// Score every candidate (optionally filtered to an id subset), sort
/// descending by composite, and assign dense 1-based ranks.
///
/// Scoring is independent per candidate; only the final sort is a join
/// point. Ties break on candidate id ascending so the ordering is
/// reproducible regardless of input order.
pub fn rank_candidates(
    pool: &[Candidate],
    target_skills: &[String],
    role: RoleType,
    ids: Option<&[String]>,
    taxonomy: &SkillTaxonomy,
    config: &ScoringConfig,
) -> Vec<RankedCandidate> {
    let weights = config.weights_for(role);

    let mut ranked: Vec<RankedCandidate> = pool
        .iter()
        .filter(|c| match ids {
            Some(ids) if !ids.is_empty() => ids.iter().any(|id| id == &c.id),
            _ => true,
        })
        .map(|candidate| {
            let scores = score_platforms(candidate, target_skills, taxonomy);
            let overall = overall_score(&scores, &weights);
            let (matched, missing) = match_skills(candidate, target_skills, taxonomy);
            let summary = build_summary(candidate, &scores, overall, matched.len(), target_skills.len());
            RankedCandidate {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                scores,
                overall_score: overall,
                matched_skills: matched,
                missing_skills: missing,
                summary,
                rank: 0,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.overall_score
            .cmp(&a.overall_score)
            .then_with(|| a.id.cmp(&b.id))
    });
    for (position, entry) in ranked.iter_mut().enumerate() {
        entry.rank = position as u32 + 1;
    }

    debug!(
        "ranked {} candidates for role {} against {} target skills",
        ranked.len(),
        role,
        target_skills.len()
    );
    ranked
}

/// Split the target skills into matched and missing against the union of the
/// candidate's evidence: LeetCode topics, repo topics, GitHub languages,
/// LinkedIn skills, and internship skills used.
pub fn match_skills(
    candidate: &Candidate,
    target_skills: &[String],
    taxonomy: &SkillTaxonomy,
) -> (Vec<String>, Vec<String>) {
    let evidence: Vec<&str> = candidate
        .leetcode
        .topics
        .iter()
        .map(String::as_str)
        .chain(
            candidate
                .github
                .relevant_repos
                .iter()
                .flat_map(|r| r.topics.iter().map(String::as_str)),
        )
        .chain(candidate.github.languages.iter().map(String::as_str))
        .chain(candidate.linkedin.skills.iter().map(String::as_str))
        .chain(
            candidate
                .linkedin
                .internships
                .iter()
                .flat_map(|i| i.skills_used.iter().map(String::as_str)),
        )
        .collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in target_skills {
        if evidence.iter().any(|e| taxonomy.skills_overlap(e, skill)) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }
    (matched, missing)
}

/// Look up a candidate by id. Not-found is a None, never an error; the
/// caller decides how to surface it.
pub fn find_candidate<'a>(pool: &'a [Candidate], id: &str) -> Option<&'a Candidate> {
    pool.iter().find(|c| c.id == id)
}

fn build_summary(
    candidate: &Candidate,
    scores: &PlatformScores,
    overall: u32,
    matched: usize,
    total: usize,
) -> String {
    let strongest = scores.max_platform();
    format!(
        "{} scores {}/100 overall; strongest on {}. Matches {} of {} target skills.",
        candidate.name, overall, strongest, matched, total
    )
}
