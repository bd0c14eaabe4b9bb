//! Deterministic, templated fit explanations
//!
//! Every string here is assembled from score-band templates and concrete
//! candidate facts. Same inputs always produce the same output.

use crate::config::ScoringConfig;
use crate::model::{
    Candidate, ExplanationData, Platform, PlatformReasoning, PlatformScores, RoleType,
};
use crate::ranking::match_skills;
use crate::scoring::{overall_score, score_platforms};
use crate::taxonomy::SkillTaxonomy;

/// Score bands, evaluated top-down. The first threshold at or below the
/// score selects the tone for that platform's reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Excellent,
    Solid,
    Fair,
    Weak,
}

const BANDS: [(u32, Tone); 4] = [
    (80, Tone::Excellent),
    (60, Tone::Solid),
    (40, Tone::Fair),
    (0, Tone::Weak),
];

fn tone_for(score: u32) -> Tone {
    for (threshold, tone) in BANDS {
        if score >= threshold {
            return tone;
        }
    }
    Tone::Weak
}

/// Build the full explanation for one ranked candidate.
pub fn generate_explanation(
    candidate: &Candidate,
    target_skills: &[String],
    role: RoleType,
    rank: u32,
    taxonomy: &SkillTaxonomy,
    config: &ScoringConfig,
) -> ExplanationData {
    let scores = score_platforms(candidate, target_skills, taxonomy);
    let weights = config.weights_for(role);
    let overall = overall_score(&scores, &weights);
    let (matched_skills, missing_skills) = match_skills(candidate, target_skills, taxonomy);

    let contributions = PlatformScores {
        leetcode: (weights.leetcode * scores.leetcode as f64).round() as u32,
        github: (weights.github * scores.github as f64).round() as u32,
        linkedin: (weights.linkedin * scores.linkedin as f64).round() as u32,
    };

    let reasoning = PlatformReasoning {
        leetcode: leetcode_reasoning(candidate, scores.leetcode),
        github: github_reasoning(candidate, scores.github),
        linkedin: linkedin_reasoning(candidate, scores.linkedin),
    };

    let narrative = build_narrative(
        candidate,
        role,
        rank,
        overall,
        &scores,
        &matched_skills,
        &missing_skills,
    );

    ExplanationData {
        candidate_id: candidate.id.clone(),
        candidate_name: candidate.name.clone(),
        rank,
        overall_score: overall,
        scores,
        contributions,
        reasoning,
        matched_skills,
        missing_skills,
        narrative,
    }
}

fn leetcode_reasoning(candidate: &Candidate, score: u32) -> String {
    let lc = &candidate.leetcode;
    match tone_for(score) {
        Tone::Excellent => format!(
            "Outstanding problem-solving record: {} problems solved ({} hard) with a {} contest rating.",
            lc.problems_solved, lc.hard_solved, lc.contest_rating
        ),
        Tone::Solid => format!(
            "Solid practice volume with {} problems solved across {} topics.",
            lc.problems_solved,
            lc.topics.len()
        ),
        Tone::Fair => format!(
            "Moderate activity: {} problems solved so far; harder problems and contests would lift this.",
            lc.problems_solved
        ),
        Tone::Weak => format!(
            "Limited LeetCode signal with only {} problems solved.",
            lc.problems_solved
        ),
    }
}

fn github_reasoning(candidate: &Candidate, score: u32) -> String {
    let gh = &candidate.github;
    let top_repo = gh
        .relevant_repos
        .iter()
        .max_by_key(|r| r.stars)
        .map(|r| r.name.as_str());
    match tone_for(score) {
        Tone::Excellent => match top_repo {
            Some(name) => format!(
                "Strong open-source presence across {} relevant repos, led by \"{}\", with {} commits last month.",
                gh.relevant_repos.len(),
                name,
                gh.commits_last_month
            ),
            None => format!(
                "Strong GitHub activity with {} commits last month.",
                gh.commits_last_month
            ),
        },
        Tone::Solid => format!(
            "Good project portfolio: {} relevant repos and {} commits last month.",
            gh.relevant_repos.len(),
            gh.commits_last_month
        ),
        Tone::Fair => format!(
            "Some relevant work on GitHub ({} repos), but recent activity is light.",
            gh.relevant_repos.len()
        ),
        Tone::Weak => "Little targeted GitHub evidence for this role yet.".to_string(),
    }
}

fn linkedin_reasoning(candidate: &Candidate, score: u32) -> String {
    let li = &candidate.linkedin;
    let company = li.internships.first().map(|i| i.company.as_str());
    match tone_for(score) {
        Tone::Excellent => match company {
            Some(company) => format!(
                "Excellent professional profile: {} internships (including {}) and {} certifications.",
                li.internships.len(),
                company,
                li.certifications.len()
            ),
            None => format!(
                "Excellent professional profile with {} listed skills and {} certifications.",
                li.skills.len(),
                li.certifications.len()
            ),
        },
        Tone::Solid => format!(
            "Relevant professional experience: {} internships and {} listed skills.",
            li.internships.len(),
            li.skills.len()
        ),
        Tone::Fair => format!(
            "Profile lists {} skills but shows limited hands-on experience.",
            li.skills.len()
        ),
        Tone::Weak => "Sparse LinkedIn profile for this role.".to_string(),
    }
}

fn build_narrative(
    candidate: &Candidate,
    role: RoleType,
    rank: u32,
    overall: u32,
    scores: &PlatformScores,
    matched: &[String],
    missing: &[String],
) -> String {
    let primary = scores.max_platform();
    let primary_score = match primary {
        Platform::LeetCode => scores.leetcode,
        Platform::GitHub => scores.github,
        Platform::LinkedIn => scores.linkedin,
    };

    let matched_text = if matched.is_empty() {
        "none of the target skills yet".to_string()
    } else {
        matched
            .iter()
            .take(5)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let missing_text = if missing.is_empty() {
        String::new()
    } else {
        format!(
            " Areas to develop: {}.",
            missing
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    format!(
        "{} ranks #{} for this {} role with an overall fit of {}/100. \
         Their primary strength is {} ({}/100). Matched skills: {}.{}",
        candidate.name, rank, role, overall, primary, primary_score, matched_text, missing_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        GitHubProfile, Internship, LeetCodeProfile, LinkedInProfile, Repo,
    };

    fn candidate() -> Candidate {
        Candidate {
            id: "c1".to_string(),
            name: "Mina".to_string(),
            alias: String::new(),
            leetcode: LeetCodeProfile {
                problems_solved: 420,
                hard_solved: 120,
                contest_rating: 1900,
                streak_days: 30,
                topics: vec!["Graphs".to_string(), "Trees".to_string()],
                ..Default::default()
            },
            github: GitHubProfile {
                total_repos: 12,
                relevant_repos: vec![Repo {
                    name: "raytracer".to_string(),
                    description: String::new(),
                    topics: vec!["rust".to_string()],
                    stars: 90,
                    commits_last_month: 12,
                    last_updated: None,
                }],
                commits_last_month: 40,
                languages: vec!["Rust".to_string(), "Python".to_string()],
            },
            linkedin: LinkedInProfile {
                skills: vec!["Rust".to_string()],
                internships: vec![Internship {
                    company: "Acme".to_string(),
                    role: "SWE Intern".to_string(),
                    duration: "3 months".to_string(),
                    skills_used: vec!["Rust".to_string()],
                }],
                certifications: vec![],
                posts_last_month: 2,
                engagement_score: 40,
            },
        }
    }

    fn targets(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bands_are_evaluated_top_down() {
        assert_eq!(tone_for(100), Tone::Excellent);
        assert_eq!(tone_for(80), Tone::Excellent);
        assert_eq!(tone_for(79), Tone::Solid);
        assert_eq!(tone_for(60), Tone::Solid);
        assert_eq!(tone_for(45), Tone::Fair);
        assert_eq!(tone_for(0), Tone::Weak);
    }

    #[test]
    fn reasoning_references_concrete_facts() {
        let tax = SkillTaxonomy::new();
        let config = ScoringConfig::default();
        let explanation = generate_explanation(
            &candidate(),
            &targets(&["Rust", "Graphs", "Docker"]),
            RoleType::Sde,
            1,
            &tax,
            &config,
        );

        // Facts come straight from the data, never invented.
        assert!(explanation.reasoning.leetcode.contains("420"));
        assert!(explanation.narrative.contains("Mina"));
        assert!(explanation.narrative.contains("#1"));
        assert!(explanation.missing_skills.contains(&"Docker".to_string()));
        assert!(explanation.narrative.contains("Docker"));
    }

    #[test]
    fn contributions_sum_close_to_overall() {
        let tax = SkillTaxonomy::new();
        let config = ScoringConfig::default();
        let explanation = generate_explanation(
            &candidate(),
            &targets(&["Rust"]),
            RoleType::Sde,
            2,
            &tax,
            &config,
        );

        let sum = explanation.contributions.leetcode
            + explanation.contributions.github
            + explanation.contributions.linkedin;
        // Each contribution is rounded independently, so allow rounding slack.
        let diff = sum.abs_diff(explanation.overall_score);
        assert!(diff <= 2, "contributions {} vs overall {}", sum, explanation.overall_score);
    }

    #[test]
    fn primary_strength_is_highest_subscore() {
        let scores = PlatformScores {
            leetcode: 40,
            github: 85,
            linkedin: 60,
        };
        assert_eq!(scores.max_platform(), Platform::GitHub);

        // Ties resolve to the first platform in declaration order.
        let tied = PlatformScores {
            leetcode: 70,
            github: 70,
            linkedin: 70,
        };
        assert_eq!(tied.max_platform(), Platform::LeetCode);
    }

    #[test]
    fn explanation_is_deterministic() {
        let tax = SkillTaxonomy::new();
        let config = ScoringConfig::default();
        let t = targets(&["Rust", "Docker"]);
        let a = generate_explanation(&candidate(), &t, RoleType::Sde, 3, &tax, &config);
        let b = generate_explanation(&candidate(), &t, RoleType::Sde, 3, &tax, &config);
        assert_eq!(a.narrative, b.narrative);
        assert_eq!(a.reasoning.github, b.reasoning.github);
        assert_eq!(a.overall_score, b.overall_score);
    }

    #[test]
    fn narrative_lists_at_most_five_matched_and_three_missing() {
        let tax = SkillTaxonomy::new();
        let config = ScoringConfig::default();
        let mut c = candidate();
        c.linkedin.skills = targets(&["A1", "B2", "C3", "D4", "E5", "F6", "G7"]);
        let t = targets(&["A1", "B2", "C3", "D4", "E5", "F6", "G7", "X1", "X2", "X3", "X4"]);
        let explanation = generate_explanation(&c, &t, RoleType::Sde, 1, &tax, &config);

        // Six matched skills exist but only five appear in the narrative.
        assert!(explanation.matched_skills.len() > 5);
        assert!(explanation.narrative.contains("E5"));
        assert!(!explanation.narrative.contains("F6"));
        assert!(explanation.narrative.contains("X3"));
        assert!(!explanation.narrative.contains("X4"));
    }
}
