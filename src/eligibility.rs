//! Eligibility classification and the per-skill proficiency cascade

use crate::config::ScoringConfig;
use crate::model::{
    Candidate, Decision, EligibilityResult, PlatformScores, RoleType, SkillLevel,
};
use crate::scoring::{overall_score, score_platforms};
use crate::taxonomy::SkillTaxonomy;
use log::debug;

/// Estimate a 0-100 proficiency for one target skill.
///
/// The cascade is ordered and short-circuiting: a skill backed by both
/// LeetCode and GitHub evidence takes the LeetCode-derived value, never a
/// blend. LeetCode coverage is treated as the strongest proficiency signal,
/// and the check order is part of the contract.
pub fn proficiency(candidate: &Candidate, skill: &str, taxonomy: &SkillTaxonomy) -> u32 {
    let lc = &candidate.leetcode;
    if lc.topics.iter().any(|t| taxonomy.skills_overlap(t, skill)) {
        let level = (lc.problems_solved as f64 / 300.0 * 100.0).round() as u32;
        return level.min(95);
    }

    let gh = &candidate.github;
    if gh
        .relevant_repos
        .iter()
        .any(|r| r.topics.iter().any(|t| taxonomy.skills_overlap(t, skill)))
    {
        let level = 50 + (gh.commits_last_month as f64 / 30.0 * 50.0).round() as u32;
        return level.min(90);
    }

    if gh.languages.iter().any(|l| taxonomy.skills_overlap(l, skill)) {
        return 70;
    }

    if candidate
        .linkedin
        .skills
        .iter()
        .any(|s| taxonomy.skills_overlap(s, skill))
    {
        return 60;
    }

    if candidate.linkedin.internships.iter().any(|i| {
        i.skills_used
            .iter()
            .any(|s| taxonomy.skills_overlap(s, skill))
    }) {
        return 75;
    }

    0
}

/// Threshold the composite score into a three-way decision and bucket every
/// target skill into strengths, weaknesses, or missing.
pub fn check_eligibility(
    candidate: &Candidate,
    target_skills: &[String],
    role: RoleType,
    taxonomy: &SkillTaxonomy,
    config: &ScoringConfig,
) -> EligibilityResult {
    let scores = score_platforms(candidate, target_skills, taxonomy);
    let fit = overall_score(&scores, &config.weights_for(role));
    let decision = decide(fit, config);

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut missing = Vec::new();
    for skill in target_skills {
        let level = proficiency(candidate, skill, taxonomy);
        let entry = SkillLevel {
            skill: skill.clone(),
            level,
        };
        if level >= 70 {
            strengths.push(entry);
        } else if level >= 30 {
            weaknesses.push(entry);
        } else {
            missing.push(entry);
        }
    }
    strengths.sort_by(|a, b| b.level.cmp(&a.level));
    weaknesses.sort_by(|a, b| b.level.cmp(&a.level));
    missing.sort_by(|a, b| b.level.cmp(&a.level));

    let recommendation = build_recommendation(candidate, decision, &weaknesses, &missing);
    debug!(
        "eligibility for {}: fit={}, decision={:?}",
        candidate.id, fit, decision
    );

    EligibilityResult {
        fit_percentage: fit,
        decision,
        decision_color: decision.color().to_string(),
        scores,
        strengths,
        weaknesses,
        missing,
        recommendation,
    }
}

fn decide(fit: u32, config: &ScoringConfig) -> Decision {
    if fit >= config.thresholds.apply {
        Decision::Apply
    } else if fit >= config.thresholds.improve {
        Decision::Improve
    } else {
        Decision::NotReady
    }
}

/// Templated recommendation text. The wording is free-form; the contract is
/// only which skills get mentioned (top weaknesses, then top missing).
fn build_recommendation(
    candidate: &Candidate,
    decision: Decision,
    weaknesses: &[SkillLevel],
    missing: &[SkillLevel],
) -> String {
    let name_list = |levels: &[SkillLevel], n: usize| {
        levels
            .iter()
            .take(n)
            .map(|s| s.skill.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    match decision {
        Decision::Apply => {
            let mut text = format!(
                "{} is a strong match for this role and should apply now.",
                candidate.name
            );
            if !weaknesses.is_empty() {
                text.push_str(&format!(
                    " Brushing up on {} would make the profile even stronger.",
                    name_list(weaknesses, 2)
                ));
            }
            text
        }
        Decision::Improve => {
            let focus = if weaknesses.is_empty() {
                name_list(missing, 3)
            } else {
                name_list(weaknesses, 3)
            };
            format!(
                "{} is close but not there yet. Focus on {} before applying.",
                candidate.name, focus
            )
        }
        Decision::NotReady => {
            let focus = if missing.is_empty() {
                name_list(weaknesses, 3)
            } else {
                name_list(missing, 3)
            };
            format!(
                "{} needs substantial preparation for this role. Start with {}.",
                candidate.name, focus
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GitHubProfile, Internship, LeetCodeProfile, LinkedInProfile, Repo};

    fn base_candidate() -> Candidate {
        Candidate {
            id: "c1".to_string(),
            name: "Asha".to_string(),
            alias: "falcon".to_string(),
            leetcode: LeetCodeProfile::default(),
            github: GitHubProfile::default(),
            linkedin: LinkedInProfile::default(),
        }
    }

    fn repo_with_topics(topics: &[&str]) -> Repo {
        Repo {
            name: "proj".to_string(),
            description: String::new(),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            stars: 0,
            commits_last_month: 0,
            last_updated: None,
        }
    }

    #[test]
    fn leetcode_evidence_wins_over_github() {
        let tax = SkillTaxonomy::new();
        let mut candidate = base_candidate();
        candidate.leetcode.topics = vec!["Dynamic Programming".to_string()];
        candidate.leetcode.problems_solved = 150;
        candidate.github.relevant_repos = vec![repo_with_topics(&["dynamic programming"])];
        candidate.github.commits_last_month = 60;

        // LeetCode-derived: round(150/300*100) = 50, not the GitHub 90.
        assert_eq!(proficiency(&candidate, "Dynamic Programming", &tax), 50);
    }

    #[test]
    fn leetcode_proficiency_caps_at_95() {
        let tax = SkillTaxonomy::new();
        let mut candidate = base_candidate();
        candidate.leetcode.topics = vec!["Graphs".to_string()];
        candidate.leetcode.problems_solved = 900;
        assert_eq!(proficiency(&candidate, "Graphs", &tax), 95);
    }

    #[test]
    fn github_repo_proficiency_caps_at_90() {
        let tax = SkillTaxonomy::new();
        let mut candidate = base_candidate();
        candidate.github.relevant_repos = vec![repo_with_topics(&["docker"])];
        candidate.github.commits_last_month = 300;
        assert_eq!(proficiency(&candidate, "Docker", &tax), 90);

        candidate.github.commits_last_month = 15;
        // 50 + round(15/30*50) = 75
        assert_eq!(proficiency(&candidate, "Docker", &tax), 75);
    }

    #[test]
    fn flat_levels_for_languages_linkedin_and_internships() {
        let tax = SkillTaxonomy::new();

        let mut by_language = base_candidate();
        by_language.github.languages = vec!["Python".to_string()];
        assert_eq!(proficiency(&by_language, "Python", &tax), 70);

        let mut by_linkedin = base_candidate();
        by_linkedin.linkedin.skills = vec!["Python".to_string()];
        assert_eq!(proficiency(&by_linkedin, "Python", &tax), 60);

        let mut by_internship = base_candidate();
        by_internship.linkedin.internships = vec![Internship {
            company: "Acme".to_string(),
            role: "Intern".to_string(),
            duration: "3 months".to_string(),
            skills_used: vec!["Python".to_string()],
        }];
        assert_eq!(proficiency(&by_internship, "Python", &tax), 75);
    }

    #[test]
    fn github_language_outranks_linkedin_and_internship() {
        let tax = SkillTaxonomy::new();
        let mut candidate = base_candidate();
        candidate.github.languages = vec!["Go".to_string()];
        candidate.linkedin.skills = vec!["Go".to_string()];
        // Order matters: (c) languages fires before (d) LinkedIn skills,
        // even though the internship value (75) would be higher.
        candidate.linkedin.internships = vec![Internship {
            company: "Acme".to_string(),
            role: "Intern".to_string(),
            duration: "6 months".to_string(),
            skills_used: vec!["Go".to_string()],
        }];
        assert_eq!(proficiency(&candidate, "Go", &tax), 70);
    }

    #[test]
    fn unknown_skill_scores_zero() {
        let tax = SkillTaxonomy::new();
        assert_eq!(proficiency(&base_candidate(), "Fortran", &tax), 0);
    }

    #[test]
    fn buckets_and_ordering() {
        let tax = SkillTaxonomy::new();
        let config = ScoringConfig::default();
        let mut candidate = base_candidate();
        candidate.github.languages = vec!["Python".to_string()]; // 70 -> strength
        candidate.linkedin.skills = vec!["SQL".to_string()]; // 60 -> weakness

        let targets = vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Docker".to_string(), // 0 -> missing
        ];
        let result = check_eligibility(&candidate, &targets, RoleType::Sde, &tax, &config);

        assert_eq!(result.strengths.len(), 1);
        assert_eq!(result.strengths[0].skill, "Python");
        assert_eq!(result.weaknesses.len(), 1);
        assert_eq!(result.weaknesses[0].skill, "SQL");
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.missing[0].skill, "Docker");
        // Low composite means NOT_READY, whose recommendation names the
        // top missing skill.
        assert_eq!(result.decision, Decision::NotReady);
        assert!(result.recommendation.contains("Docker"));
    }

    #[test]
    fn decision_thresholds() {
        let config = ScoringConfig::default();
        assert_eq!(decide(82, &config), Decision::Apply);
        assert_eq!(decide(80, &config), Decision::Apply);
        assert_eq!(decide(65, &config), Decision::Improve);
        assert_eq!(decide(50, &config), Decision::Improve);
        assert_eq!(decide(49, &config), Decision::NotReady);
        assert_eq!(decide(0, &config), Decision::NotReady);
    }

    #[test]
    fn decision_colors() {
        assert_eq!(Decision::Apply.color(), "green");
        assert_eq!(Decision::Improve.color(), "yellow");
        assert_eq!(Decision::NotReady.color(), "red");
    }
}
