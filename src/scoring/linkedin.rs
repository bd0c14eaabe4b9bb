//! LinkedIn sub-score

use crate::model::LinkedInProfile;
use crate::taxonomy::SkillTaxonomy;

/// Skill match (40) + internships (25) + certifications (15) + posting
/// activity (10) + engagement (10).
pub fn score_linkedin(
    profile: &LinkedInProfile,
    target_skills: &[String],
    taxonomy: &SkillTaxonomy,
) -> u32 {
    // Guard: no targets means no matchable fraction.
    let match_term = if target_skills.is_empty() {
        0.0
    } else {
        let matched = target_skills
            .iter()
            .filter(|skill| {
                profile
                    .skills
                    .iter()
                    .any(|s| taxonomy.skills_overlap(s, skill))
            })
            .count();
        matched as f64 / target_skills.len() as f64 * 40.0
    };

    let internship_term = (profile.internships.len() as f64 * 10.0).min(25.0);
    let cert_term = (profile.certifications.len() as f64 * 5.0).min(15.0);
    let posts_term = (profile.posts_last_month as f64 * 2.0).min(10.0);
    let engagement_term = profile.engagement_score.min(100) as f64 / 100.0 * 10.0;

    let total = match_term + internship_term + cert_term + posts_term + engagement_term;
    total.min(100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Internship;

    fn internship(company: &str, skills: &[&str]) -> Internship {
        Internship {
            company: company.to_string(),
            role: "Intern".to_string(),
            duration: "3 months".to_string(),
            skills_used: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn targets(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_skill_match_earns_40() {
        let tax = SkillTaxonomy::new();
        let profile = LinkedInProfile {
            skills: vec!["Python".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        assert_eq!(score_linkedin(&profile, &targets(&["python", "sql"]), &tax), 40);
    }

    #[test]
    fn match_uses_normalized_containment() {
        let tax = SkillTaxonomy::new();
        let profile = LinkedInProfile {
            skills: vec!["k8s".to_string()],
            ..Default::default()
        };
        assert_eq!(score_linkedin(&profile, &targets(&["Kubernetes"]), &tax), 40);
    }

    #[test]
    fn internship_and_cert_terms_cap() {
        let tax = SkillTaxonomy::new();
        let profile = LinkedInProfile {
            internships: (0..5).map(|i| internship(&format!("co{}", i), &[])).collect(),
            certifications: (0..10).map(|i| format!("cert{}", i)).collect(),
            ..Default::default()
        };
        // internships 5*10 = 50 capped at 25; certs 10*5 = 50 capped at 15.
        assert_eq!(score_linkedin(&profile, &[], &tax), 40);
    }

    #[test]
    fn engagement_scales_to_10_points() {
        let tax = SkillTaxonomy::new();
        let profile = LinkedInProfile {
            engagement_score: 100,
            ..Default::default()
        };
        assert_eq!(score_linkedin(&profile, &[], &tax), 10);

        let half = LinkedInProfile {
            engagement_score: 50,
            ..Default::default()
        };
        assert_eq!(score_linkedin(&half, &[], &tax), 5);
    }

    #[test]
    fn empty_profile_scores_zero() {
        let tax = SkillTaxonomy::new();
        assert_eq!(score_linkedin(&LinkedInProfile::default(), &targets(&["Rust"]), &tax), 0);
    }

    #[test]
    fn bounded_to_100() {
        let tax = SkillTaxonomy::new();
        let profile = LinkedInProfile {
            skills: vec!["Python".to_string()],
            internships: (0..10).map(|i| internship(&format!("co{}", i), &[])).collect(),
            certifications: (0..10).map(|i| format!("cert{}", i)).collect(),
            posts_last_month: 100,
            engagement_score: 100,
        };
        assert_eq!(score_linkedin(&profile, &targets(&["Python"]), &tax), 100);
    }
}
