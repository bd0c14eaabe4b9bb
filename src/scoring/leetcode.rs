//! LeetCode sub-score

use crate::model::LeetCodeProfile;
use crate::taxonomy::SkillTaxonomy;

/// The canonical DSA topics the coverage term is measured against.
pub const DSA_TOPICS: [&str; 7] = [
    "Arrays",
    "Strings",
    "Linked Lists",
    "Trees",
    "Graphs",
    "Dynamic Programming",
    "Sorting",
];

/// Five capped sub-terms: problems solved (40), contest rating (20), DSA
/// topic coverage (25), hard-problem ratio (10), daily streak (5).
pub fn score_leetcode(profile: &LeetCodeProfile, taxonomy: &SkillTaxonomy) -> u32 {
    let solved = profile.problems_solved as f64;

    let solved_term = (solved / 500.0 * 40.0).min(40.0);
    let rating_term = (profile.contest_rating as f64 / 2000.0 * 20.0).min(20.0);

    let covered = DSA_TOPICS
        .iter()
        .filter(|topic| {
            profile
                .topics
                .iter()
                .any(|t| taxonomy.skills_overlap(t, topic))
        })
        .count();
    let coverage_term = covered as f64 / DSA_TOPICS.len() as f64 * 25.0;

    // Guard: a candidate with zero solves has no hard-problem ratio.
    let hard_term = if profile.problems_solved == 0 {
        0.0
    } else {
        (profile.hard_solved as f64 / solved * 40.0).min(10.0)
    };

    let streak_term = (profile.streak_days as f64 / 10.0).min(5.0);

    let total = solved_term + rating_term + coverage_term + hard_term + streak_term;
    total.min(100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(solved: u32, hard: u32, rating: u32, streak: u32, topics: &[&str]) -> LeetCodeProfile {
        LeetCodeProfile {
            problems_solved: solved,
            hard_solved: hard,
            contest_rating: rating,
            streak_days: streak,
            topics: topics.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn every_term_at_cap_scores_exactly_100() {
        // 40 + 20 + 25 + 10 + 5, then capped at 100 regardless.
        let p = profile(500, 150, 2000, 50, &DSA_TOPICS);
        assert_eq!(score_leetcode(&p, &SkillTaxonomy::new()), 100);
    }

    #[test]
    fn solved_term_caps_at_40() {
        let tax = SkillTaxonomy::new();
        let at_cap = profile(500, 0, 0, 0, &[]);
        let over_cap = profile(5000, 0, 0, 0, &[]);
        assert_eq!(score_leetcode(&at_cap, &tax), 40);
        assert_eq!(score_leetcode(&over_cap, &tax), 40);
    }

    #[test]
    fn hard_ratio_term_caps_at_10() {
        let tax = SkillTaxonomy::new();
        // 100% hard would be 40 raw points, capped at 10.
        let p = profile(100, 100, 0, 0, &[]);
        let baseline = profile(100, 0, 0, 0, &[]);
        assert_eq!(score_leetcode(&p, &tax) - score_leetcode(&baseline, &tax), 10);
    }

    #[test]
    fn zero_solved_has_no_hard_ratio() {
        let p = profile(0, 10, 0, 0, &[]);
        assert_eq!(score_leetcode(&p, &SkillTaxonomy::new()), 0);
    }

    #[test]
    fn topic_coverage_is_fractional() {
        let tax = SkillTaxonomy::new();
        let none = profile(0, 0, 0, 0, &[]);
        let all = profile(0, 0, 0, 0, &DSA_TOPICS);
        assert_eq!(score_leetcode(&none, &tax), 0);
        assert_eq!(score_leetcode(&all, &tax), 25);
    }

    #[test]
    fn monotonic_in_problems_solved() {
        let tax = SkillTaxonomy::new();
        let mut last = 0;
        for solved in [0, 50, 150, 300, 500, 800] {
            let score = score_leetcode(&profile(solved, 0, 0, 0, &[]), &tax);
            assert!(score >= last, "score dropped at solved={}", solved);
            last = score;
        }
    }

    #[test]
    fn bounded_to_100() {
        let p = profile(u32::MAX, u32::MAX, u32::MAX, u32::MAX, &DSA_TOPICS);
        assert!(score_leetcode(&p, &SkillTaxonomy::new()) <= 100);
    }
}
