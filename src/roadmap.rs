//! Skill-gap analysis and the templated improvement roadmap

use crate::config::ScoringConfig;
use crate::eligibility::proficiency;
use crate::model::{Candidate, GapPriority, Roadmap, RoadmapStep, SkillGap};
use crate::taxonomy::SkillTaxonomy;
use log::debug;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

struct SkillTemplate {
    tasks: &'static [&'static str],
    resources: &'static [&'static str],
}

/// Per-skill task/resource templates, keyed by exact canonical skill name.
/// Any skill without an entry falls back to DEFAULT_TEMPLATE, so
/// no gap is ever left without a plan.
static TEMPLATES: LazyLock<HashMap<&'static str, SkillTemplate>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "Docker",
        SkillTemplate {
            tasks: &[
                "Containerize an existing project with a multi-stage Dockerfile",
                "Publish the image and wire up docker-compose for local development",
            ],
            resources: &["Docker official getting-started guide", "Play with Docker labs"],
        },
    );
    map.insert(
        "Python",
        SkillTemplate {
            tasks: &[
                "Work through a substantial Python project end to end",
                "Solve 30 practice problems emphasizing idiomatic Python",
            ],
            resources: &["Official Python tutorial", "Real Python exercises"],
        },
    );
    map.insert(
        "SQL",
        SkillTemplate {
            tasks: &[
                "Model a small schema and write join-heavy queries against it",
                "Practice window functions and aggregation puzzles",
            ],
            resources: &["SQLBolt interactive lessons", "LeetCode database problems"],
        },
    );
    map.insert(
        "JavaScript",
        SkillTemplate {
            tasks: &[
                "Build a browser app without a framework to learn the core language",
                "Add asynchronous data fetching and error handling",
            ],
            resources: &["MDN JavaScript guide", "javascript.info"],
        },
    );
    map.insert(
        "React",
        SkillTemplate {
            tasks: &[
                "Build a multi-page React app with hooks and client-side routing",
                "Add state management and component tests",
            ],
            resources: &["Official React docs", "React Testing Library docs"],
        },
    );
    map.insert(
        "Machine Learning",
        SkillTemplate {
            tasks: &[
                "Train and evaluate baseline models on two public datasets",
                "Write up an error analysis comparing model variants",
            ],
            resources: &["Andrew Ng's machine learning course", "Kaggle learn tracks"],
        },
    );
    map.insert(
        "Kubernetes",
        SkillTemplate {
            tasks: &[
                "Deploy a two-service app to a local cluster with manifests",
                "Add liveness probes, resource limits, and a rolling update",
            ],
            resources: &["Kubernetes official tutorials", "Kind quickstart"],
        },
    );
    map.insert(
        "AWS",
        SkillTemplate {
            tasks: &[
                "Deploy a small service on EC2 or Lambda behind an API gateway",
                "Set up IAM roles and a budget alarm for the account",
            ],
            resources: &["AWS free-tier hands-on labs", "AWS Well-Architected guides"],
        },
    );
    map.insert(
        "Java",
        SkillTemplate {
            tasks: &[
                "Build a REST service with Spring Boot and JPA",
                "Add unit and integration tests with JUnit",
            ],
            resources: &["Dev.java tutorials", "Baeldung Spring guides"],
        },
    );
    map.insert(
        "System Design",
        SkillTemplate {
            tasks: &[
                "Sketch architectures for three classic design prompts",
                "Do two mock design interviews and iterate on feedback",
            ],
            resources: &["System design primer", "Designing Data-Intensive Applications"],
        },
    );
    map
});

static DEFAULT_TEMPLATE: SkillTemplate = SkillTemplate {
    tasks: &[
        "Complete a hands-on course or tutorial covering the fundamentals",
        "Build a small project that exercises the skill and publish it",
    ],
    resources: &["Official documentation", "A highly-rated online course"],
};

static WEEK_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)\s*weeks?").expect("week range pattern is valid"));
static WEEK_SINGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*weeks?").expect("week pattern is valid"));

/// Compute per-skill deficits against the required proficiency level.
/// Skills already at or above the bar are skipped. Output is sorted by
/// priority, then by gap size descending.
pub fn analyze_skill_gaps(
    candidate: &Candidate,
    target_skills: &[String],
    taxonomy: &SkillTaxonomy,
    config: &ScoringConfig,
) -> Vec<SkillGap> {
    let required = config.thresholds.required_proficiency;

    let mut gaps: Vec<SkillGap> = target_skills
        .iter()
        .filter_map(|skill| {
            let current = proficiency(candidate, skill, taxonomy);
            let gap = required.saturating_sub(current);
            if gap == 0 {
                return None;
            }
            let (priority, estimated_time) = classify_gap(current);
            Some(SkillGap {
                skill: skill.clone(),
                required_level: required,
                current_level: current,
                gap,
                priority,
                estimated_time: estimated_time.to_string(),
            })
        })
        .collect();

    gaps.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| b.gap.cmp(&a.gap)));
    gaps
}

fn classify_gap(current: u32) -> (GapPriority, &'static str) {
    if current == 0 {
        (GapPriority::Critical, "3-4 weeks")
    } else if current < 40 {
        (GapPriority::Important, "2-3 weeks")
    } else {
        (GapPriority::Polish, "1-2 weeks")
    }
}

/// Assemble an improvement plan from the top 5 gaps. A candidate with no
/// gaps gets an explicit empty roadmap ("0 weeks"), never a null.
pub fn generate_roadmap(
    candidate: &Candidate,
    target_skills: &[String],
    taxonomy: &SkillTaxonomy,
    config: &ScoringConfig,
) -> Roadmap {
    let gaps = analyze_skill_gaps(candidate, target_skills, taxonomy, config);

    let steps: Vec<RoadmapStep> = gaps
        .into_iter()
        .take(5)
        .map(|gap| {
            let template = TEMPLATES
                .get(gap.skill.as_str())
                .unwrap_or(&DEFAULT_TEMPLATE);
            RoadmapStep {
                skill: gap.skill,
                priority: gap.priority,
                tasks: template.tasks.iter().map(|s| s.to_string()).collect(),
                resources: template.resources.iter().map(|s| s.to_string()).collect(),
                estimated_time: gap.estimated_time,
            }
        })
        .collect();

    let total_weeks: f64 = steps.iter().map(|s| midpoint_weeks(&s.estimated_time)).sum();
    debug!(
        "roadmap for {}: {} steps, {:.1} weeks raw",
        candidate.id,
        steps.len(),
        total_weeks
    );

    Roadmap {
        total_estimated_time: format!("{} weeks", total_weeks.round() as u32),
        steps,
    }
}

/// Midpoint of an "N-M weeks" range; a bare "N weeks" counts as N.
/// Unparseable input counts as zero rather than failing.
fn midpoint_weeks(estimate: &str) -> f64 {
    if let Some(caps) = WEEK_RANGE_RE.captures(estimate) {
        let low: f64 = caps[1].parse().unwrap_or(0.0);
        let high: f64 = caps[2].parse().unwrap_or(0.0);
        return (low + high) / 2.0;
    }
    if let Some(caps) = WEEK_SINGLE_RE.captures(estimate) {
        return caps[1].parse().unwrap_or(0.0);
    }
    0.0
}
