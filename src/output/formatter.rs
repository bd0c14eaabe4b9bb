//! Console and JSON formatters with rich presentation

use crate::error::Result;
use crate::jd::JdAnalysis;
use crate::model::{Decision, EligibilityResult, ExplanationData, RankedCandidate, Roadmap};
use crate::output::OutputFormat;
use colored::{Color, Colorize};
use serde_json::json;

/// One renderable view over engine results. Borrowed so callers format the
/// same data in several formats without cloning.
pub enum Report<'a> {
    Ranking(&'a [RankedCandidate]),
    Eligibility {
        candidate_name: &'a str,
        result: &'a EligibilityResult,
    },
    Roadmap {
        candidate_name: &'a str,
        roadmap: &'a Roadmap,
    },
    Explanation(&'a ExplanationData),
    JdAnalysis(&'a JdAnalysis),
}

/// Trait for turning a report into printable text.
pub trait OutputFormatter {
    fn format(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and section headers.
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };
        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn decision_badge(&self, decision: Decision) -> String {
        let color = match decision {
            Decision::Apply => Color::Green,
            Decision::Improve => Color::Yellow,
            Decision::NotReady => Color::Red,
        };
        let label = decision.to_string();
        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn score_color(score: u32) -> Color {
        match score {
            80..=u32::MAX => Color::Green,
            50..=79 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_score(&self, label: &str, score: u32) -> String {
        let value = format!("{:>3}/100", score);
        format!(
            "  {:<10} {}\n",
            label,
            self.colorize(&value, Self::score_color(score))
        )
    }

    fn format_ranking(&self, ranked: &[RankedCandidate]) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("CANDIDATE RANKING", 1));
        if ranked.is_empty() {
            output.push_str("No candidates matched the requested pool.\n");
            return output;
        }
        for entry in ranked {
            output.push_str(&format!(
                "{:>3}. {} {}\n",
                entry.rank,
                self.colorize(&entry.name, Color::White),
                self.colorize(
                    &format!("({}/100)", entry.overall_score),
                    Self::score_color(entry.overall_score)
                ),
            ));
            output.push_str(&format!(
                "     LeetCode {} | GitHub {} | LinkedIn {}\n",
                entry.scores.leetcode, entry.scores.github, entry.scores.linkedin
            ));
            if !entry.matched_skills.is_empty() {
                output.push_str(&format!(
                    "     Matched: {}\n",
                    self.colorize(&entry.matched_skills.join(", "), Color::Green)
                ));
            }
            if !entry.missing_skills.is_empty() {
                output.push_str(&format!(
                    "     Missing: {}\n",
                    self.colorize(&entry.missing_skills.join(", "), Color::Yellow)
                ));
            }
            output.push('\n');
        }
        output
    }

    fn format_eligibility(&self, name: &str, result: &EligibilityResult) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("ELIGIBILITY CHECK", 1));
        output.push_str(&format!(
            "{}: {}% fit {}\n",
            self.colorize(name, Color::White),
            result.fit_percentage,
            self.decision_badge(result.decision)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&self.format_score("LeetCode", result.scores.leetcode));
        output.push_str(&self.format_score("GitHub", result.scores.github));
        output.push_str(&self.format_score("LinkedIn", result.scores.linkedin));

        if !result.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            for entry in &result.strengths {
                output.push_str(&format!(
                    "  • {} ({})\n",
                    self.colorize(&entry.skill, Color::Green),
                    entry.level
                ));
            }
        }
        if !result.weaknesses.is_empty() {
            output.push_str(&self.format_header("Needs Work", 3));
            for entry in &result.weaknesses {
                output.push_str(&format!(
                    "  • {} ({})\n",
                    self.colorize(&entry.skill, Color::Yellow),
                    entry.level
                ));
            }
        }
        if !result.missing.is_empty() {
            output.push_str(&self.format_header("Missing", 3));
            for entry in &result.missing {
                output.push_str(&format!(
                    "  • {}\n",
                    self.colorize(&entry.skill, Color::Red)
                ));
            }
        }

        output.push_str(&self.format_header("Recommendation", 2));
        output.push_str(&format!("{}\n", result.recommendation));
        output
    }

    fn format_roadmap(&self, name: &str, roadmap: &Roadmap) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("IMPROVEMENT ROADMAP", 1));
        if roadmap.steps.is_empty() {
            output.push_str(&format!(
                "{} already covers the target skills. Nothing to plan.\n",
                self.colorize(name, Color::Green)
            ));
            return output;
        }
        output.push_str(&format!(
            "Plan for {} | Estimated total: {}\n",
            self.colorize(name, Color::White),
            self.colorize(&roadmap.total_estimated_time, Color::Cyan)
        ));
        for (i, step) in roadmap.steps.iter().enumerate() {
            let priority_color = match step.priority {
                crate::model::GapPriority::Critical => Color::Red,
                crate::model::GapPriority::Important => Color::Yellow,
                crate::model::GapPriority::Polish => Color::Green,
            };
            output.push_str(&self.format_header(
                &format!("{}. {} ({})", i + 1, step.skill, step.estimated_time),
                3,
            ));
            output.push_str(&format!(
                "  Priority: {}\n",
                self.colorize(step.priority.label(), priority_color)
            ));
            for task in &step.tasks {
                output.push_str(&format!("  • {}\n", task));
            }
            if !step.resources.is_empty() {
                output.push_str(&format!("  Resources: {}\n", step.resources.join(", ")));
            }
        }
        output
    }

    fn format_explanation(&self, data: &ExplanationData) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("SCORE EXPLANATION", 1));
        output.push_str(&format!(
            "{} | Rank #{} | Overall {}\n",
            self.colorize(&data.candidate_name, Color::White),
            data.rank,
            self.colorize(
                &format!("{}/100", data.overall_score),
                Self::score_color(data.overall_score)
            )
        ));

        output.push_str(&self.format_header("Platform Breakdown", 3));
        output.push_str(&format!(
            "  LeetCode {:>3} (contributes {:>2}): {}\n",
            data.scores.leetcode, data.contributions.leetcode, data.reasoning.leetcode
        ));
        output.push_str(&format!(
            "  GitHub   {:>3} (contributes {:>2}): {}\n",
            data.scores.github, data.contributions.github, data.reasoning.github
        ));
        output.push_str(&format!(
            "  LinkedIn {:>3} (contributes {:>2}): {}\n",
            data.scores.linkedin, data.contributions.linkedin, data.reasoning.linkedin
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("{}\n", data.narrative));
        output
    }

    fn format_jd(&self, analysis: &JdAnalysis) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("JOB DESCRIPTION ANALYSIS", 1));
        output.push_str(&format!(
            "Role: {} | Experience: {} | Skills found: {}\n",
            self.colorize(&analysis.role_type.to_string(), Color::Cyan),
            analysis.experience_required,
            analysis.total_skills
        ));
        output.push_str(&self.format_header("Mandatory Skills", 3));
        for skill in &analysis.mandatory_skills {
            output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
        }
        if !analysis.optional_skills.is_empty() {
            output.push_str(&self.format_header("Nice to Have", 3));
            for skill in &analysis.optional_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Yellow)));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = match report {
            Report::Ranking(ranked) => self.format_ranking(ranked),
            Report::Eligibility {
                candidate_name,
                result,
            } => self.format_eligibility(candidate_name, result),
            Report::Roadmap {
                candidate_name,
                roadmap,
            } => self.format_roadmap(candidate_name, roadmap),
            Report::Explanation(data) => self.format_explanation(data),
            Report::JdAnalysis(analysis) => self.format_jd(analysis),
        };
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        match report {
            Report::Ranking(ranked) => self.serialize(ranked),
            Report::Eligibility {
                candidate_name,
                result,
            } => self.serialize(&json!({
                "candidate": candidate_name,
                "eligibility": result,
            })),
            Report::Roadmap {
                candidate_name,
                roadmap,
            } => self.serialize(&json!({
                "candidate": candidate_name,
                "roadmap": roadmap,
            })),
            Report::Explanation(data) => self.serialize(data),
            Report::JdAnalysis(analysis) => self.serialize(analysis),
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlatformScores, SkillLevel};

    fn eligibility() -> EligibilityResult {
        EligibilityResult {
            fit_percentage: 72,
            decision: Decision::Improve,
            decision_color: "yellow".to_string(),
            scores: PlatformScores {
                leetcode: 80,
                github: 70,
                linkedin: 60,
            },
            strengths: vec![SkillLevel {
                skill: "Python".to_string(),
                level: 70,
            }],
            weaknesses: vec![SkillLevel {
                skill: "SQL".to_string(),
                level: 60,
            }],
            missing: vec![SkillLevel {
                skill: "Docker".to_string(),
                level: 0,
            }],
            recommendation: "Focus on SQL before applying.".to_string(),
        }
    }

    #[test]
    fn console_eligibility_mentions_every_bucket() {
        let formatter = ConsoleFormatter::new(false);
        let report = Report::Eligibility {
            candidate_name: "Asha",
            result: &eligibility(),
        };
        let text = formatter.format(&report).unwrap();
        assert!(text.contains("Asha"));
        assert!(text.contains("72% fit"));
        assert!(text.contains("[IMPROVE]"));
        assert!(text.contains("Python"));
        assert!(text.contains("SQL"));
        assert!(text.contains("Docker"));
    }

    #[test]
    fn console_without_colors_has_no_ansi_escapes() {
        let formatter = ConsoleFormatter::new(false);
        let report = Report::Eligibility {
            candidate_name: "Asha",
            result: &eligibility(),
        };
        let text = formatter.format(&report).unwrap();
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn json_eligibility_is_valid_and_wraps_candidate_name() {
        let formatter = JsonFormatter::new(false);
        let report = Report::Eligibility {
            candidate_name: "Asha",
            result: &eligibility(),
        };
        let text = formatter.format(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["candidate"], "Asha");
        assert_eq!(value["eligibility"]["fit_percentage"], 72);
        assert_eq!(value["eligibility"]["decision"], "IMPROVE");
    }

    #[test]
    fn empty_ranking_prints_a_notice() {
        let formatter = ConsoleFormatter::new(false);
        let text = formatter.format(&Report::Ranking(&[])).unwrap();
        assert!(text.contains("No candidates"));
    }

    #[test]
    fn pretty_json_differs_from_compact() {
        let pretty = JsonFormatter::new(true);
        let compact = JsonFormatter::new(false);
        let report = Report::Explanation(&sample_explanation());
        let a = pretty.format(&report).unwrap();
        let b = compact.format(&report).unwrap();
        assert!(a.contains('\n'));
        assert!(!b.contains('\n'));
        let va: serde_json::Value = serde_json::from_str(&a).unwrap();
        let vb: serde_json::Value = serde_json::from_str(&b).unwrap();
        assert_eq!(va, vb);
    }

    fn sample_explanation() -> ExplanationData {
        ExplanationData {
            candidate_id: "c1".to_string(),
            candidate_name: "Asha".to_string(),
            rank: 1,
            overall_score: 84,
            scores: PlatformScores {
                leetcode: 90,
                github: 80,
                linkedin: 75,
            },
            contributions: PlatformScores {
                leetcode: 41,
                github: 28,
                linkedin: 15,
            },
            reasoning: crate::model::PlatformReasoning {
                leetcode: "Outstanding record.".to_string(),
                github: "Strong portfolio.".to_string(),
                linkedin: "Good profile.".to_string(),
            },
            matched_skills: vec!["Python".to_string()],
            missing_skills: vec![],
            narrative: "Asha ranks #1.".to_string(),
        }
    }
}
