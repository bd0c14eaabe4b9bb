//! Job description analyzer
//!
//! Extracts taxonomy skills from free text, splits them into mandatory and
//! optional, detects the role category by keyword frequency, and maps
//! experience wording to a canonical band. Absence of matches always degrades
//! to documented defaults; this module never fails on any input.

use crate::model::RoleType;
use crate::taxonomy::SkillTaxonomy;
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdAnalysis {
    pub role_type: RoleType,
    pub mandatory_skills: Vec<String>,
    pub optional_skills: Vec<String>,
    pub experience_required: String,
    pub total_skills: usize,
}

/// Hand-tuned patterns for high-frequency variants the plain vocabulary scan
/// can miss. Each maps to a canonical taxonomy name.
static VARIANT_PATTERNS: &[(&str, &str)] = &[
    (r"(?i)\breact(?:\.js|js)?\b", "React"),
    (r"(?i)\bnode(?:\.js|js)?\b", "Node.js"),
    (r"(?i)\bk8s\b|\bkubernetes\b", "Kubernetes"),
    (r"(?i)\bci\s*/\s*cd\b", "CI/CD"),
    (r"(?i)c\+\+", "C++"),
    (r"(?i)\bc#", "C#"),
    (r"(?i)\bpower\s*bi\b", "Power BI"),
    (r"(?i)\bscikit[\s-]?learn\b", "Scikit-learn"),
    (r"(?i)\brest(?:ful)?\s+apis?\b", "REST API"),
];

/// Role keyword lists for the frequency classifier. SDE comes first: it is
/// the declared fallback and wins all ties.
static ROLE_KEYWORDS: &[(RoleType, &str)] = &[
    (
        RoleType::Sde,
        r"(?i)\b(software (?:engineer|developer)|sde|backend|back-end|frontend|front-end|distributed systems|microservices|system design|data structures|algorithms|rest apis?)\b",
    ),
    (
        RoleType::Ai,
        r"(?i)\b(ai|artificial intelligence|deep learning|neural networks?|nlp|natural language processing|computer vision|llms?|generative ai)\b",
    ),
    (
        RoleType::DataAnalyst,
        r"(?i)\b(data analyst|data analysis|analytics|tableau|power bi|excel|reporting|dashboards?|sql|statistics)\b",
    ),
    (
        RoleType::FullStack,
        r"(?i)\b(full[\s-]?stack|mern|mean stack|web applications?|end[\s-]to[\s-]end development)\b",
    ),
    (
        RoleType::MlEngineer,
        r"(?i)\b(machine learning|ml engineer|mlops|model (?:training|deployment|serving)|pytorch|tensorflow|feature engineering)\b",
    ),
];

pub struct JdAnalyzer {
    taxonomy: SkillTaxonomy,
    scanner: AhoCorasick,
    scan_terms: Vec<String>,
    variants: Vec<(Regex, &'static str)>,
    role_patterns: Vec<(RoleType, Regex)>,
    required_re: Regex,
    preferred_re: Regex,
    years_range_re: Regex,
    years_plus_re: Regex,
}

impl JdAnalyzer {
    pub fn new(taxonomy: SkillTaxonomy) -> Self {
        // Scan canonical skills plus synonym aliases; hits are normalized
        // back to canonical names afterwards.
        let mut scan_terms: Vec<String> = taxonomy
            .all_skills()
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        scan_terms.extend(taxonomy.synonyms().map(|(alias, _)| alias.to_string()));

        let scanner = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&scan_terms)
            .expect("taxonomy scanner patterns are static and valid");

        let variants = VARIANT_PATTERNS
            .iter()
            .map(|(pattern, canonical)| {
                (
                    Regex::new(pattern).expect("variant pattern is valid"),
                    *canonical,
                )
            })
            .collect();

        let role_patterns = ROLE_KEYWORDS
            .iter()
            .map(|(role, pattern)| (*role, Regex::new(pattern).expect("role pattern is valid")))
            .collect();

        let required_re =
            Regex::new(r"(?i)\b(requirements?|required|must[\s-]haves?|essential|qualifications)\b\s*:?")
                .expect("required section pattern is valid");
        let preferred_re = Regex::new(
            r"(?i)\b(nice[\s-]to[\s-]have|preferred|bonus|good[\s-]to[\s-]have|plus)\b\s*:?",
        )
        .expect("preferred section pattern is valid");
        let years_range_re =
            Regex::new(r"(?i)\b(\d{1,2})\s*(?:-|–|to)\s*(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b")
                .expect("year range pattern is valid");
        let years_plus_re = Regex::new(r"(?i)\b(\d{1,2})\s*\+\s*(?:years?|yrs?)\b")
            .expect("year plus pattern is valid");

        Self {
            taxonomy,
            scanner,
            scan_terms,
            variants,
            role_patterns,
            required_re,
            preferred_re,
            years_range_re,
            years_plus_re,
        }
    }

    pub fn analyze(&self, text: &str) -> JdAnalysis {
        let occurrences = self.extract_skill_occurrences(text);
        let role_type = self.detect_role(text);
        let (mandatory_skills, optional_skills) = self.split_mandatory_optional(text, &occurrences);
        let experience_required = self.detect_experience(text);
        let total_skills = mandatory_skills.len() + optional_skills.len();

        debug!(
            "jd analysis: role={}, mandatory={}, optional={}, experience={}",
            role_type,
            mandatory_skills.len(),
            optional_skills.len(),
            experience_required
        );

        JdAnalysis {
            role_type,
            mandatory_skills,
            optional_skills,
            experience_required,
            total_skills,
        }
    }

    /// All occurrence offsets per canonical skill, ordered by first sighting.
    fn extract_skill_occurrences(&self, text: &str) -> Vec<(String, Vec<usize>)> {
        let mut offsets: HashMap<String, Vec<usize>> = HashMap::new();

        for mat in self.scanner.find_iter(text) {
            if !has_word_boundaries(text, mat.start(), mat.end()) {
                continue;
            }
            let term = &self.scan_terms[mat.pattern().as_usize()];
            let canonical = self.taxonomy.normalize(term);
            offsets.entry(canonical).or_default().push(mat.start());
        }

        for (pattern, canonical) in &self.variants {
            for mat in pattern.find_iter(text) {
                offsets
                    .entry((*canonical).to_string())
                    .or_default()
                    .push(mat.start());
            }
        }

        let mut found: Vec<(String, Vec<usize>)> = offsets
            .into_iter()
            .map(|(skill, mut positions)| {
                positions.sort_unstable();
                positions.dedup();
                (skill, positions)
            })
            .collect();
        found.sort_by(|a, b| a.1[0].cmp(&b.1[0]).then_with(|| a.0.cmp(&b.0)));
        found
    }

    /// Keyword-frequency role classifier. Highest total count wins; ties keep
    /// the earliest declared role, so an all-zero text defaults to SDE.
    fn detect_role(&self, text: &str) -> RoleType {
        let mut best_role = RoleType::Sde;
        let mut best_count = 0usize;
        for (role, pattern) in &self.role_patterns {
            let count = pattern.find_iter(text).count();
            debug!("role keyword count: {} -> {}", role, count);
            if count > best_count {
                best_role = *role;
                best_count = count;
            }
        }
        best_role
    }

    fn split_mandatory_optional(
        &self,
        text: &str,
        occurrences: &[(String, Vec<usize>)],
    ) -> (Vec<String>, Vec<String>) {
        let req_start = self.required_re.find(text).map(|m| m.start());
        let opt_start = self.preferred_re.find(text).map(|m| m.start());

        let req_span = req_start.map(|r| {
            let end = match opt_start {
                Some(o) if o > r => o,
                _ => text.len(),
            };
            r..end
        });
        let opt_span = opt_start.map(|o| {
            let end = match req_start {
                Some(r) if r > o => r,
                _ => text.len(),
            };
            o..end
        });

        let halfway = text.len() / 2;
        let mut mandatory = Vec::new();
        let mut optional = Vec::new();

        for (skill, positions) in occurrences {
            let in_required = req_span
                .as_ref()
                .is_some_and(|span| positions.iter().any(|p| span.contains(p)));
            let in_optional = opt_span
                .as_ref()
                .is_some_and(|span| positions.iter().any(|p| span.contains(p)));
            let is_mandatory = if in_optional && !in_required {
                // Appears only in the nice-to-have span.
                false
            } else if in_required {
                true
            } else if req_span.is_none() {
                // No explicit required section: first half of the document
                // counts as mandatory territory.
                positions[0] < halfway
            } else {
                false
            };
            if is_mandatory {
                mandatory.push(skill.clone());
            } else {
                optional.push(skill.clone());
            }
        }

        // Degenerate JDs must not leave mandatory empty while skills exist:
        // bisect the extracted list instead.
        if mandatory.is_empty() && !optional.is_empty() {
            let all = optional;
            let mid = (all.len() + 1) / 2;
            let (front, back) = all.split_at(mid);
            mandatory = front.to_vec();
            optional = back.to_vec();
        }

        (mandatory, optional)
    }

    /// Regex cascade over experience wording. Defaults to "0-2 years".
    fn detect_experience(&self, text: &str) -> String {
        if let Some(caps) = self.years_range_re.captures(text) {
            return format!("{}-{} years", &caps[1], &caps[2]);
        }
        if let Some(caps) = self.years_plus_re.captures(text) {
            return format!("{}+ years", &caps[1]);
        }
        let lower = text.to_lowercase();
        if lower.contains("senior") || lower.contains("sr.") {
            return "5+ years".to_string();
        }
        if lower.contains("mid-level") || lower.contains("mid level") || lower.contains("intermediate")
        {
            return "2-5 years".to_string();
        }
        if lower.contains("entry") || lower.contains("junior") || lower.contains("new grad") {
            return "0-2 years".to_string();
        }
        "0-2 years".to_string()
    }
}

/// True when the byte range sits on word boundaries, so "go" never matches
/// inside "category". Scan terms are ASCII, so byte checks suffice.
fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end >= bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}
