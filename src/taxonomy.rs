//! Skill taxonomy, synonym resolution, and the shared containment predicate
//!
//! The vocabulary and synonym table are read-only constants built once.
//! Normalization is case-insensitive exact-token lookup: synonyms first,
//! then the canonical vocabulary. Unknown skills pass through verbatim and
//! simply never match anything downstream.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical vocabulary, grouped by category.
static TAXONOMY: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Go", "Rust", "Ruby",
            "PHP", "Swift", "Kotlin", "Scala", "R", "MATLAB",
        ],
    ),
    (
        "frontend",
        &[
            "React", "Angular", "Vue", "Svelte", "Next.js", "HTML", "CSS", "Tailwind CSS",
            "Redux",
        ],
    ),
    (
        "backend",
        &[
            "Node.js", "Express", "Django", "Flask", "FastAPI", "Spring Boot", "GraphQL",
            "REST API",
        ],
    ),
    (
        "databases",
        &[
            "SQL", "PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite", "Elasticsearch",
            "Cassandra", "DynamoDB",
        ],
    ),
    (
        "data-analysis",
        &[
            "Pandas", "NumPy", "Tableau", "Power BI", "Excel", "Apache Spark", "Data Analysis",
            "Data Visualization", "Statistics",
        ],
    ),
    (
        "ml",
        &[
            "Machine Learning", "Deep Learning", "Natural Language Processing",
            "Computer Vision", "TensorFlow", "PyTorch", "Scikit-learn", "MLOps",
        ],
    ),
    (
        "devops",
        &[
            "Docker", "Kubernetes", "AWS", "Azure", "GCP", "Terraform", "CI/CD", "Jenkins",
            "Linux", "Git",
        ],
    ),
    (
        "concepts",
        &[
            "Data Structures", "Algorithms", "System Design", "Object-Oriented Programming",
            "Distributed Systems", "Microservices", "Agile", "Unit Testing",
        ],
    ),
];

/// Alternate spellings and abbreviations mapped to canonical names.
static SYNONYMS: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("ecmascript", "JavaScript"),
    ("ts", "TypeScript"),
    ("py", "Python"),
    ("python3", "Python"),
    ("golang", "Go"),
    ("cpp", "C++"),
    ("c sharp", "C#"),
    (".net", "C#"),
    ("reactjs", "React"),
    ("react.js", "React"),
    ("vuejs", "Vue"),
    ("vue.js", "Vue"),
    ("angularjs", "Angular"),
    ("nextjs", "Next.js"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    ("expressjs", "Express"),
    ("express.js", "Express"),
    ("springboot", "Spring Boot"),
    ("spring", "Spring Boot"),
    ("postgres", "PostgreSQL"),
    ("mongo", "MongoDB"),
    ("ml", "Machine Learning"),
    ("dl", "Deep Learning"),
    ("nlp", "Natural Language Processing"),
    ("sklearn", "Scikit-learn"),
    ("scikit learn", "Scikit-learn"),
    ("tf", "TensorFlow"),
    ("k8s", "Kubernetes"),
    ("kube", "Kubernetes"),
    ("amazon web services", "AWS"),
    ("google cloud", "GCP"),
    ("google cloud platform", "GCP"),
    ("ci cd", "CI/CD"),
    ("cicd", "CI/CD"),
    ("dsa", "Data Structures"),
    ("oop", "Object-Oriented Programming"),
    ("tailwind", "Tailwind CSS"),
    ("powerbi", "Power BI"),
    ("spark", "Apache Spark"),
    ("viz", "Data Visualization"),
];

static LOOKUP: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    // Synonyms take lookup priority; insert canonicals first so a synonym
    // that collides with a canonical spelling wins.
    for (_, skills) in TAXONOMY {
        for skill in *skills {
            map.insert(skill.to_lowercase(), *skill);
        }
    }
    for (alias, canonical) in SYNONYMS {
        map.insert((*alias).to_string(), *canonical);
    }
    map
});

static ALL_SKILLS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut skills: Vec<&'static str> = TAXONOMY
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
        .collect();
    skills.sort_unstable();
    skills.dedup();
    skills
});

/// Stateless view over the static taxonomy tables. Cheap to construct,
/// passed explicitly into every component that matches skills.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillTaxonomy;

impl SkillTaxonomy {
    pub fn new() -> Self {
        SkillTaxonomy
    }

    /// Resolve a raw skill string to its canonical name.
    ///
    /// Unknown input is returned unchanged (trimmed), so free-text skills
    /// flow through the pipeline without ever failing.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match LOOKUP.get(&trimmed.to_lowercase()) {
            Some(canonical) => (*canonical).to_string(),
            None => trimmed.to_string(),
        }
    }

    /// Deduplicated flat union of the canonical vocabulary.
    pub fn all_skills(&self) -> &'static [&'static str] {
        &ALL_SKILLS
    }

    /// Synonym aliases, for scanners that want to catch alternate spellings.
    pub fn synonyms(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        SYNONYMS.iter().copied()
    }

    /// The single skill-match policy point: normalized, case-insensitive,
    /// bidirectional substring containment.
    ///
    /// Deliberately lenient: "Java" matches inside "JavaScript". Swapping
    /// the policy (e.g. to token-boundary matching) only requires touching
    /// this predicate.
    pub fn skills_overlap(&self, a: &str, b: &str) -> bool {
        let a = self.normalize(a).to_lowercase();
        let b = self.normalize(b).to_lowercase();
        if a.is_empty() || b.is_empty() {
            return false;
        }
        a.contains(&b) || b.contains(&a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_synonyms_to_canonical_names() {
        let tax = SkillTaxonomy::new();
        assert_eq!(tax.normalize("ML"), "Machine Learning");
        assert_eq!(tax.normalize("k8s"), "Kubernetes");
        assert_eq!(tax.normalize("js"), "JavaScript");
        assert_eq!(tax.normalize("node"), "Node.js");
    }

    #[test]
    fn canonical_lookup_is_case_insensitive() {
        let tax = SkillTaxonomy::new();
        assert_eq!(tax.normalize("python"), "Python");
        assert_eq!(tax.normalize("DOCKER"), "Docker");
        assert_eq!(tax.normalize("  sql "), "SQL");
    }

    #[test]
    fn unknown_skills_pass_through_verbatim() {
        let tax = SkillTaxonomy::new();
        assert_eq!(tax.normalize("MyCustomFramework"), "MyCustomFramework");
        assert_eq!(tax.normalize(" COBOL "), "COBOL");
    }

    #[test]
    fn all_skills_is_deduplicated() {
        let tax = SkillTaxonomy::new();
        let skills = tax.all_skills();
        let mut copy: Vec<_> = skills.to_vec();
        copy.dedup();
        assert_eq!(copy.len(), skills.len());
        assert!(skills.contains(&"Python"));
        assert!(skills.contains(&"Machine Learning"));
    }

    #[test]
    fn overlap_is_bidirectional_containment() {
        let tax = SkillTaxonomy::new();
        assert!(tax.skills_overlap("React", "react"));
        assert!(tax.skills_overlap("Machine Learning", "learning"));
        // The documented leniency: "Java" is contained in "JavaScript".
        assert!(tax.skills_overlap("Java", "JavaScript"));
        assert!(!tax.skills_overlap("Rust", "Haskell"));
        assert!(!tax.skills_overlap("", "Rust"));
    }

    #[test]
    fn overlap_applies_normalization_first() {
        let tax = SkillTaxonomy::new();
        // "k8s" and "kube" both normalize to Kubernetes.
        assert!(tax.skills_overlap("k8s", "kube"));
        assert!(tax.skills_overlap("ML", "machine learning"));
    }
}
