//! Skill taxonomy and boundary-safe skill matching.

use std::collections::BTreeSet;

use regex::Regex;

/// Category name → skill surface forms, all lower-case.
const DEFAULT_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python",
            "java",
            "c++",
            "c#",
            "javascript",
            "typescript",
            "go",
            "rust",
            "swift",
            "kotlin",
            "php",
            "ruby",
            "dart",
            "scala",
        ],
    ),
    (
        "frameworks",
        &[
            "flutter",
            "react",
            "react native",
            "angular",
            "vue",
            "django",
            "flask",
            "fastapi",
            "spring boot",
            "express",
            "laravel",
        ],
    ),
    (
        "data",
        &[
            "sql",
            "nosql",
            "mongodb",
            "postgresql",
            "mysql",
            "oracle",
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "tableau",
            "power bi",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "jenkins",
            "git",
            "github",
            "terraform",
            "ansible",
            "linux",
        ],
    ),
    (
        "design",
        &[
            "figma",
            "adobe xd",
            "photoshop",
            "illustrator",
            "ui",
            "ux",
            "user interface",
            "user experience",
            "canva",
        ],
    ),
    (
        "soft_skills",
        &[
            "leadership",
            "communication",
            "teamwork",
            "problem solving",
            "agile",
            "scrum",
            "project management",
            "management",
        ],
    ),
];

/// A single skill form with its compiled matcher.
#[derive(Debug, Clone)]
struct SkillPattern {
    skill: String,
    pattern: Regex,
}

#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: String,
    skills: Vec<SkillPattern>,
}

impl SkillCategory {
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.skill.as_str())
    }
}

/// Immutable skill table, built once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    pub fn new<'a, I, S>(categories: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut built = Vec::new();
        for (name, skills) in categories {
            let skills = skills
                .into_iter()
                .map(|skill| {
                    let skill = skill.to_lowercase();
                    boundary_pattern(&skill).map(|pattern| SkillPattern { skill, pattern })
                })
                .collect::<Result<Vec<_>, _>>()?;
            built.push(SkillCategory {
                name: name.to_string(),
                skills,
            });
        }
        Ok(Self { categories: built })
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// All taxonomy skills present in `text`, deduplicated.
    ///
    /// A form only counts when it is not glued to a word character on either
    /// side, so "go" never matches inside "good".
    pub fn match_skills(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .filter(|s| s.pattern.is_match(&text_lower))
            .map(|s| s.skill.clone())
            .collect()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new(
            DEFAULT_TAXONOMY
                .iter()
                .map(|(name, skills)| (*name, skills.iter().copied())),
        )
        .expect("built-in taxonomy compiles")
    }
}

/// `(?<!\w)skill(?!\w)` without look-around: the neighbouring character, if
/// any, must be a non-word character.
fn boundary_pattern(skill: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(skill)))
}
