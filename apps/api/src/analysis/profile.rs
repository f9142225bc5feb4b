//! Data carried between pipeline stages: section kinds, the extracted profile,
//! and the score result.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A résumé section the extractor can segment into and the scorer can reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
    /// Rewarded as optional by the rubric. The default header table carries no
    /// synonyms for it, so extraction never fills it.
    Summary,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Summary => "summary",
        }
    }

    /// Display name used in feedback lines ("Experience", "Education", ...).
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Education => "Education",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Certifications => "Certifications",
            SectionKind::Summary => "Summary",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lines grouped by section, each list in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sections(BTreeMap<SectionKind, Vec<String>>);

impl Sections {
    pub fn push(&mut self, kind: SectionKind, line: impl Into<String>) {
        self.0.entry(kind).or_default().push(line.into());
    }

    pub fn lines(&self, kind: SectionKind) -> &[String] {
        self.0.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, kind: SectionKind) -> bool {
        !self.lines(kind).is_empty()
    }

    /// Non-empty section kinds in declaration order.
    pub fn present_kinds(&self) -> Vec<SectionKind> {
        self.0
            .iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(kind, _)| *kind)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entities {
    pub organizations: Vec<String>,
    pub dates: Vec<String>,
}

/// Structure pulled out of a document the classifier accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeProfile {
    pub sections: Sections,
    pub taxonomy_skills: BTreeSet<String>,
    /// Ranked free-text phrases, at most 30. Only a fallback skill signal.
    pub keywords: Vec<String>,
    pub entities: Entities,
}

/// Output of extraction. A rejected document never carries sections, so it can
/// never be scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedProfile {
    Rejected { error: String },
    Resume(ResumeProfile),
}

impl ExtractedProfile {
    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractedProfile::Rejected { error } => Some(error),
            ExtractedProfile::Resume(_) => None,
        }
    }

    pub fn resume(&self) -> Option<&ResumeProfile> {
        match self {
            ExtractedProfile::Rejected { .. } => None,
            ExtractedProfile::Resume(profile) => Some(profile),
        }
    }

    /// Skills reported to callers: taxonomy skills for a résumé, the (empty)
    /// keyword list for a rejected document.
    pub fn skills_detected(&self) -> Vec<String> {
        match self {
            ExtractedProfile::Rejected { .. } => Vec::new(),
            ExtractedProfile::Resume(profile) => profile.taxonomy_skills.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub sections_found: Vec<SectionKind>,
}

impl ScoreResult {
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            sections_found: Vec::new(),
        }
    }
}
