//! Section segmentation: a single top-to-bottom scan that switches the active
//! section whenever a short line looks like a section header.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::profile::{SectionKind, Sections};

/// Header candidates must be shorter than this many characters.
const MAX_HEADER_CHARS: usize = 50;

const DEFAULT_HEADERS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Education,
        &[
            "education",
            "academic",
            "studies",
            "qualification",
            "background",
            "scholastic",
        ],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work history",
            "employment",
            "career",
            "internship",
            "professional experience",
            "work experience",
        ],
    ),
    (
        SectionKind::Projects,
        &[
            "projects",
            "academic projects",
            "technical projects",
            "personal projects",
            "portfolio",
        ],
    ),
    (
        SectionKind::Skills,
        &[
            "skills",
            "technologies",
            "proficiencies",
            "expertise",
            "competencies",
            "technical skills",
            "core competencies",
        ],
    ),
    (
        SectionKind::Certifications,
        &[
            "certifications",
            "awards",
            "honors",
            "licenses",
            "achievements",
            "credentials",
        ],
    ),
];

/// Headers are never sentences; a candidate containing one of these is body text.
fn sentence_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(have|was|is|are|developed|worked)").expect("sentence pattern compiles")
    })
}

#[derive(Debug, Clone)]
struct HeaderPattern {
    kind: SectionKind,
    pattern: Regex,
}

/// Ordered header patterns. The first kind whose pattern matches wins, so
/// "Academic Projects" lands in education with the default table.
#[derive(Debug, Clone)]
pub struct HeaderTable {
    patterns: Vec<HeaderPattern>,
}

impl HeaderTable {
    pub fn new<'a, I, S>(entries: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (SectionKind, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let patterns = entries
            .into_iter()
            .map(|(kind, synonyms)| {
                let alternation = synonyms
                    .into_iter()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join("|");
                Regex::new(&format!(r"(?i)^\s*(\d\.|[•\-\*])?\s*({alternation})"))
                    .map(|pattern| HeaderPattern { kind, pattern })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Section kind announced by `line`, if it is a header.
    pub fn classify(&self, line: &str) -> Option<SectionKind> {
        let line = line.trim();
        if line.chars().count() >= MAX_HEADER_CHARS {
            return None;
        }
        let kind = self
            .patterns
            .iter()
            .find(|p| p.pattern.is_match(line))
            .map(|p| p.kind)?;
        if sentence_word_re().is_match(&line.to_lowercase()) {
            return None;
        }
        Some(kind)
    }

    /// Splits `text` into sections. Header lines are consumed, lines before the
    /// first header are dropped, and every other non-empty line is stored trimmed.
    pub fn segment(&self, text: &str) -> Sections {
        let mut sections = Sections::default();
        let mut current: Option<SectionKind> = None;

        for line in text.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(kind) = self.classify(line) {
                current = Some(kind);
                continue;
            }
            if let Some(kind) = current {
                sections.push(kind, line);
            }
        }

        sections
    }
}

impl Default for HeaderTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_HEADERS
                .iter()
                .map(|(kind, synonyms)| (*kind, synonyms.iter().copied())),
        )
        .expect("built-in header table compiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_lines_under_headers() {
        let table = HeaderTable::default();
        let sections = table.segment("Education\nBSc CS, MIT\nExperience\nBuilt X");
        assert_eq!(sections.lines(SectionKind::Education), ["BSc CS, MIT"]);
        assert_eq!(sections.lines(SectionKind::Experience), ["Built X"]);
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let table = HeaderTable::default();
        let sections = table.segment("Jane Doe\nBackend engineer\nSkills\nRust");
        assert_eq!(sections.present_kinds(), vec![SectionKind::Skills]);
        assert_eq!(sections.lines(SectionKind::Skills), ["Rust"]);
    }

    #[test]
    fn test_numbered_and_bulleted_headers() {
        let table = HeaderTable::default();
        assert_eq!(table.classify("1. Education"), Some(SectionKind::Education));
        assert_eq!(table.classify("• Technical Skills"), Some(SectionKind::Skills));
        assert_eq!(table.classify("  - PORTFOLIO"), Some(SectionKind::Projects));
    }

    #[test]
    fn test_sentences_are_not_headers() {
        let table = HeaderTable::default();
        assert_eq!(table.classify("Experience was gained at Acme"), None);
        assert_eq!(table.classify("Skills developed over time"), None);
    }

    #[test]
    fn test_long_lines_are_not_headers() {
        let table = HeaderTable::default();
        let line = "Experience leading distributed teams across several time zones";
        assert!(line.chars().count() >= MAX_HEADER_CHARS);
        assert_eq!(table.classify(line), None);
    }

    #[test]
    fn test_header_must_start_the_line() {
        let table = HeaderTable::default();
        assert_eq!(table.classify("My education"), None);
    }

    #[test]
    fn test_first_matching_kind_wins() {
        let table = HeaderTable::default();
        assert_eq!(
            table.classify("Academic Projects"),
            Some(SectionKind::Education)
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let table = HeaderTable::default();
        let sections = table.segment("Skills\n\n   \nRust\n\nGo");
        assert_eq!(sections.lines(SectionKind::Skills), ["Rust", "Go"]);
    }

    #[test]
    fn test_header_switches_back() {
        let table = HeaderTable::default();
        let text = "Experience\nAcme\nSkills\nRust\nCertifications\nAWS SAA\nExperience\nGlobex";
        let sections = table.segment(text);
        assert_eq!(sections.lines(SectionKind::Experience), ["Acme", "Globex"]);
        assert_eq!(sections.lines(SectionKind::Certifications), ["AWS SAA"]);
    }
}
