//! ATS Scoring — fixed additive rubric over an extracted profile.
//!
//! Components (nominal budget in brackets; only the final clamp is enforced):
//! - structure   [25]: +5 for any section, required/3 × 15, optional/3 × 5
//! - skills      [35]: min(skills/8 × 35, 35)
//! - education   [15]: +5 for the section, min(indicators/2 × 10, 10)
//! - experience  [25]: min(verbs/5 × 15, 15) + metric points (0 / 5 / 10)
//! Texts under 50 words take a 20% penalty. Final = round(min(total, 100), 1),
//! with exact ties going to even.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::analysis::profile::{ExtractedProfile, ResumeProfile, ScoreResult, SectionKind};

pub const REQUIRED_SECTIONS: [SectionKind; 3] = [
    SectionKind::Education,
    SectionKind::Experience,
    SectionKind::Skills,
];

pub const OPTIONAL_SECTIONS: [SectionKind; 3] = [
    SectionKind::Projects,
    SectionKind::Certifications,
    SectionKind::Summary,
];

const SKILL_TARGET: f64 = 8.0;
const MIN_WORDS: usize = 50;
const BREVITY_MULTIPLIER: f64 = 0.8;

const EDUCATION_INDICATORS: &[&str] = &[
    "degree",
    "bachelor",
    "master",
    "phd",
    "university",
    "college",
    "gpa",
    "graduate",
    "b.tech",
    "m.tech",
    "b.e",
    "b.s",
    "diploma",
    "certified",
];

const ACTION_VERBS: &[&str] = &[
    "developed",
    "led",
    "managed",
    "built",
    "implemented",
    "scaled",
    "optimized",
    "increased",
    "decreased",
    "saved",
    "launched",
    "automated",
    "mentored",
    "created",
    "designed",
    "performed",
    "achieved",
];

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+%").expect("percent pattern compiles"))
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("number pattern compiles"))
}

/// Per-component points before the brevity multiplier and the clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub structure: f64,
    pub skills: f64,
    pub education: f64,
    pub experience: f64,
    pub brevity_multiplier: f64,
}

impl ScoreBreakdown {
    pub fn unpenalized(&self) -> f64 {
        self.structure + self.skills + self.education + self.experience
    }

    pub fn total(&self) -> f64 {
        self.unpenalized() * self.brevity_multiplier
    }
}

/// Scores a profile against the raw (normalized) text it came from.
/// A rejected profile scores zero with no sections.
pub fn score(profile: &ExtractedProfile, raw_text: &str) -> ScoreResult {
    let resume = match profile {
        ExtractedProfile::Rejected { .. } => return ScoreResult::zero(),
        ExtractedProfile::Resume(resume) => resume,
    };

    let breakdown = score_breakdown(resume, raw_text);
    debug!("Score breakdown: {breakdown:?}");

    let sections_found = REQUIRED_SECTIONS
        .iter()
        .chain(OPTIONAL_SECTIONS.iter())
        .copied()
        .filter(|kind| resume.sections.is_present(*kind))
        .collect();

    ScoreResult {
        score: round_to_tenth(breakdown.total().min(100.0)),
        sections_found,
    }
}

pub fn score_breakdown(resume: &ResumeProfile, raw_text: &str) -> ScoreBreakdown {
    let brevity_multiplier = if raw_text.split_whitespace().count() < MIN_WORDS {
        BREVITY_MULTIPLIER
    } else {
        1.0
    };

    ScoreBreakdown {
        structure: structure_points(resume),
        skills: skill_points(resume.taxonomy_skills.len()),
        education: education_points(resume.sections.lines(SectionKind::Education)),
        experience: experience_points(
            resume.sections.lines(SectionKind::Experience),
            resume.sections.lines(SectionKind::Projects),
        ),
        brevity_multiplier,
    }
}

fn structure_points(resume: &ResumeProfile) -> f64 {
    let found = |kinds: &[SectionKind]| {
        kinds
            .iter()
            .filter(|k| resume.sections.is_present(**k))
            .count() as f64
    };
    let found_required = found(&REQUIRED_SECTIONS);
    let found_optional = found(&OPTIONAL_SECTIONS);

    let base = if found_required > 0.0 || found_optional > 0.0 {
        5.0
    } else {
        0.0
    };
    base + found_required / REQUIRED_SECTIONS.len() as f64 * 15.0
        + found_optional / OPTIONAL_SECTIONS.len() as f64 * 5.0
}

pub fn skill_points(skill_count: usize) -> f64 {
    (skill_count as f64 / SKILL_TARGET * 35.0).min(35.0)
}

fn education_points(lines: &[String]) -> f64 {
    let base = if lines.is_empty() { 0.0 } else { 5.0 };
    let text = lines.join(" ").to_lowercase();
    let matched = EDUCATION_INDICATORS
        .iter()
        .filter(|i| text.contains(*i))
        .count() as f64;
    base + (matched / 2.0 * 10.0).min(10.0)
}

fn experience_points(experience: &[String], projects: &[String]) -> f64 {
    let lines: Vec<&str> = experience
        .iter()
        .chain(projects.iter())
        .map(String::as_str)
        .collect();
    let text = lines.join(" ").to_lowercase();

    let verbs = ACTION_VERBS.iter().filter(|v| text.contains(*v)).count() as f64;
    let verb_points = (verbs / 5.0 * 15.0).min(15.0);

    let has_metrics = percent_re().is_match(&text) || number_re().find_iter(&text).count() > 2;
    let metric_points = if lines.is_empty() {
        0.0
    } else if has_metrics {
        10.0
    } else {
        5.0
    };

    verb_points + metric_points
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::profile::Sections;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn resume_with(lines: &[(SectionKind, &str)], skills: &[&str]) -> ResumeProfile {
        let mut built = Sections::default();
        for (kind, line) in lines {
            built.push(*kind, *line);
        }
        ResumeProfile {
            sections: built,
            taxonomy_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Every component at (or past) its nominal cap.
    fn perfect_resume() -> ResumeProfile {
        resume_with(
            &[
                (
                    SectionKind::Education,
                    "Bachelor of Science, State University, GPA 3.9",
                ),
                (
                    SectionKind::Experience,
                    "Developed and launched a billing platform, saved 20%",
                ),
                (
                    SectionKind::Experience,
                    "Managed a team of 6, built CI pipelines, automated releases",
                ),
                (SectionKind::Projects, "Designed a scheduler used by 300 users"),
                (SectionKind::Skills, "Rust, Go, Python"),
                (SectionKind::Certifications, "AWS Solutions Architect"),
            ],
            &["rust", "go", "python", "sql", "docker", "aws", "git", "linux"],
        )
    }

    #[test]
    fn test_rejected_profile_scores_zero() {
        let profile = ExtractedProfile::Rejected {
            error: "bad".to_string(),
        };
        assert_eq!(score(&profile, &words(100)), ScoreResult::zero());
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let profile = ExtractedProfile::Resume(ResumeProfile::default());
        let result = score(&profile, &words(100));
        assert_eq!(result.score, 0.0);
        assert!(result.sections_found.is_empty());
    }

    #[test]
    fn test_skill_points_monotonic_and_saturating() {
        let mut previous = 0.0;
        for count in 0..=12 {
            let points = skill_points(count);
            assert!(points >= previous, "skills sub-score dropped at {count}");
            previous = points;
        }
        assert_eq!(skill_points(8), 35.0);
        assert_eq!(skill_points(12), 35.0);
        assert!((skill_points(4) - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_structure_points() {
        let resume = resume_with(
            &[
                (SectionKind::Education, "x"),
                (SectionKind::Experience, "x"),
                (SectionKind::Skills, "x"),
                (SectionKind::Projects, "x"),
            ],
            &[],
        );
        // 5 + 15 + 5/3
        assert!((structure_points(&resume) - (20.0 + 5.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_education_points() {
        assert_eq!(education_points(&[]), 0.0);
        assert_eq!(education_points(&["Self taught".to_string()]), 5.0);
        assert_eq!(education_points(&["Diploma in Design".to_string()]), 10.0);
        assert_eq!(
            education_points(&["Master of Science, Imperial College".to_string()]),
            15.0
        );
    }

    #[test]
    fn test_experience_metric_tiers() {
        let no_lines: [String; 0] = [];
        assert_eq!(experience_points(&no_lines, &no_lines), 0.0);

        let plain = ["Answered support tickets".to_string()];
        assert_eq!(experience_points(&plain, &no_lines), 5.0);

        let percent = ["Answered 40% of tickets".to_string()];
        assert_eq!(experience_points(&percent, &no_lines), 10.0);

        let numbers = ["Answered 3 queues, 2 shifts, 1 pager".to_string()];
        assert_eq!(experience_points(&numbers, &no_lines), 10.0);

        let two_numbers = ["Answered 3 queues and 2 shifts".to_string()];
        assert_eq!(experience_points(&two_numbers, &no_lines), 5.0);
    }

    #[test]
    fn test_action_verbs_count_once_each_and_cap() {
        let lines = ["Built and built again".to_string()];
        assert_close(experience_points(&lines, &[]), 3.0 + 5.0);

        let many = [
            "Developed, managed, built, implemented, scaled, optimized, launched".to_string(),
        ];
        assert_close(experience_points(&many, &[]), 15.0 + 5.0);
    }

    #[test]
    fn test_verbs_match_as_substrings() {
        // "handled" carries "led"
        let lines = ["Handled support tickets".to_string()];
        assert_close(experience_points(&lines, &[]), 3.0 + 5.0);
    }

    #[test]
    fn test_projects_count_towards_experience() {
        let projects = ["Created a 10% faster parser".to_string()];
        assert_close(experience_points(&[], &projects), 3.0 + 10.0);
    }

    #[test]
    fn test_brevity_penalty_is_exactly_80_percent() {
        let profile = ExtractedProfile::Resume(perfect_resume());
        let full = score(&profile, &words(60));
        let short = score(&profile, &words(40));

        let breakdown = score_breakdown(profile.resume().unwrap(), &words(60));
        let unpenalized = breakdown.unpenalized();
        assert!((full.score - round_to_tenth(unpenalized.min(100.0))).abs() < 1e-9);
        assert!((short.score - round_to_tenth(unpenalized * 0.8)).abs() < 1e-9);
        assert!((full.score - 98.3).abs() < 1e-9);
        assert!((short.score - 78.7).abs() < 1e-9);
    }

    #[test]
    fn test_sections_found_order() {
        let resume = resume_with(
            &[
                (SectionKind::Certifications, "x"),
                (SectionKind::Skills, "x"),
                (SectionKind::Education, "x"),
            ],
            &[],
        );
        let result = score(&ExtractedProfile::Resume(resume), &words(60));
        assert_eq!(
            result.sections_found,
            vec![
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Certifications
            ]
        );
    }

    #[test]
    fn test_score_never_exceeds_100() {
        let mut resume = perfect_resume();
        resume.sections.push(SectionKind::Summary, "x");
        let result = score(&ExtractedProfile::Resume(resume), &words(60));
        assert!(result.score <= 100.0);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(62.75), 62.8);
        assert_eq!(round_to_tenth(50.2), 50.2);
        assert_eq!(round_to_tenth(86.25), 86.2);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // 20 structure + 26.25 skills + 15 education + 25 experience
        let profile = ExtractedProfile::Resume(resume_with(
            &[
                (SectionKind::Education, "Bachelor of Science, State University"),
                (SectionKind::Experience, "Developed billing APIs, saved 20%"),
                (SectionKind::Experience, "Managed releases, built pipelines, automated tests"),
                (SectionKind::Skills, "Rust, Go, Python"),
            ],
            &["rust", "go", "python", "sql", "docker", "aws"],
        ));
        let breakdown = score_breakdown(profile.resume().unwrap(), &words(60));
        assert_close(breakdown.unpenalized(), 86.25);
        assert_eq!(score(&profile, &words(60)).score, 86.2);
    }
}
