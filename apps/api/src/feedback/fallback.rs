//! Deterministic feedback derived from what the extractor found.

use crate::analysis::profile::{ResumeProfile, SectionKind};
use crate::feedback::FeedbackBundle;

const CORE_SECTIONS: [SectionKind; 3] = [
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
];

const RICH_EXPERIENCE_CHARS: usize = 500;
const BRIEF_EXPERIENCE_CHARS: usize = 100;

pub fn rejected_feedback(error: &str) -> FeedbackBundle {
    FeedbackBundle {
        strengths: Vec::new(),
        weaknesses: vec!["Invalid Document Type".to_string()],
        suggestions: vec!["Please upload a professional Resume or CV in PDF/DOCX format.".to_string()],
        summary: error.to_string(),
    }
}

/// Rule-based feedback. Every list is non-empty and holds at most three items.
pub fn fallback_feedback(score: f64, resume: &ResumeProfile) -> FeedbackBundle {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();

    let mut missing = Vec::new();
    for kind in CORE_SECTIONS {
        if resume.sections.is_present(kind) {
            strengths.push(format!("Clear {} section", kind.title()));
        } else {
            missing.push(kind.title());
        }
    }
    if !missing.is_empty() {
        weaknesses.push(format!("Missing core sections: {}", missing.join(", ")));
        suggestions.push(format!(
            "Add dedicated {} sections to improve parsability.",
            missing.join(" and ")
        ));
    }

    let skill_count = resume.taxonomy_skills.len();
    if skill_count > 5 {
        strengths.push(format!("Detected {skill_count} relevant technical skills"));
    } else if skill_count > 0 {
        weaknesses.push("Low count of recognized technical skills".to_string());
        suggestions.push(
            "Add more specific technical skills (e.g., specific languages, tools, frameworks) to the Skills section."
                .to_string(),
        );
    } else {
        weaknesses.push("No technical skills detected".to_string());
        suggestions.push(
            "Create a dedicated Skills section and list your top technical competencies.".to_string(),
        );
    }

    let experience_chars: usize = resume
        .sections
        .lines(SectionKind::Experience)
        .iter()
        .map(|line| line.chars().count())
        .sum();
    if experience_chars > RICH_EXPERIENCE_CHARS {
        strengths.push("Good amount of detail in Experience".to_string());
    } else if experience_chars < BRIEF_EXPERIENCE_CHARS && !missing.contains(&SectionKind::Experience.title()) {
        weaknesses.push("Experience descriptions are too brief".to_string());
        suggestions.push(
            "Expand on your work experience with bullet points describing your specific contributions."
                .to_string(),
        );
    }

    let summary = if score < 40.0 {
        if weaknesses.is_empty() {
            weaknesses.push("Content may be poorly formatted or unreadable".to_string());
        }
        "Your resume is struggling to pass basic ATS filters. Focus on standard headings and clear text formatting."
    } else if score < 70.0 {
        "Your resume has good bones but needs more specific keywords and detailed descriptions to rank higher."
    } else {
        strengths.push("Strong overall ATS compatibility".to_string());
        "This is a competitive resume. Focus on tailoring it to the specific job description for maximum impact."
    };

    if strengths.is_empty() {
        strengths.push("Basic contact info detected".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("Could not identify specific weaknesses, but score is low".to_string());
    }
    if suggestions.is_empty() {
        suggestions.push("Review standard resume templates for best practices.".to_string());
    }

    FeedbackBundle {
        strengths,
        weaknesses,
        suggestions,
        summary: summary.to_string(),
    }
    .truncated()
}
