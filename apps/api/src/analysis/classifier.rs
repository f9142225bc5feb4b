//! Cheap gate that rejects uploads which are clearly not résumés (cover
//! letters, articles) before extraction runs.

/// Words whose co-occurrence signals a résumé layout.
const HEADER_VOCABULARY: &[&str] = &[
    "experience",
    "education",
    "skills",
    "objective",
    "summary",
    "projects",
    "certifications",
];

const MIN_HEADER_HITS: usize = 3;
const MIN_BULLETS: usize = 5;
const MIN_LINES_WITHOUT_BULLETS: usize = 10;

/// Returns true when the normalized text plausibly is a résumé.
///
/// Needs at least three header-vocabulary hits (case-insensitive substring).
/// Documents with fewer than five bullet glyphs must span at least ten lines.
pub fn is_resume(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    let header_hits = HEADER_VOCABULARY
        .iter()
        .filter(|h| text_lower.contains(*h))
        .count();
    if header_hits < MIN_HEADER_HITS {
        return false;
    }

    let bullets = text.chars().filter(|c| matches!(c, '•' | '-' | '*')).count();
    if bullets < MIN_BULLETS && text.split('\n').count() < MIN_LINES_WITHOUT_BULLETS {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_headers_with_bullets_is_resume() {
        let text = "Summary\nObjective\nExperience\n- a\n- b\nEducation\n* c\nSkills\n• d\nProjects\n- e\nCertifications";
        assert!(is_resume(text));
    }

    #[test]
    fn test_two_headers_rejected_regardless_of_bullets() {
        let text = "Experience\n- a\n- b\n- c\n- d\n- e\n- f\nEducation\n- g";
        assert!(!is_resume(text));
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let text = "EXPERIENCE\n- a\nEDUCATION\n- b\nSKILLS\n- c\n- d\n- e";
        assert!(is_resume(text));
    }

    #[test]
    fn test_few_bullets_and_few_lines_rejected() {
        let text = "Experience at Acme\nEducation at MIT\nSkills: Rust";
        assert!(!is_resume(text));
    }

    #[test]
    fn test_few_bullets_but_many_lines_accepted() {
        let text = "Experience\nAcme\nEngineer\nEducation\nMIT\nBSc\nSkills\nRust\nGo\nSQL";
        assert_eq!(text.split('\n').count(), 10);
        assert!(is_resume(text));
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(!is_resume(""));
    }
}
