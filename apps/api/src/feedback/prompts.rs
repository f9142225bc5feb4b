// LLM prompt constants for feedback synthesis.

/// System prompt for résumé feedback. Combined with the JSON-only fragment.
pub const FEEDBACK_SYSTEM: &str =
    "You are a professional career coach and ATS (Applicant Tracking System) optimization expert.";

/// Feedback prompt template.
/// Replace: {score}, {sections}, {keywords}, {experience}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Analyze the following resume data and provide critical, high-quality feedback.

ATS Score: {score}/100
Sections Found: {sections}
Detected Skills/Keywords: {keywords}
Experience Summary: {experience}

Return a JSON object with exactly these keys:
- "strengths": List of 3 specific things done well.
- "weaknesses": List of 3 specific areas needing improvement.
- "suggestions": List of 3 actionable steps to increase the score.
- "summary": A 2-sentence professional executive summary.

Be critical and realistic. If the score is low, explain why specifically based on the data."#;
