// Feedback synthesis: an LLM narrative when a credential is configured, the
// rule-based bundle otherwise or whenever the LLM path fails.

pub mod fallback;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::profile::{ExtractedProfile, ResumeProfile, SectionKind};
use crate::llm_client::{self, prompts::JSON_ONLY_SYSTEM, LlmClient};

pub use fallback::{fallback_feedback, rejected_feedback};

const MAX_ITEMS: usize = 3;
const PROMPT_KEYWORDS: usize = 15;
const PROMPT_EXPERIENCE_CHARS: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBundle {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

impl FeedbackBundle {
    pub fn truncated(mut self) -> Self {
        self.strengths.truncate(MAX_ITEMS);
        self.weaknesses.truncate(MAX_ITEMS);
        self.suggestions.truncate(MAX_ITEMS);
        self
    }
}

/// What came back from the model.
#[derive(Debug, Clone, PartialEq)]
pub enum LlmFeedback {
    Parsed(FeedbackBundle),
    /// Raw model output that was not a feedback object.
    ParseFailure(String),
}

impl LlmFeedback {
    pub fn from_response(text: String) -> Self {
        match llm_client::parse_json::<FeedbackBundle>(&text) {
            Ok(bundle) => LlmFeedback::Parsed(bundle.truncated()),
            Err(e) => {
                debug!("LLM feedback did not parse: {e}");
                LlmFeedback::ParseFailure(text)
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct FeedbackSynthesizer {
    llm: Option<LlmClient>,
}

impl FeedbackSynthesizer {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn generate(&self, score: f64, profile: &ExtractedProfile) -> FeedbackBundle {
        let resume = match profile {
            ExtractedProfile::Rejected { error } => return rejected_feedback(error),
            ExtractedProfile::Resume(resume) => resume,
        };

        let Some(llm) = &self.llm else {
            return fallback_feedback(score, resume);
        };

        let system = format!("{} {}", prompts::FEEDBACK_SYSTEM, JSON_ONLY_SYSTEM);
        let outcome = match llm.call_text(&build_prompt(score, resume), &system).await {
            Ok(text) => LlmFeedback::from_response(text),
            Err(e) => {
                warn!("LLM feedback unavailable, using rule-based feedback: {e}");
                return fallback_feedback(score, resume);
            }
        };

        match outcome {
            LlmFeedback::Parsed(bundle) => bundle,
            LlmFeedback::ParseFailure(raw) => {
                warn!(
                    "LLM feedback was not valid JSON ({} chars), using rule-based feedback",
                    raw.len()
                );
                fallback_feedback(score, resume)
            }
        }
    }
}

pub fn build_prompt(score: f64, resume: &ResumeProfile) -> String {
    let sections: Vec<&str> = resume
        .sections
        .present_kinds()
        .into_iter()
        .map(|kind| kind.as_str())
        .collect();
    let keywords: Vec<&str> = resume
        .keywords
        .iter()
        .take(PROMPT_KEYWORDS)
        .map(String::as_str)
        .collect();
    let experience: String = resume
        .sections
        .lines(SectionKind::Experience)
        .join(" ")
        .chars()
        .take(PROMPT_EXPERIENCE_CHARS)
        .collect();

    prompts::FEEDBACK_PROMPT_TEMPLATE
        .replace("{score}", &score.to_string())
        .replace("{sections}", &sections.join(", "))
        .replace("{keywords}", &keywords.join(", "))
        .replace("{experience}", &experience)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> ResumeProfile {
        let mut resume = ResumeProfile::default();
        resume.sections.push(SectionKind::Experience, "e".repeat(800));
        resume.sections.push(SectionKind::Skills, "Rust");
        resume.keywords = (0..20).map(|i| format!("kw{i}")).collect();
        resume.taxonomy_skills.insert("rust".to_string());
        resume
    }

    #[test]
    fn test_parsed_feedback_is_truncated() {
        let text = r#"```json
{"strengths": ["a", "b", "c", "d"], "weaknesses": ["w"], "suggestions": [], "summary": "ok"}
```"#;
        match LlmFeedback::from_response(text.to_string()) {
            LlmFeedback::Parsed(bundle) => {
                assert_eq!(bundle.strengths, vec!["a", "b", "c"]);
                assert_eq!(bundle.summary, "ok");
            }
            other => panic!("expected parsed feedback, got {other:?}"),
        }
    }

    #[test]
    fn test_prose_is_a_parse_failure() {
        let outcome = LlmFeedback::from_response("Great resume overall!".to_string());
        assert_eq!(
            outcome,
            LlmFeedback::ParseFailure("Great resume overall!".to_string())
        );
    }

    #[test]
    fn test_prompt_limits_keywords_and_experience() {
        let prompt = build_prompt(72.5, &sample_resume());
        assert!(prompt.contains("ATS Score: 72.5/100"));
        assert!(prompt.contains("Sections Found: experience, skills"));
        assert!(prompt.contains("kw14"));
        assert!(!prompt.contains("kw15"));
        assert!(prompt.contains(&"e".repeat(500)));
        assert!(!prompt.contains(&"e".repeat(501)));
    }

    #[tokio::test]
    async fn test_without_credential_uses_fallback() {
        let synthesizer = FeedbackSynthesizer::new(None);
        let profile = ExtractedProfile::Resume(sample_resume());
        let feedback = synthesizer.generate(50.0, &profile).await;
        assert_eq!(feedback, fallback_feedback(50.0, profile.resume().unwrap()));
    }

    #[tokio::test]
    async fn test_rejected_profile_never_reaches_llm() {
        let llm = LlmClient::new("unused".to_string(), 1).unwrap();
        let synthesizer = FeedbackSynthesizer::new(Some(llm));
        let profile = ExtractedProfile::Rejected {
            error: "Invalid Document".to_string(),
        };
        let feedback = synthesizer.generate(0.0, &profile).await;
        assert_eq!(feedback, rejected_feedback("Invalid Document"));
    }
}
