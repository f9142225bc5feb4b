//! In-process NLP engine: pattern-based date and organisation recognition plus
//! RAKE phrase ranking. No model files, so it cannot fail to load.

use async_trait::async_trait;
use regex::Regex;

use crate::nlp::{rake, Entity, EntityLabel, NlpEngine, NlpError};

const ORG_SUFFIXES: &str = r"Inc|LLC|Ltd|Corp|Corporation|Company|Technologies|Labs|Group|Solutions|Systems|University|College|Institute|School|Academy|Bank|Foundation";

pub struct RuleBasedEngine {
    date: Regex,
    org: Regex,
}

impl RuleBasedEngine {
    pub fn new() -> Self {
        let month = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";
        let date = format!(
            r"(?i)\b(?:(?:{month})\.? \d{{4}}|\d{{1,2}}/\d{{4}}|(?:19|20)\d{{2}})\b"
        );
        let word = r"[A-Z][A-Za-z0-9&.'-]*";
        let org = format!(r"\b(?:{word} ){{0,4}}(?:{ORG_SUFFIXES})\b(?: of(?: {word}){{1,4}})?");

        Self {
            date: Regex::new(&date).expect("date pattern compiles"),
            org: Regex::new(&org).expect("organisation pattern compiles"),
        }
    }

    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut entities: Vec<(usize, Entity)> = Vec::new();
        for m in self.org.find_iter(text) {
            entities.push((m.start(), Entity::new(EntityLabel::Org, m.as_str().trim())));
        }
        for m in self.date.find_iter(text) {
            entities.push((m.start(), Entity::new(EntityLabel::Date, m.as_str())));
        }
        entities.sort_by_key(|(start, _)| *start);
        entities.into_iter().map(|(_, e)| e).collect()
    }
}

impl Default for RuleBasedEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NlpEngine for RuleBasedEngine {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    async fn named_entities(&self, text: &str) -> Result<Vec<Entity>, NlpError> {
        Ok(self.entities(text))
    }

    async fn ranked_phrases(&self, text: &str) -> Result<Vec<String>, NlpError> {
        Ok(rake::ranked_phrases(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(entities: &[Entity], label: EntityLabel) -> Vec<&str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_recognizes_month_year_dates() {
        let engine = RuleBasedEngine::new();
        let entities = engine.entities("Engineer, Jan 2020 - Sept. 2022");
        assert_eq!(
            labelled(&entities, EntityLabel::Date),
            vec!["Jan 2020", "Sept. 2022"]
        );
    }

    #[test]
    fn test_recognizes_numeric_and_bare_year_dates() {
        let engine = RuleBasedEngine::new();
        let entities = engine.entities("Graduated 05/2019, started 2021");
        assert_eq!(labelled(&entities, EntityLabel::Date), vec!["05/2019", "2021"]);
    }

    #[test]
    fn test_recognizes_organisations() {
        let engine = RuleBasedEngine::new();
        let entities =
            engine.entities("Software Engineer, Acme Technologies Inc\nBSc, University of California");
        assert_eq!(
            labelled(&entities, EntityLabel::Org),
            vec!["Acme Technologies Inc", "University of California"]
        );
    }

    #[test]
    fn test_lowercase_words_are_not_organisations() {
        let engine = RuleBasedEngine::new();
        let entities = engine.entities("worked with the systems group on tooling");
        assert!(labelled(&entities, EntityLabel::Org).is_empty());
    }

    #[tokio::test]
    async fn test_engine_ranks_phrases() {
        let engine = RuleBasedEngine::new();
        let phrases = engine
            .ranked_phrases("Distributed systems engineering. Rust.")
            .await
            .unwrap();
        assert_eq!(phrases[0], "distributed systems engineering");
    }
}
