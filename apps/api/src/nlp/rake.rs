//! RAKE (Rapid Automatic Keyword Extraction) phrase ranking.
//!
//! Candidate phrases are maximal runs of words between stopwords and
//! punctuation. Each word scores degree / frequency, a phrase scores the sum
//! of its words.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y",
];

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+|[^\w\s]+|\n").expect("token pattern compiles"))
}

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Candidate phrases in document order, lower-cased, duplicates kept.
fn candidate_phrases(text: &str) -> Vec<Vec<String>> {
    let text_lower = text.to_lowercase();
    let mut phrases = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for token in token_re().find_iter(&text_lower).map(|m| m.as_str()) {
        let is_word = token.chars().all(|c| c.is_alphanumeric() || c == '_');
        if is_word && !stopwords().contains(token) {
            current.push(token.to_string());
        } else if !current.is_empty() {
            phrases.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        phrases.push(current);
    }
    phrases
}

/// Ranks the key phrases of `text`, best first, without duplicates.
pub fn ranked_phrases(text: &str) -> Vec<String> {
    let phrases = candidate_phrases(text);

    let mut frequency: HashMap<&str, f64> = HashMap::new();
    let mut degree: HashMap<&str, f64> = HashMap::new();
    for phrase in &phrases {
        for word in phrase {
            *frequency.entry(word.as_str()).or_default() += 1.0;
            *degree.entry(word.as_str()).or_default() += phrase.len() as f64;
        }
    }

    let mut seen = HashSet::new();
    let mut scored: Vec<(f64, String)> = Vec::new();
    for phrase in &phrases {
        let joined = phrase.join(" ");
        if !seen.insert(joined.clone()) {
            continue;
        }
        let score: f64 = phrase
            .iter()
            .map(|w| degree[w.as_str()] / frequency[w.as_str()])
            .sum();
        scored.push((score, joined));
    }

    // Stable sort keeps document order between equal scores.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, phrase)| phrase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_split_on_stopwords_and_punctuation() {
        let phrases = candidate_phrases("Built the payment service, and led data migration.");
        assert_eq!(
            phrases,
            vec![
                vec!["built".to_string()],
                vec!["payment".to_string(), "service".to_string()],
                vec!["led".to_string(), "data".to_string(), "migration".to_string()],
            ]
        );
    }

    #[test]
    fn test_longer_phrases_rank_higher() {
        let ranked = ranked_phrases("Rust. Distributed systems engineering.");
        assert_eq!(ranked[0], "distributed systems engineering");
        assert_eq!(ranked.last().map(String::as_str), Some("rust"));
    }

    #[test]
    fn test_newlines_break_phrases() {
        let ranked = ranked_phrases("Skills\nPython");
        assert!(ranked.contains(&"skills".to_string()));
        assert!(ranked.contains(&"python".to_string()));
        assert!(!ranked.contains(&"skills python".to_string()));
    }

    #[test]
    fn test_duplicates_removed() {
        let ranked = ranked_phrases("machine learning. machine learning.");
        assert_eq!(ranked, vec!["machine learning".to_string()]);
    }

    #[test]
    fn test_only_stopwords_yields_nothing() {
        assert!(ranked_phrases("and the of to").is_empty());
    }
}
