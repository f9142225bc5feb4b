//! PII redaction and whitespace cleanup applied before any analysis.
//! Contact details carry no merit signal, so they are stripped up front.

use std::sync::OnceLock;

use regex::Regex;

pub const EMAIL_TOKEN: &str = "[EMAIL_REMOVED]";
pub const PHONE_TOKEN: &str = "[PHONE_REMOVED]";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+@\S+").expect("email pattern compiles"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+?\d[\d -]{8,12}\d").expect("phone pattern compiles"))
}

fn horizontal_ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("whitespace pattern compiles"))
}

/// Redacts emails and phone numbers, collapses spaces/tabs, keeps line breaks.
pub fn normalize(raw: &str) -> String {
    let text = email_re().replace_all(raw, EMAIL_TOKEN);
    let text = phone_re().replace_all(&text, PHONE_TOKEN);
    let text = horizontal_ws_re().replace_all(&text, " ");
    text.trim().to_string()
}

/// Strips PII outright, for text handed to external NLP services.
pub fn clean_for_nlp(raw: &str) -> String {
    let text = email_re().replace_all(raw, "");
    let text = phone_re().replace_all(&text, "");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_redacted() {
        let out = normalize("Contact: jane.doe@example.com for details");
        assert_eq!(out, "Contact: [EMAIL_REMOVED] for details");
        assert!(!out.contains("jane.doe@example.com"));
    }

    #[test]
    fn test_email_with_surrounding_punctuation_is_one_token() {
        let out = normalize("<jane@example.com>, other");
        assert_eq!(out, "[EMAIL_REMOVED] other");
    }

    #[test]
    fn test_phone_is_redacted() {
        let out = normalize("Call +1 555-123-4567 today");
        assert_eq!(out, "Call [PHONE_REMOVED] today");
    }

    #[test]
    fn test_short_numbers_survive() {
        let out = normalize("Saved 20% across 3 teams");
        assert_eq!(out, "Saved 20% across 3 teams");
    }

    #[test]
    fn test_horizontal_whitespace_collapses_but_newlines_stay() {
        let out = normalize("  Skills\t\t  Rust   Go \nExperience\n\n  Built X  ");
        assert_eq!(out, "Skills Rust Go \nExperience\n\n Built X");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn test_clean_for_nlp_drops_pii() {
        let out = clean_for_nlp("jane@example.com +1 555-123-4567\nRust");
        assert_eq!(out, "Rust");
    }
}
