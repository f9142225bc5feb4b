use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every collaborator is optional; missing ones degrade the service instead
/// of stopping it. Malformed numbers are startup errors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables LLM feedback. Without it feedback is rule-based only.
    pub anthropic_api_key: Option<String>,
    pub llm_max_attempts: u32,
    /// Remote NLP engine. Without it the built-in rule-based engine is used.
    pub nlp_service_url: Option<String>,
    /// Face embedding service. Without it /verify-face answers 503.
    pub face_service_url: Option<String>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_max_attempts: parse_env("LLM_MAX_ATTEMPTS", 1)?,
            nlp_service_url: optional_env("NLP_SERVICE_URL"),
            face_service_url: optional_env("FACE_SERVICE_URL"),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_and_errors() {
        std::env::remove_var("ATS_TEST_UNSET_NUMBER");
        assert_eq!(parse_env("ATS_TEST_UNSET_NUMBER", 42u16).unwrap(), 42);

        std::env::set_var("ATS_TEST_BAD_NUMBER", "eighty");
        let err = parse_env::<u16>("ATS_TEST_BAD_NUMBER", 8000).unwrap_err();
        assert!(err.to_string().contains("ATS_TEST_BAD_NUMBER"));

        std::env::set_var("ATS_TEST_GOOD_NUMBER", " 9000 ");
        assert_eq!(parse_env::<u16>("ATS_TEST_GOOD_NUMBER", 8000).unwrap(), 9000);
    }

    #[test]
    fn test_blank_optional_is_absent() {
        std::env::set_var("ATS_TEST_BLANK", "   ");
        assert_eq!(optional_env("ATS_TEST_BLANK"), None);
    }
}
