use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_MAX_ITERATIONS: u32 = 3;
pub const DEFAULT_COMPANY_LIST_PATH: &str = "company_list.txt";

/// Credential variables, checked in order. The first one set wins.
const API_KEY_VARS: &[&str] = &["GROQ_API_KEY", "GROQ_API_KEY2", "GROQ_API_KEY3"];

/// Application configuration loaded from environment variables.
/// Fails at startup if the credential is missing or an override does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    /// Temperature for the draft writer and critic.
    pub writer_temperature: f32,
    /// Temperature for the sourcing agents.
    pub sourcing_temperature: f32,
    pub max_iterations: u32,
    /// Keep the first selected target for every retry of one refinement run.
    pub pin_target: bool,
    pub company_list_path: PathBuf,
    pub cv_path: PathBuf,
    pub search_place: String,
    pub target_companies: u32,
    pub max_scraped_pages: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()))
            .with_context(|| {
                format!(
                    "Required environment variable '{}' is not set (add it to .env)",
                    API_KEY_VARS[0]
                )
            })?;

        let max_iterations = parse_or(&lookup, "MAX_ITERATIONS", DEFAULT_MAX_ITERATIONS)?;
        if max_iterations == 0 {
            bail!("MAX_ITERATIONS must be at least 1");
        }

        Ok(Config {
            api_key,
            api_base: lookup("LLM_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            writer_temperature: parse_or(&lookup, "WRITER_TEMPERATURE", 0.5)?,
            sourcing_temperature: parse_or(&lookup, "SOURCING_TEMPERATURE", 0.0)?,
            max_iterations,
            pin_target: parse_or(&lookup, "PIN_TARGET", false)?,
            company_list_path: lookup("COMPANY_LIST_PATH")
                .unwrap_or_else(|| DEFAULT_COMPANY_LIST_PATH.to_string())
                .into(),
            cv_path: lookup("CV_PATH").unwrap_or_else(|| "cv.md".to_string()).into(),
            search_place: lookup("SEARCH_PLACE")
                .unwrap_or_else(|| "Zurich, Switzerland".to_string()),
            target_companies: parse_or(&lookup, "TARGET_COMPANIES", 5)?,
            max_scraped_pages: parse_or(&lookup, "MAX_SCRAPED_PAGES", 5)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_fallback_api_key_variable_is_used() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY3", "gsk-three")])).unwrap();
        assert_eq!(config.api_key, "gsk-three");
    }

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk")])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.max_iterations, 3);
        assert!(!config.pin_target);
        assert_eq!(config.company_list_path, PathBuf::from("company_list.txt"));
        assert!((config.writer_temperature - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.sourcing_temperature, 0.0);
        assert_eq!(config.target_companies, 5);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk"),
            ("LLM_MODEL", "llama-3.1-8b-instant"),
            ("MAX_ITERATIONS", "5"),
            ("PIN_TARGET", "true"),
            ("COMPANY_LIST_PATH", "/tmp/leads.txt"),
        ]))
        .unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.max_iterations, 5);
        assert!(config.pin_target);
        assert_eq!(config.company_list_path, PathBuf::from("/tmp/leads.txt"));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk"),
            ("WRITER_TEMPERATURE", "warm"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("WRITER_TEMPERATURE"));
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk"),
            ("MAX_ITERATIONS", "0"),
        ]));
        assert!(result.is_err());
    }
}
