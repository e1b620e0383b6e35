use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Content
    pub content_path: Option<PathBuf>,

    // Language used when a request does not ask for one
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            port: match var("PORT") {
                Some(port) => port
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: {}", port))?,
                None => 8080,
            },

            // Bundled content is used when unset
            content_path: var("CONTENT_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),

            default_language: match var("DEFAULT_LANGUAGE") {
                Some(code) => Language::from_code(&code).context("DEFAULT_LANGUAGE is invalid")?,
                None => Language::canonical(),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            content_path: None,
            default_language: Language::canonical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.content_path.is_none());
        assert_eq!(config.default_language, Language::ENGLISH);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("CONTENT_PATH", "/srv/site/content.json"),
            ("DEFAULT_LANGUAGE", "bn"),
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.content_path, Some(PathBuf::from("/srv/site/content.json")));
        assert_eq!(config.default_language, Language::BENGALI);
    }

    #[test]
    fn test_blank_content_path_means_bundled() {
        let config = config_from(&[("CONTENT_PATH", "  ")]).unwrap();
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_default_language() {
        let err = config_from(&[("DEFAULT_LANGUAGE", "fr")]).unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
    }
}
