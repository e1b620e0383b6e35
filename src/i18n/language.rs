//! Language type: the validated language tag every page is rendered in.
//!
//! A `Language` is a plain `Copy` value. The hosting shell owns the current
//! one and hands it to each page by value; nothing below the shell mutates it.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings, BENGALI_STRINGS, ENGLISH_STRINGS};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated language.
///
/// Only languages that are registered and enabled can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "bn")
    code: &'static str,
}

impl Language {
    /// English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Bengali.
    pub const BENGALI: Language = Language { code: "bn" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(config) => bail!("{} ('{}') is not enabled", config.name, code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All enabled languages, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the native name of the language (e.g., "বাংলা").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// The page-chrome strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self.code {
            "bn" => &BENGALI_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
