//! Bilingual resolution: projecting localized content down to one language.
//!
//! Localized fields are stored as `{ "en": ..., "bn": ... }`. Resolving a field
//! selects the entry for the requested language; resolving a section walks a
//! JSON tree and replaces every localized node with its selected entry while
//! leaving everything else (ids, phone numbers, dates, unknown fields) as is.
//!
//! Both operations are pure. Resolving an already resolved tree returns it
//! unchanged, so the only thing that changes the output is the language.

use crate::i18n::{Language, LanguageRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A field holding one string per supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub bn: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, bn: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            bn: bn.into(),
        }
    }

    /// The raw entry for `lang`, empty or not.
    pub fn get(&self, lang: Language) -> Option<&str> {
        match lang.code() {
            "en" => Some(&self.en),
            "bn" => Some(&self.bn),
            _ => None,
        }
    }

    /// Select the display string for `lang`.
    pub fn resolve(&self, lang: Language) -> Result<&str, ResolveError> {
        resolve(self, lang)
    }
}

/// Errors raised while resolving localized content.
///
/// A missing translation is a defect in the content dataset, not something a
/// page can recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("missing '{language}' translation at {path}")]
    MissingTranslation { path: String, language: Language },
}

/// Resolve a single localized field for `lang`.
///
/// Fails with `MissingTranslation` when the entry is empty.
pub fn resolve(field: &LocalizedText, lang: Language) -> Result<&str, ResolveError> {
    match field.get(lang) {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ResolveError::MissingTranslation {
            path: String::new(),
            language: lang,
        }),
    }
}

/// Resolve every localized node in `section` for `lang`.
///
/// Arrays keep their length and order, objects keep their keys and key order.
pub fn resolve_section(section: &Value, lang: Language) -> Result<Value, ResolveError> {
    walk(section, lang, "")
}

/// Whether `value` is a localized node: a non-empty object whose keys are
/// all registered language codes.
pub fn is_localized(value: &Value) -> bool {
    match value {
        Value::Object(map) => is_localized_map(map),
        _ => false,
    }
}

pub(crate) fn is_localized_map(map: &Map<String, Value>) -> bool {
    let registry = LanguageRegistry::get();
    !map.is_empty() && map.keys().all(|key| registry.is_registered(key))
}

/// A translation entry that cannot be displayed.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

pub(crate) fn child_path(path: &str, key: &str) -> String {
    format!("{}/{}", path, key)
}

fn walk(value: &Value, lang: Language, path: &str) -> Result<Value, ResolveError> {
    match value {
        Value::Object(map) if is_localized_map(map) => {
            let selected = map
                .get(lang.code())
                .filter(|entry| !is_blank(entry))
                .ok_or_else(|| ResolveError::MissingTranslation {
                    path: display_path(path),
                    language: lang,
                })?;
            walk(selected, lang, &child_path(path, lang.code()))
        }
        Value::Object(map) => {
            let mut resolved = Map::with_capacity(map.len());
            for (key, child) in map {
                resolved.insert(key.clone(), walk(child, lang, &child_path(path, key))?);
            }
            Ok(Value::Object(resolved))
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| walk(item, lang, &child_path(path, &index.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Ok(other.clone()),
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
