//! The site content dataset.
//!
//! The whole site is driven by one JSON document loaded at startup and never
//! mutated afterwards. `ContentStore` keeps the raw document, so that unknown
//! fields survive resolution, next to a typed view used to check the schema
//! and to feed the teacher directory.

use crate::i18n::{
    resolve_section, ContentValidator, Language, LocalizedText, ResolveError, ValidationReport,
};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Content compiled into the binary, used when no content file is configured.
pub const BUNDLED_CONTENT: &str = include_str!("../data/content.json");

// ==================== Schema ====================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub site_info: SiteInfo,
    pub navigation: Navigation,
    pub hero: Hero,
    pub news: Vec<LocalizedText>,
    pub about: About,
    pub achievements: Vec<Achievement>,
    pub facilities: Vec<Facility>,
    pub teachers: Vec<Teacher>,
    pub notices: Vec<Notice>,
    pub schedule: Vec<ScheduleEntry>,
    pub admission: Admission,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: LocalizedText,
    pub address: LocalizedText,
    pub phone: String,
    pub email: String,
    pub bkash_number: String,
}

/// Navigation menus, one ordered list per language.
#[derive(Debug, Clone, Deserialize)]
pub struct Navigation {
    pub en: Vec<NavItem>,
    pub bn: Vec<NavItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub college: College,
    pub principal: Principal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct College {
    pub title: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Principal {
    pub name: String,
    pub message: LocalizedText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Achievement {
    pub title: LocalizedText,
    pub student: String,
    pub class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Facility {
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// A member of the faculty. Names, subjects and designations are not
/// translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
    pub subject: String,
    pub designation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notice {
    pub id: u32,
    pub title: LocalizedText,
    pub date: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    pub day: String,
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Admission {
    pub instructions: AdmissionInstructions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionInstructions {
    pub title: LocalizedText,
    pub eligibility: LocalizedText,
    pub documents: LocalizedText,
    pub fee: LocalizedText,
}

// ==================== Store ====================

/// Errors raised when a page asks the store for a resolved section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("unknown content section: {0}")]
    UnknownSection(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Immutable, process-wide site content.
#[derive(Debug, Clone)]
pub struct ContentStore {
    raw: Value,
    content: SiteContent,
}

impl ContentStore {
    /// Build a store from an already parsed document.
    ///
    /// Fails if the document does not match the schema or if the validator
    /// reports errors. Validator warnings are logged.
    pub fn from_value(raw: Value) -> Result<Self> {
        let (content, report) = Self::inspect(&raw)?;

        for warning in &report.warnings {
            warn!("Content warning: {}", warning);
        }
        if report.has_errors() {
            bail!(
                "Content validation failed with {} error(s):\n  - {}",
                report.errors.len(),
                report.errors.join("\n  - ")
            );
        }

        Ok(Self { raw, content })
    }

    /// Check a document without building a store.
    ///
    /// A schema mismatch (missing section, wrong field type) is an error.
    /// Otherwise the validator's report is returned; a store can be built
    /// from the document exactly when the report has no errors.
    pub fn check(raw: &Value) -> Result<ValidationReport> {
        Self::inspect(raw).map(|(_, report)| report)
    }

    fn inspect(raw: &Value) -> Result<(SiteContent, ValidationReport)> {
        let content: SiteContent = serde_json::from_value(raw.clone())
            .context("Content document does not match the site schema")?;
        Ok((content, ContentValidator::validate(raw)))
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(json).context("Content is not valid JSON")?;
        Self::from_value(raw)
    }

    /// Load content from a file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        let store = Self::from_json_str(&json)
            .with_context(|| format!("Invalid content file {}", path.display()))?;

        info!(
            "Loaded content from {} ({} teachers, {} notices)",
            path.display(),
            store.content.teachers.len(),
            store.content.notices.len()
        );
        Ok(store)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CONTENT).context("Bundled content is invalid")
    }

    /// Load from `path` when given, otherwise use the bundled dataset.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("Using bundled content");
                Self::bundled()
            }
        }
    }

    /// The raw document, including fields the schema does not know about.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The typed view of the document.
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// The teacher list in dataset order.
    pub fn teachers(&self) -> &[Teacher] {
        &self.content.teachers
    }

    /// A top-level section of the raw document by name (e.g. `"hero"`).
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// Resolve the value at a JSON pointer (e.g. `"/about/college"`).
    pub fn resolve_pointer(&self, pointer: &str, lang: Language) -> Result<Value, ContentError> {
        let value = self
            .raw
            .pointer(pointer)
            .ok_or_else(|| ContentError::UnknownSection(pointer.to_string()))?;
        Ok(resolve_section(value, lang)?)
    }

    /// Resolve a top-level section for `lang`.
    pub fn resolve_section(&self, name: &str, lang: Language) -> Result<Value, ContentError> {
        let section = self
            .section(name)
            .ok_or_else(|| ContentError::UnknownSection(name.to_string()))?;
        Ok(resolve_section(section, lang)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::is_localized;
    use std::io::Write;

    fn minimal_document() -> Value {
        let mut document: Value = serde_json::from_str(BUNDLED_CONTENT).unwrap();
        document["teachers"] = serde_json::json!([
            { "id": 1, "name": "Karim Ahmed", "subject": "Mathematics", "designation": "Senior Teacher" }
        ]);
        document
    }

    // ==================== Loading Tests ====================

    #[test]
    fn test_bundled_content_loads() {
        let store = ContentStore::bundled().expect("bundled content should be valid");
        assert!(!store.teachers().is_empty());
        assert_eq!(store.content().navigation.en.len(), store.content().navigation.bn.len());
    }

    #[test]
    fn test_bundled_content_is_clean() {
        let report = ContentValidator::validate(ContentStore::bundled().unwrap().raw());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_required_section_fails_fast() {
        let mut document = minimal_document();
        document.as_object_mut().unwrap().remove("hero");

        let err = ContentStore::from_value(document).unwrap_err();
        assert!(format!("{:#}", err).contains("hero"));
    }

    #[test]
    fn test_partial_translation_fails_validation() {
        let mut document = minimal_document();
        document["hero"]["subtitle"] = serde_json::json!({ "en": "Hello", "bn": "" });

        let err = ContentStore::from_value(document).unwrap_err();
        assert!(err.to_string().contains("Empty 'bn' translation at /hero/subtitle"));
    }

    #[test]
    fn test_duplicate_teacher_id_fails_validation() {
        let mut document = minimal_document();
        document["teachers"] = serde_json::json!([
            { "id": 7, "name": "A", "subject": "Physics", "designation": "Lecturer" },
            { "id": 7, "name": "B", "subject": "Biology", "designation": "Lecturer" }
        ]);

        assert!(ContentStore::from_value(document).is_err());
    }

    #[test]
    fn test_check_rejects_document_without_sections() {
        let err = ContentStore::check(&serde_json::json!({})).unwrap_err();
        assert!(err.to_string().contains("does not match the site schema"));
    }

    #[test]
    fn test_check_reports_validation_errors() {
        let mut document = minimal_document();
        document["hero"]["title"] = serde_json::json!({ "en": "Welcome", "bn": " " });

        let report = ContentStore::check(&document).unwrap();
        assert_eq!(report.errors, vec!["Empty 'bn' translation at /hero/title"]);
    }

    #[test]
    fn test_check_bundled_content() {
        let document: Value = serde_json::from_str(BUNDLED_CONTENT).unwrap();
        assert!(ContentStore::check(&document).unwrap().is_clean());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = ContentStore::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(minimal_document().to_string().as_bytes()).unwrap();

        let store = ContentStore::load(file.path()).unwrap();
        assert_eq!(store.teachers().len(), 1);
        assert_eq!(store.teachers()[0].name, "Karim Ahmed");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ContentStore::load(Path::new("/nonexistent/content.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content file"));
    }

    // ==================== Access Tests ====================

    #[test]
    fn test_unknown_fields_survive_resolution() {
        let mut document = minimal_document();
        document["hero"]["ctaColor"] = serde_json::json!("#0a7");

        let store = ContentStore::from_value(document).unwrap();
        let hero = store.resolve_section("hero", Language::ENGLISH).unwrap();
        assert_eq!(hero["ctaColor"], "#0a7");
        assert!(hero["title"].is_string());
    }

    #[test]
    fn test_resolve_unknown_section() {
        let store = ContentStore::bundled().unwrap();
        assert_eq!(
            store.resolve_section("gallery", Language::ENGLISH),
            Err(ContentError::UnknownSection("gallery".to_string()))
        );
    }

    #[test]
    fn test_resolve_pointer() {
        let store = ContentStore::bundled().unwrap();
        let college = store.resolve_pointer("/about/college", Language::BENGALI).unwrap();
        assert_eq!(college["title"], "উৎকর্ষতার ঐতিহ্য");
    }

    #[test]
    fn test_every_localized_field_resolves_in_every_language() {
        fn collect<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
            if is_localized(value) {
                out.push(value);
                return;
            }
            match value {
                Value::Object(map) => map.values().for_each(|v| collect(v, out)),
                Value::Array(items) => items.iter().for_each(|v| collect(v, out)),
                _ => {}
            }
        }

        let store = ContentStore::bundled().unwrap();
        let mut fields = Vec::new();
        collect(store.raw(), &mut fields);
        assert!(fields.len() > 20);

        for field in fields {
            for lang in Language::all() {
                let resolved = resolve_section(field, lang).unwrap();
                match resolved {
                    Value::String(text) => assert!(!text.is_empty()),
                    Value::Array(items) => assert!(!items.is_empty()),
                    other => panic!("unexpected resolved value {:?}", other),
                }
            }
        }
    }
}
