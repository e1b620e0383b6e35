//! Content integrity validation.
//!
//! Runs once over the raw content document when it is loaded. Errors are
//! defects that would make a page fail to resolve (a localized field without
//! an entry for some language, duplicate teacher ids). Warnings point at
//! content that resolves but is probably wrong, such as an English string
//! pasted into the Bengali slot.

use crate::i18n::resolver::{child_path, is_blank, is_localized_map};
use crate::i18n::Language;
use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that make the content unusable
    pub errors: Vec<String>,

    /// Suspicious content that still resolves
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the site content document.
pub struct ContentValidator;

static BENGALI_SCRIPT_REGEX: OnceLock<Regex> = OnceLock::new();

const NOTICE_DATE_FORMAT: &str = "%Y-%m-%d";

impl ContentValidator {
    /// Validate a raw content document.
    ///
    /// Checks that:
    /// - every localized field has a non-empty entry for every enabled language
    /// - Bengali entries are written in Bengali script and English ones are not
    /// - teacher ids are unique
    /// - notice dates are ISO dates
    pub fn validate(document: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_translations(document, "", &mut report);
        Self::check_teachers(document, &mut report);
        Self::check_notice_dates(document, &mut report);

        report
    }

    fn check_translations(value: &Value, path: &str, report: &mut ValidationReport) {
        match value {
            Value::Object(map) if is_localized_map(map) => {
                for lang in Language::all() {
                    match map.get(lang.code()) {
                        Some(entry) if !is_blank(entry) => {
                            if let Value::String(text) = entry {
                                Self::check_script(text, lang, path, report);
                            }
                        }
                        Some(_) => report.errors.push(format!(
                            "Empty '{}' translation at {}",
                            lang,
                            display(path)
                        )),
                        None => report.errors.push(format!(
                            "Missing '{}' translation at {}",
                            lang,
                            display(path)
                        )),
                    }
                }
                for (code, entry) in map {
                    Self::check_translations(entry, &child_path(path, code), report);
                }
            }
            Value::Object(map) => {
                for (key, child) in map {
                    Self::check_translations(child, &child_path(path, key), report);
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    Self::check_translations(item, &child_path(path, &index.to_string()), report);
                }
            }
            _ => {}
        }
    }

    fn check_script(text: &str, lang: Language, path: &str, report: &mut ValidationReport) {
        let has_bengali = Self::contains_bengali(text);

        if lang == Language::BENGALI && !has_bengali {
            report.warnings.push(format!(
                "Bengali entry at {} contains no Bengali script: {:?}",
                display(path),
                text
            ));
        } else if lang == Language::ENGLISH && has_bengali {
            report.warnings.push(format!(
                "English entry at {} contains Bengali script: {:?}",
                display(path),
                text
            ));
        }
    }

    fn check_teachers(document: &Value, report: &mut ValidationReport) {
        let Some(teachers) = document.get("teachers").and_then(Value::as_array) else {
            return;
        };

        let mut seen = HashSet::new();
        for (index, teacher) in teachers.iter().enumerate() {
            // A blank subject could never be picked in the subject filter
            if let Some(subject) = teacher.get("subject").and_then(Value::as_str) {
                if subject.trim().is_empty() {
                    report
                        .errors
                        .push(format!("Blank subject for teacher /teachers/{}", index));
                }
            }
            if let Some(id) = teacher.get("id").and_then(Value::as_i64) {
                if !seen.insert(id) {
                    report.errors.push(format!("Duplicate teacher id: {}", id));
                }
            }
        }
    }

    fn check_notice_dates(document: &Value, report: &mut ValidationReport) {
        let Some(notices) = document.get("notices").and_then(Value::as_array) else {
            return;
        };

        for (index, notice) in notices.iter().enumerate() {
            let Some(date) = notice.get("date").and_then(Value::as_str) else {
                continue;
            };
            if NaiveDate::parse_from_str(date, NOTICE_DATE_FORMAT).is_err() {
                report.warnings.push(format!(
                    "Notice /notices/{} has a non-ISO date: {:?}",
                    index, date
                ));
            }
        }
    }

    /// Whether `text` contains at least one Bengali-script character
    fn contains_bengali(text: &str) -> bool {
        let regex = BENGALI_SCRIPT_REGEX.get_or_init(|| Regex::new(r"\p{Bengali}").unwrap());
        regex.is_match(text)
    }
}

fn display(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
