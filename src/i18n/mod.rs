//! Internationalization (i18n) module for the English/Bengali site.
//!
//! All language-related logic lives here: the language registry, the
//! page-chrome string tables, the resolver that projects localized content
//! onto one language, and the load-time content validator.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages
//! - `language`: Validated `Language` tag passed by value to every page
//! - `strings`: Fixed interface text per language
//! - `resolver`: `resolve` / `resolve_section` over localized content
//! - `validator`: Content integrity checks run when content is loaded
//! - `metrics`: Page-view and form counters
//!
//! # Example
//!
//! ```rust,ignore
//! use school_site::i18n::{resolve_section, Language};
//!
//! let lang = Language::from_code("bn")?;
//! let hero = resolve_section(store.section("hero").unwrap(), lang)?;
//! ```

mod language;
mod metrics;
mod registry;
mod resolver;
mod strings;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, SiteMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{is_localized, resolve, resolve_section, LocalizedText, ResolveError};
pub use strings::{LanguageStrings, BENGALI_STRINGS, ENGLISH_STRINGS};
pub use validator::{ContentValidator, ValidationReport};
