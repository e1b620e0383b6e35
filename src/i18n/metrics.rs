//! Site metrics: page views per language and form traffic.

use crate::i18n::Language;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Request counters for the site.
pub struct SiteMetrics {
    /// Pages rendered in English
    english_views: AtomicUsize,

    /// Pages rendered in Bengali
    bengali_views: AtomicUsize,

    /// Requests for paths outside the route table
    not_found: AtomicUsize,

    /// Directory renders with a non-empty query or a subject filter
    directory_searches: AtomicUsize,

    /// Form submissions acknowledged by the gateway
    submissions_accepted: AtomicUsize,

    /// Form submissions rejected for missing or unknown fields
    submissions_rejected: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<SiteMetrics> = OnceLock::new();

impl SiteMetrics {
    pub fn new() -> Self {
        Self {
            english_views: AtomicUsize::new(0),
            bengali_views: AtomicUsize::new(0),
            not_found: AtomicUsize::new(0),
            directory_searches: AtomicUsize::new(0),
            submissions_accepted: AtomicUsize::new(0),
            submissions_rejected: AtomicUsize::new(0),
        }
    }

    /// Get the global site metrics instance.
    pub fn global() -> &'static SiteMetrics {
        METRICS.get_or_init(SiteMetrics::new)
    }

    /// Record a rendered page in `lang`.
    pub fn record_page_view(&self, lang: Language) {
        let counter = if lang == Language::BENGALI {
            &self.bengali_views
        } else {
            &self.english_views
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_directory_search(&self) {
        self.directory_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_accepted(&self) {
        self.submissions_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let english_views = self.english_views.load(Ordering::Relaxed);
        let bengali_views = self.bengali_views.load(Ordering::Relaxed);
        let total_views = english_views + bengali_views;
        let bengali_share = if total_views > 0 {
            (bengali_views as f64 / total_views as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            english_views,
            bengali_views,
            bengali_share,
            not_found: self.not_found.load(Ordering::Relaxed),
            directory_searches: self.directory_searches.load(Ordering::Relaxed),
            submissions_accepted: self.submissions_accepted.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
        }
    }
}

impl Default for SiteMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics report containing current site statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub english_views: usize,
    pub bengali_views: usize,

    /// Share of page views rendered in Bengali, as a percentage (0-100)
    pub bengali_share: f64,

    pub not_found: usize,
    pub directory_searches: usize,
    pub submissions_accepted: usize,
    pub submissions_rejected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(SiteMetrics::global(), SiteMetrics::global()));
    }

    #[test]
    fn test_report_empty() {
        let report = SiteMetrics::new().report();

        assert_eq!(report.english_views, 0);
        assert_eq!(report.bengali_views, 0);
        assert_eq!(report.bengali_share, 0.0);
        assert_eq!(report.submissions_accepted, 0);
    }

    #[test]
    fn test_page_views_split_by_language() {
        let metrics = SiteMetrics::new();
        metrics.record_page_view(Language::ENGLISH);
        metrics.record_page_view(Language::BENGALI);
        metrics.record_page_view(Language::BENGALI);
        metrics.record_page_view(Language::BENGALI);

        let report = metrics.report();
        assert_eq!(report.english_views, 1);
        assert_eq!(report.bengali_views, 3);
        assert!((report.bengali_share - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_counters() {
        let metrics = SiteMetrics::new();
        metrics.record_not_found();
        metrics.record_directory_search();
        metrics.record_directory_search();
        metrics.record_submission_accepted();
        metrics.record_submission_rejected();

        let report = metrics.report();
        assert_eq!(report.not_found, 1);
        assert_eq!(report.directory_searches, 2);
        assert_eq!(report.submissions_accepted, 1);
        assert_eq!(report.submissions_rejected, 1);
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(SiteMetrics::new().report()).unwrap();
        assert_eq!(json["english_views"], 0);
        assert!(json.get("bengali_share").is_some());
    }
}
