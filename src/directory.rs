//! Teacher directory search.
//!
//! A free-text query (case-insensitive substring over name and subject) is
//! combined with an exact subject filter. Results keep the dataset order.

use crate::content::Teacher;
use serde::{Serialize, Serializer};

/// Literal value of the "every subject" filter option.
pub const ALL_SUBJECTS: &str = "all";

/// Subject filter selected on the directory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubjectFilter {
    #[default]
    All,
    Subject(String),
}

impl SubjectFilter {
    /// Parse a filter option. Only the `"all"` sentinel selects every subject.
    pub fn parse(value: &str) -> Self {
        match value {
            ALL_SUBJECTS => SubjectFilter::All,
            subject => SubjectFilter::Subject(subject.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubjectFilter::All => ALL_SUBJECTS,
            SubjectFilter::Subject(subject) => subject,
        }
    }

    /// Exact, case-sensitive comparison against the teacher's subject.
    pub fn matches(&self, teacher: &Teacher) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Subject(subject) => teacher.subject == *subject,
        }
    }
}

impl Serialize for SubjectFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Filter `teachers` by a free-text `query` and a subject filter.
///
/// An empty query matches everyone. The result is an order-preserving
/// subsequence of the input.
pub fn filter<'a>(teachers: &'a [Teacher], query: &str, subject: &SubjectFilter) -> Vec<&'a Teacher> {
    let needle = query.to_lowercase();

    teachers
        .iter()
        .filter(|teacher| matches_query(teacher, &needle) && subject.matches(teacher))
        .collect()
}

fn matches_query(teacher: &Teacher, needle: &str) -> bool {
    needle.is_empty()
        || teacher.name.to_lowercase().contains(needle)
        || teacher.subject.to_lowercase().contains(needle)
}

/// Options offered by the subject filter: `"all"` followed by each distinct
/// subject in order of first appearance.
pub fn subject_options(teachers: &[Teacher]) -> Vec<String> {
    let mut options = vec![ALL_SUBJECTS.to_string()];
    for teacher in teachers {
        if !options[1..].contains(&teacher.subject) {
            options.push(teacher.subject.clone());
        }
    }
    options
}

/// Query and filter held by one directory page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub subject: SubjectFilter,
}

impl SearchState {
    pub fn new(query: impl Into<String>, subject: SubjectFilter) -> Self {
        Self {
            query: query.into(),
            subject,
        }
    }

    /// Whether the state narrows the list at all.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.subject != SubjectFilter::All
    }

    pub fn apply<'a>(&self, teachers: &'a [Teacher]) -> Vec<&'a Teacher> {
        filter(teachers, &self.query, &self.subject)
    }
}

/// Everything the directory page shows for one search state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView<'a> {
    pub search: &'a SearchState,
    pub subject_options: Vec<String>,
    pub results: Vec<&'a Teacher>,
    /// Size of the whole faculty, not of the result set
    pub total_faculty: usize,
    pub subjects_taught: usize,
    pub is_empty: bool,
}

impl<'a> DirectoryView<'a> {
    pub fn build(teachers: &'a [Teacher], search: &'a SearchState) -> Self {
        let subject_options = subject_options(teachers);
        let results = search.apply(teachers);

        Self {
            search,
            subjects_taught: subject_options.len() - 1,
            subject_options,
            is_empty: results.is_empty(),
            results,
            total_faculty: teachers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn teacher(id: u32, name: &str, subject: &str) -> Teacher {
        Teacher {
            id,
            name: name.to_string(),
            subject: subject.to_string(),
            designation: "Lecturer".to_string(),
        }
    }

    fn sample() -> Vec<Teacher> {
        vec![
            teacher(1, "Karim Ahmed", "Mathematics"),
            teacher(2, "Nasrin Akter", "English"),
        ]
    }

    fn ids(result: &[&Teacher]) -> Vec<u32> {
        result.iter().map(|t| t.id).collect()
    }

    // ==================== filter Tests ====================

    #[test]
    fn test_empty_query_all_subjects_returns_everyone_in_order() {
        let list = sample();
        assert_eq!(ids(&filter(&list, "", &SubjectFilter::All)), vec![1, 2]);
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let list = sample();
        assert_eq!(ids(&filter(&list, "karim", &SubjectFilter::All)), vec![1]);
        assert_eq!(ids(&filter(&list, "AKTER", &SubjectFilter::All)), vec![2]);
    }

    #[test]
    fn test_query_matches_subject() {
        let list = sample();
        assert_eq!(ids(&filter(&list, "math", &SubjectFilter::All)), vec![1]);
        assert_eq!(ids(&filter(&list, "e", &SubjectFilter::All)), vec![1, 2]);
    }

    #[test]
    fn test_subject_filter_is_exact() {
        let list = sample();
        assert_eq!(ids(&filter(&list, "", &SubjectFilter::parse("English"))), vec![2]);
        assert!(filter(&list, "", &SubjectFilter::parse("english")).is_empty());
        assert!(filter(&list, "", &SubjectFilter::parse("Eng")).is_empty());
    }

    #[test]
    fn test_query_and_subject_combine() {
        let list = sample();
        assert!(filter(&list, "karim", &SubjectFilter::parse("English")).is_empty());
        assert_eq!(ids(&filter(&list, "nasrin", &SubjectFilter::parse("English"))), vec![2]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let list = sample();
        assert!(filter(&list, "zzz", &SubjectFilter::All).is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert!(filter(&[], "", &SubjectFilter::All).is_empty());
    }

    #[test]
    fn test_bengali_query() {
        let list = vec![teacher(1, "করিম আহমেদ", "গণিত")];
        assert_eq!(ids(&filter(&list, "করিম", &SubjectFilter::All)), vec![1]);
    }

    // ==================== SubjectFilter Tests ====================

    #[test]
    fn test_subject_filter_parse() {
        assert_eq!(SubjectFilter::parse("all"), SubjectFilter::All);
        assert_eq!(SubjectFilter::parse(""), SubjectFilter::Subject(String::new()));
        assert_eq!(
            SubjectFilter::parse("Physics"),
            SubjectFilter::Subject("Physics".to_string())
        );
        assert_eq!(SubjectFilter::parse("Physics").as_str(), "Physics");
        assert_eq!(SubjectFilter::All.as_str(), "all");
    }

    // ==================== subject_options Tests ====================

    #[test]
    fn test_subject_options_first_occurrence_order() {
        assert_eq!(subject_options(&sample()), vec!["all", "Mathematics", "English"]);
    }

    #[test]
    fn test_subject_options_no_duplicates() {
        let mut list = sample();
        list.push(teacher(3, "Abul Kalam", "Mathematics"));
        list.push(teacher(4, "Habibur Rahman", "English"));

        assert_eq!(subject_options(&list), vec!["all", "Mathematics", "English"]);
    }

    #[test]
    fn test_subject_options_empty_list() {
        assert_eq!(subject_options(&[]), vec!["all"]);
    }

    // ==================== View Tests ====================

    #[test]
    fn test_directory_view_counts() {
        let list = sample();
        let search = SearchState::new("zzz", SubjectFilter::All);
        let view = DirectoryView::build(&list, &search);

        assert!(view.is_empty);
        assert_eq!(view.total_faculty, 2);
        assert_eq!(view.subjects_taught, 2);
        assert!(search.is_active());
        assert!(!SearchState::default().is_active());
    }

    #[test]
    fn test_directory_view_serializes() {
        let list = sample();
        let search = SearchState::new("", SubjectFilter::parse("English"));
        let json = serde_json::to_value(DirectoryView::build(&list, &search)).unwrap();

        assert_eq!(json["search"]["subject"], "English");
        assert_eq!(json["results"][0]["name"], "Nasrin Akter");
        assert_eq!(json["subjectOptions"], serde_json::json!(["all", "Mathematics", "English"]));
        assert_eq!(json["isEmpty"], false);
    }

    // ==================== Property Tests ====================

    fn teachers() -> impl Strategy<Value = Vec<Teacher>> {
        prop::collection::vec(
            ("[A-Za-z ]{1,16}", prop_oneof![Just("Mathematics"), Just("English"), Just("Physics")]),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, subject))| teacher(i as u32, &name, subject))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn results_are_an_ordered_subsequence(list in teachers(), query in "[a-z]{0,3}") {
            let result = ids(&filter(&list, &query, &SubjectFilter::All));
            let mut sorted = result.clone();
            sorted.sort_unstable();
            prop_assert_eq!(result, sorted);
        }

        #[test]
        fn subject_filter_only_returns_that_subject(list in teachers()) {
            let subject = SubjectFilter::parse("Physics");
            for t in filter(&list, "", &subject) {
                prop_assert_eq!(t.subject.as_str(), "Physics");
            }
        }

        #[test]
        fn empty_query_with_all_is_identity(list in teachers()) {
            prop_assert_eq!(filter(&list, "", &SubjectFilter::All).len(), list.len());
        }
    }
}
