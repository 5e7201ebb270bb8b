//! Free-text course search
//!
//! Matches are grouped by course code so that one course offered in several
//! trimesters shows up once, with the number of distinct trimesters seen.

use super::category::{normalize_course_type, Category};
use crate::core::models::CourseResource;
use std::collections::{HashMap, HashSet};

/// Maximum number of groups returned by [`search`]
pub const SEARCH_RESULT_LIMIT: usize = 6;

/// Trimester used for navigation when a record carries none
pub const DEFAULT_TRIMESTER: &str = "1st";

/// One grouped search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// First matching record of the group
    pub course: &'a CourseResource,
    /// Distinct trimester values seen in the group; a missing trimester counts as one value
    pub trimester_count: usize,
}

/// Where a search hit links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRoute {
    /// Category slug
    pub category: String,
    /// Trimester value
    pub trimester: String,
    /// Course id
    pub course_id: String,
}

impl SearchHit<'_> {
    /// Navigation target for the representative record
    ///
    /// An empty course type routes to the departmental category.
    #[must_use]
    pub fn route(&self) -> CourseRoute {
        let normalized = normalize_course_type(self.course.course_type.as_deref());
        let category = if normalized.is_empty() {
            Category::Departmental.slug().to_string()
        } else {
            normalized
        };
        CourseRoute {
            category,
            trimester: self
                .course
                .trimester
                .clone()
                .unwrap_or_else(|| DEFAULT_TRIMESTER.to_string()),
            course_id: self.course.id.clone(),
        }
    }
}

struct Group<'a> {
    course: &'a CourseResource,
    trimesters: HashSet<&'a str>,
}

fn matches(course: &CourseResource, needle: &str) -> bool {
    course.course_name.to_lowercase().contains(needle)
        || course.code_or_empty().to_lowercase().contains(needle)
}

/// Search course names and codes, grouped by course code
///
/// Groups keep first-encounter order and are truncated to
/// [`SEARCH_RESULT_LIMIT`]. A blank query returns nothing.
#[must_use]
pub fn search<'a>(records: &'a [CourseResource], query: &str) -> Vec<SearchHit<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let (groups, _) = records.iter().filter(|r| matches(r, &needle)).fold(
        (Vec::<Group<'a>>::new(), HashMap::<&'a str, usize>::new()),
        |(mut groups, mut index), record| {
            let trimester = record.trimester_or_empty();
            if let Some(&slot) = index.get(record.group_key()) {
                groups[slot].trimesters.insert(trimester);
            } else {
                index.insert(record.group_key(), groups.len());
                groups.push(Group {
                    course: record,
                    trimesters: HashSet::from([trimester]),
                });
            }
            (groups, index)
        },
    );

    groups
        .into_iter()
        .take(SEARCH_RESULT_LIMIT)
        .map(|group| SearchHit {
            course: group.course,
            trimester_count: group.trimesters.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(id: &str, code: Option<&str>, name: &str, trimester: Option<&str>) -> CourseResource {
        let mut course = CourseResource::new(id.to_string(), name.to_string());
        course.course_code = code.map(str::to_string);
        course.trimester = trimester.map(str::to_string);
        course
    }

    #[test]
    fn test_groups_offerings_by_code() {
        let records = vec![
            offering("cse101", Some("CSE101"), "Intro to CS", Some("1st")).with_course_type(""),
            offering("cse101-t2", Some("CSE101"), "Intro to CS", Some("2nd")).with_course_type(""),
        ];

        let hits = search(&records, "intro");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].course.group_key(), "CSE101");
        assert_eq!(hits[0].course.id, "cse101");
        assert_eq!(hits[0].trimester_count, 2);
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let records = vec![offering("a", Some("A"), "Alpha", None)];
        assert!(search(&records, "").is_empty());
        assert!(search(&records, "   ").is_empty());
        assert!(search(&[], "").is_empty());
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let records = vec![offering("a", Some("MAT 201"), "Calculus", Some("3rd"))];
        assert_eq!(search(&records, "  mat 2 ").len(), 1);
        assert_eq!(search(&records, "mat2").len(), 0);
        assert_eq!(search(&records, "CALC").len(), 1);
    }

    #[test]
    fn test_results_capped_at_six_groups() {
        let records: Vec<CourseResource> = (0..10)
            .map(|i| offering(&format!("c{i}"), Some(&format!("CSE{i}")), "Programming", Some("1st")))
            .collect();

        let hits = search(&records, "programming");
        assert_eq!(hits.len(), SEARCH_RESULT_LIMIT);
        let ids: Vec<&str> = hits.iter().map(|h| h.course.id.as_str()).collect();
        assert_eq!(ids, ["c0", "c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn test_late_matches_still_join_early_groups() {
        let mut records: Vec<CourseResource> = (0..8)
            .map(|i| offering(&format!("c{i}"), Some(&format!("CSE{i}")), "Lab", Some("1st")))
            .collect();
        records.push(offering("c0-again", Some("CSE0"), "Lab", Some("4th")));

        let hits = search(&records, "lab");
        assert_eq!(hits.len(), 6);
        assert_eq!(hits[0].course.id, "c0");
        assert_eq!(hits[0].trimester_count, 2);
    }

    #[test]
    fn test_missing_code_groups_by_id() {
        let records = vec![
            offering("eng", None, "English", Some("1st")),
            offering("eng-2", None, "English", Some("2nd")),
        ];
        assert_eq!(search(&records, "english").len(), 2);
    }

    #[test]
    fn test_missing_trimesters_count_as_one() {
        let records = vec![
            offering("a", Some("X1"), "Ethics", None),
            offering("b", Some("X1"), "Ethics", None),
        ];
        let hits = search(&records, "ethics");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].trimester_count, 1);
    }

    #[test]
    fn test_route_defaults() {
        let records = vec![
            offering("a", Some("X1"), "Ethics", None),
            offering("b", Some("Y1"), "Bangla", Some("2nd")).with_course_type("Non Departmental"),
        ];

        let hits = search(&records, "ethics");
        let route = hits[0].route();
        assert_eq!(route.category, "departmental");
        assert_eq!(route.trimester, "1st");
        assert_eq!(route.course_id, "a");

        let hits = search(&records, "bangla");
        assert_eq!(hits[0].route().category, "non-departmental");
        assert_eq!(hits[0].route().trimester, "2nd");
    }
}
