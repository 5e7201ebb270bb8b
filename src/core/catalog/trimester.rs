//! Trimester table and course listing within a category

use super::category::Category;
use crate::core::models::CourseResource;

/// Number of trimester slots shown for every category
pub const TRIMESTER_COUNT: u8 = 12;

/// One row of the trimester table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimesterSlot {
    /// Heading (e.g., "Trimester 3")
    pub label: String,
    /// Canonical trimester value used for matching and navigation (e.g., "3rd")
    pub value: String,
    /// Number of records in this slot
    pub count: usize,
}

impl TrimesterSlot {
    /// Slots with no courses are shown but not navigable
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.count > 0
    }
}

/// Ordinal suffix used by trimester labels: 1st, 2nd, 3rd, then `th`
///
/// Only 1, 2 and 3 get special suffixes, so 11 and 12 read `11th`, `12th`.
#[must_use]
pub const fn ordinal_suffix(n: u8) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Canonical trimester value for slot `n` (e.g., `trimester_value(2) == "2nd"`)
#[must_use]
pub fn trimester_value(n: u8) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

/// Heading for a trimester value: its digits after "Trimester "
#[must_use]
pub fn trimester_label(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    format!("Trimester {digits}")
}

/// The twelve canonical trimester values, `1st` through `12th`
#[must_use]
pub fn canonical_trimesters() -> Vec<String> {
    (1..=TRIMESTER_COUNT).map(trimester_value).collect()
}

fn matches_trimester(course: &CourseResource, trimester: &str) -> bool {
    course.trimester_or_empty().to_lowercase() == trimester.to_lowercase()
}

/// Build the twelve-slot trimester table for one category
///
/// Matching is exact string equality after lower-casing. Records whose
/// trimester is not one of the canonical values are counted nowhere.
#[must_use]
pub fn count_by_trimester(records: &[CourseResource], category: Category) -> Vec<TrimesterSlot> {
    let in_category: Vec<&CourseResource> =
        records.iter().filter(|r| category.contains(r)).collect();

    canonical_trimesters()
        .into_iter()
        .map(|value| {
            let count = in_category
                .iter()
                .filter(|r| matches_trimester(r, &value))
                .count();
            TrimesterSlot {
                label: trimester_label(&value),
                value,
                count,
            }
        })
        .collect()
}

/// Records of `category` offered in `trimester`, in input order
#[must_use]
pub fn list_courses<'a>(
    records: &'a [CourseResource],
    category: Category,
    trimester: &str,
) -> Vec<&'a CourseResource> {
    records
        .iter()
        .filter(|r| category.contains(r) && matches_trimester(r, trimester))
        .collect()
}

/// Narrow a course list by name or code substring
///
/// A blank query keeps every course.
#[must_use]
pub fn filter_courses<'a>(courses: &[&'a CourseResource], query: &str) -> Vec<&'a CourseResource> {
    if query.trim().is_empty() {
        return courses.to_vec();
    }
    let needle = query.to_lowercase();
    courses
        .iter()
        .copied()
        .filter(|c| {
            c.course_name.to_lowercase().contains(&needle)
                || c.code_or_empty().to_lowercase().contains(&needle)
        })
        .collect()
}
