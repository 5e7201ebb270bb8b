//! Category partitioning
//!
//! Every course belongs to at most one category. The course type text is
//! normalized once, here, and every classification goes through
//! [`Category::classify`].

use crate::core::models::CourseResource;
use std::fmt;
use std::str::FromStr;

/// Top-level partition of the course catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Department courses; also the bucket for records with no course type
    Departmental,
    /// Courses outside the department (languages, soft skills, ...)
    NonDepartmental,
}

impl Category {
    /// Both categories in display order
    pub const ALL: [Self; 2] = [Self::Departmental, Self::NonDepartmental];

    /// Canonical slug used in navigation
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Departmental => "departmental",
            Self::NonDepartmental => "non-departmental",
        }
    }

    /// Page heading for the category
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Departmental => "Departmental Courses",
            Self::NonDepartmental => "Non-Departmental Courses",
        }
    }

    /// Map a normalized course type onto a category
    ///
    /// Empty input is departmental. Unrecognised types map to `None`.
    #[must_use]
    pub fn from_normalized(normalized: &str) -> Option<Self> {
        match normalized {
            "" | "departmental" => Some(Self::Departmental),
            "non-departmental" | "nondepartmental" => Some(Self::NonDepartmental),
            _ => None,
        }
    }

    /// Category of a record, or `None` when its course type is unrecognised
    #[must_use]
    pub fn classify(course: &CourseResource) -> Option<Self> {
        Self::from_normalized(&normalize_course_type(course.course_type.as_deref()))
    }

    /// Whether the record falls in this category
    #[must_use]
    pub fn contains(self, course: &CourseResource) -> bool {
        Self::classify(course) == Some(self)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_course_type(Some(s));
        if normalized.is_empty() {
            return Err("Category must not be empty".to_string());
        }
        Self::from_normalized(&normalized).ok_or_else(|| format!("Unknown category: {s}"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Course counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    /// Records in the departmental bucket
    pub departmental: usize,
    /// Records in the non-departmental bucket
    pub non_departmental: usize,
}

impl CategoryStats {
    /// Count for one category
    #[must_use]
    pub const fn count(&self, category: Category) -> usize {
        match category {
            Category::Departmental => self.departmental,
            Category::NonDepartmental => self.non_departmental,
        }
    }
}

/// Normalize course type text: lower-case, trim, whitespace runs become `-`
///
/// Absent text normalizes to the empty string.
#[must_use]
pub fn normalize_course_type(raw: Option<&str>) -> String {
    raw.unwrap_or_default()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Records belonging to `category`, in input order
#[must_use]
pub fn partition_by_category(records: &[CourseResource], category: Category) -> Vec<&CourseResource> {
    records.iter().filter(|r| category.contains(r)).collect()
}

/// Count records per category; unrecognised types are in neither count
#[must_use]
pub fn category_stats(records: &[CourseResource]) -> CategoryStats {
    records
        .iter()
        .fold(CategoryStats::default(), |mut stats, record| {
            match Category::classify(record) {
                Some(Category::Departmental) => stats.departmental += 1,
                Some(Category::NonDepartmental) => stats.non_departmental += 1,
                None => {}
            }
            stats
        })
}
