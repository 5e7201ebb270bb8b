//! Report generation module for the question-bank catalog
//!
//! Renders one category as a document: the twelve-slot trimester table and,
//! for every trimester that has courses, the course list with resource
//! availability. Markdown and HTML are supported.

pub mod formats;

use crate::core::catalog::{count_by_trimester, list_courses, Availability, Category, TrimesterSlot};
use crate::core::models::CourseResource;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One course row of a trimester section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow<'a> {
    /// The course record
    pub course: &'a CourseResource,
    /// Which resource types it carries
    pub availability: Availability,
}

/// Courses of one available trimester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimesterSection<'a> {
    /// Slot the section belongs to
    pub slot: TrimesterSlot,
    /// Courses in record order
    pub rows: Vec<CourseRow<'a>>,
}

/// Data context for report generation
///
/// Built once from a record snapshot; templates read from it and nothing else.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Category being reported
    pub category: Category,
    /// Day the report was generated, already formatted
    pub generated_on: String,
    /// All twelve trimester slots
    pub slots: Vec<TrimesterSlot>,
    /// Sections for slots with at least one course
    pub sections: Vec<TrimesterSection<'a>>,
}

impl<'a> ReportContext<'a> {
    /// Build the context for `category` from a snapshot
    #[must_use]
    pub fn new(records: &'a [CourseResource], category: Category, generated_on: &str) -> Self {
        let slots = count_by_trimester(records, category);
        let sections = slots
            .iter()
            .filter(|slot| slot.is_available())
            .map(|slot| TrimesterSection {
                slot: slot.clone(),
                rows: list_courses(records, category, &slot.value)
                    .into_iter()
                    .map(|course| CourseRow {
                        course,
                        availability: Availability::of(course),
                    })
                    .collect(),
            })
            .collect();

        Self {
            category,
            generated_on: generated_on.to_string(),
            slots,
            sections,
        }
    }

    /// Courses across all sections
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    /// Number of trimesters with at least one course
    #[must_use]
    pub fn available_trimesters(&self) -> usize {
        self.sections.len()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
