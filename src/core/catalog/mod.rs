//! Catalog index and query engine
//!
//! Derives the browsing hierarchy (category → trimester → course → resource
//! type) from a flat slice of [`CourseResource`] records. Every function here
//! is a pure read over the slice it is given; nothing is indexed or cached
//! between calls. [`QuestionBank`] wraps a [`RecordStore`] and loads a fresh
//! snapshot for each query.

pub mod availability;
pub mod category;
pub mod materials;
pub mod search;
pub mod trimester;

pub use availability::{availability_badge, Availability, QuestionCounts};
pub use category::{
    category_stats, normalize_course_type, partition_by_category, Category, CategoryStats,
};
pub use materials::{
    note_title, notes_by_author, practice_listing, question_listing, AuthorNotes, PracticeListing,
    QuestionKind, QuestionListing,
};
pub use search::{search, CourseRoute, SearchHit, SEARCH_RESULT_LIMIT};
pub use trimester::{
    canonical_trimesters, count_by_trimester, filter_courses, list_courses, TrimesterSlot,
};

use crate::core::models::CourseResource;
use crate::core::store::{RecordStore, StoreError};
use crate::debug;
use thiserror::Error;

/// Errors surfaced by catalog queries
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record has the requested id
    #[error("course not found: {0}")]
    NotFound(String),

    /// The record store failed; passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Look up a course by exact id
///
/// # Errors
/// Returns `CatalogError::NotFound` when no record has this id
pub fn find_course<'a>(records: &'a [CourseResource], id: &str) -> Result<&'a CourseResource, CatalogError> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

/// Query front for a resource store
///
/// Holds no catalog state: each call reads the whole collection from the
/// store, answers one query, and drops the snapshot.
#[derive(Debug, Clone)]
pub struct QuestionBank<S> {
    store: S,
}

impl<S: RecordStore<CourseResource>> QuestionBank<S> {
    /// Wrap a store
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the current collection
    ///
    /// # Errors
    /// Propagates the store's `StoreError`
    pub fn snapshot(&self) -> Result<Vec<CourseResource>, CatalogError> {
        let records = self.store.load_all()?;
        debug!("Catalog snapshot holds {} records", records.len());
        Ok(records)
    }

    /// Run a query against a fresh snapshot
    ///
    /// # Errors
    /// Propagates the store's `StoreError`
    pub fn with_snapshot<R>(&self, query: impl FnOnce(&[CourseResource]) -> R) -> Result<R, CatalogError> {
        let records = self.snapshot()?;
        Ok(query(&records))
    }

    /// Course counts per category
    ///
    /// # Errors
    /// Propagates the store's `StoreError`
    pub fn categories(&self) -> Result<CategoryStats, CatalogError> {
        self.with_snapshot(category_stats)
    }

    /// Twelve-slot trimester table for a category
    ///
    /// # Errors
    /// Propagates the store's `StoreError`
    pub fn trimesters(&self, category: Category) -> Result<Vec<TrimesterSlot>, CatalogError> {
        self.with_snapshot(|records| count_by_trimester(records, category))
    }

    /// Courses of a category offered in a trimester
    ///
    /// # Errors
    /// Propagates the store's `StoreError`
    pub fn courses(&self, category: Category, trimester: &str) -> Result<Vec<CourseResource>, CatalogError> {
        self.with_snapshot(|records| {
            list_courses(records, category, trimester)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Look up one course by id
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` for an unknown id, or the store's error
    pub fn course(&self, id: &str) -> Result<CourseResource, CatalogError> {
        self.with_snapshot(|records| find_course(records, id).cloned())?
    }
}
