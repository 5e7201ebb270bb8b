//! Resource-type availability for a course
//!
//! An absent list and an empty list mean the same thing. Nothing here is
//! cached; every call reads the live record.

use crate::core::models::CourseResource;

/// Number of papers per exam kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionCounts {
    /// Class test papers
    pub class_test: usize,
    /// Midterm papers
    pub midterm_exam: usize,
    /// Final exam papers
    pub final_exam: usize,
}

impl QuestionCounts {
    /// Count the papers of each kind on a course
    #[must_use]
    pub fn of(course: &CourseResource) -> Self {
        let Some(questions) = course.questions.as_ref() else {
            return Self::default();
        };
        Self {
            class_test: questions.class_test.as_ref().map_or(0, Vec::len),
            midterm_exam: questions.midterm_exam.as_ref().map_or(0, Vec::len),
            final_exam: questions.final_exam.as_ref().map_or(0, Vec::len),
        }
    }

    /// Total papers across all kinds
    #[must_use]
    pub const fn total(&self) -> usize {
        self.class_test + self.midterm_exam + self.final_exam
    }

    /// Whether any paper exists
    #[must_use]
    pub const fn any(&self) -> bool {
        self.class_test > 0 || self.midterm_exam > 0 || self.final_exam > 0
    }
}

/// Which resource sections of a course have content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Availability {
    /// At least one exam paper of any kind
    pub questions: bool,
    /// At least one note
    pub notes: bool,
    /// At least one practice document
    pub practice: bool,
}

impl Availability {
    /// Derive availability from a course record
    #[must_use]
    pub fn of(course: &CourseResource) -> Self {
        Self {
            questions: QuestionCounts::of(course).any(),
            notes: course.notes.as_ref().is_some_and(|n| !n.is_empty()),
            practice: course.practice.as_ref().is_some_and(|p| !p.is_empty()),
        }
    }

    /// Whether the course has nothing to show at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.questions || self.notes || self.practice)
    }
}

/// Badge text for an availability flag
#[must_use]
pub const fn availability_badge(available: bool) -> &'static str {
    if available {
        "Available"
    } else {
        "Not Available"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Note, PracticeDocument, QuestionPaper, Questions};

    fn bare() -> CourseResource {
        CourseResource::new("cse101".into(), "Intro to CS".into())
    }

    #[test]
    fn test_absent_sections_are_unavailable() {
        let course = bare();
        assert_eq!(QuestionCounts::of(&course), QuestionCounts::default());
        assert_eq!(Availability::of(&course), Availability::default());
        assert!(Availability::of(&course).is_empty());
    }

    #[test]
    fn test_empty_lists_equal_absent() {
        let mut course = bare();
        course.questions = Some(Questions {
            class_test: Some(Vec::new()),
            midterm_exam: None,
            final_exam: Some(Vec::new()),
        });
        course.notes = Some(Vec::new());
        course.practice = Some(Vec::new());

        assert_eq!(Availability::of(&course), Availability::default());
    }

    #[test]
    fn test_questions_available_iff_any_kind_non_empty() {
        for (ct, mid, fin) in [(1, 0, 0), (0, 1, 0), (0, 0, 1), (0, 0, 0), (2, 3, 1)] {
            let mut course = bare();
            course.questions = Some(Questions {
                class_test: Some(vec![QuestionPaper::default(); ct]),
                midterm_exam: Some(vec![QuestionPaper::default(); mid]),
                final_exam: Some(vec![QuestionPaper::default(); fin]),
            });

            let counts = QuestionCounts::of(&course);
            assert_eq!((counts.class_test, counts.midterm_exam, counts.final_exam), (ct, mid, fin));
            assert_eq!(counts.total(), ct + mid + fin);
            assert_eq!(Availability::of(&course).questions, ct + mid + fin > 0);
        }
    }

    #[test]
    fn test_notes_and_practice_flags() {
        let mut course = bare();
        course.notes = Some(vec![Note::default()]);
        let availability = Availability::of(&course);
        assert!(availability.notes);
        assert!(!availability.practice);

        course.practice = Some(vec![PracticeDocument::default()]);
        assert!(Availability::of(&course).practice);
    }

    #[test]
    fn test_badge() {
        assert_eq!(availability_badge(true), "Available");
        assert_eq!(availability_badge(false), "Not Available");
    }
}
