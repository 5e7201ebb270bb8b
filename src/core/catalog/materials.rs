//! Per-course material listings: exam papers, notes by author, practice documents

use crate::core::models::{CourseResource, Note, QuestionPaper};
use std::fmt;
use std::str::FromStr;

/// Exam paper kind, addressed by its navigation slug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Class tests (`classtest`)
    ClassTest,
    /// Midterm exams (`midterm`)
    Midterm,
    /// Final exams (`final`)
    Final,
}

impl QuestionKind {
    /// All kinds in display order
    pub const ALL: [Self; 3] = [Self::ClassTest, Self::Midterm, Self::Final];

    /// Navigation slug
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ClassTest => "classtest",
            Self::Midterm => "midterm",
            Self::Final => "final",
        }
    }

    /// Section heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ClassTest => "Class Tests",
            Self::Midterm => "Midterm Exams",
            Self::Final => "Final Exams",
        }
    }

    const fn id_prefix(self) -> &'static str {
        match self {
            Self::ClassTest => "ct",
            Self::Midterm => "mid",
            Self::Final => "final",
        }
    }

    fn papers(self, course: &CourseResource) -> &[QuestionPaper] {
        let Some(questions) = course.questions.as_ref() else {
            return &[];
        };
        let papers = match self {
            Self::ClassTest => questions.class_test.as_deref(),
            Self::Midterm => questions.midterm_exam.as_deref(),
            Self::Final => questions.final_exam.as_deref(),
        };
        papers.unwrap_or_default()
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classtest" => Ok(Self::ClassTest),
            "midterm" => Ok(Self::Midterm),
            "final" => Ok(Self::Final),
            _ => Err(format!("Unknown question type: {s}")),
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One exam paper, ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing<'a> {
    /// Stable row id (e.g., "ct-0", "mid-1")
    pub id: String,
    /// Display title
    pub title: String,
    /// Trimester the paper was set in
    pub trimester: Option<&'a str>,
    /// Document link
    pub link: Option<&'a str>,
}

/// List the papers of one kind for a course
///
/// Class tests are titled by their `testNo` when present; every other paper
/// gets a numbered default title.
#[must_use]
pub fn question_listing(course: &CourseResource, kind: QuestionKind) -> Vec<QuestionListing<'_>> {
    kind.papers(course)
        .iter()
        .enumerate()
        .map(|(i, paper)| {
            let number = i + 1;
            let title = match kind {
                QuestionKind::ClassTest => paper
                    .test_no
                    .clone()
                    .unwrap_or_else(|| format!("Class Test {number}")),
                QuestionKind::Midterm => format!("Midterm Exam {number}"),
                QuestionKind::Final => format!("Final Exam {number}"),
            };
            QuestionListing {
                id: format!("{}-{i}", kind.id_prefix()),
                title,
                trimester: paper.trimester_name.as_deref(),
                link: paper.drive_link.as_deref(),
            }
        })
        .collect()
}

/// Author name used when a note has none
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Notes shared by one author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorNotes<'a> {
    /// Author name, or [`UNKNOWN_AUTHOR`]
    pub author: &'a str,
    /// Notes in file order
    pub notes: Vec<&'a Note>,
}

impl<'a> AuthorNotes<'a> {
    /// Up to two upper-cased initials from the author name
    #[must_use]
    pub fn initials(&self) -> String {
        self.author
            .split(' ')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// Contact email, taken from the author's first note
    #[must_use]
    pub fn email(&self) -> Option<&'a str> {
        self.notes.first().copied().and_then(|n| n.email.as_deref())
    }

    /// Student id, taken from the author's first note
    #[must_use]
    pub fn student_id(&self) -> Option<&'a str> {
        self.notes.first().copied().and_then(|n| n.id.as_deref())
    }
}

/// Group a course's notes by author, in first-encounter order
#[must_use]
pub fn notes_by_author(course: &CourseResource) -> Vec<AuthorNotes<'_>> {
    let mut groups: Vec<AuthorNotes<'_>> = Vec::new();
    for note in course.notes.as_deref().unwrap_or_default() {
        let author = note.author.as_deref().unwrap_or(UNKNOWN_AUTHOR);
        match groups.iter_mut().find(|g| g.author == author) {
            Some(group) => group.notes.push(note),
            None => groups.push(AuthorNotes {
                author,
                notes: vec![note],
            }),
        }
    }
    groups
}

/// Display title of a note at position `index`
#[must_use]
pub fn note_title(note: &Note, index: usize) -> String {
    note.note_title
        .clone()
        .unwrap_or_else(|| format!("Notes Document {}", index + 1))
}

/// One practice document, ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeListing<'a> {
    /// Display title
    pub title: String,
    /// Document link
    pub link: Option<&'a str>,
}

/// List a course's practice documents with default titles filled in
#[must_use]
pub fn practice_listing(course: &CourseResource) -> Vec<PracticeListing<'_>> {
    course
        .practice
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, doc)| PracticeListing {
            title: doc
                .document_title
                .clone()
                .unwrap_or_else(|| format!("Practice Document {}", i + 1)),
            link: doc.drive_link.as_deref(),
        })
        .collect()
}
