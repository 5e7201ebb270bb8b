//! Course resource model
//!
//! One record per course offering in a trimester, as stored in the resources
//! JSON file. Field names follow the file's camelCase keys.

use serde::{Deserialize, Serialize};

/// A course offering and the study material collected for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResource {
    /// Unique identifier, also used as the navigation slug (e.g., "cse-2213-1st")
    pub id: String,

    /// Display name (e.g., "Discrete Mathematics")
    pub course_name: String,

    /// Short course code (e.g., "CSE 2213"); shared by every offering of a course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,

    /// Trimester label (e.g., "1st", "12th")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trimester: Option<String>,

    /// Credit value, kept as display text
    #[serde(default)]
    pub course_credit: String,

    /// Free-form resource kind tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Course category text (e.g., "Departmental", "Non Departmental")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<String>,

    /// Previous exam papers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Questions>,

    /// Student notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,

    /// Practice documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice: Option<Vec<PracticeDocument>>,
}

/// Exam papers grouped by exam kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questions {
    /// Class test papers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_test: Option<Vec<QuestionPaper>>,
    /// Midterm exam papers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midterm_exam: Option<Vec<QuestionPaper>>,
    /// Final exam papers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_exam: Option<Vec<QuestionPaper>>,
}

/// A single exam paper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPaper {
    /// Class test label (e.g., "CT 2"); only set on class tests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_no: Option<String>,
    /// Trimester the paper was set in (e.g., "Spring 2024")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trimester_name: Option<String>,
    /// Link to the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<String>,
}

/// A note shared by a student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Author contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Author student id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_title: Option<String>,
    /// Link to the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<String>,
}

/// A practice document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeDocument {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    /// Link to the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<String>,
}

impl CourseResource {
    /// Create a resource with only the required fields set
    ///
    /// # Arguments
    /// * `id` - Unique slug
    /// * `course_name` - Display name
    #[must_use]
    pub const fn new(id: String, course_name: String) -> Self {
        Self {
            id,
            course_name,
            course_code: None,
            trimester: None,
            course_credit: String::new(),
            resource_type: None,
            course_type: None,
            questions: None,
            notes: None,
            practice: None,
        }
    }

    /// Set the course code
    #[must_use]
    pub fn with_code(mut self, code: &str) -> Self {
        self.course_code = Some(code.to_string());
        self
    }

    /// Set the trimester label
    #[must_use]
    pub fn with_trimester(mut self, trimester: &str) -> Self {
        self.trimester = Some(trimester.to_string());
        self
    }

    /// Set the course type text
    #[must_use]
    pub fn with_course_type(mut self, course_type: &str) -> Self {
        self.course_type = Some(course_type.to_string());
        self
    }

    /// Key used to group offerings of the same course
    ///
    /// # Returns
    /// The course code, or the record id when the code is absent
    #[must_use]
    pub fn group_key(&self) -> &str {
        self.course_code.as_deref().unwrap_or(&self.id)
    }

    /// Course code for display, empty when absent
    #[must_use]
    pub fn code_or_empty(&self) -> &str {
        self.course_code.as_deref().unwrap_or_default()
    }

    /// Trimester label, empty when absent
    #[must_use]
    pub fn trimester_or_empty(&self) -> &str {
        self.trimester.as_deref().unwrap_or_default()
    }
}
