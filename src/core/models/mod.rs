//! Data models for `qbank`

pub mod event;
pub mod resource;

pub use event::Event;
pub use resource::{CourseResource, Note, PracticeDocument, QuestionPaper, Questions};
