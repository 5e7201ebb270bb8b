//! Catalog browsing commands
//!
//! Categories, trimesters, course lists, course detail with materials, and
//! search. Every command loads a fresh snapshot of the resources file.

use super::fail;
use qbank::config::Config;
use qbank::core::catalog::{
    self, availability_badge, filter_courses, note_title, notes_by_author, practice_listing,
    question_listing, Availability, Category, CatalogError, QuestionCounts, QuestionKind,
    QuestionBank,
};
use qbank::core::catalog::trimester::trimester_label;
use qbank::core::models::CourseResource;
use qbank::core::store::JsonFileStore;
use qbank::{debug, info};

fn bank(config: &Config) -> QuestionBank<JsonFileStore> {
    debug!("Using resources file {}", config.store.resources_file);
    QuestionBank::new(JsonFileStore::new(&config.store.resources_file))
}

fn load_course(config: &Config, id: &str) -> CourseResource {
    match bank(config).course(id) {
        Ok(course) => course,
        Err(CatalogError::NotFound(_)) => fail("Course not found", id),
        Err(e) => fail("Failed to load courses", e),
    }
}

/// Course counts per category
pub fn categories(config: &Config) {
    let stats = bank(config)
        .categories()
        .unwrap_or_else(|e| fail("Failed to load courses", e));

    println!("\n=== Categories ===\n");
    for category in Category::ALL {
        println!(
            "  {:<26} {:>4} courses  ({})",
            category.title(),
            stats.count(category),
            category.slug()
        );
    }
}

/// Twelve-slot trimester table for a category
pub fn trimesters(config: &Config, category: Category) {
    let slots = bank(config)
        .trimesters(category)
        .unwrap_or_else(|e| fail("Failed to load courses", e));

    println!("\n=== {} ===\n", category.title());
    for slot in &slots {
        println!(
            "  {:<6} {:<13} {:>3} courses  {}",
            slot.value,
            slot.label,
            slot.count,
            availability_badge(slot.is_available())
        );
    }
}

/// Courses of a category in one trimester, optionally filtered
pub fn courses(config: &Config, category: Category, trimester: &str, filter: Option<&str>) {
    let courses = bank(config)
        .courses(category, trimester)
        .unwrap_or_else(|e| fail("Failed to load courses", e));

    println!("\n=== {} · {} ===\n", category.title(), trimester_label(trimester));
    if courses.is_empty() {
        println!("  No courses have been added to this trimester yet.");
        return;
    }

    let all: Vec<&CourseResource> = courses.iter().collect();
    let shown = filter.map_or_else(|| all.clone(), |q| filter_courses(&all, q));
    if shown.is_empty() {
        println!("  No courses match '{}'.", filter.unwrap_or_default());
        return;
    }

    for course in shown {
        print_course_line(course);
    }
}

fn print_course_line(course: &CourseResource) {
    let available = Availability::of(course);
    let flags: Vec<&str> = [
        (available.questions, "questions"),
        (available.notes, "notes"),
        (available.practice, "practice"),
    ]
    .into_iter()
    .filter_map(|(present, name)| present.then_some(name))
    .collect();

    println!(
        "  {:<10} {:<40} [{}]  id: {}",
        course.code_or_empty(),
        course.course_name,
        if flags.is_empty() { "no resources".to_string() } else { flags.join(", ") },
        course.id
    );
}

/// Course header with availability and question counts
pub fn course(config: &Config, id: &str) {
    let course = load_course(config, id);
    let available = Availability::of(&course);
    let counts = QuestionCounts::of(&course);

    println!("\n=== {} ===\n", course.course_name);
    println!("  Code:      {}", course.code_or_empty());
    println!("  Credit:    {}", course.course_credit);
    println!("  Trimester: {}", trimester_label(course.trimester_or_empty()));
    println!();
    println!("  Questions: {}", availability_badge(available.questions));
    for kind in QuestionKind::ALL {
        let n = match kind {
            QuestionKind::ClassTest => counts.class_test,
            QuestionKind::Midterm => counts.midterm_exam,
            QuestionKind::Final => counts.final_exam,
        };
        println!("    {:<14} {n}", kind.title());
    }
    println!("  Notes:     {}", availability_badge(available.notes));
    println!("  Practice:  {}", availability_badge(available.practice));
}

/// Exam papers of one kind
pub fn questions(config: &Config, id: &str, kind: QuestionKind) {
    let course = load_course(config, id);
    let listing = question_listing(&course, kind);

    println!("\n=== {} · {} ===\n", course.course_name, kind.title());
    if listing.is_empty() {
        println!("  No {} have been added yet.", kind.title().to_lowercase());
        return;
    }
    for paper in listing {
        println!(
            "  {:<8} {:<20} {:<14} {}",
            paper.id,
            paper.title,
            paper.trimester.unwrap_or("-"),
            paper.link.unwrap_or("-")
        );
    }
}

/// Notes grouped by author
pub fn notes(config: &Config, id: &str) {
    let course = load_course(config, id);
    let groups = notes_by_author(&course);

    println!("\n=== {} · Notes ===\n", course.course_name);
    if groups.is_empty() {
        println!("  No notes have been shared for this course yet.");
        return;
    }
    for group in groups {
        println!("  [{}] {}", group.initials(), group.author);
        if let Some(email) = group.email() {
            println!("       email: {email}");
        }
        if let Some(student_id) = group.student_id() {
            println!("       id:    {student_id}");
        }
        for (i, note) in group.notes.iter().enumerate() {
            println!(
                "       - {}  {}",
                note_title(note, i),
                note.drive_link.as_deref().unwrap_or("-")
            );
        }
    }
}

/// Practice documents
pub fn practice(config: &Config, id: &str) {
    let course = load_course(config, id);
    let listing = practice_listing(&course);

    println!("\n=== {} · Practice ===\n", course.course_name);
    if listing.is_empty() {
        println!("  No practice documents have been added yet.");
        return;
    }
    for doc in listing {
        println!("  - {}  {}", doc.title, doc.link.unwrap_or("-"));
    }
}

/// Grouped search over names and codes
pub fn search(config: &Config, query: &str) {
    let lines = bank(config)
        .with_snapshot(|records| {
            catalog::search(records, query)
                .iter()
                .map(|hit| {
                    let route = hit.route();
                    format!(
                        "  {:<10} {:<40} {} trimester(s)  → {}/{}/{}",
                        hit.course.code_or_empty(),
                        hit.course.course_name,
                        hit.trimester_count,
                        route.category,
                        route.trimester,
                        route.course_id
                    )
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|e| fail("Failed to load courses", e));

    info!("Search '{query}' matched {} course groups", lines.len());
    if lines.is_empty() {
        println!("No courses match '{query}'.");
        return;
    }
    for line in lines {
        println!("{line}");
    }
}
