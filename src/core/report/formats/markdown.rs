//! Markdown report generator
//!
//! Generates catalog reports as plain Markdown tables. These render well in
//! GitHub, GitLab, and VS Code.

use crate::core::catalog::availability_badge;
use crate::core::report::{ReportContext, ReportGenerator, TrimesterSection};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/catalog.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        MARKDOWN_TEMPLATE
            .replace("{{category_title}}", ctx.category.title())
            .replace("{{category_slug}}", ctx.category.slug())
            .replace("{{generated_on}}", &ctx.generated_on)
            .replace("{{course_count}}", &ctx.course_count().to_string())
            .replace(
                "{{available_trimesters}}",
                &ctx.available_trimesters().to_string(),
            )
            .replace("{{trimester_table}}", &Self::generate_trimester_table(ctx))
            .replace("{{course_sections}}", &Self::generate_sections(ctx))
    }

    /// Generate the twelve-slot trimester table
    fn generate_trimester_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Trimester | Courses | Status |\n");
        table.push_str("|---|---|---|\n");

        for slot in &ctx.slots {
            let _ = writeln!(
                table,
                "| {} | {} | {} |",
                slot.label,
                slot.count,
                availability_badge(slot.is_available())
            );
        }

        table
    }

    /// Generate one course table per available trimester
    fn generate_sections(ctx: &ReportContext) -> String {
        if ctx.sections.is_empty() {
            return "_No courses have been added to this category yet._\n".to_string();
        }

        ctx.sections
            .iter()
            .map(Self::generate_section)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn generate_section(section: &TrimesterSection) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "### {}\n", section.slot.label);
        out.push_str("| Code | Course | Credit | Questions | Notes | Practice |\n");
        out.push_str("|---|---|---|---|---|---|\n");

        for row in &section.rows {
            let credit = if row.course.course_credit.is_empty() {
                "-"
            } else {
                row.course.course_credit.as_str()
            };
            let _ = writeln!(
                out,
                "| {} | {} | {credit} | {} | {} | {} |",
                escape_cell(row.course.code_or_empty()),
                escape_cell(&row.course.course_name),
                availability_badge(row.availability.questions),
                availability_badge(row.availability.notes),
                availability_badge(row.availability.practice),
            );
        }

        out
    }
}

/// Keep table cells on one column
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
