//! HTML report generator
//!
//! Generates catalog reports as a single self-contained HTML page with
//! embedded CSS.

use crate::core::catalog::availability_badge;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/catalog.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        HTML_TEMPLATE
            .replace("{{category_title}}", ctx.category.title())
            .replace("{{category_slug}}", ctx.category.slug())
            .replace("{{generated_on}}", &escape_html(&ctx.generated_on))
            .replace("{{course_count}}", &ctx.course_count().to_string())
            .replace(
                "{{available_trimesters}}",
                &ctx.available_trimesters().to_string(),
            )
            .replace("{{trimester_rows}}", &Self::generate_trimester_rows(ctx))
            .replace("{{course_sections}}", &Self::generate_sections(ctx))
    }

    /// Generate the trimester table as HTML table rows
    fn generate_trimester_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for slot in &ctx.slots {
            let class = if slot.is_available() { "available" } else { "unavailable" };
            let _ = writeln!(
                html,
                "<tr class=\"{class}\"><td>{}</td><td>{}</td><td>{}</td></tr>",
                slot.label,
                slot.count,
                availability_badge(slot.is_available())
            );
        }

        html
    }

    /// Generate one section per available trimester
    fn generate_sections(ctx: &ReportContext) -> String {
        let mut html = String::new();

        if ctx.sections.is_empty() {
            html.push_str("<p class=\"empty\">No courses have been added to this category yet.</p>\n");
            return html;
        }

        for section in &ctx.sections {
            let _ = writeln!(
                html,
                "<section id=\"trimester-{}\">",
                section.slot.value
            );
            let _ = writeln!(html, "  <h3>{}</h3>", section.slot.label);
            let _ = writeln!(html, "  <table>");
            let _ = writeln!(
                html,
                "    <tr><th>Code</th><th>Course</th><th>Credit</th><th>Questions</th><th>Notes</th><th>Practice</th></tr>"
            );

            for row in &section.rows {
                let _ = writeln!(
                    html,
                    "    <tr><td><span class=\"course-badge\">{}</span></td><td>{}</td><td>{}</td>{}{}{}</tr>",
                    escape_html(row.course.code_or_empty()),
                    escape_html(&row.course.course_name),
                    escape_html(&row.course.course_credit),
                    badge_cell(row.availability.questions),
                    badge_cell(row.availability.notes),
                    badge_cell(row.availability.practice),
                );
            }

            let _ = writeln!(html, "  </table>");
            let _ = writeln!(html, "</section>");
        }

        html
    }
}

fn badge_cell(available: bool) -> String {
    let class = if available { "yes" } else { "no" };
    format!("<td class=\"{class}\">{}</td>", availability_badge(available))
}

/// Escape the five HTML-significant characters
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Category;
    use crate::core::models::CourseResource;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("R&D <lab>"), "R&amp;D &lt;lab&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_html() {
        let records = vec![CourseResource::new("cse110".into(), "Algorithms <I>".into())
            .with_code("CSE110")
            .with_trimester("4th")];
        let ctx = ReportContext::new(&records, Category::Departmental, "2025-03-14");

        let out = HtmlReporter::new().render(&ctx).unwrap();

        assert!(out.contains("<title>Departmental Courses"));
        assert!(out.contains("<section id=\"trimester-4th\">"));
        assert!(out.contains("Algorithms &lt;I&gt;"));
        assert!(out.contains("<tr class=\"unavailable\"><td>Trimester 1</td><td>0</td><td>Not Available</td></tr>"));
        assert!(!out.contains("{{"), "unsubstituted placeholder left in output");
    }
}
