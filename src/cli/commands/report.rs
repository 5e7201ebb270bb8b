//! Report command handler
//!
//! Renders one category of the catalog to Markdown or HTML.

use super::fail;
use qbank::config::Config;
use qbank::core::catalog::{Category, QuestionBank};
use qbank::core::report::{ReportContext, ReportFormat};
use qbank::core::store::JsonFileStore;
use qbank::info;
use std::path::{Path, PathBuf};

/// Default output path: `<reports_dir>/<category>-catalog.<ext>`
#[must_use]
pub fn default_output_path(reports_dir: &Path, category: Category, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{}-catalog.{}", category.slug(), format.extension()))
}

/// Run the report command.
///
/// # Arguments
/// * `config` - Configuration with the resources file and reports directory
/// * `category` - Category to report on
/// * `format` - Output format
/// * `output` - Optional output path; defaults to the reports directory
pub fn run(config: &Config, category: Category, format: ReportFormat, output: Option<&Path>) {
    let records = QuestionBank::new(JsonFileStore::new(&config.store.resources_file))
        .snapshot()
        .unwrap_or_else(|e| fail("Failed to load courses", e));

    let output_path = output.map_or_else(
        || default_output_path(Path::new(&config.paths.reports_dir), category, format),
        Path::to_path_buf,
    );
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| {
            fail(&format!("Failed to create reports directory {}", parent.display()), e)
        });
    }

    let today = chrono::Local::now().date_naive().to_string();
    let ctx = ReportContext::new(&records, category, &today);
    if let Err(e) = format.generator().generate(&ctx, &output_path) {
        fail(&format!("Failed to write {format} report"), e);
    }

    info!(
        "Report for {} covers {} courses",
        category.slug(),
        ctx.course_count()
    );
    println!("✓ Report generated: {}", output_path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("/out"), Category::NonDepartmental, ReportFormat::Html);
        assert_eq!(path, PathBuf::from("/out/non-departmental-catalog.html"));
    }
}
