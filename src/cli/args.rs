//! CLI argument definitions for `qbank`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use qbank::config::ConfigOverrides;
use qbank::core::catalog::{Category, QuestionKind};
use qbank::core::report::ReportFormat;
use qbank::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `resources_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum EventsSubcommand {
    /// List events split into upcoming, past and undated.
    List,
    /// Show one event as JSON.
    Show {
        /// Event id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Add an event from a JSON object file. The id is derived from the title.
    Add {
        /// JSON file with the event fields
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Merge the fields of a JSON object file into an event.
    Update {
        /// Event id
        #[arg(value_name = "ID")]
        id: String,
        /// JSON file with the fields to replace
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Delete an event.
    Delete {
        /// Event id
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show course counts per category.
    Categories,
    /// Show the twelve trimesters of a category with course counts.
    Trimesters {
        /// Category: departmental or non-departmental
        #[arg(value_name = "CATEGORY")]
        category: Category,
    },
    /// List the courses of a category in one trimester.
    Courses {
        /// Category: departmental or non-departmental
        #[arg(value_name = "CATEGORY")]
        category: Category,
        /// Trimester value (e.g., 1st, 2nd, 12th)
        #[arg(value_name = "TRIMESTER")]
        trimester: String,
        /// Keep only courses whose name or code contains this text
        #[arg(short, long, value_name = "QUERY")]
        filter: Option<String>,
    },
    /// Show one course with its resource availability.
    Course {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List the exam papers of a course.
    Questions {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
        /// Paper kind: classtest, midterm or final
        #[arg(value_name = "KIND")]
        kind: QuestionKind,
    },
    /// List the notes of a course grouped by author.
    Notes {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List the practice documents of a course.
    Practice {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Search course names and codes.
    Search {
        /// Text to look for
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// Generate a catalog report for one category.
    Report {
        /// Category: departmental or non-departmental
        #[arg(value_name = "CATEGORY")]
        category: Category,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: ReportFormat,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Manage the event board.
    Events {
        #[command(subcommand)]
        subcommand: EventsSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "qbank",
    about = "Question bank catalog and event board",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read course resources from this file instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub resources: Option<PathBuf>,

    /// Read and write events in this file instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub events: Option<PathBuf>,

    /// Write reports to this directory instead of the configured one
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// let overrides = args.to_config_overrides();
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            resources_file: path_string(self.resources.as_ref()),
            events_file: path_string(self.events.as_ref()),
            reports_dir: path_string(self.reports_dir.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["qbank", "categories"]);

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.resources_file.is_none());
        assert!(overrides.events_file.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "qbank",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--resources",
            "/data/resources.json",
            "--events",
            "/data/events.json",
            "--reports-dir",
            "/out",
            "categories",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.resources_file, Some("/data/resources.json".to_string()));
        assert_eq!(overrides.events_file, Some("/data/events.json".to_string()));
        assert_eq!(overrides.reports_dir, Some("/out".to_string()));
    }

    #[test]
    fn test_typed_positionals() {
        let cli = Cli::parse_from(["qbank", "courses", "Non Departmental", "3rd", "-f", "cse"]);
        match cli.command {
            Command::Courses {
                category,
                trimester,
                filter,
            } => {
                assert_eq!(category, Category::NonDepartmental);
                assert_eq!(trimester, "3rd");
                assert_eq!(filter.as_deref(), Some("cse"));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from(["qbank", "report", "departmental", "-f", "html"]);
        assert!(matches!(
            cli.command,
            Command::Report {
                category: Category::Departmental,
                format: ReportFormat::Html,
                output: None,
            }
        ));

        let cli = Cli::parse_from(["qbank", "questions", "cse101", "midterm"]);
        assert!(matches!(
            cli.command,
            Command::Questions { kind: QuestionKind::Midterm, .. }
        ));
    }

    #[test]
    fn test_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["qbank", "trimesters", "science"]).is_err());
        assert!(Cli::try_parse_from(["qbank", "questions", "cse101", "quiz"]).is_err());
    }
}
