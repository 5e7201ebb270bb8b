//! Command-line interface entry point for `qbank`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use qbank::config::Config;
use qbank::info;
use qbank::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // `stored` mirrors the config file; only `config` sees this run's overrides
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = runtime_config(&stored, &args);

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Categories => commands::catalog::categories(&config),
        Command::Trimesters { category } => commands::catalog::trimesters(&config, category),
        Command::Courses {
            category,
            trimester,
            filter,
        } => commands::catalog::courses(&config, category, &trimester, filter.as_deref()),
        Command::Course { id } => commands::catalog::course(&config, &id),
        Command::Questions { id, kind } => commands::catalog::questions(&config, &id, kind),
        Command::Notes { id } => commands::catalog::notes(&config, &id),
        Command::Practice { id } => commands::catalog::practice(&config, &id),
        Command::Search { query } => commands::catalog::search(&config, &query),
        Command::Report {
            category,
            format,
            output,
        } => commands::report::run(&config, category, format, output.as_deref()),
        Command::Events { subcommand } => commands::events::run(subcommand, &config),
    }
}

/// Effective settings for this run: the stored config plus CLI overrides
///
/// The stored config is left untouched so that `config set`/`unset` never
/// write per-run flags such as `--resources` back to disk.
fn runtime_config(stored: &Config, args: &Cli) -> Config {
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());
    config
}
