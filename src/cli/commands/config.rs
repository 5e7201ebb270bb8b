//! Config command handler

use super::fail;
use crate::args::ConfigSubcommand;
use qbank::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value).unwrap_or_else(|e| fail("Cannot set", e));
            save(config);
            println!("✓ Set {key} = {value}");
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config
                .unset(&key, defaults)
                .unwrap_or_else(|e| fail("Cannot unset", e));
            save(config);
            println!("✓ Reset {key} to default");
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show_all(config: &Config) {
    println!(
        "\n=== Configuration ({}) ===\n",
        Config::get_config_file_path().display()
    );
    print!("{config}");
}

fn show_key(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => fail("Unknown config key", format!("'{key}'")),
    }
}

fn save(config: &Config) {
    if let Err(e) = config.save() {
        fail("Failed to save config", e);
    }
}

/// Delete the config file after a y/n confirmation
fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Config::reset().unwrap_or_else(|e| fail("Failed to remove config file", e));
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
