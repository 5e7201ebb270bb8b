//! Event board commands

use super::fail;
use crate::args::EventsSubcommand;
use qbank::config::Config;
use qbank::core::events::{timeline, EventBoard, EventError};
use qbank::core::models::Event;
use qbank::core::store::{JsonFileStore, RecordStore};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Dispatch events subcommands
pub fn run(subcommand: EventsSubcommand, config: &Config) {
    let mut board = open_board(config);

    match subcommand {
        EventsSubcommand::List => list(&board),
        EventsSubcommand::Show { id } => {
            let event = board.get(&id).unwrap_or_else(|e| report(&e));
            print_json(&event);
        }
        EventsSubcommand::Add { file } => {
            let event = board.add(read_fields(&file)).unwrap_or_else(|e| report(&e));
            println!("✓ Added event {}", event.id);
        }
        EventsSubcommand::Update { id, file } => {
            let event = board
                .update(&id, read_fields(&file))
                .unwrap_or_else(|e| report(&e));
            println!("✓ Updated event {}", event.id);
        }
        EventsSubcommand::Delete { id } => {
            let event = board.delete(&id).unwrap_or_else(|e| report(&e));
            println!("✓ Deleted event {} ({})", event.id, event.event_title);
        }
    }
}

/// Open the events file, creating an empty list on first use
fn open_board(config: &Config) -> EventBoard<JsonFileStore> {
    let mut store = JsonFileStore::new(&config.store.events_file);
    if !store.path().exists() {
        RecordStore::<Event>::save_all(&mut store, &[])
            .unwrap_or_else(|e| fail("Failed to create events file", e));
    }
    EventBoard::new(store)
}

fn report(err: &EventError) -> ! {
    match err {
        EventError::NotFound(id) => fail("Event not found", id),
        EventError::Invalid(reason) => fail("Invalid event", reason),
        EventError::Store(e) => fail("Event store failed", e),
    }
}

fn read_fields(path: &Path) -> Map<String, Value> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("Failed to read {}", path.display()), e));
    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => fail("Invalid event", "expected a JSON object"),
        Err(e) => fail(&format!("Failed to parse {}", path.display()), e),
    }
}

fn print_json(event: &Event) {
    match serde_json::to_string_pretty(event) {
        Ok(json) => println!("{json}"),
        Err(e) => fail("Failed to encode event", e),
    }
}

fn list(board: &EventBoard<JsonFileStore>) {
    let events = board.list().unwrap_or_else(|e| report(&e));
    if events.is_empty() {
        println!("No events have been posted yet.");
        return;
    }

    let today = chrono::Local::now().date_naive();
    let split = timeline(&events, today);
    for (heading, group) in [
        ("Upcoming", &split.upcoming),
        ("Past", &split.past),
        ("Undated", &split.undated),
    ] {
        if group.is_empty() {
            continue;
        }
        println!("\n=== {heading} ===\n");
        for event in group {
            println!(
                "  {:<12} {:<36} {}",
                event.start_date().unwrap_or("-"),
                event.event_title,
                event.id
            );
        }
    }
}
