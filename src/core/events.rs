//! Event board: create, read, update and delete club events
//!
//! Every operation reads the full list from the store and every mutation
//! writes the full list back. Ids are slugs of the event title.

use crate::core::models::Event;
use crate::core::store::{RecordStore, StoreError};
use crate::info;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use thiserror::Error;

/// Title used when a new event arrives without one
pub const UNTITLED_EVENT: &str = "untitled-event";

/// Errors surfaced by event board operations
#[derive(Debug, Error)]
pub enum EventError {
    /// No event has the requested id
    #[error("event not found: {0}")]
    NotFound(String),

    /// The submitted event data cannot be stored
    #[error("event data not valid: {0}")]
    Invalid(String),

    /// The record store failed; passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Turn a title into an id: lower-case, strip punctuation, dash-join words
///
/// The title is trimmed before punctuation is dropped, so whitespace left at
/// either edge by the drop still becomes a `-` (`"Hello !"` is `"hello-"`).
/// Word characters, whitespace and `-` survive; whitespace runs become one `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let (slug, _) = text
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .fold((String::new(), false), |(mut slug, in_space), c| {
            if c.is_whitespace() {
                if !in_space {
                    slug.push('-');
                }
                (slug, true)
            } else {
                slug.push(c);
                (slug, false)
            }
        });
    slug
}

/// Event list backed by a record store
#[derive(Debug, Clone)]
pub struct EventBoard<S> {
    store: S,
}

impl<S: RecordStore<Event>> EventBoard<S> {
    /// Wrap a store
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All events in file order
    ///
    /// # Errors
    /// Propagates the store's `StoreError`
    pub fn list(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.store.load_all()?)
    }

    /// One event by id
    ///
    /// # Errors
    /// Returns `EventError::NotFound` for an unknown id, or the store's error
    pub fn get(&self, id: &str) -> Result<Event, EventError> {
        self.list()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EventError::NotFound(id.to_string()))
    }

    /// Create an event from submitted fields and append it
    ///
    /// The id is the slug of `eventTitle`, or of [`UNTITLED_EVENT`] when the
    /// title is missing. An `id` in the submission is always discarded, so
    /// callers cannot choose ids; use [`update`](Self::update) to edit an
    /// existing event.
    ///
    /// # Errors
    /// Returns `EventError::Invalid` when the slug is empty or the fields do not
    /// form an event, or the store's error
    pub fn add(&mut self, mut fields: Map<String, Value>) -> Result<Event, EventError> {
        let title = fields
            .get("eventTitle")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED_EVENT);
        let id = slugify(title);
        if id.is_empty() {
            return Err(EventError::Invalid(format!("title '{title}' has no usable characters")));
        }
        fields.insert("id".to_string(), Value::String(id));

        let event = event_from_fields(fields)?;
        let mut events = self.list()?;
        events.push(event.clone());
        self.store.save_all(&events)?;
        info!("Added event {}", event.id);
        Ok(event)
    }

    /// Merge submitted fields into an existing event
    ///
    /// Top-level keys in `patch` replace the stored ones; the id never changes.
    ///
    /// # Errors
    /// Returns `EventError::NotFound` for an unknown id, `EventError::Invalid`
    /// when the merged fields do not form an event, or the store's error
    pub fn update(&mut self, id: &str, patch: Map<String, Value>) -> Result<Event, EventError> {
        let mut events = self.list()?;
        let index = position(&events, id)?;

        let mut merged = match serde_json::to_value(&events[index]) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(EventError::Invalid("stored event is not an object".to_string())),
            Err(e) => return Err(EventError::Invalid(e.to_string())),
        };
        merged.extend(patch.into_iter().filter(|(key, _)| key != "id"));

        events[index] = event_from_fields(merged)?;
        self.store.save_all(&events)?;
        info!("Updated event {id}");
        Ok(events[index].clone())
    }

    /// Remove an event and return it
    ///
    /// # Errors
    /// Returns `EventError::NotFound` for an unknown id, or the store's error
    pub fn delete(&mut self, id: &str) -> Result<Event, EventError> {
        let mut events = self.list()?;
        let index = position(&events, id)?;
        let removed = events.remove(index);
        self.store.save_all(&events)?;
        info!("Deleted event {id}");
        Ok(removed)
    }
}

fn position(events: &[Event], id: &str) -> Result<usize, EventError> {
    events
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| EventError::NotFound(id.to_string()))
}

fn event_from_fields(fields: Map<String, Value>) -> Result<Event, EventError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| EventError::Invalid(e.to_string()))
}

/// Events split by start date relative to a given day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline<'a> {
    /// Starting today or later
    pub upcoming: Vec<&'a Event>,
    /// Started before today
    pub past: Vec<&'a Event>,
    /// No start date, or one that cannot be read
    pub undated: Vec<&'a Event>,
}

/// Read the calendar day of a start date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS`.
#[must_use]
pub fn parse_event_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Split events into upcoming, past and undated, keeping file order
#[must_use]
pub fn timeline(events: &[Event], today: NaiveDate) -> Timeline<'_> {
    events.iter().fold(Timeline::default(), |mut timeline, event| {
        match event.start_date().and_then(parse_event_day) {
            Some(day) if day >= today => timeline.upcoming.push(event),
            Some(_) => timeline.past.push(event),
            None => timeline.undated.push(event),
        }
        timeline
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Intro to Rust!"), "intro-to-rust");
        assert_eq!(slugify("  Hack   Night: 2025 "), "hack-night-2025");
        assert_eq!(slugify("C++ & Friends"), "c-friends");
        assert_eq!(slugify("snake_case-title"), "snake_case-title");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_keeps_edge_dashes_left_by_punctuation() {
        assert_eq!(slugify("Hello !"), "hello-");
        assert_eq!(slugify("! Hello"), "-hello");
        assert_eq!(slugify("Hackathon !"), "hackathon-");
        assert_eq!(slugify("  Padded  "), "padded");
        assert_eq!(slugify("a \t\n b"), "a-b");
        assert_eq!(slugify("! ?"), "-");
    }

    #[test]
    fn test_add_with_edge_punctuation_title() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        let event = board.add(fields(json!({"eventTitle": "! Intro"}))).unwrap();
        assert_eq!(event.id, "-intro");
    }

    #[test]
    fn test_add_assigns_slug_id() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        let event = board
            .add(fields(json!({"eventTitle": "Intro to Rust", "id": "ignored", "roomNo": "301"})))
            .unwrap();

        assert_eq!(event.id, "intro-to-rust");
        assert_eq!(event.room_no.as_deref(), Some("301"));
        assert_eq!(board.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_without_title_uses_default() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        let event = board.add(Map::new()).unwrap();
        assert_eq!(event.id, UNTITLED_EVENT);
    }

    #[test]
    fn test_add_rejects_unsluggable_title() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        let result = board.add(fields(json!({"eventTitle": "???"})));
        assert!(matches!(result, Err(EventError::Invalid(_))));
        assert!(board.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_mistyped_fields() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        let result = board.add(fields(json!({"eventTitle": "Talk", "eventDate": "tomorrow"})));
        assert!(matches!(result, Err(EventError::Invalid(_))));
    }

    #[test]
    fn test_update_merges_and_keeps_id() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        board
            .add(fields(json!({"eventTitle": "Talk", "roomNo": "101", "capacity": "40"})))
            .unwrap();

        let updated = board
            .update("talk", fields(json!({"roomNo": "202", "id": "other", "livestream": true})))
            .unwrap();

        assert_eq!(updated.id, "talk");
        assert_eq!(updated.room_no.as_deref(), Some("202"));
        assert_eq!(updated.capacity.as_deref(), Some("40"));
        assert_eq!(updated.extra.get("livestream"), Some(&Value::Bool(true)));
        assert_eq!(board.get("talk").unwrap(), updated);
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        assert!(matches!(board.update("nope", Map::new()), Err(EventError::NotFound(_))));
        assert!(matches!(board.delete("nope"), Err(EventError::NotFound(_))));
        assert!(matches!(board.get("nope"), Err(EventError::NotFound(_))));
    }

    #[test]
    fn test_delete_returns_removed() {
        let mut board = EventBoard::new(Vec::<Event>::new());
        board.add(fields(json!({"eventTitle": "One"}))).unwrap();
        board.add(fields(json!({"eventTitle": "Two"}))).unwrap();

        let removed = board.delete("one").unwrap();
        assert_eq!(removed.event_title, "One");
        let remaining: Vec<String> = board.list().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(remaining, ["two"]);
    }

    #[test]
    fn test_parse_event_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14);
        assert_eq!(parse_event_day("2025-03-14"), day);
        assert_eq!(parse_event_day("2025-03-14T18:30:00Z"), day);
        assert_eq!(parse_event_day("2025-03-14T18:30:00"), day);
        assert_eq!(parse_event_day("next friday"), None);
    }

    #[test]
    fn test_timeline_split() {
        let events: Vec<Event> = [
            json!({"id": "past", "eventDate": {"start": "2025-01-01"}}),
            json!({"id": "today", "eventDate": {"start": "2025-03-14"}}),
            json!({"id": "later", "eventDate": {"start": "2025-06-01T10:00:00Z"}}),
            json!({"id": "tbd"}),
            json!({"id": "garbled", "eventDate": {"start": "soon"}}),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();

        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let split = timeline(&events, today);

        fn ids(list: &[&Event]) -> Vec<String> {
            list.iter().map(|e| e.id.clone()).collect()
        }
        assert_eq!(ids(&split.upcoming), ["today", "later"]);
        assert_eq!(ids(&split.past), ["past"]);
        assert_eq!(ids(&split.undated), ["tbd", "garbled"]);
    }
}
