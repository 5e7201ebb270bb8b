//! Event model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A club event as stored in the events JSON file
///
/// Keys the model does not know about are kept in `extra` so a read-modify-write
/// cycle never drops data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Slug derived from the title at creation time
    pub id: String,

    /// Event title
    #[serde(default)]
    pub event_title: String,

    /// Banner image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,

    /// One-paragraph summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Start and end dates (e.g., "2025-03-14")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<Span>,

    /// Start and end times (e.g., "10:00 AM")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<Span>,

    /// Venue room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,

    /// Seat count, as display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,

    /// Audience (e.g., "All students")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_to: Option<String>,

    /// Featured speaker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Speaker>,

    /// Organizing clubs and partners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizers: Option<Vec<Organizer>>,

    /// Point of contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,

    /// Any other keys present in the file
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A start/end pair of free-text values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Speaker details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    /// Speaker name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Designation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desg: Option<String>,
    /// Portrait URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Organizer entry; the file uses capitalised keys here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    /// Organizer name
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Logo URL
    #[serde(rename = "LogoUrl", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Contact entry; the file uses capitalised keys here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact name
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact role
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Contact email
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(rename = "Phone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Event {
    /// Start date text, if any
    #[must_use]
    pub fn start_date(&self) -> Option<&str> {
        self.event_date.as_ref().and_then(|d| d.start.as_deref())
    }
}
