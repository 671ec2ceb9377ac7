//! The flat meetup event record.
//!
//! [`MeetupEvent`] is what the rest of the program works with once a
//! structured-data block has been selected from the group page. Every field
//! has a default so a sparse source object still yields a printable record.

use serde::{Deserialize, Serialize};

/// Title used when the source event carries no name.
pub const UNKNOWN_EVENT_NAME: &str = "Unknown Event";

/// Location shown when the source event carries no usable location.
pub const LOCATION_TBD: &str = "Location TBD";

/// A meetup event, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetupEvent {
    /// The event title.
    pub name: String,
    /// Free-form description, empty when absent.
    pub description: String,
    /// Start time exactly as published (usually ISO-8601).
    pub start_time: Option<String>,
    /// End time exactly as published (usually ISO-8601).
    pub end_time: Option<String>,
    /// Single-line location string.
    pub location: String,
    /// Link to the event page.
    pub url: String,
}

impl MeetupEvent {
    /// Creates an event with the given URL and every other field defaulted.
    ///
    /// The URL is the only default that depends on the caller: when the page
    /// does not link the event itself, the group page is the best link we have.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            name: UNKNOWN_EVENT_NAME.to_string(),
            description: String::new(),
            start_time: None,
            end_time: None,
            location: LOCATION_TBD.to_string(),
            url: url.into(),
        }
    }

    /// Builder method to set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the start time.
    pub fn with_start_time(mut self, start: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    /// Builder method to set the end time.
    pub fn with_end_time(mut self, end: impl Into<String>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}
