//! Plain-text report formatting.
//!
//! The report is the only output the tool produces:
//!
//! ```text
//! Next HSV.py Meetup:
//!   Title: Python Night
//!   Date: Friday, March 15, 2024 at 06:00 PM UTC
//!   Location: Library, 1 Main St, Huntsville, AL
//!   URL: https://www.meetup.com/hsv-py/events/1/
//! ```
//!
//! # Example
//!
//! ```rust
//! use nextmeetup_core::{MeetupEvent, ReportFormatter};
//!
//! let formatter = ReportFormatter::with_defaults();
//! assert_eq!(formatter.format_report(None), "No upcoming meetup found.");
//!
//! let event = MeetupEvent::new("https://example.com/e/1").with_name("Python Night");
//! assert!(formatter.format_report(Some(&event)).contains("Python Night"));
//! ```

use serde::{Deserialize, Serialize};

use crate::event::MeetupEvent;
use crate::time::display_start;

/// Text printed when no event could be found, for whatever reason.
pub const NO_MEETUP_TEXT: &str = "No upcoming meetup found.";

/// Group label used in the report header when none is configured.
pub const DEFAULT_GROUP_NAME: &str = "HSV.py";

/// Configuration options for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Display name of the group, shown in the header line.
    pub group_name: String,
    /// Text to print when there is no event.
    pub no_meetup_text: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            group_name: DEFAULT_GROUP_NAME.to_string(),
            no_meetup_text: NO_MEETUP_TEXT.to_string(),
        }
    }
}

impl FormatOptions {
    /// Builder method to set the group name.
    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = name.into();
        self
    }
}

/// Renders a [`MeetupEvent`] into the human-readable report.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: FormatOptions,
}

impl ReportFormatter {
    /// Creates a formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a formatter with default options.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Formats the report for an optional event.
    ///
    /// `None` yields the "no upcoming meetup" text. The date line is only
    /// present when the event has a start time, and the URL line only when
    /// the URL is non-empty. Lines are joined with `\n`, without a trailing
    /// newline.
    pub fn format_report(&self, event: Option<&MeetupEvent>) -> String {
        let Some(event) = event else {
            return self.options.no_meetup_text.clone();
        };

        let mut lines = Vec::with_capacity(5);
        lines.push(format!("Next {} Meetup:", self.options.group_name));
        lines.push(format!("  Title: {}", event.name));

        if let Some(ref start) = event.start_time {
            lines.push(format!("  Date: {}", display_start(start)));
        }

        lines.push(format!("  Location: {}", event.location));

        if !event.url.is_empty() {
            lines.push(format!("  URL: {}", event.url));
        }

        lines.join("\n")
    }
}
