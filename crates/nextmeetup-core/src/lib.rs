//! Core types: meetup event record, timestamps, report formatting, tracing

pub mod event;
pub mod format;
pub mod time;
pub mod tracing;

pub use event::{LOCATION_TBD, MeetupEvent, UNKNOWN_EVENT_NAME};
pub use format::{DEFAULT_GROUP_NAME, FormatOptions, NO_MEETUP_TEXT, ReportFormatter};
pub use time::{StartTime, display_start};
pub use tracing::{TracingConfig, TracingError, init_tracing};
