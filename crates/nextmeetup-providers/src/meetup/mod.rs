//! Meetup.com group page source.
//!
//! # Example
//!
//! ```ignore
//! use nextmeetup_providers::meetup::{MeetupClient, MeetupConfig};
//! use nextmeetup_providers::find_next_event;
//!
//! let config = MeetupConfig::new("https://www.meetup.com/hsv-py/")?;
//! let client = MeetupClient::new(config)?;
//! let event = find_next_event(&client).await?;
//! ```

mod client;
mod config;

pub use client::MeetupClient;
pub use config::{DEFAULT_GROUP_URL, DEFAULT_USER_AGENT, MeetupConfig};
