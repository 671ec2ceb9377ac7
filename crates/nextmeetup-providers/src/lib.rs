//! EventSource trait, meetup page fetcher and JSON-LD event extraction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  meetup.com     │
//! └────────┬────────┘
//!          │ GET (User-Agent)
//!          ▼
//! ┌─────────────────┐
//! │  MeetupClient   │  EventSource::fetch_page()
//! └────────┬────────┘
//!          │ HTML
//!          ▼
//! ┌─────────────────┐
//! │ jsonld          │  extract_blocks() → select_event()
//! └────────┬────────┘
//!          │ serde_json::Value
//!          ▼
//! ┌─────────────────┐
//! │  RawEvent       │  lenient serde view
//! └────────┬────────┘
//!          ▼ normalize_event()
//! ┌─────────────────┐
//! │  MeetupEvent    │
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use nextmeetup_providers::{find_next_event, meetup::{MeetupClient, MeetupConfig}};
//!
//! let client = MeetupClient::new(MeetupConfig::default())?;
//! match find_next_event(&client).await? {
//!     Some(event) => println!("{}", event.name),
//!     None => println!("nothing scheduled"),
//! }
//! ```

pub mod error;
pub mod jsonld;
pub mod location;
pub mod meetup;
pub mod normalize;
pub mod provider;
pub mod raw_event;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use jsonld::{extract_blocks, find_event, select_event};
pub use location::format_location;
pub use normalize::normalize_event;
pub use provider::{BoxFuture, ErrorSource, EventSource, StaticPage, find_next_event};
pub use raw_event::{RawAddress, RawEvent, RawLocation, RawPlace, RawPostalAddress};
