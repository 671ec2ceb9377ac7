//! EventSource trait definition.
//!
//! An [`EventSource`] hands back the raw text of a group page. Everything
//! after the fetch (block extraction, event selection, field mapping) is
//! shared and lives in [`find_next_event`].

use std::future::Future;
use std::pin::Pin;

use nextmeetup_core::MeetupEvent;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::jsonld::find_event;
use crate::normalize::normalize_event;
use crate::raw_event::RawEvent;

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe so callers can hold a
/// `&dyn EventSource`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Something that can produce the HTML of a meetup group page.
///
/// # Example Implementation
///
/// ```ignore
/// impl EventSource for MeetupClient {
///     fn name(&self) -> &str { "meetup" }
///     fn page_url(&self) -> &str { self.config.url_str() }
///     fn fetch_page(&self) -> BoxFuture<'_, ProviderResult<String>> {
///         Box::pin(self.get())
///     }
/// }
/// ```
pub trait EventSource: Send + Sync {
    /// Returns the name/type of this source (e.g., "meetup").
    fn name(&self) -> &str;

    /// The URL of the page this source fetches; used as the event link when
    /// the event carries none.
    fn page_url(&self) -> &str;

    /// Fetches the page body.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on transport failures and non-200 responses.
    fn fetch_page(&self) -> BoxFuture<'_, ProviderResult<String>>;
}

/// Fetches the page and returns the next scheduled event, if any.
///
/// # Errors
///
/// Only transport failures are errors. A page without a usable event yields
/// `Ok(None)`.
pub async fn find_next_event(source: &dyn EventSource) -> ProviderResult<Option<MeetupEvent>> {
    debug!(source = source.name(), url = source.page_url(), "Fetching group page");
    let page = source.fetch_page().await?;
    debug!(bytes = page.len(), "Fetched group page");

    let event = find_event(&page).map(|value| {
        let raw = RawEvent::from_value(&value);
        normalize_event(&raw, source.page_url())
    });

    if event.is_none() {
        debug!("No event found in structured data");
    }

    Ok(event)
}

/// A source serving a fixed page from memory.
#[derive(Debug, Clone)]
pub struct StaticPage {
    url: String,
    body: String,
}

impl StaticPage {
    /// Creates a static page with the given URL and body.
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }
}

impl EventSource for StaticPage {
    fn name(&self) -> &str {
        "static"
    }

    fn page_url(&self) -> &str {
        &self.url
    }

    fn fetch_page(&self) -> BoxFuture<'_, ProviderResult<String>> {
        let body = self.body.clone();
        Box::pin(async move { Ok(body) })
    }
}

/// A source that always fails.
///
/// Useful for testing the transport-failure path.
#[derive(Debug)]
pub struct ErrorSource {
    name: String,
    url: String,
    error: ProviderError,
}

impl ErrorSource {
    /// Creates a new error source.
    pub fn new(name: impl Into<String>, url: impl Into<String>, error: ProviderError) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            error,
        }
    }
}

impl EventSource for ErrorSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_url(&self) -> &str {
        &self.url
    }

    fn fetch_page(&self) -> BoxFuture<'_, ProviderResult<String>> {
        // Clone the error details since we can't clone ProviderError directly
        let error =
            ProviderError::new(self.error.code(), self.error.message()).with_provider(&self.name);
        Box::pin(async move { Err(error) })
    }
}
