//! Meetup page fetcher configuration.

use std::time::Duration;
use url::Url;

/// Group page fetched when nothing else is configured.
pub const DEFAULT_GROUP_URL: &str = "https://www.meetup.com/hsv-py/";

/// Client identifier sent with the request. Meetup serves the full page,
/// JSON-LD included, to browser-like agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Configuration for fetching a meetup group page.
#[derive(Debug, Clone)]
pub struct MeetupConfig {
    /// The group page URL.
    pub url: Url,

    /// User agent string.
    pub user_agent: String,

    /// Request timeout; `None` waits as long as the connection stays open.
    pub timeout: Option<Duration>,

    /// Whether to honour proxy settings from the environment.
    pub use_env_proxy: bool,
}

impl MeetupConfig {
    /// Creates a new configuration for the given group page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(url: impl AsRef<str>) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(url.as_ref())?;
        Ok(Self {
            url: parsed,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            use_env_proxy: true,
        })
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Ignores `HTTP_PROXY` and friends.
    pub fn without_env_proxy(mut self) -> Self {
        self.use_env_proxy = false;
        self
    }

    /// Returns the group URL as a string.
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }
}

impl Default for MeetupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GROUP_URL).expect("default group URL is valid")
    }
}
