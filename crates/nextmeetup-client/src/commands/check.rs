//! The default command: print the next meetup.

use tracing::{debug, warn};

use nextmeetup_core::ReportFormatter;
use nextmeetup_providers::meetup::MeetupClient;
use nextmeetup_providers::{EventSource, find_next_event};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Fetches the configured group page and prints the report to stdout.
///
/// Transport failures are reported on stderr and still produce the
/// "no upcoming meetup" report; only configuration problems are errors.
pub async fn run(config: &ClientConfig) -> ClientResult<()> {
    config.meetup.validate().map_err(ClientError::Config)?;
    let provider_config = config
        .meetup
        .to_provider_config()
        .map_err(ClientError::Config)?;
    let client = MeetupClient::new(provider_config)?;
    let formatter = ReportFormatter::new(config.meetup.format_options());

    println!("{}", render(&client, &formatter).await);
    Ok(())
}

/// Runs the fetch/extract/format pipeline against any source.
pub async fn render(source: &dyn EventSource, formatter: &ReportFormatter) -> String {
    let event = match find_next_event(source).await {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Fetch failed");
            eprintln!("Error fetching meetup page: {}", e);
            None
        }
    };

    debug!(found = event.is_some(), "Rendering report");
    formatter.format_report(event.as_ref())
}
