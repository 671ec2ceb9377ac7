//! RawEvent to MeetupEvent conversion.
//!
//! Copies the known fields into the flat [`MeetupEvent`] record and fills
//! defaults for anything the page left out. Blank strings count as missing
//! so the report never prints an empty title, date or link.

use nextmeetup_core::MeetupEvent;

use crate::location::format_location;
use crate::raw_event::RawEvent;

/// Converts a [`RawEvent`] to a [`MeetupEvent`].
///
/// `page_url` is the group page that was fetched; it stands in for the event
/// URL when the event does not carry one.
pub fn normalize_event(raw: &RawEvent, page_url: &str) -> MeetupEvent {
    let url = non_blank(raw.url.as_deref()).unwrap_or(page_url);

    let mut event = MeetupEvent::new(url).with_location(format_location(raw.location.as_ref()));

    if let Some(name) = non_blank(raw.name.as_deref()) {
        event = event.with_name(name);
    }

    if let Some(ref description) = raw.description {
        event = event.with_description(description);
    }

    if let Some(start) = non_blank(raw.start_date.as_deref()) {
        event = event.with_start_time(start);
    }

    if let Some(end) = non_blank(raw.end_date.as_deref()) {
        event = event.with_end_time(end);
    }

    event
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE: &str = "https://www.meetup.com/hsv-py/";

    #[test]
    fn copies_all_fields() {
        let raw = RawEvent::from_value(&json!({
            "@type": "Event",
            "name": "Python Night",
            "description": "Talks and pizza",
            "startDate": "2024-03-15T18:00:00-05:00",
            "endDate": "2024-03-15T20:00:00-05:00",
            "location": {
                "name": "Library",
                "address": {
                    "streetAddress": "1 Main St",
                    "addressLocality": "Huntsville",
                    "addressRegion": "AL"
                }
            },
            "url": "https://www.meetup.com/hsv-py/events/300000001/"
        }));

        let event = normalize_event(&raw, PAGE);
        assert_eq!(event.name, "Python Night");
        assert_eq!(event.description, "Talks and pizza");
        assert_eq!(event.start_time.as_deref(), Some("2024-03-15T18:00:00-05:00"));
        assert_eq!(event.end_time.as_deref(), Some("2024-03-15T20:00:00-05:00"));
        assert_eq!(event.location, "Library, 1 Main St, Huntsville, AL");
        assert_eq!(event.url, "https://www.meetup.com/hsv-py/events/300000001/");
    }

    #[test]
    fn empty_event_gets_defaults() {
        let event = normalize_event(&RawEvent::default(), PAGE);
        assert_eq!(event, MeetupEvent::new(PAGE));
        assert_eq!(event.name, "Unknown Event");
        assert_eq!(event.location, "Location TBD");
        assert_eq!(event.url, PAGE);
    }

    #[test]
    fn blank_name_and_url_use_defaults() {
        let raw = RawEvent::from_value(&json!({"@type": "Event", "name": "  ", "url": ""}));
        let event = normalize_event(&raw, PAGE);
        assert_eq!(event.name, "Unknown Event");
        assert_eq!(event.url, PAGE);
    }

    #[test]
    fn start_time_kept_verbatim() {
        let raw = RawEvent::from_value(&json!({"@type": "Event", "startDate": "soon-ish"}));
        let event = normalize_event(&raw, PAGE);
        assert_eq!(event.start_time.as_deref(), Some("soon-ish"));
    }

    #[test]
    fn blank_dates_are_missing() {
        for blank in ["", "   "] {
            let raw = RawEvent::from_value(&json!({
                "@type": "Event",
                "startDate": blank,
                "endDate": blank
            }));
            let event = normalize_event(&raw, PAGE);
            assert!(event.start_time.is_none(), "startDate {:?}", blank);
            assert!(event.end_time.is_none(), "endDate {:?}", blank);
        }
    }
}
