//! Reduces a schema.org location to one display line.

use nextmeetup_core::LOCATION_TBD;

use crate::raw_event::{RawAddress, RawLocation, RawPlace};

/// Shown for a virtual location with no name.
pub const ONLINE_EVENT: &str = "Online event";

/// Formats an optional location, falling back to [`LOCATION_TBD`].
pub fn format_location(location: Option<&RawLocation>) -> String {
    location
        .and_then(location_line)
        .unwrap_or_else(|| LOCATION_TBD.to_string())
}

/// Returns the display line for a location, or `None` when nothing usable is
/// present.
fn location_line(location: &RawLocation) -> Option<String> {
    match location {
        RawLocation::Text(text) => non_empty(text),
        RawLocation::Place(place) => place_line(place),
        RawLocation::Many(items) => items.iter().find_map(location_line),
        RawLocation::Other(_) => None,
    }
}

/// `name, street, city, region`, skipping empty parts.
fn place_line(place: &RawPlace) -> Option<String> {
    let mut parts: Vec<&str> = Vec::with_capacity(4);
    parts.extend(place.name.as_deref());

    match place.address {
        Some(RawAddress::Postal(ref address)) => {
            parts.extend(address.street_address.as_deref());
            parts.extend(address.address_locality.as_deref());
            parts.extend(address.address_region.as_deref());
        }
        Some(RawAddress::Text(ref text)) => parts.push(text),
        None => {}
    }

    let line = join_parts(&parts);
    if line.is_some() {
        return line;
    }

    place.is_virtual().then(|| ONLINE_EVENT.to_string())
}

fn join_parts(parts: &[&str]) -> Option<String> {
    let joined = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    non_empty(&joined)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RawLocation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn full_postal_address() {
        let location = parse(json!({
            "@type": "Place",
            "name": "Library",
            "address": {
                "@type": "PostalAddress",
                "streetAddress": "1 Main St",
                "addressLocality": "Huntsville",
                "addressRegion": "AL"
            }
        }));
        assert_eq!(
            format_location(Some(&location)),
            "Library, 1 Main St, Huntsville, AL"
        );
    }

    #[test]
    fn missing_parts_are_skipped() {
        let location = parse(json!({
            "name": "Library",
            "address": {"streetAddress": "", "addressLocality": "Huntsville"}
        }));
        assert_eq!(format_location(Some(&location)), "Library, Huntsville");
    }

    #[test]
    fn name_only() {
        let location = parse(json!({"@type": "Place", "name": "Makerspace"}));
        assert_eq!(format_location(Some(&location)), "Makerspace");
    }

    #[test]
    fn text_address() {
        let location = parse(json!({"name": "Library", "address": "1 Main St, Huntsville"}));
        assert_eq!(
            format_location(Some(&location)),
            "Library, 1 Main St, Huntsville"
        );
    }

    #[test]
    fn plain_string_location() {
        let location = parse(json!("  Downtown Huntsville "));
        assert_eq!(format_location(Some(&location)), "Downtown Huntsville");
    }

    #[test]
    fn virtual_location_without_name() {
        let location = parse(json!({
            "@type": "VirtualLocation",
            "url": "https://www.meetup.com/hsv-py/events/1/"
        }));
        assert_eq!(format_location(Some(&location)), "Online event");
    }

    #[test]
    fn first_usable_of_many() {
        let location = parse(json!([{}, "", {"name": "Room B"}]));
        assert_eq!(format_location(Some(&location)), "Room B");
    }

    #[test]
    fn absent_or_empty_is_tbd() {
        assert_eq!(format_location(None), "Location TBD");
        assert_eq!(format_location(Some(&parse(json!({})))), "Location TBD");
        assert_eq!(format_location(Some(&parse(json!("")))), "Location TBD");
        assert_eq!(format_location(Some(&parse(json!(3)))), "Location TBD");
    }
}
