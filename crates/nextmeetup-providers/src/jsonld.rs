//! JSON-LD block extraction and event selection.
//!
//! Meetup group pages embed schema.org metadata as
//! `<script type="application/ld+json">` blocks. A block holds either one
//! object or an array of objects; the upcoming event is the first object whose
//! `@type` is `Event`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

/// Regex matching one JSON-LD script block; group 1 is the block body.
static JSON_LD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<script type="application/ld\+json">(.*?)</script>"#)
        .expect("Invalid JSON-LD regex")
});

/// The `@type` tag identifying an event record.
pub const EVENT_TYPE: &str = "Event";

/// Returns the raw bodies of every JSON-LD block, in document order.
pub fn script_blocks(html: &str) -> Vec<&str> {
    JSON_LD_REGEX
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Parses every JSON-LD block in `html`.
///
/// Blocks that are not valid JSON are skipped.
pub fn extract_blocks(html: &str) -> Vec<Value> {
    script_blocks(html)
        .into_iter()
        .enumerate()
        .filter_map(|(index, body)| match serde_json::from_str::<Value>(body) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(index, error = %e, "Skipping malformed JSON-LD block");
                None
            }
        })
        .collect()
}

/// Returns true if `value` is an object tagged `"@type": "Event"`.
pub fn is_event(value: &Value) -> bool {
    value.get("@type").and_then(Value::as_str) == Some(EVENT_TYPE)
}

/// Finds the first event record among parsed blocks.
///
/// A block qualifies if it is itself an event, or if it is an array holding
/// an event; inside an array the first event item wins. Non-object items and
/// scalar blocks are ignored.
pub fn select_event(blocks: &[Value]) -> Option<&Value> {
    blocks.iter().find_map(|block| match block {
        Value::Array(items) => items.iter().find(|item| is_event(item)),
        other if is_event(other) => Some(other),
        _ => None,
    })
}

/// Extracts and selects in one step, returning an owned event object.
pub fn find_event(html: &str) -> Option<Value> {
    let blocks = extract_blocks(html);
    trace!(count = blocks.len(), "Parsed JSON-LD blocks");
    select_event(&blocks).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn script(body: &str) -> String {
        format!(r#"<script type="application/ld+json">{body}</script>"#)
    }

    mod extraction {
        use super::*;

        #[test]
        fn no_blocks() {
            let html = "<html><head><title>HSV.py</title></head><body></body></html>";
            assert!(script_blocks(html).is_empty());
            assert!(extract_blocks(html).is_empty());
        }

        #[test]
        fn multiline_block() {
            let html = format!(
                "<head>{}</head>",
                script("\n  {\n    \"@type\": \"Organization\"\n  }\n")
            );
            let blocks = extract_blocks(&html);
            assert_eq!(blocks.len(), 1);
            assert_eq!(blocks[0]["@type"], "Organization");
        }

        #[test]
        fn several_blocks_in_order() {
            let html = format!(
                "{}<div>x</div>{}",
                script(r#"{"@type":"WebSite"}"#),
                script(r#"{"@type":"Event","name":"A"}"#)
            );
            let blocks = extract_blocks(&html);
            assert_eq!(blocks.len(), 2);
            assert_eq!(blocks[0]["@type"], "WebSite");
            assert_eq!(blocks[1]["name"], "A");
        }

        #[test]
        fn malformed_block_is_skipped() {
            let html = format!(
                "{}{}",
                script(r#"{"@type": "Event", "name": "#),
                script(r#"{"@type":"Event","name":"Good"}"#)
            );
            let blocks = extract_blocks(&html);
            assert_eq!(blocks.len(), 1);
            assert_eq!(blocks[0]["name"], "Good");
        }

        #[test]
        fn other_script_types_ignored() {
            let html = r#"<script type="application/json">{"@type":"Event"}</script>
<script>var x = 1;</script>"#;
            assert!(extract_blocks(html).is_empty());
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn single_event_object() {
            let blocks = vec![json!({"@type": "Event", "name": "Python Night"})];
            let event = select_event(&blocks).unwrap();
            assert_eq!(event["name"], "Python Night");
        }

        #[test]
        fn event_inside_list() {
            let blocks = vec![json!([
                {"@type": "Organization", "name": "HSV.py"},
                {"@type": "Event", "name": "Python Night"}
            ])];
            let event = select_event(&blocks).unwrap();
            assert_eq!(event["name"], "Python Night");
        }

        #[test]
        fn first_event_wins() {
            let blocks = vec![
                json!({"@type": "Organization"}),
                json!([{"@type": "Event", "name": "First"}]),
                json!({"@type": "Event", "name": "Second"}),
            ];
            assert_eq!(select_event(&blocks).unwrap()["name"], "First");
        }

        #[test]
        fn no_event_type() {
            let blocks = vec![
                json!({"@type": "Organization"}),
                json!([{"@type": "Place"}, {"name": "untyped"}]),
            ];
            assert!(select_event(&blocks).is_none());
        }

        #[test]
        fn scalars_and_non_objects_ignored() {
            let blocks = vec![
                json!(42),
                json!("Event"),
                json!(null),
                json!([1, "Event", null, {"@type": "Event", "name": "Found"}]),
            ];
            assert_eq!(select_event(&blocks).unwrap()["name"], "Found");
        }

        #[test]
        fn type_must_match_exactly() {
            let blocks = vec![json!({"@type": "event"}), json!({"@type": ["Event"]})];
            assert!(select_event(&blocks).is_none());
        }

        #[test]
        fn find_event_end_to_end() {
            let html = format!(
                "<html>{}{}</html>",
                script("not json at all"),
                script(r#"[{"@type":"Organization"},{"@type":"Event","name":"Found"}]"#)
            );
            assert_eq!(find_event(&html).unwrap()["name"], "Found");
            assert!(find_event("<html></html>").is_none());
        }
    }
}
