// src/activity/format.rs
// =============================================================================
// Turns raw GitHub events into one-line descriptions for the terminal.
//
// How it works:
// 1. Take at most the first MAX_EVENTS events (the newest ones)
// 2. Match on the event's "type" to pick a template
// 3. Each template reads the fields it needs; if one is missing the event is
//    dropped and we move on to the next
// 4. Unknown types still get a generic "<type> in <repo>" line
//
// Truncation happens before formatting: a skipped event inside the first ten
// still uses up one of the ten slots.
//
// Rust concepts:
// - Option + ?: Bail out of one event without affecting the others
// - filter_map: Keep only the events that produced a line
// - serde_json::Value: Untyped access into JSON objects
// =============================================================================

use serde_json::Value;

use crate::github::Event;

/// How many events (counted before any are skipped) make it into the output.
pub const MAX_EVENTS: usize = 10;

const UNKNOWN_REPOSITORY: &str = "unknown repository";

// Formats events into bullet lines, newest first
//
// Never fails: malformed events are left out, the rest are kept in order.
pub fn format_activity(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .take(MAX_EVENTS)
        .filter_map(describe)
        .map(|text| format!("- {}", text))
        .collect()
}

// Describes one event, or None if it is malformed
fn describe(event: &Event) -> Option<String> {
    let event_type = event.get("type")?.as_str()?;

    match event_type {
        "PushEvent" => Some(format!(
            "Pushed {} commit(s) to {}",
            commit_count(payload(event)?),
            repo_name(event)?
        )),
        "IssuesEvent" => Some(format!(
            "{} an issue in {}",
            capitalize(action(event)?),
            repo_name(event)?
        )),
        "WatchEvent" => Some(format!("Starred {}", repo_name(event)?)),
        "CreateEvent" => Some(format!(
            "Created {} in {}",
            ref_type(payload(event)?, "repository"),
            repo_name(event)?
        )),
        "ForkEvent" => Some(format!("Forked {}", repo_name(event)?)),
        "PullRequestEvent" => Some(format!(
            "{} a pull request in {}",
            capitalize(action(event)?),
            repo_name(event)?
        )),
        "DeleteEvent" => Some(format!(
            "Deleted {} in {}",
            ref_type(payload(event)?, "branch"),
            repo_name(event)?
        )),
        "ReleaseEvent" => Some(format!(
            "{} a release in {}",
            capitalize(action(event)?),
            repo_name(event)?
        )),
        "PublicEvent" => Some(format!("Made {} public", repo_name(event)?)),
        other => Some(format!(
            "{} in {}",
            other,
            repo_name(event).unwrap_or(UNKNOWN_REPOSITORY)
        )),
    }
}

fn repo_name(event: &Event) -> Option<&str> {
    event.get("repo")?.get("name")?.as_str()
}

fn payload(event: &Event) -> Option<&Value> {
    event.get("payload").filter(|p| p.is_object())
}

fn action(event: &Event) -> Option<&str> {
    payload(event)?.get("action")?.as_str()
}

// payload.size, 0 when absent
fn commit_count(payload: &Value) -> String {
    match payload.get("size") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => "0".to_string(),
    }
}

fn ref_type<'a>(payload: &'a Value, default: &'a str) -> &'a str {
    payload
        .get("ref_type")
        .and_then(Value::as_str)
        .unwrap_or(default)
}

/// Upper-cases the first character and leaves the rest alone.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn push_event(repo: &str, size: u64) -> Event {
        json!({"type": "PushEvent", "repo": {"name": repo}, "payload": {"size": size}})
    }

    #[test]
    fn test_empty_input() {
        assert!(format_activity(&[]).is_empty());
    }

    #[test]
    fn test_push_event() {
        let events = vec![json!({"type": "PushEvent", "payload": {"size": 3}, "repo": {"name": "a/b"}})];
        assert_eq!(format_activity(&events), vec!["- Pushed 3 commit(s) to a/b"]);
    }

    #[test]
    fn test_push_event_without_size_defaults_to_zero() {
        let events = vec![json!({"type": "PushEvent", "payload": {}, "repo": {"name": "a/b"}})];
        assert_eq!(format_activity(&events), vec!["- Pushed 0 commit(s) to a/b"]);
    }

    #[test]
    fn test_push_event_without_payload_is_skipped() {
        let events = vec![json!({"type": "PushEvent", "repo": {"name": "a/b"}})];
        assert!(format_activity(&events).is_empty());
    }

    #[test]
    fn test_every_known_template() {
        let events = vec![
            json!({"type": "IssuesEvent", "repo": {"name": "o/issues"}, "payload": {"action": "opened"}}),
            json!({"type": "WatchEvent", "repo": {"name": "x/y"}}),
            json!({"type": "CreateEvent", "repo": {"name": "o/c"}, "payload": {"ref_type": "tag"}}),
            json!({"type": "CreateEvent", "repo": {"name": "o/c"}, "payload": {}}),
            json!({"type": "ForkEvent", "repo": {"name": "o/f"}}),
            json!({"type": "PullRequestEvent", "repo": {"name": "o/pr"}, "payload": {"action": "closed"}}),
            json!({"type": "DeleteEvent", "repo": {"name": "o/d"}, "payload": {}}),
            json!({"type": "ReleaseEvent", "repo": {"name": "o/r"}, "payload": {"action": "published"}}),
            json!({"type": "PublicEvent", "repo": {"name": "o/p"}}),
        ];

        assert_eq!(
            format_activity(&events),
            vec![
                "- Opened an issue in o/issues",
                "- Starred x/y",
                "- Created tag in o/c",
                "- Created repository in o/c",
                "- Forked o/f",
                "- Closed a pull request in o/pr",
                "- Deleted branch in o/d",
                "- Published a release in o/r",
                "- Made o/p public",
            ]
        );
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let events = vec![
            json!({"type": "UnknownType", "repo": {"name": "q/r"}}),
            json!({"type": "UnknownType"}),
        ];
        assert_eq!(
            format_activity(&events),
            vec!["- UnknownType in q/r", "- UnknownType in unknown repository"]
        );
    }

    #[test]
    fn test_missing_action_or_repo_skips_only_that_event() {
        let events = vec![
            json!({"type": "IssuesEvent", "repo": {"name": "o/a"}, "payload": {}}),
            json!({"type": "WatchEvent"}),
            json!({"type": "ForkEvent", "repo": {"name": "o/b"}}),
            json!("not an object"),
            json!({"repo": {"name": "o/no-type"}}),
            json!({"type": "ReleaseEvent", "repo": {"name": "o/c"}, "payload": {"action": 7}}),
        ];
        assert_eq!(format_activity(&events), vec!["- Forked o/b"]);
    }

    #[test]
    fn test_only_first_ten_events() {
        let events: Vec<Event> = (0..15).map(|i| push_event(&format!("o/r{}", i), i)).collect();

        let lines = format_activity(&events);

        assert_eq!(lines.len(), 10);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line, &format!("- Pushed {} commit(s) to o/r{}", i, i));
        }
    }

    // Truncation counts raw events, so a skipped event in the first ten is
    // not replaced by the eleventh one.
    #[test]
    fn test_truncation_happens_before_skipping() {
        let mut events = vec![json!({"type": "WatchEvent"})];
        events.extend((1..12).map(|i| push_event("o/r", i)));

        let lines = format_activity(&events);

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "- Pushed 1 commit(s) to o/r");
        assert_eq!(lines[8], "- Pushed 9 commit(s) to o/r");
    }

    #[test]
    fn test_size_as_string_or_null() {
        let events = vec![
            json!({"type": "PushEvent", "repo": {"name": "a/b"}, "payload": {"size": "4"}}),
            json!({"type": "PushEvent", "repo": {"name": "a/b"}, "payload": {"size": null}}),
        ];
        assert_eq!(
            format_activity(&events),
            vec!["- Pushed 4 commit(s) to a/b", "- Pushed 0 commit(s) to a/b"]
        );
    }

    #[test]
    fn test_non_string_ref_type_uses_default() {
        let events = vec![
            json!({"type": "CreateEvent", "repo": {"name": "o/c"}, "payload": {"ref_type": 1}}),
            json!({"type": "DeleteEvent", "repo": {"name": "o/d"}, "payload": {"ref_type": null}}),
        ];
        assert_eq!(
            format_activity(&events),
            vec!["- Created repository in o/c", "- Deleted branch in o/d"]
        );
    }

    #[test]
    fn test_unknown_type_with_non_string_repo_name() {
        let events = vec![
            json!({"type": "GollumEvent", "repo": {"name": 42}}),
            json!({"type": "MemberEvent", "repo": "o/m"}),
        ];
        assert_eq!(
            format_activity(&events),
            vec![
                "- GollumEvent in unknown repository",
                "- MemberEvent in unknown repository"
            ]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("opened"), "Opened");
        assert_eq!(capitalize("reOpened"), "ReOpened");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ünique"), "Ünique");
    }
}
