//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::core::models::{ChatLog, Event, OutputConfig};
use crate::error::Result;
use crate::message::MessageKind;

/// Event shape shared by the JSON and JSONL writers.
/// Only includes optional fields enabled in `OutputConfig`.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(super) enum JsonEvent<'a> {
    Date {
        display_text: &'a str,
    },
    Message {
        sender: &'a str,
        content: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        time: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        kind: Option<MessageKind>,
    },
}

/// Converts events to their output shape, tracking the current day.
pub(super) fn json_events<'a>(log: &'a ChatLog, config: &OutputConfig) -> Vec<JsonEvent<'a>> {
    let mut current_date = "";
    log.events()
        .iter()
        .map(|event| match event {
            Event::DateMarker { display_text } => {
                current_date = display_text.as_str();
                JsonEvent::Date {
                    display_text: display_text.as_str(),
                }
            }
            Event::Message(msg) => JsonEvent::Message {
                sender: &msg.sender,
                content: msg.content(),
                date: config.include_dates.then_some(current_date),
                time: config.include_times.then_some(msg.time.as_str()),
                kind: config.include_kinds.then_some(msg.kind()),
            },
        })
        .collect()
}

#[derive(Serialize)]
struct JsonLog<'a> {
    title: &'a str,
    save_date: &'a str,
    events: Vec<JsonEvent<'a>>,
}

/// Writes the log to a JSON file.
///
/// # Format
/// ```json
/// {
///   "title": "민수",
///   "save_date": "2025-05-21 09:14:02",
///   "events": [
///     {"type": "date", "display_text": "2025년 5월 20일 화요일"},
///     {"type": "message", "sender": "민수", "content": "안녕"}
///   ]
/// }
/// ```
pub fn write_json(log: &ChatLog, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(log, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the log to a pretty-printed JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(log: &ChatLog, config: &OutputConfig) -> Result<String> {
    let doc = JsonLog {
        title: log.title(),
        save_date: log.save_date(),
        events: json_events(log, config),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
