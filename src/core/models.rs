//! Parsed export model: [`ChatLog`] and its [`Event`] sequence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::{KakaologError, Result};
use crate::parsing::date_from_display;

/// One parsed unit of an export.
///
/// Serialized with a `type` tag: `{"type":"date","display_text":...}` or
/// `{"type":"message","sender":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// Day boundary, e.g. `2025년 5월 20일 화요일`.
    #[serde(rename = "date")]
    DateMarker {
        /// Normalized `<year>년 <month>월 <day>일 <weekday>` text
        display_text: String,
    },
    /// A chat message.
    Message(Message),
}

impl Event {
    /// Creates a date marker event.
    pub fn date_marker(display_text: impl Into<String>) -> Self {
        Event::DateMarker {
            display_text: display_text.into(),
        }
    }

    /// Returns the message, if this is a message event.
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Event::Message(msg) => Some(msg),
            Event::DateMarker { .. } => None,
        }
    }

    /// Returns the display text, if this is a date marker.
    pub fn date_text(&self) -> Option<&str> {
        match self {
            Event::DateMarker { display_text } => Some(display_text),
            Event::Message(_) => None,
        }
    }

    /// Returns the calendar date of a date marker.
    ///
    /// `None` for messages and for markers whose text is not a full date.
    pub fn marker_date(&self) -> Option<NaiveDate> {
        self.date_text().and_then(date_from_display)
    }

    /// Returns `true` if this is a date marker.
    pub fn is_date_marker(&self) -> bool {
        matches!(self, Event::DateMarker { .. })
    }
}

impl From<Message> for Event {
    fn from(msg: Message) -> Self {
        Event::Message(msg)
    }
}

/// A parsed chat export.
///
/// Produced once by [`ExportParser`](crate::parser::ExportParser) and never
/// mutated afterwards; filtering builds a new log.
///
/// # Example
///
/// ```
/// let log = kakaolog::parse(
///     "민수 님과 카카오톡 대화\n\
///      --------------- 2025년 5월 20일 화요일 ---------------\n\
///      [민수] [오후 3:12] 안녕\n",
/// );
///
/// assert_eq!(log.title(), "민수");
/// let (date, msg) = log.dated_messages().next().unwrap();
/// assert_eq!(date, "2025년 5월 20일 화요일");
/// assert_eq!(msg.content(), "안녕");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLog {
    title: String,
    save_date: String,
    events: Vec<Event>,
}

impl ChatLog {
    /// Creates a log from already parsed parts.
    pub fn new(title: impl Into<String>, save_date: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            title: title.into(),
            save_date: save_date.into(),
            events,
        }
    }

    /// Returns the room title (empty if the export had none).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the save date text (empty if the export had none).
    pub fn save_date(&self) -> &str {
        &self.save_date
    }

    /// Returns all events in source order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consumes the log, returning its events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Iterates over messages only.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.events.iter().filter_map(Event::as_message)
    }

    /// Iterates over date marker display texts.
    pub fn date_markers(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(Event::date_text)
    }

    /// Iterates over messages paired with the display text of the nearest
    /// preceding date marker (empty string before the first marker).
    pub fn dated_messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.events.iter().scan("", |current, event| {
            Some(match event {
                Event::DateMarker { display_text } => {
                    *current = display_text.as_str();
                    None
                }
                Event::Message(msg) => Some((*current, msg)),
            })
        })
        .flatten()
    }

    /// Returns the number of messages.
    pub fn message_count(&self) -> usize {
        self.messages().count()
    }

    /// Returns distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        let mut senders: Vec<&str> = Vec::new();
        for msg in self.messages() {
            if !senders.contains(&msg.sender.as_str()) {
                senders.push(&msg.sender);
            }
        }
        senders
    }

    /// Returns `true` if the log has a title and at least one message.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks that the log looks like a real export.
    ///
    /// # Errors
    ///
    /// Returns [`KakaologError::InvalidExport`] when the room title is empty
    /// or there are no messages.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(KakaologError::invalid_export("missing room title header"));
        }
        if self.messages().next().is_none() {
            return Err(KakaologError::invalid_export("no messages found"));
        }
        Ok(())
    }
}

/// Configuration for output format.
/// Controls which optional columns/fields are included in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include the day (date marker text) of each message
    pub include_dates: bool,
    /// Include the printed time of each message
    pub include_times: bool,
    /// Include the classified kind of each message
    pub include_kinds: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every optional field.
    pub fn all() -> Self {
        Self {
            include_dates: true,
            include_times: true,
            include_kinds: true,
        }
    }

    #[must_use]
    pub fn with_dates(mut self) -> Self {
        self.include_dates = true;
        self
    }

    #[must_use]
    pub fn with_times(mut self) -> Self {
        self.include_times = true;
        self
    }

    #[must_use]
    pub fn with_kinds(mut self) -> Self {
        self.include_kinds = true;
        self
    }
}
