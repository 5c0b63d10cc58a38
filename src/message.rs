//! Message type and content classification tag.
//!
//! A [`Message`] is one chat line (plus its continuation lines) from a
//! KakaoTalk export. Its [`MessageKind`] is never set by hand: it is derived
//! from `content` by [`classify`](crate::parsing::classify) and recomputed
//! whenever the content grows.
//!
//! # Examples
//!
//! ```
//! use kakaolog::{Message, MessageKind};
//!
//! let msg = Message::new("민수", "오후 3:12", "사진");
//! assert_eq!(msg.kind(), MessageKind::Media);
//!
//! let msg = Message::new("민수", "오후 3:13", "https://example.com");
//! assert_eq!(msg.kind(), MessageKind::Link);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::classify;

/// Content category of a message.
///
/// Serialized in lowercase (`"text"`, `"media"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text, the fallback when nothing else matches
    #[default]
    Text,
    /// Photo / video placeholder
    Media,
    /// Emoticon placeholder
    Emoticon,
    /// Content containing an http(s) URL
    Link,
    /// Shared file
    File,
    /// Voice message placeholder
    Voice,
    /// Join / leave / room-created notice
    System,
    /// No content at all
    Empty,
}

impl MessageKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Media => "media",
            MessageKind::Emoticon => "emoticon",
            MessageKind::Link => "link",
            MessageKind::File => "file",
            MessageKind::Voice => "voice",
            MessageKind::System => "system",
            MessageKind::Empty => "empty",
        }
    }

    /// Returns all kinds in classifier precedence order, `Text` last.
    pub fn all() -> &'static [MessageKind] {
        &[
            MessageKind::Empty,
            MessageKind::Media,
            MessageKind::Emoticon,
            MessageKind::Link,
            MessageKind::File,
            MessageKind::Voice,
            MessageKind::System,
            MessageKind::Text,
        ]
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        MessageKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = MessageKind::all().iter().map(|k| k.as_str()).collect();
                format!(
                    "Unknown message kind: '{}'. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// A single chat message.
///
/// `content` may span several physical lines joined by `\n`. `time` is kept
/// exactly as written in the export (e.g. `오후 3:12`); it is not parsed.
///
/// `content` and `kind` are private so the two cannot drift apart. A
/// deserialized message is reclassified and any `kind` in the input is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MessageRecord")]
pub struct Message {
    /// Display name of the author.
    pub sender: String,

    /// Time of day as printed in the export.
    pub time: String,

    content: String,

    kind: MessageKind,
}

// Wire shape accepted when reading a message back.
#[derive(Deserialize)]
struct MessageRecord {
    sender: String,
    time: String,
    content: String,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Message::new(record.sender, record.time, record.content)
    }
}

impl Message {
    /// Creates a message and classifies its content.
    pub fn new(
        sender: impl Into<String>,
        time: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let kind = classify(&content);
        Self {
            sender: sender.into(),
            time: time.into(),
            content,
            kind,
        }
    }

    /// Appends a continuation line and reclassifies the full content.
    pub fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
        self.kind = classify(&self.content);
    }

    /// Appends the newline left by a blank line inside a message body.
    pub fn push_blank_line(&mut self) {
        self.content.push('\n');
        self.kind = classify(&self.content);
    }

    /// Drops `count` trailing bytes left by kept blank lines and
    /// reclassifies.
    pub(crate) fn truncate_trailing_newlines(&mut self, count: usize) {
        let keep = self.content.len() - count;
        debug_assert!(self.content[keep..].bytes().all(|b| b == b'\n'));
        self.content.truncate(keep);
        self.kind = classify(&self.content);
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the time as printed in the export.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the content kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns `true` if the content spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.content.contains('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_message_new_classifies() {
        let msg = Message::new("민수", "오후 3:12", "그냥 텍스트");
        assert_eq!(msg.sender(), "민수");
        assert_eq!(msg.time(), "오후 3:12");
        assert_eq!(msg.content(), "그냥 텍스트");
        assert_eq!(msg.kind(), MessageKind::Text);

        assert_eq!(Message::new("A", "10:00", "").kind(), MessageKind::Empty);
    }

    #[test]
    fn test_push_line_reclassifies() {
        let mut msg = Message::new("A", "10:00", "이거 봐");
        assert_eq!(msg.kind(), MessageKind::Text);

        msg.push_line("https://example.com/post");
        assert_eq!(msg.content(), "이거 봐\nhttps://example.com/post");
        assert_eq!(msg.kind(), MessageKind::Link);
        assert!(msg.is_multiline());
    }

    #[test]
    fn test_push_blank_line() {
        let mut msg = Message::new("A", "10:00", "사진");
        msg.push_blank_line();
        assert_eq!(msg.content(), "사진\n");
        assert_eq!(msg.kind(), MessageKind::Text);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(MessageKind::from_str("link").unwrap(), MessageKind::Link);
        assert_eq!(MessageKind::from_str("MEDIA").unwrap(), MessageKind::Media);
        assert!(MessageKind::from_str("sticker").is_err());
    }

    #[test]
    fn test_kind_display_and_serde() {
        assert_eq!(MessageKind::Emoticon.to_string(), "emoticon");

        let json = serde_json::to_string(&MessageKind::Voice).unwrap();
        assert_eq!(json, "\"voice\"");

        let parsed: MessageKind = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, MessageKind::System);
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new("민수", "오전 9:00", "안녕");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"민수\""));
        assert!(json.contains("\"kind\":\"text\""));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_deserialize_reclassifies_content() {
        let json = r#"{"sender":"민수","time":"오전 9:00","content":"https://example.com","kind":"media"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.kind(), MessageKind::Link);

        let json = r#"{"sender":"민수","time":"오전 9:00","content":""}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.kind(), MessageKind::Empty);
    }

    #[test]
    fn test_truncate_trailing_newlines_reclassifies() {
        let mut msg = Message::new("A", "10:00", "사진");
        msg.push_blank_line();
        msg.push_blank_line();
        assert_eq!(msg.kind(), MessageKind::Text);

        msg.truncate_trailing_newlines(2);
        assert_eq!(msg.content(), "사진");
        assert_eq!(msg.kind(), MessageKind::Media);
    }
}
