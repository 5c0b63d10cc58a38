//! KakaoTalk export parser.
//!
//! [`ExportParser`] turns the decoded text of one export into a [`ChatLog`].
//! Parsing is total: any input produces a log, unmatched lines are absorbed
//! into the open message or dropped. Whether the result is a usable export
//! is a separate question answered by [`ChatLog::validate`].
//!
//! # Example
//!
//! ```rust
//! use kakaolog::parser::ExportParser;
//! use kakaolog::MessageKind;
//!
//! let text = "\
//! 민수 님과 카카오톡 대화
//! 저장한 날짜 : 2025-05-21 09:14:02
//!
//! --------------- 2025년 5월 20일 화요일 ---------------
//! [민수] [오후 3:12] 이거 봐
//! https://example.com
//! [지영] [오후 3:13] 사진
//! ";
//!
//! let log = ExportParser::new().parse_str(text);
//! assert_eq!(log.title(), "민수");
//! assert_eq!(log.save_date(), "2025-05-21 09:14:02");
//!
//! let messages: Vec<_> = log.messages().collect();
//! assert_eq!(messages[0].content(), "이거 봐\nhttps://example.com");
//! assert_eq!(messages[0].kind(), MessageKind::Link);
//! assert_eq!(messages[1].kind(), MessageKind::Media);
//! ```

use std::fs;
use std::path::Path;

use crate::Message;
use crate::config::{HeaderPolicy, ParserConfig};
use crate::core::models::{ChatLog, Event};
use crate::error::Result;
use crate::parsing::{LineKind, classify_line};

/// Parser for KakaoTalk plain-text exports.
///
/// The parser holds only configuration; all per-input state lives inside a
/// single [`parse_str`](Self::parse_str) call, so one parser can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ExportParser {
    config: ParserConfig,
}

impl ExportParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses the full text of one export.
    pub fn parse_str(&self, text: &str) -> ChatLog {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut state = ParseState::new(&self.config);

        for line in text.lines() {
            state.feed(line);
        }

        state.finish()
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`KakaologError::Io`](crate::KakaologError::Io) if the file
    /// cannot be read or is not valid UTF-8.
    pub fn parse_file(&self, path: &Path) -> Result<ChatLog> {
        let text = fs::read_to_string(path)?;
        let log = self.parse_str(&text);
        tracing::info!(
            path = %path.display(),
            events = log.events().len(),
            messages = log.message_count(),
            "parsed export"
        );
        Ok(log)
    }
}

/// Parses export text with the default configuration.
pub fn parse(text: &str) -> ChatLog {
    ExportParser::new().parse_str(text)
}

/// Mutable state of one parse pass.
struct ParseState<'c> {
    config: &'c ParserConfig,
    title: Option<String>,
    save_date: Option<String>,
    events: Vec<Event>,
    open: Option<Message>,
    /// Newlines appended by blank lines since the last real line of `open`.
    pending_blank: usize,
}

impl<'c> ParseState<'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            title: None,
            save_date: None,
            events: Vec::new(),
            open: None,
            pending_blank: 0,
        }
    }

    fn feed(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Blank => {
                if let Some(msg) = self.open.as_mut() {
                    msg.push_blank_line();
                    self.pending_blank += 1;
                }
            }
            LineKind::Title(title) => {
                self.close_open();
                set_header(&mut self.title, title, self.config.header_policy, "title");
            }
            LineKind::SaveDate(save_date) => {
                self.close_open();
                set_header(
                    &mut self.save_date,
                    save_date.to_string(),
                    self.config.header_policy,
                    "save date",
                );
            }
            LineKind::DateSeparator(display_text) => {
                self.close_open();
                self.events.push(Event::DateMarker { display_text });
            }
            LineKind::MessageHeader {
                sender,
                time,
                content,
            } => {
                self.close_open();
                self.open = Some(Message::new(sender, time, content));
            }
            LineKind::Other => match self.open.as_mut() {
                Some(msg) => {
                    msg.push_line(line);
                    self.pending_blank = 0;
                }
                None => tracing::trace!(line, "dropping line outside of any message"),
            },
        }
    }

    fn close_open(&mut self) {
        let Some(mut msg) = self.open.take() else {
            return;
        };

        if self.config.trim_trailing_blank_lines && self.pending_blank > 0 {
            msg.truncate_trailing_newlines(self.pending_blank);
        }
        self.pending_blank = 0;

        self.events.push(Event::Message(msg));
    }

    fn finish(mut self) -> ChatLog {
        self.close_open();
        ChatLog::new(
            self.title.unwrap_or_default(),
            self.save_date.unwrap_or_default(),
            self.events,
        )
    }
}

fn set_header(slot: &mut Option<String>, value: String, policy: HeaderPolicy, name: &str) {
    match (slot.as_ref(), policy) {
        (Some(existing), HeaderPolicy::FirstWins) => {
            tracing::debug!(header = name, kept = %existing, ignored = %value, "repeated header");
        }
        _ => *slot = Some(value),
    }
}
