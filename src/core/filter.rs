//! Filter a parsed log by sender, date range and message kind.
//!
//! [`apply_filters`] never touches its input: it builds a new [`ChatLog`]
//! with the same title and save date, the matching messages, and the date
//! markers that still have at least one message under them.
//!
//! # Examples
//!
//! ```
//! use kakaolog::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> kakaolog::Result<()> {
//! let log = kakaolog::parse(
//!     "--------------- 2025년 5월 20일 화요일 ---------------\n\
//!      [민수] [10:00] 어제\n\
//!      --------------- 2025년 5월 21일 수요일 ---------------\n\
//!      [지영] [10:00] 오늘\n\
//!      [민수] [10:01] 나도\n",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_sender("민수")
//!     .with_date_from("2025-05-21")?;
//!
//! let filtered = apply_filters(&log, &config);
//! let contents: Vec<&str> = filtered.messages().map(|m| m.content()).collect();
//! assert_eq!(contents, vec!["나도"]);
//! assert_eq!(filtered.date_markers().count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Messages whose date is unknown are **excluded** when date filters are active
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use super::models::{ChatLog, Event};
use crate::Message;
use crate::error::KakaologError;
use crate::message::MessageKind;

/// Configuration for filtering messages.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this day.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this day.
    pub before: Option<NaiveDate>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,

    /// Include only messages of this kind.
    pub kind: Option<MessageKind>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`KakaologError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, KakaologError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`KakaologError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, KakaologError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the sender filter.
    ///
    /// Matching is case-insensitive for ASCII characters.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the message kind filter.
    #[must_use]
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.from.is_some() || self.kind.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    fn matches(&self, date: Option<NaiveDate>, msg: &Message) -> bool {
        if let Some(ref from) = self.from {
            if !msg.sender.eq_ignore_ascii_case(from) {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if msg.kind() != kind {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(date) = date else {
                return false;
            };
            if self.after.is_some_and(|after| date < after) {
                return false;
            }
            if self.before.is_some_and(|before| date > before) {
                return false;
            }
        }

        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, KakaologError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| KakaologError::invalid_date(date_str))
}

/// Applies the filters and returns a new log.
///
/// A date marker is kept only if at least one retained message follows it
/// before the next marker. Messages before the first marker have no date.
pub fn apply_filters(log: &ChatLog, config: &FilterConfig) -> ChatLog {
    if !config.is_active() {
        return log.clone();
    }

    let mut events = Vec::new();
    let mut pending_marker: Option<&Event> = None;
    let mut current_date: Option<NaiveDate> = None;

    for event in log.events() {
        match event {
            Event::DateMarker { .. } => {
                pending_marker = Some(event);
                current_date = event.marker_date();
            }
            Event::Message(msg) => {
                if config.matches(current_date, msg) {
                    if let Some(marker) = pending_marker.take() {
                        events.push(marker.clone());
                    }
                    events.push(event.clone());
                }
            }
        }
    }

    ChatLog::new(log.title(), log.save_date(), events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> ChatLog {
        ChatLog::new(
            "방",
            "저장일",
            vec![
                Message::new("Alice", "09:00", "no date").into(),
                Event::date_marker("2024년 1월 1일 월요일"),
                Message::new("Alice", "10:00", "Old").into(),
                Message::new("Bob", "10:01", "사진").into(),
                Event::date_marker("2024년 6월 15일 토요일"),
                Message::new("alice", "12:00", "New").into(),
                Message::new("Bob", "12:01", "https://example.com").into(),
            ],
        )
    }

    fn contents(log: &ChatLog) -> Vec<&str> {
        log.messages().map(|m| m.content()).collect()
    }

    #[test]
    fn test_inactive_filter_returns_copy() {
        let log = sample_log();
        let filtered = apply_filters(&log, &FilterConfig::new());
        assert_eq!(filtered, log);
    }

    #[test]
    fn test_filter_by_sender_case_insensitive() {
        let config = FilterConfig::new().with_sender("ALICE");
        let filtered = apply_filters(&sample_log(), &config);
        assert_eq!(contents(&filtered), vec!["no date", "Old", "New"]);
        assert_eq!(filtered.title(), "방");
        assert_eq!(filtered.save_date(), "저장일");
    }

    #[test]
    fn test_filter_by_date_range() {
        let config = FilterConfig::new()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_date_to("2024-12-31")
            .unwrap();
        let filtered = apply_filters(&sample_log(), &config);

        assert_eq!(contents(&filtered), vec!["New", "https://example.com"]);
        assert_eq!(
            filtered.date_markers().collect::<Vec<_>>(),
            vec!["2024년 6월 15일 토요일"]
        );
    }

    #[test]
    fn test_date_filter_is_inclusive() {
        let config = FilterConfig::new()
            .with_date_from("2024-01-01")
            .unwrap()
            .with_date_to("2024-01-01")
            .unwrap();
        let filtered = apply_filters(&sample_log(), &config);
        assert_eq!(contents(&filtered), vec!["Old", "사진"]);
    }

    #[test]
    fn test_filter_by_kind_drops_empty_markers() {
        let config = FilterConfig::new().with_kind(MessageKind::Media);
        let filtered = apply_filters(&sample_log(), &config);

        assert_eq!(contents(&filtered), vec!["사진"]);
        assert_eq!(
            filtered.date_markers().collect::<Vec<_>>(),
            vec!["2024년 1월 1일 월요일"]
        );
    }

    #[test]
    fn test_filtered_messages_keep_their_dates() {
        let config = FilterConfig::new().with_sender("Bob");
        let filtered = apply_filters(&sample_log(), &config);
        let dated: Vec<(&str, &str)> = filtered
            .dated_messages()
            .map(|(d, m)| (d, m.content()))
            .collect();
        assert_eq!(
            dated,
            vec![
                ("2024년 1월 1일 월요일", "사진"),
                ("2024년 6월 15일 토요일", "https://example.com"),
            ]
        );
    }

    #[test]
    fn test_invalid_date() {
        let err = FilterConfig::new().with_date_from("15-01-2024").unwrap_err();
        assert!(err.is_invalid_date());
        assert!(FilterConfig::new().with_date_to("2024/01/15").is_err());
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_sender("A").is_active());
        assert!(FilterConfig::new().with_kind(MessageKind::Link).is_active());
        assert!(
            FilterConfig::new()
                .with_date_to("2024-01-01")
                .unwrap()
                .has_date_filter()
        );
    }
}
